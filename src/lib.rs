//! Deduplicate SARIF vulnerability results by stable fingerprint.
//!
//! The library surface exists for the binary and for integration tests;
//! `dedup` holds the pure core, `sarif` the document model, `engine` the
//! file I/O around them.

pub mod cli;
pub mod dedup;
pub mod engine;
pub mod report;
pub mod sarif;
