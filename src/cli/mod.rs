pub mod commands;

use clap::Parser;

pub use commands::{Commands, DedupArgs, StatsArgs};

/// sarif-dedup — deduplicate SARIF vulnerability results
///
/// Scanners like osv-scanner report the same vulnerability many times
/// without fingerprints, so alerting systems raise duplicate alerts.
/// sarif-dedup adds stable fingerprints and collapses the duplicates.
#[derive(Parser, Debug)]
#[command(
    name = "sarif-dedup",
    version,
    about = "Deduplicate SARIF vulnerability results",
    long_about = "sarif-dedup post-processes SARIF scanner output before upload.\nIt computes a stable fingerprint per result (ruleId + package + version + location),\nrecords it under partialFingerprints.primaryLocationLineHash, and keeps only the\nfirst occurrence of each fingerprint."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
