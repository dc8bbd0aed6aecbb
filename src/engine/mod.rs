//! Load, deduplicate, and save SARIF documents.
//!
//! All file I/O lives here; the dedup core itself never touches the
//! filesystem. `-` stands for stdin/stdout on input and output.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::dedup;
use crate::sarif::SarifLog;

#[derive(Debug, Error)]
pub enum DedupError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid SARIF JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no runs found in SARIF document")]
    NoRuns,

    #[error("failed to serialize SARIF document")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DedupError {
    fn read(path: &Path, source: std::io::Error) -> Self {
        DedupError::Read { path: path.to_path_buf(), source }
    }

    fn write(path: &Path, source: std::io::Error) -> Self {
        DedupError::Write { path: path.to_path_buf(), source }
    }
}

/// Before/after counts for one dedup pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    pub original: usize,
    pub unique: usize,
}

impl DedupStats {
    pub fn removed(&self) -> usize {
        self.original - self.unique
    }
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Read and parse a SARIF document from a file, or stdin for `-`.
pub fn load_log(path: &Path) -> Result<SarifLog, DedupError> {
    let content = if is_stdio(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| DedupError::read(path, e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| DedupError::read(path, e))?
    };

    let log: SarifLog = serde_json::from_str(&content)
        .map_err(|e| DedupError::Parse { path: path.to_path_buf(), source: e })?;

    if log.runs.is_empty() {
        return Err(DedupError::NoRuns);
    }

    Ok(log)
}

/// Deduplicate the first run's results in place.
///
/// Multiple runs in one document are rare for the scanners this targets;
/// runs beyond the first pass through untouched.
pub fn dedup_log(log: &mut SarifLog) -> DedupStats {
    let run = &mut log.runs[0];
    let results = run.results.take().unwrap_or_default();
    let original = results.len();
    let deduped = dedup::deduplicate(results);
    let unique = deduped.len();
    run.results = Some(deduped);

    info!("Deduplicated SARIF: {} results -> {} unique results", original, unique);
    DedupStats { original, unique }
}

/// Serialize a SARIF document to a file, or stdout for `-`.
/// Pretty-printing (2-space indent) keeps the output diffable; `compact`
/// trades that for size.
pub fn save_log(log: &SarifLog, path: &Path, compact: bool) -> Result<(), DedupError> {
    let json = if compact {
        serde_json::to_string(log)
    } else {
        serde_json::to_string_pretty(log)
    }
    .map_err(DedupError::Serialize)?;

    if is_stdio(path) {
        println!("{}", json);
    } else {
        std::fs::write(path, json).map_err(|e| DedupError::write(path, e))?;
        info!("Deduplicated SARIF written to {}", path.display());
    }
    Ok(())
}
