/// Fatal error types.
///
/// Only path-level and output-level failures are represented here. Per-file
/// failures inside a subtree are absorbed by the size accumulator and only
/// show up in [`ScanStats`](crate::scanner::stats::ScanStats).
use std::io;
use std::path::PathBuf;

/// The base path could not be enumerated. The run aborts before any report
/// is written.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("base path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("base path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The report destination could not be written.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to create report file next to {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report rows: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush report: {0}")]
    Flush(#[source] io::Error),

    #[error("failed to move report into place at {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Any fatal error from an end-to-end run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
