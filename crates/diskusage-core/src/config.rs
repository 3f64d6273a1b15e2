/// Run configuration and the end-to-end `run` entry point.
///
/// The scan root and report destination are injected rather than embedded,
/// so tests can point a run at a temporary tree.
use crate::error::RunError;
use crate::report::write_report;
use crate::scanner::{scan_with_stats, stats::ScanStats};

use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Report filename used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "disk_usage_report.csv";

/// Filesystem root scanned when no base path is given.
#[cfg(windows)]
pub const DEFAULT_BASE_PATH: &str = "C:\\";
#[cfg(not(windows))]
pub const DEFAULT_BASE_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory whose direct subdirectories are reported.
    pub base_path: PathBuf,
    /// CSV destination, overwritten if it exists.
    pub output_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub folders: usize,
    pub total_bytes: u64,
    pub stats: ScanStats,
}

/// Scan `config.base_path`, write the ranked report, and announce each
/// phase on `console`.
///
/// Exactly three lines are announced: scan start, write start, and
/// completion with the output filename. The last one only appears once the
/// report is in place. Console write failures are ignored.
pub fn run<W: Write>(config: &RunConfig, console: &mut W) -> Result<RunSummary, RunError> {
    let _ = writeln!(
        console,
        "Scanning {} for large folders...",
        config.base_path.display()
    );
    let scan = scan_with_stats(&config.base_path)?;

    let _ = writeln!(console, "Writing results to CSV...");
    write_report(&scan.result, &config.output_path)?;

    let _ = writeln!(console, "Report saved as {}", config.output_path.display());
    info!(
        "Report complete: {} folders, {} errors absorbed",
        scan.result.len(),
        scan.stats.error_count()
    );

    Ok(RunSummary {
        folders: scan.result.len(),
        total_bytes: scan.result.total_bytes(),
        stats: scan.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_historic_literals() {
        let config = RunConfig::default();
        assert_eq!(config.output_path, PathBuf::from("disk_usage_report.csv"));
        assert!(config.base_path.has_root());
    }
}
