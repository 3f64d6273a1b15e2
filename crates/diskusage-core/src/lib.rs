/// DiskUsage Core — folder size accumulation and CSV reporting.
///
/// This crate contains all business logic with zero CLI dependencies.
/// The binary only parses arguments, installs logging, and calls [`run`].
///
/// # Modules
///
/// - [`model`] — Folder size entries, the scan result mapping, and unit helpers.
/// - [`scanner`] — Top-level folder discovery and recursive size accumulation.
/// - [`report`] — Ranked CSV report writer.
/// - [`config`] — Injected run configuration and the end-to-end `run` entry point.
/// - [`error`] — Fatal error types.
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use config::{run, RunConfig, RunSummary};
pub use error::{ReportError, RunError, ScanError};
pub use model::{FolderSizeEntry, ScanResult};
