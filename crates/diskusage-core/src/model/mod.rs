/// Data model for folder size accounting.
///
/// Re-exports the per-folder entry, the scan result mapping, and the
/// unit conversion helpers used by the report.
pub mod folder;
pub mod size;

pub use folder::{FolderSizeEntry, ScanResult};
