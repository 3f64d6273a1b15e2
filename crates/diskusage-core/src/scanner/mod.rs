/// Scanner module — identifies top-level folders and sizes each one.
///
/// Scanning is two-tier in depth only:
/// - **Top level:** the direct children of the base path are listed once.
///   Each child that is a real directory becomes one entry in the result.
/// - **Subtree:** every such folder is handed to the [`accumulator`], which
///   sums its full depth.
///
/// Top-level symbolic links are classified without following them, so a
/// link to a directory is omitted from the result, the same policy the
/// accumulator applies inside each subtree.
pub mod accumulator;
pub mod stats;

use crate::error::ScanError;
use crate::model::size::{format_count, format_size};
use crate::model::ScanResult;
use stats::ScanStats;

use std::fs::{self, FileType};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub use accumulator::{accumulate, compute_size, probe_file_size, Accumulation, FileSize};

/// A completed scan: the folder mapping plus traversal counters.
#[derive(Debug, Clone)]
pub struct FolderScan {
    pub result: ScanResult,
    pub stats: ScanStats,
    pub duration: Duration,
}

/// Map every top-level subdirectory of `base_path` to its accumulated size.
pub fn scan(base_path: &Path) -> Result<ScanResult, ScanError> {
    scan_with_stats(base_path).map(|scan| scan.result)
}

/// Like [`scan`], but also returns the summed traversal statistics.
///
/// Fails only when `base_path` itself is missing, not a directory, or
/// cannot be listed. Failures inside the folders, and a child whose type
/// cannot be read, are absorbed.
pub fn scan_with_stats(base_path: &Path) -> Result<FolderScan, ScanError> {
    let start = Instant::now();
    check_base_path(base_path)?;

    let read_dir_err = |source: io::Error| ScanError::ReadDir {
        path: base_path.to_path_buf(),
        source,
    };

    let mut result = ScanResult::new();
    let mut stats = ScanStats::default();

    for entry_result in fs::read_dir(base_path).map_err(read_dir_err)? {
        let entry = entry_result.map_err(read_dir_err)?;
        let path = entry.path();

        match classify_top_level(entry.file_type()) {
            TopLevel::Folder => {}
            TopLevel::Symlink => {
                debug!("Omitting top-level symlink {}", path.display());
                stats.symlinks_skipped += 1;
                continue;
            }
            TopLevel::Other => continue,
            TopLevel::Unreadable(err) => {
                // Vanished or became unreadable between listing and lstat.
                debug!("Skipping unreadable top-level entry {}: {err}", path.display());
                stats.unreadable_dirs += 1;
                continue;
            }
        }

        let folder = accumulate(&path);
        debug!(
            "{}: {} ({} bytes)",
            path.display(),
            format_size(folder.bytes),
            folder.bytes
        );

        result.insert(entry.file_name(), folder.bytes);
        stats += folder.stats;
    }

    let duration = start.elapsed();
    info!(
        "Scanned {} folders under {}: {} in {} files ({duration:?})",
        result.len(),
        base_path.display(),
        format_size(result.total_bytes()),
        format_count(stats.files_counted),
    );
    if stats.error_count() > 0 {
        warn!(
            "{} files and {} directories could not be read and were counted as 0 bytes",
            stats.unreadable_files, stats.unreadable_dirs
        );
    }

    Ok(FolderScan {
        result,
        stats,
        duration,
    })
}

/// How a direct child of the base path is treated.
#[derive(Debug)]
enum TopLevel {
    /// A real directory: becomes one entry in the result.
    Folder,
    /// Omitted, whatever it points to.
    Symlink,
    /// Files, FIFOs, sockets and the like.
    Other,
    /// Its type could not be determined; omitted.
    Unreadable(io::Error),
}

fn classify_top_level(file_type: io::Result<FileType>) -> TopLevel {
    match file_type {
        Ok(ft) if ft.is_symlink() => TopLevel::Symlink,
        Ok(ft) if ft.is_dir() => TopLevel::Folder,
        Ok(_) => TopLevel::Other,
        Err(err) => TopLevel::Unreadable(err),
    }
}

/// Reject a base path that cannot be enumerated.
fn check_base_path(base_path: &Path) -> Result<(), ScanError> {
    match fs::metadata(base_path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory {
            path: base_path.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ScanError::NotFound {
            path: base_path.to_path_buf(),
        }),
        Err(source) => Err(ScanError::ReadDir {
            path: base_path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn classify_unreadable_child() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(
            classify_top_level(Err(err)),
            TopLevel::Unreadable(ref e) if e.kind() == io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn classify_dir_and_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, b"x").unwrap();

        let dir_type = fs::symlink_metadata(tmp.path()).map(|m| m.file_type());
        let file_type = fs::symlink_metadata(&file).map(|m| m.file_type());
        assert!(matches!(classify_top_level(dir_type), TopLevel::Folder));
        assert!(matches!(classify_top_level(file_type), TopLevel::Other));
    }

    #[cfg(unix)]
    #[test]
    fn classify_symlink_to_dir() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(tmp.path(), &link).unwrap();

        let link_type = fs::symlink_metadata(&link).map(|m| m.file_type());
        assert!(matches!(classify_top_level(link_type), TopLevel::Symlink));
    }
}
