/// Size accumulator — recursive byte totals for one directory subtree.
///
/// Traversal uses an explicit work-list of pending directories instead of
/// call-stack recursion, so pathologically deep trees cannot overflow the
/// stack. Directory handles are dropped as soon as a listing is drained.
///
/// # Link policy
///
/// Entries are classified with `DirEntry::file_type()`, which never follows
/// symbolic links. A symlink is excluded entirely: its size is not added and,
/// if it points to a directory, that subtree is not descended into. Cycles
/// through links are therefore impossible.
///
/// # Failure policy
///
/// Every failure below the start path is absorbed. A file whose size cannot
/// be queried contributes zero; a directory that cannot be listed contributes
/// zero. Neither aborts the walk nor discards what was already summed.
use crate::scanner::stats::ScanStats;
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of querying one regular file's size.
#[derive(Debug)]
pub enum FileSize {
    /// The file contributed this many bytes.
    Counted(u64),
    /// The size query failed (file vanished, permission denied, ...).
    /// The file contributes zero.
    Unreadable(io::Error),
}

impl FileSize {
    /// Bytes this file contributes to a total.
    pub fn bytes(&self) -> u64 {
        match self {
            FileSize::Counted(n) => *n,
            FileSize::Unreadable(_) => 0,
        }
    }
}

/// Query a file's byte length without following symbolic links.
pub fn probe_file_size(path: &Path) -> FileSize {
    match fs::symlink_metadata(path) {
        Ok(meta) => FileSize::Counted(meta.len()),
        Err(err) => FileSize::Unreadable(err),
    }
}

/// Byte total of one subtree plus the counters collected while summing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulation {
    pub bytes: u64,
    pub stats: ScanStats,
}

/// Sum the sizes of all regular files reachable beneath `path`.
///
/// Never fails: a missing or unreadable `path` yields 0.
pub fn compute_size(path: &Path) -> u64 {
    accumulate(path).bytes
}

/// Like [`compute_size`], but also returns traversal statistics.
pub fn accumulate(path: &Path) -> Accumulation {
    let mut acc = Accumulation::default();
    let mut pending: Vec<PathBuf> = vec![path.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let listing = match fs::read_dir(&dir) {
            Ok(listing) => listing,
            Err(err) => {
                debug!("Skipping unreadable directory {}: {err}", dir.display());
                acc.stats.unreadable_dirs += 1;
                continue;
            }
        };
        acc.stats.dirs_visited += 1;

        for entry_result in listing {
            match entry_result {
                Ok(entry) => visit_entry(&entry, &mut pending, &mut acc),
                Err(err) => {
                    // The entry vanished or became unreadable mid-listing.
                    debug!("Skipping unreadable entry in {}: {err}", dir.display());
                    acc.stats.unreadable_files += 1;
                }
            }
        }
    }

    acc
}

/// Classify one directory entry and fold it into `acc`.
fn visit_entry(entry: &DirEntry, pending: &mut Vec<PathBuf>, acc: &mut Accumulation) {
    let path = entry.path();
    let file_type = match entry.file_type() {
        Ok(ft) => ft,
        Err(err) => {
            debug!("Skipping {}: {err}", path.display());
            acc.stats.unreadable_files += 1;
            return;
        }
    };

    if file_type.is_symlink() {
        acc.stats.symlinks_skipped += 1;
    } else if file_type.is_dir() {
        pending.push(path);
    } else if file_type.is_file() {
        match probe_file_size(&path) {
            FileSize::Counted(n) => {
                acc.bytes += n;
                acc.stats.files_counted += 1;
            }
            FileSize::Unreadable(err) => {
                debug!("Size query failed for {}: {err}", path.display());
                acc.stats.unreadable_files += 1;
            }
        }
    } else {
        acc.stats.other_skipped += 1;
    }
}
