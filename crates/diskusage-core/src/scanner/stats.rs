/// Scan statistics — lightweight counters collected during traversal.
///
/// Counters are informational only. They never change the reported sizes;
/// they let callers (and tests) see which recoverable paths were taken.
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Regular files whose size was added to a total.
    pub files_counted: u64,
    /// Directories whose listing was read successfully.
    pub dirs_visited: u64,
    /// Symbolic links excluded from accounting (never followed).
    pub symlinks_skipped: u64,
    /// Files whose size query failed; each contributed zero.
    pub unreadable_files: u64,
    /// Directories that could not be listed; each contributed zero.
    pub unreadable_dirs: u64,
    /// FIFOs, sockets, device nodes and other non-regular entries.
    pub other_skipped: u64,
}

impl ScanStats {
    /// Total number of absorbed failures.
    pub fn error_count(&self) -> u64 {
        self.unreadable_files + self.unreadable_dirs
    }
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, rhs: Self) {
        self.files_counted += rhs.files_counted;
        self.dirs_visited += rhs.dirs_visited;
        self.symlinks_skipped += rhs.symlinks_skipped;
        self.unreadable_files += rhs.unreadable_files;
        self.unreadable_dirs += rhs.unreadable_dirs;
        self.other_skipped += rhs.other_skipped;
    }
}
