/// Per-folder size entries and the scan result mapping.
///
/// Folder names are kept as `OsString` exactly as the filesystem reported
/// them. Two names that differ only in non-UTF-8 bytes stay distinct; they
/// are converted lossily only when rendered.
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Accumulated size of one top-level folder.
///
/// Produced once per top-level subdirectory and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSizeEntry {
    /// Bare folder name (NOT the full path).
    pub name: OsString,
    /// Sum of all regular, non-symlink files beneath the folder.
    pub size_bytes: u64,
}

impl FolderSizeEntry {
    pub fn new(name: impl Into<OsString>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Name for display and CSV output. Invalid UTF-8 becomes U+FFFD.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Mapping from top-level folder name to its accumulated size.
///
/// Keys are unique: directory names are unique within a parent. Iteration
/// order is by name, which is irrelevant to the report (it re-sorts by size)
/// but keeps repeated scans comparable with `==`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    sizes: BTreeMap<OsString, u64>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a folder's size. Returns the previous size if the name was
    /// already present.
    pub fn insert(&mut self, name: impl Into<OsString>, size_bytes: u64) -> Option<u64> {
        self.sizes.insert(name.into(), size_bytes)
    }

    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<u64> {
        self.sizes.get(name.as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sum of every folder's size.
    pub fn total_bytes(&self) -> u64 {
        self.sizes.values().sum()
    }

    pub fn names(&self) -> impl Iterator<Item = &OsStr> {
        self.sizes.keys().map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, u64)> {
        self.sizes.iter().map(|(name, &size)| (name.as_os_str(), size))
    }

    /// Entries sorted by size descending, ties broken by name ascending.
    pub fn ranked(&self) -> Vec<FolderSizeEntry> {
        let mut entries: Vec<FolderSizeEntry> = self
            .sizes
            .iter()
            .map(|(name, &size)| FolderSizeEntry::new(name.clone(), size))
            .collect();
        entries.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes).then_with(|| a.name.cmp(&b.name)));
        entries
    }
}

impl FromIterator<FolderSizeEntry> for ScanResult {
    fn from_iter<I: IntoIterator<Item = FolderSizeEntry>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().map(|e| (e.name, e.size_bytes)).collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, u64)> for ScanResult {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        Self {
            sizes: iter
                .into_iter()
                .map(|(name, size)| (OsString::from(name), size))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked_names(result: &ScanResult) -> Vec<String> {
        result
            .ranked()
            .iter()
            .map(|e| e.display_name().into_owned())
            .collect()
    }

    #[test]
    fn ranked_is_size_descending() {
        let result: ScanResult = [("a", 10), ("b", 30), ("c", 20)].into_iter().collect();
        assert_eq!(ranked_names(&result), ["b", "c", "a"]);
    }

    #[test]
    fn ranked_breaks_ties_by_name() {
        let result: ScanResult = [("zeta", 5), ("alpha", 5), ("mid", 7)].into_iter().collect();
        assert_eq!(ranked_names(&result), ["mid", "alpha", "zeta"]);
    }

    #[test]
    fn total_and_lookup() {
        let mut result = ScanResult::new();
        assert!(result.is_empty());
        assert_eq!(result.insert("x", 4), None);
        assert_eq!(result.insert("y", 6), None);
        assert_eq!(result.insert("x", 5), Some(4));
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("x"), Some(5));
        assert_eq!(result.get("missing"), None);
        assert_eq!(result.total_bytes(), 11);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_stay_distinct() {
        use std::os::unix::ffi::OsStrExt;

        let ff = OsStr::from_bytes(b"\xff");
        let fe = OsStr::from_bytes(b"\xfe");
        let mut result = ScanResult::new();
        assert_eq!(result.insert(ff, 100), None);
        assert_eq!(result.insert(fe, 100), None);

        assert_eq!(result.len(), 2);
        assert_eq!(result.total_bytes(), 200);
        assert!(result
            .ranked()
            .iter()
            .all(|e| e.display_name() == "\u{FFFD}"));
    }
}
