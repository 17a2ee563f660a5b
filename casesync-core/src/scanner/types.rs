//! Scanner types - core data structures for header discovery

use serde::Serialize;
use std::path::PathBuf;

use crate::index::AlternativeSet;

/// File extensions recognized as headers, compared case-insensitively.
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hpp", "hxx", "hh", "inl"];

/// Extensions for library artifacts. Classified but inert: the category
/// exists for forward-compatibility and carries no current behavior.
pub const LIBRARY_EXTENSIONS: &[&str] = &["lib"];

/// Classification of a file encountered during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Header,
    Library,
    Other,
}

/// A header file discovered under the scan root.
///
/// Identity is the root-relative, case-preserved path. Created once per
/// scan and immutable thereafter; the reconciler never deletes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderFile {
    /// Path relative to the scan root.
    pub path: PathBuf,
}

impl HeaderFile {
    /// Case-preserved basename of the header.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Statistics about the scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    /// Total files visited.
    pub files_seen: usize,
    /// Files recorded as headers.
    pub headers: usize,
    /// Files classified as library artifacts (not recorded).
    pub libraries: usize,
}

/// Result of a scan operation.
#[derive(Debug)]
pub struct ScanResult {
    /// Root directory that was scanned.
    pub root: PathBuf,
    /// All header files found, root-relative.
    pub headers: Vec<HeaderFile>,
    /// Spelling index seeded from on-disk basenames. A case-insensitive
    /// host filesystem can only hold one casing per name, so each seed
    /// entry starts with the single physical casing actually present.
    pub seeds: AlternativeSet,
    /// Scan statistics.
    pub stats: ScanStats,
}
