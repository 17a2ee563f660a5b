//! Recursive tree walk and extension classification.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::types::{
    HeaderFile, HeaderKind, ScanResult, ScanStats, HEADER_EXTENSIONS, LIBRARY_EXTENSIONS,
};
use crate::errors::ScanError;
use crate::index::AlternativeSet;

/// Classify a file by its extension, case-insensitively.
pub fn classify(path: &Path) -> HeaderKind {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return HeaderKind::Other;
    };
    let ext = ext.to_ascii_lowercase();
    if HEADER_EXTENSIONS.contains(&ext.as_str()) {
        HeaderKind::Header
    } else if LIBRARY_EXTENSIONS.contains(&ext.as_str()) {
        HeaderKind::Library
    } else {
        HeaderKind::Other
    }
}

/// Walks a rooted tree and collects header files.
///
/// The walk mutates nothing. Any traversal error (unreadable directory,
/// broken entry) propagates as `ScanError` and aborts the run.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Visit every file under the root and return the discovered headers
    /// together with the seed spelling index.
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let mut headers = Vec::new();
        let mut seeds = AlternativeSet::new();
        let mut stats = ScanStats::default();

        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            stats.files_seen += 1;

            match classify(entry.path()) {
                HeaderKind::Header => {
                    let relative = entry
                        .path()
                        .strip_prefix(&self.root)
                        .unwrap_or(entry.path())
                        .to_path_buf();
                    let name = entry.file_name().to_string_lossy();
                    seeds.insert(&name);
                    headers.push(HeaderFile { path: relative });
                    stats.headers += 1;
                }
                HeaderKind::Library => {
                    stats.libraries += 1;
                }
                HeaderKind::Other => {}
            }
        }

        Ok(ScanResult {
            root: self.root.clone(),
            headers,
            seeds,
            stats,
        })
    }
}
