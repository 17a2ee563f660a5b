//! Regex-based `#include` reference extraction.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ExtractError;
use crate::scanner::{classify, HeaderKind};

/// Whitespace-tolerant include directive. Unanchored: the original
/// directives in vendor headers are occasionally preceded by other text.
static INCLUDE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#\s*include\s*["<]([^">]*)[">]"#).unwrap());

/// How undecodable bytes in header content are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Replace invalid sequences and keep scanning. Can silently miss a
    /// reference on a mangled line; an accepted approximation.
    #[default]
    Lossy,
    /// Fail on the first invalid sequence.
    Strict,
}

/// Extracts the set of basenames referenced by a header's include directives.
pub struct IncludeExtractor {
    policy: DecodePolicy,
}

impl IncludeExtractor {
    pub fn new(policy: DecodePolicy) -> Self {
        Self { policy }
    }

    /// Extract referenced basenames from a header on disk.
    ///
    /// Returns an empty set for files outside the recognized header
    /// extension set. Read failures are fatal; decode failures are fatal
    /// only under `DecodePolicy::Strict`.
    pub fn extract_file(&self, path: &Path) -> Result<BTreeSet<String>, ExtractError> {
        if classify(path) != HeaderKind::Header {
            return Ok(BTreeSet::new());
        }

        let bytes = fs::read(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = match self.policy {
            DecodePolicy::Lossy => String::from_utf8_lossy(&bytes).into_owned(),
            DecodePolicy::Strict => {
                String::from_utf8(bytes).map_err(|_| ExtractError::Decode {
                    path: path.to_path_buf(),
                })?
            }
        };

        Ok(self.extract_source(&text))
    }

    /// Extract referenced basenames from already-decoded source text.
    pub fn extract_source(&self, source: &str) -> BTreeSet<String> {
        let mut references = BTreeSet::new();
        for line in source.lines() {
            for cap in INCLUDE_REGEX.captures_iter(line) {
                if let Some(target) = cap.get(1) {
                    // Directory components never participate in spelling
                    // reconciliation; only the final segment is recorded.
                    let name = basename(target.as_str());
                    if !name.is_empty() {
                        references.insert(name.to_string());
                    }
                }
            }
        }
        references
    }
}

/// Final path segment of an include target. Vendor headers use both
/// separator styles inside include strings.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
