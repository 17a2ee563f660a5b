//! Errors raised while reading header content for include extraction.

use std::path::PathBuf;

/// Errors that can occur while extracting include references.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised only under `DecodePolicy::Strict`; the lossy policy
    /// substitutes invalid sequences and keeps scanning.
    #[error("{} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },
}
