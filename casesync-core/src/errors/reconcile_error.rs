//! Errors raised while copying headers to alternative spellings.

use std::path::PathBuf;

/// Errors that can occur during the copy phase. Always fatal: a failed
/// copy leaves the tree partially reconciled, and the prescribed recovery
/// is to re-run the (idempotent) pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("failed to copy {} to {}: {source}", src.display(), dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to propagate metadata from {} to {}: {source}", src.display(), dst.display())]
    Metadata {
        src: PathBuf,
        dst: PathBuf,
        source: std::io::Error,
    },
}
