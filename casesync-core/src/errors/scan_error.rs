//! Errors raised while walking the header tree.

/// Errors that can occur during tree traversal.
///
/// Traversal errors are fatal: the scan has no partial-recovery mode, and
/// re-running after the underlying problem is fixed is the recovery path.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("tree walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}
