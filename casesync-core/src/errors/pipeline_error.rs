//! Pipeline errors.

use super::{ExtractError, ReconcileError, ScanError};

/// Errors that can occur during pipeline execution.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("extract error: {0}")]
    Extract(#[from] ExtractError),

    #[error("reconcile error: {0}")]
    Reconcile(#[from] ReconcileError),
}
