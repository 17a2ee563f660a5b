//! Error handling for casesync.
//! One error enum per subsystem, `thiserror` only.

pub mod extract_error;
pub mod pipeline_error;
pub mod reconcile_error;
pub mod scan_error;

pub use extract_error::ExtractError;
pub use pipeline_error::PipelineError;
pub use reconcile_error::ReconcileError;
pub use scan_error::ScanError;
