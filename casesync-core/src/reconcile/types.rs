//! Reconcile types - actions taken and run summary

use serde::Serialize;
use std::path::PathBuf;

/// One observation or mutation made for a header file. Paths are
/// root-relative, matching the scanner's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReconcileAction {
    /// The on-disk spelling already matches; no mutation.
    Kept { path: PathBuf },
    /// The header was copied to an alternative spelling in its directory.
    Copied { src: PathBuf, dst: PathBuf },
}

/// Statistics about the reconcile pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileStats {
    /// Header files iterated.
    pub headers_processed: usize,
    /// Kept observations (spelling already present).
    pub kept: usize,
    /// Alternative-spelling copies written (or planned, under dry-run).
    pub copied: usize,
}

/// Result of a reconcile pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileReport {
    /// Every action, in processing order.
    pub actions: Vec<ReconcileAction>,
    /// Aggregated counts.
    pub stats: ReconcileStats,
}
