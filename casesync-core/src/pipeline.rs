//! Pipeline composition: scan → extract → build index → reconcile.
//!
//! Data flows strictly forward with no feedback loop. Extraction is the
//! only parallel phase: a read-only map over header files, merged by a
//! single-writer reduction into the spelling index. The copy phase stays
//! sequential because two conflicted on-disk files can target the same
//! destination path.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::errors::{ExtractError, PipelineError};
use crate::extractor::{DecodePolicy, IncludeExtractor};
use crate::index::build_index;
use crate::reconcile::{ReconcileReport, Reconciler};
use crate::scanner::{ScanStats, Scanner};

/// Configuration for a reconciliation run. The root is explicit; no
/// process-global state survives between runs.
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Root of the tree to reconcile.
    pub root: PathBuf,
    /// How undecodable header bytes are handled during extraction.
    pub decode_policy: DecodePolicy,
    /// Threads for the extraction phase (0 = rayon default).
    pub threads: usize,
    /// Build the index and report actions without writing.
    pub dry_run: bool,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            decode_policy: DecodePolicy::Lossy,
            threads: 0,
            dry_run: false,
        }
    }
}

impl ReconcileConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a full pipeline pass.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Scan phase statistics.
    pub scan: ScanStats,
    /// Conflict groups surviving pruning (each has >= 2 spellings).
    pub conflicts: usize,
    /// Actions taken by the reconcile phase.
    pub reconcile: ReconcileReport,
}

/// Run the full pipeline over `config.root`.
///
/// Idempotent: a second run over the same tree re-copies identical bytes
/// but changes neither the file set nor any content.
pub fn run(config: &ReconcileConfig) -> Result<PipelineReport, PipelineError> {
    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()
            .ok();
    }

    let scan = Scanner::new(&config.root).scan()?;
    debug!(
        headers = scan.headers.len(),
        files_seen = scan.stats.files_seen,
        "scan complete"
    );

    let extractor = IncludeExtractor::new(config.decode_policy);
    let references = scan
        .headers
        .par_iter()
        .map(|header| extractor.extract_file(&scan.root.join(&header.path)))
        .collect::<Result<Vec<BTreeSet<String>>, ExtractError>>()?;

    let index = build_index(scan.seeds, references);
    debug!(conflicts = index.len(), "spelling index built");

    let report = Reconciler::new(&scan.root, &index)
        .with_dry_run(config.dry_run)
        .reconcile(&scan.headers)?;

    Ok(PipelineReport {
        scan: scan.stats,
        conflicts: index.len(),
        reconcile: report,
    })
}
