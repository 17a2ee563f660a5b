//! Copy phase: one file per surviving spelling, bytes and metadata intact.

use std::fs;
use std::path::Path;

use filetime::FileTime;
use tracing::{debug, info};

use super::types::{ReconcileAction, ReconcileReport};
use crate::errors::ReconcileError;
use crate::index::{spelling_key, AlternativeSet};
use crate::scanner::HeaderFile;

/// Walks the discovered headers against the pruned spelling index and
/// writes a sibling copy for every alternative spelling.
pub struct Reconciler<'a> {
    root: &'a Path,
    index: &'a AlternativeSet,
    dry_run: bool,
}

impl<'a> Reconciler<'a> {
    pub fn new(root: &'a Path, index: &'a AlternativeSet) -> Self {
        Self {
            root,
            index,
            dry_run: false,
        }
    }

    /// Report planned actions without touching the filesystem.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reconcile every header. Copy failures abort immediately; the tree
    /// is then partially reconciled and a re-run completes the job.
    pub fn reconcile(&self, headers: &[HeaderFile]) -> Result<ReconcileReport, ReconcileError> {
        let mut report = ReconcileReport::default();
        for header in headers {
            self.reconcile_one(header, &mut report)?;
        }
        Ok(report)
    }

    fn reconcile_one(
        &self,
        header: &HeaderFile,
        report: &mut ReconcileReport,
    ) -> Result<(), ReconcileError> {
        report.stats.headers_processed += 1;

        let name = header.file_name();
        let Some(spellings) = self.index.get(&spelling_key(&name)) else {
            // No surviving conflict group: the file is kept as-is.
            info!(path = %header.path.display(), "kept");
            report.actions.push(ReconcileAction::Kept {
                path: header.path.clone(),
            });
            report.stats.kept += 1;
            return Ok(());
        };

        let src = self.root.join(&header.path);
        let dir = header.path.parent().unwrap_or_else(|| Path::new(""));

        for spelling in spellings {
            if *spelling == name {
                debug!(path = %header.path.display(), "spelling already on disk");
                report.actions.push(ReconcileAction::Kept {
                    path: header.path.clone(),
                });
                report.stats.kept += 1;
                continue;
            }

            let relative_dst = dir.join(spelling);
            let dst = self.root.join(&relative_dst);
            info!(src = %header.path.display(), dst = %relative_dst.display(), "copy");
            if !self.dry_run {
                copy_with_metadata(&src, &dst)?;
            }
            report.actions.push(ReconcileAction::Copied {
                src: header.path.clone(),
                dst: relative_dst,
            });
            report.stats.copied += 1;
        }

        Ok(())
    }
}

/// Byte-for-byte copy, overwriting the destination. `fs::copy` carries
/// permission bits; the modification time is propagated separately.
fn copy_with_metadata(src: &Path, dst: &Path) -> Result<(), ReconcileError> {
    fs::copy(src, dst).map_err(|source| ReconcileError::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    })?;

    let metadata = fs::metadata(src).map_err(|source| ReconcileError::Metadata {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    })?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(dst, mtime).map_err(|source| ReconcileError::Metadata {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    })?;

    Ok(())
}
