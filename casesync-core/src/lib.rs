//! casesync-core: case-spelling reconciliation engine for header trees.
//!
//! A source tree assembled on a case-insensitive filesystem may reference
//! headers with inconsistent letter-casing (`"Foo.h"` vs `"foo.h"`). On a
//! case-sensitive filesystem those includes stop resolving. This crate
//! discovers every header under a root, collects every distinct spelling by
//! which any header is named or referenced, and copies each conflicted
//! header to every alternative spelling so builds succeed either way.
//!
//! Components, composed as a strict forward pipeline:
//! - Scanner: walks the tree, seeds the spelling index from on-disk names
//! - Extractor: pulls referenced basenames out of `#include` directives
//! - Index: merges spellings per lowercase key and prunes non-conflicts
//! - Reconcile: copies bytes + metadata to each surviving alternative

pub mod errors;
pub mod extractor;
pub mod index;
pub mod pipeline;
pub mod reconcile;
pub mod scanner;

// Re-exports for convenience
pub use errors::{ExtractError, PipelineError, ReconcileError, ScanError};
pub use extractor::{DecodePolicy, IncludeExtractor};
pub use index::{build_index, spelling_key, AlternativeSet};
pub use pipeline::{run, PipelineReport, ReconcileConfig};
pub use reconcile::{ReconcileAction, ReconcileReport, ReconcileStats, Reconciler};
pub use scanner::{HeaderFile, HeaderKind, ScanResult, ScanStats, Scanner};
