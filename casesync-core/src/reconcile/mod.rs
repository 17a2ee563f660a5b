//! Reconciler — materializes every conflicted spelling as a real file.
//!
//! Driven by the set of case-insensitive aliases, not by a privileged
//! canonical spelling: a header whose key survived pruning is copied to
//! every alternative spelling in its group, seeded from whichever on-disk
//! file carries the group's basename at scan time. Nothing is ever deleted.

mod reconciler;
mod types;

pub use reconciler::Reconciler;
pub use types::{ReconcileAction, ReconcileReport, ReconcileStats};
