//! Spelling index — case-insensitive grouping of observed spellings.
//!
//! The index is built fresh on every run: seeded from on-disk basenames by
//! the scanner, extended with every extracted include reference, then
//! pruned down to the entries that represent a real spelling conflict.
//! After `build_index` it is read-only.

mod alternatives;
mod builder;

pub use alternatives::{spelling_key, AlternativeSet};
pub use builder::build_index;
