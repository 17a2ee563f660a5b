//! Scanner subsystem — header discovery and spelling seed collection.
//!
//! The scanner is the entry point to the pipeline. It walks the root once,
//! records every header file as a root-relative path, and seeds the
//! spelling index with each header's on-disk basename.

mod types;
mod walker;

pub use types::{HeaderFile, HeaderKind, ScanResult, ScanStats, HEADER_EXTENSIONS, LIBRARY_EXTENSIONS};
pub use walker::{classify, Scanner};
