//! Include extractor — per-line directive matching over header text.
//!
//! Reads each header best-effort (decode policy is explicit) and records
//! the basename of every `#include` target, exactly as written. Quoted and
//! angle-bracket includes are never distinguished, and no existence check
//! is made: only the later match against locally known spellings decides
//! whether a reference is relevant.

mod includes;

pub use includes::{DecodePolicy, IncludeExtractor};
