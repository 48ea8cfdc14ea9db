//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `types`/`layout`: descriptor tables and byte offsets (source of truth)
//! - `reader`: safe byte access and protocol conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//!
//! Parsers are pure and contain no I/O; callers handle transport decoding
//! (base64) and any flattening of the results.

pub mod cayenne;
pub mod laird;
