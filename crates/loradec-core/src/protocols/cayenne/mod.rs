//! Cayenne LPP (Low-Power Payload) decoding.
//!
//! The payload is a self-describing stream of `(channel, type, value)`
//! triples; the parser walks it until exhaustion and keys the decoded
//! readings by channel. Per-type byte widths, signedness, and fixed-point
//! scales live in the `types` descriptor table, which is the single source
//! of truth for dispatch.
//!
//! Errors are explicit and actionable: an unknown type code or a record
//! truncated mid-stream aborts the whole decode, since the framing is
//! self-describing and nothing after a bad record can be trusted.

pub mod error;
pub mod parser;
pub mod reader;
pub mod types;

pub use parser::{SensorReading, SensorValue, decode_cayenne};
