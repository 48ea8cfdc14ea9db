//! Laird sensor protocol decoding.
//!
//! Unlike LPP, a Laird payload carries exactly one message: byte 0 selects
//! one of seven rigid record layouts, each gated by an exact (or, for
//! aggregates, count-derived) total-length check. A failed gate or an
//! unknown discriminant is a clean absence of data, not an error, so the
//! decoder returns zero or one message and never fails; the `reader`
//! mirrors that convention by returning `Option` instead of an error type.
//!
//! Byte offsets and expected lengths live in `layout`, which is the single
//! source of truth for the wire format.

pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{
    BatteryType, ExtendedTemperatureReading, FirmwareVersion, LairdMessage, SimpleConfig,
    TempHumidityReading, decode_laird,
};
