//! loradec core library for LoRaWAN sensor payload decoding.
//!
//! This crate implements the decoding engine used by the CLI: pure,
//! synchronous functions from bytes to structured records for two binary
//! protocols. Cayenne LPP payloads are a self-describing stream of
//! `(channel, type, value)` triples; Laird payloads carry exactly one
//! fixed-layout record selected by a one-byte discriminant. Both share the
//! numeric conversions in `codec`. Descriptor tables and byte offsets live
//! in `types`/`layout` modules so parsers stay minimal and table-driven.
//!
//! Invariants:
//! - Decoding is deterministic and stateless; the same bytes always produce
//!   the same records, and calls are safe to run concurrently.
//! - LPP decoding fails loudly on unknown type codes and truncated records.
//! - Laird decoding never fails: a failed length gate or an unknown
//!   discriminant is an empty result, not an error.
//!
//! # Examples
//! ```
//! use loradec_core::{SensorValue, decode_cayenne};
//!
//! let readings = decode_cayenne(&[0x01, 0x67, 0x01, 0x10])?;
//! assert_eq!(readings[&1].value, SensorValue::Scalar(27.2));
//! # Ok::<(), loradec_core::CayenneError>(())
//! ```

pub mod codec;
pub mod protocols;

pub use codec::CodecError;
pub use protocols::cayenne::error::CayenneError;
pub use protocols::cayenne::{SensorReading, SensorValue, decode_cayenne};
pub use protocols::laird::{
    BatteryType, ExtendedTemperatureReading, FirmwareVersion, LairdMessage, SimpleConfig,
    TempHumidityReading, decode_laird,
};
