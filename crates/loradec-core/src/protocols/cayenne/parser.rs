use std::collections::BTreeMap;

use serde::Serialize;

use crate::codec;

use super::error::CayenneError;
use super::reader::CayenneReader;
use super::types::{self, SensorLayout};

/// Decoded value of one LPP record.
///
/// Serializes untagged: a plain number for scalar types, a named-field
/// object for composite types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    Scalar(f64),
    ThreeAxis { x: f64, y: f64, z: f64 },
    Gps {
        latitude: f64,
        longitude: f64,
        altitude: f64,
    },
}

/// One decoded reading, keyed by channel in the decode result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    #[serde(rename = "type")]
    pub type_code: u8,
    pub type_name: &'static str,
    pub value: SensorValue,
}

/// Decodes a Cayenne LPP payload into readings keyed by channel.
///
/// Iterates `(channel, type, value)` triples until the buffer is
/// exhausted. A later record on the same channel replaces the earlier
/// one. Unknown type codes and records that run past the end of the
/// buffer abort the decode.
///
/// # Examples
/// ```
/// use loradec_core::protocols::cayenne::{SensorValue, decode_cayenne};
///
/// let readings = decode_cayenne(&[0x01, 0x67, 0x01, 0x10])?;
/// assert_eq!(readings[&1].type_name, "Temperature Sensor");
/// assert_eq!(readings[&1].value, SensorValue::Scalar(27.2));
/// # Ok::<(), loradec_core::protocols::cayenne::error::CayenneError>(())
/// ```
pub fn decode_cayenne(payload: &[u8]) -> Result<BTreeMap<u8, SensorReading>, CayenneError> {
    let mut reader = CayenneReader::new(payload);
    let mut readings = BTreeMap::new();

    while !reader.is_exhausted() {
        let channel = reader.read_u8()?;
        let code = reader.read_u8()?;
        let descriptor =
            types::sensor_type(code).ok_or(CayenneError::UnknownType { code })?;
        let data = reader.take(descriptor.size)?;

        let mut value = decode_value(descriptor.layout, descriptor.signed, data)?;

        // The humidity scale table stops at 0.1 but the wire resolution
        // is 0.5 % per bit; compensate after scaling.
        if code == types::TYPE_HUMIDITY {
            if let SensorValue::Scalar(raw) = value {
                value = SensorValue::Scalar(raw * 5.0);
            }
        }

        readings.insert(
            channel,
            SensorReading {
                type_code: code,
                type_name: descriptor.name,
                value,
            },
        );
    }

    Ok(readings)
}

fn decode_value(
    layout: SensorLayout,
    signed: bool,
    data: &[u8],
) -> Result<SensorValue, CayenneError> {
    let value = match layout {
        SensorLayout::Scalar { scale } => {
            SensorValue::Scalar(codec::be_fixed_point(data, signed, scale)?)
        }
        SensorLayout::ThreeAxis { scale } => SensorValue::ThreeAxis {
            x: codec::be_fixed_point(&data[0..2], signed, scale[0])?,
            y: codec::be_fixed_point(&data[2..4], signed, scale[1])?,
            z: codec::be_fixed_point(&data[4..6], signed, scale[2])?,
        },
        SensorLayout::Gps { scale } => SensorValue::Gps {
            latitude: codec::be_fixed_point(&data[0..3], signed, scale[0])?,
            longitude: codec::be_fixed_point(&data[3..6], signed, scale[1])?,
            altitude: codec::be_fixed_point(&data[6..9], signed, scale[2])?,
        },
    };
    Ok(value)
}
