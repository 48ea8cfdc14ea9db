use serde::Serialize;

use crate::codec;

use super::layout;
use super::reader::LairdReader;

/// One decoded Laird message, tagged by kind.
///
/// Serializes adjacently tagged (`type`/`value`) with the device's
/// wire-adjacent type names, reproducing the upstream JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum LairdMessage {
    #[serde(rename = "Laird_Internal_TH")]
    TempHumidity(TempHumidityReading),
    #[serde(rename = "Laird_Agg_TH")]
    AggregateTempHumidity(Vec<TempHumidityReading>),
    #[serde(rename = "Laird_Simple_Config")]
    SimpleConfig(SimpleConfig),
    #[serde(rename = "Laird_FW_Version")]
    FirmwareVersion(FirmwareVersion),
    #[serde(rename = "Laird_Contact_Sensor")]
    ContactSensorState(u8),
    #[serde(rename = "Laird_RTD")]
    ExtendedTemperature(f64),
    #[serde(rename = "Laird_Agg_Temp_Ext")]
    AggregateExtendedTemperature(Vec<ExtendedTemperatureReading>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TempHumidityReading {
    pub humidity: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedTemperatureReading {
    pub temperature: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatteryType {
    Alkaline,
    Lithium,
    Unknown,
}

impl BatteryType {
    fn from_wire(value: u8) -> Self {
        match value {
            layout::BATTERY_TYPE_ALKALINE => BatteryType::Alkaline,
            layout::BATTERY_TYPE_LITHIUM => BatteryType::Lithium,
            _ => BatteryType::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleConfig {
    pub battery_type: BatteryType,
    pub sensor_read_period: u16,
    pub aggregate_count: u8,
    pub temp_alarms_enabled: bool,
    pub humidity_alarms_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareVersion {
    pub release_date: String,
    pub release_number: String,
    pub part_number: u32,
}

/// Decodes a Laird payload into at most one message.
///
/// Byte 0 selects the record layout; each branch is gated by its expected
/// total length. Unknown discriminants and failed length gates yield an
/// empty result rather than an error.
///
/// # Examples
/// ```
/// use loradec_core::protocols::laird::{LairdMessage, decode_laird};
///
/// let messages = decode_laird(&[0x09, 0x00, 0x00, 0x01, 0x01, 0x01]);
/// assert_eq!(messages, vec![LairdMessage::ContactSensorState(1)]);
///
/// assert!(decode_laird(&[0x09, 0x00, 0x00, 0x01, 0x01]).is_empty());
/// ```
pub fn decode_laird(payload: &[u8]) -> Vec<LairdMessage> {
    let reader = LairdReader::new(payload);
    let message = match reader.read_u8(layout::MSG_TYPE_OFFSET) {
        Some(layout::MSG_TYPE_TEMP_RH) => temp_humidity(&reader),
        Some(layout::MSG_TYPE_AGG_TEMP_RH) => aggregate_temp_humidity(&reader),
        Some(layout::MSG_TYPE_SIMPLE_CONFIG) => simple_config(&reader),
        Some(layout::MSG_TYPE_FW_VERSION) => firmware_version(&reader),
        Some(layout::MSG_TYPE_CONTACT_SENSOR_STATE) => contact_sensor_state(&reader),
        Some(layout::MSG_TYPE_TEMP_EXT) => extended_temperature(&reader),
        Some(layout::MSG_TYPE_AGG_TEMP_EXT) => aggregate_extended_temperature(&reader),
        _ => None,
    };
    message.into_iter().collect()
}

fn temp_humidity(reader: &LairdReader<'_>) -> Option<LairdMessage> {
    if reader.len() != layout::TEMP_RH_LENGTH {
        return None;
    }
    Some(LairdMessage::TempHumidity(TempHumidityReading {
        humidity: codec::byte_pair_float(reader.read_pair(layout::TEMP_RH_HUMIDITY_OFFSET)?),
        temperature: codec::byte_pair_float(
            reader.read_pair(layout::TEMP_RH_TEMPERATURE_OFFSET)?,
        ),
    }))
}

/// Validates the count-derived total length, then expands `count` readings
/// of `stride` bytes starting at the first-reading offset.
fn aggregate_offsets(reader: &LairdReader<'_>) -> Option<impl Iterator<Item = usize>> {
    if reader.len() <= layout::AGGREGATE_BASE_LENGTH {
        return None;
    }
    let count = usize::from(reader.read_u8(layout::AGGREGATE_COUNT_OFFSET)?);
    let readings_len = count * layout::AGGREGATE_READING_STRIDE;
    if reader.len() != layout::AGGREGATE_BASE_LENGTH + readings_len {
        return None;
    }
    Some(
        (0..count).map(|index| {
            layout::AGGREGATE_FIRST_READING_OFFSET + index * layout::AGGREGATE_READING_STRIDE
        }),
    )
}

fn aggregate_temp_humidity(reader: &LairdReader<'_>) -> Option<LairdMessage> {
    let mut readings = Vec::new();
    for offset in aggregate_offsets(reader)? {
        readings.push(TempHumidityReading {
            humidity: codec::byte_pair_float(reader.read_pair(offset)?),
            temperature: codec::byte_pair_float(reader.read_pair(offset + 2)?),
        });
    }
    Some(LairdMessage::AggregateTempHumidity(readings))
}

fn simple_config(reader: &LairdReader<'_>) -> Option<LairdMessage> {
    if reader.len() != layout::SIMPLE_CONFIG_LENGTH {
        return None;
    }
    Some(LairdMessage::SimpleConfig(SimpleConfig {
        battery_type: BatteryType::from_wire(
            reader.read_u8(layout::SIMPLE_CONFIG_BATTERY_TYPE_OFFSET)?,
        ),
        sensor_read_period: codec::u16_be(
            reader.read_pair(layout::SIMPLE_CONFIG_READ_PERIOD_OFFSET)?,
        ),
        aggregate_count: reader.read_u8(layout::SIMPLE_CONFIG_AGGREGATE_COUNT_OFFSET)?,
        temp_alarms_enabled: reader.read_u8(layout::SIMPLE_CONFIG_TEMP_ALARMS_OFFSET)? != 0,
        humidity_alarms_enabled: reader.read_u8(layout::SIMPLE_CONFIG_HUMIDITY_ALARMS_OFFSET)?
            != 0,
    }))
}

fn firmware_version(reader: &LairdReader<'_>) -> Option<LairdMessage> {
    if reader.len() != layout::FW_VERSION_LENGTH {
        return None;
    }
    let year = reader.read_u8(layout::FW_VERSION_YEAR_OFFSET)?;
    let month = reader.read_u8(layout::FW_VERSION_MONTH_OFFSET)?;
    let day = reader.read_u8(layout::FW_VERSION_DAY_OFFSET)?;
    let major = reader.read_u8(layout::FW_VERSION_MAJOR_OFFSET)?;
    let minor = reader.read_u8(layout::FW_VERSION_MINOR_OFFSET)?;
    Some(LairdMessage::FirmwareVersion(FirmwareVersion {
        release_date: format!("{year}/{month}/{day}"),
        release_number: format!("{major}.{minor}"),
        part_number: codec::u32_be(reader.read_quad(layout::FW_VERSION_PART_NUMBER_OFFSET)?),
    }))
}

fn contact_sensor_state(reader: &LairdReader<'_>) -> Option<LairdMessage> {
    if reader.len() != layout::CONTACT_SENSOR_STATE_LENGTH {
        return None;
    }
    Some(LairdMessage::ContactSensorState(
        reader.read_u8(layout::CONTACT_SENSOR_STATE_OFFSET)?,
    ))
}

fn extended_temperature(reader: &LairdReader<'_>) -> Option<LairdMessage> {
    if reader.len() != layout::TEMP_EXT_LENGTH {
        return None;
    }
    Some(LairdMessage::ExtendedTemperature(codec::four_byte_float(
        reader.read_quad(layout::TEMP_EXT_TEMPERATURE_OFFSET)?,
    )))
}

fn aggregate_extended_temperature(reader: &LairdReader<'_>) -> Option<LairdMessage> {
    let mut readings = Vec::new();
    for offset in aggregate_offsets(reader)? {
        readings.push(ExtendedTemperatureReading {
            temperature: codec::four_byte_float(reader.read_quad(offset)?),
        });
    }
    Some(LairdMessage::AggregateExtendedTemperature(readings))
}
