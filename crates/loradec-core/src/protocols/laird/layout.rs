//! Byte offsets, widths, and expected lengths for the Laird protocol.

/// Offset of the one-byte message-type discriminant.
pub const MSG_TYPE_OFFSET: usize = 0;

/// Message-type discriminants.
pub const MSG_TYPE_TEMP_RH: u8 = 0x01;
pub const MSG_TYPE_AGG_TEMP_RH: u8 = 0x02;
pub const MSG_TYPE_SIMPLE_CONFIG: u8 = 0x05;
pub const MSG_TYPE_FW_VERSION: u8 = 0x07;
pub const MSG_TYPE_CONTACT_SENSOR_STATE: u8 = 0x09;
pub const MSG_TYPE_TEMP_EXT: u8 = 0x0B;
pub const MSG_TYPE_AGG_TEMP_EXT: u8 = 0x0D;

/// Temp/RH: exact length and field positions.
pub const TEMP_RH_LENGTH: usize = 11;
pub const TEMP_RH_HUMIDITY_OFFSET: usize = 2;
pub const TEMP_RH_TEMPERATURE_OFFSET: usize = 4;

/// Aggregate records: base length without readings, count byte position,
/// first reading position, and per-reading stride.
pub const AGGREGATE_BASE_LENGTH: usize = 11;
pub const AGGREGATE_COUNT_OFFSET: usize = 6;
pub const AGGREGATE_FIRST_READING_OFFSET: usize = 11;
pub const AGGREGATE_READING_STRIDE: usize = 4;

/// Simple Config: exact length and field positions.
pub const SIMPLE_CONFIG_LENGTH: usize = 8;
pub const SIMPLE_CONFIG_BATTERY_TYPE_OFFSET: usize = 2;
pub const SIMPLE_CONFIG_READ_PERIOD_OFFSET: usize = 3;
pub const SIMPLE_CONFIG_AGGREGATE_COUNT_OFFSET: usize = 5;
pub const SIMPLE_CONFIG_TEMP_ALARMS_OFFSET: usize = 6;
pub const SIMPLE_CONFIG_HUMIDITY_ALARMS_OFFSET: usize = 7;

pub const BATTERY_TYPE_ALKALINE: u8 = 1;
pub const BATTERY_TYPE_LITHIUM: u8 = 2;

/// Firmware Version: exact length and field positions.
pub const FW_VERSION_LENGTH: usize = 11;
pub const FW_VERSION_YEAR_OFFSET: usize = 2;
pub const FW_VERSION_MONTH_OFFSET: usize = 3;
pub const FW_VERSION_DAY_OFFSET: usize = 4;
pub const FW_VERSION_MAJOR_OFFSET: usize = 5;
pub const FW_VERSION_MINOR_OFFSET: usize = 6;
pub const FW_VERSION_PART_NUMBER_OFFSET: usize = 7;

/// Contact Sensor State: exact length and value position.
pub const CONTACT_SENSOR_STATE_LENGTH: usize = 6;
pub const CONTACT_SENSOR_STATE_OFFSET: usize = 3;

/// Extended Temperature: exact length and value position.
pub const TEMP_EXT_LENGTH: usize = 11;
pub const TEMP_EXT_TEMPERATURE_OFFSET: usize = 2;
