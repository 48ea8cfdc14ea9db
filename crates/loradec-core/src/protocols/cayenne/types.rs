//! Sensor type descriptor table for the Cayenne LPP protocol.
//!
//! One entry per LPP type code, built once as a `const` table and never
//! mutated. Widths, signedness, and scales follow the myDevices LPP
//! reference (IPSO object mapping); composite types carry one fixed-point
//! scale per field.

/// Cayenne LPP type codes.
pub const TYPE_DIGITAL_INPUT: u8 = 0;
pub const TYPE_DIGITAL_OUTPUT: u8 = 1;
pub const TYPE_ANALOG_INPUT: u8 = 2;
pub const TYPE_ANALOG_OUTPUT: u8 = 3;
pub const TYPE_ILLUMINANCE: u8 = 101;
pub const TYPE_PRESENCE: u8 = 102;
pub const TYPE_TEMPERATURE: u8 = 103;
pub const TYPE_HUMIDITY: u8 = 104;
pub const TYPE_ACCELEROMETER: u8 = 113;
pub const TYPE_BAROMETER: u8 = 115;
pub const TYPE_GYROMETER: u8 = 134;
pub const TYPE_GPS: u8 = 136;

/// Value layout of a sensor type: the shape the parser must produce and
/// the implied-decimal scale of each fixed-point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorLayout {
    /// Single fixed-point number.
    Scalar { scale: u32 },
    /// Three 2-byte axes (x, y, z), one scale per axis.
    ThreeAxis { scale: [u32; 3] },
    /// Three 3-byte fields (latitude, longitude, altitude), one scale each.
    Gps { scale: [u32; 3] },
}

/// Static layout and numeric metadata for one LPP sensor type.
#[derive(Debug, Clone, Copy)]
pub struct SensorType {
    pub code: u8,
    pub name: &'static str,
    /// Width of the value field in bytes (channel and type bytes excluded).
    pub size: usize,
    pub signed: bool,
    pub layout: SensorLayout,
}

const SENSOR_TYPES: [SensorType; 12] = [
    SensorType {
        code: TYPE_DIGITAL_INPUT,
        name: "Digital Input",
        size: 1,
        signed: false,
        layout: SensorLayout::Scalar { scale: 0 },
    },
    SensorType {
        code: TYPE_DIGITAL_OUTPUT,
        name: "Digital Output",
        size: 1,
        signed: false,
        layout: SensorLayout::Scalar { scale: 0 },
    },
    SensorType {
        code: TYPE_ANALOG_INPUT,
        name: "Analog Input",
        size: 2,
        signed: true,
        layout: SensorLayout::Scalar { scale: 2 },
    },
    SensorType {
        code: TYPE_ANALOG_OUTPUT,
        name: "Analog Output",
        size: 2,
        signed: true,
        layout: SensorLayout::Scalar { scale: 2 },
    },
    SensorType {
        code: TYPE_ILLUMINANCE,
        name: "Illuminance Sensor",
        size: 2,
        signed: false,
        layout: SensorLayout::Scalar { scale: 0 },
    },
    SensorType {
        code: TYPE_PRESENCE,
        name: "Presence Sensor",
        size: 1,
        signed: false,
        layout: SensorLayout::Scalar { scale: 0 },
    },
    SensorType {
        code: TYPE_TEMPERATURE,
        name: "Temperature Sensor",
        size: 2,
        signed: true,
        layout: SensorLayout::Scalar { scale: 1 },
    },
    SensorType {
        code: TYPE_HUMIDITY,
        name: "Humidity Sensor",
        size: 1,
        signed: false,
        layout: SensorLayout::Scalar { scale: 1 },
    },
    SensorType {
        code: TYPE_ACCELEROMETER,
        name: "Accelerometer",
        size: 6,
        signed: true,
        layout: SensorLayout::ThreeAxis { scale: [3, 3, 3] },
    },
    SensorType {
        code: TYPE_BAROMETER,
        name: "Barometer",
        size: 2,
        signed: false,
        layout: SensorLayout::Scalar { scale: 1 },
    },
    SensorType {
        code: TYPE_GYROMETER,
        name: "Gyrometer",
        size: 6,
        signed: true,
        layout: SensorLayout::ThreeAxis { scale: [2, 2, 2] },
    },
    SensorType {
        code: TYPE_GPS,
        name: "GPS Location",
        size: 9,
        signed: true,
        layout: SensorLayout::Gps { scale: [4, 4, 2] },
    },
];

/// Looks up the descriptor for a type code.
pub fn sensor_type(code: u8) -> Option<&'static SensorType> {
    SENSOR_TYPES.iter().find(|descriptor| descriptor.code == code)
}
