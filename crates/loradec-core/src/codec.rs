//! Numeric conversions shared by the protocol parsers.
//!
//! Two independent families live here because the two wire protocols use
//! different numeric representations:
//! - big-endian fixed point (Cayenne LPP): an integer reconstructed MSB
//!   first, optionally two's-complement signed, divided by a power of ten;
//! - "decimal + fractional" byte pairs (Laird): two separately signed
//!   components combined additively, which is not IEEE floating point and
//!   not standard fixed point.
//!
//! Every function is pure; the same bytes always produce the same number.

use thiserror::Error;

/// Widest value field any sensor descriptor declares, in bytes.
pub const MAX_FIXED_POINT_WIDTH: usize = 8;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported fixed-point width: {width} bytes")]
    UnsupportedWidth { width: usize },
}

/// Decodes a big-endian fixed-point value.
///
/// Widths 1/2/4/8 map onto the native fixed-width integer types; the
/// remaining widths (3-byte GPS fields, for instance) fall back to manual
/// two's-complement reduction. `scale` is the count of implied decimal
/// digits: the raw integer is divided by `10^scale`.
///
/// # Examples
/// ```
/// use loradec_core::codec::be_fixed_point;
///
/// assert_eq!(be_fixed_point(&[0xFF], true, 0).unwrap(), -1.0);
/// assert_eq!(be_fixed_point(&[0x01, 0x10], true, 1).unwrap(), 27.2);
/// ```
pub fn be_fixed_point(bytes: &[u8], signed: bool, scale: u32) -> Result<f64, CodecError> {
    let width = bytes.len();
    if width == 0 || width > MAX_FIXED_POINT_WIDTH {
        return Err(CodecError::UnsupportedWidth { width });
    }

    let mut raw: u64 = 0;
    for &byte in bytes {
        raw = (raw << 8) | u64::from(byte);
    }

    let value = if signed {
        match width {
            1 => f64::from(bytes[0] as i8),
            2 => f64::from(i16::from_be_bytes([bytes[0], bytes[1]])),
            4 => f64::from(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
            8 => raw as i64 as f64,
            _ => {
                // Reduce by the full range when the value exceeds the
                // positive maximum of the width's two's-complement span.
                let span = 1u64 << (width * 8);
                let max = (span - 1) >> 1;
                if raw > max {
                    (raw as i64 - span as i64) as f64
                } else {
                    raw as f64
                }
            }
        }
    } else {
        raw as f64
    };

    Ok(value / 10f64.powi(scale as i32))
}

/// Combines a fractional `i8` (byte 0) and a decimal `i8` (byte 1) as
/// `decimal + fractional / 100`.
///
/// # Examples
/// ```
/// use loradec_core::codec::byte_pair_float;
///
/// assert_eq!(byte_pair_float([0x36, 0x1B]), 27.54);
/// assert_eq!(byte_pair_float([0xCF, 0xF6]), -10.49);
/// ```
pub fn byte_pair_float(bytes: [u8; 2]) -> f64 {
    let fractional = bytes[0] as i8;
    let decimal = bytes[1] as i8;
    f64::from(decimal) + f64::from(fractional) / 100.0
}

/// Four-byte variant of [`byte_pair_float`]: a fractional `i16` (bytes 0-1)
/// and a decimal `i16` (bytes 2-3), both big-endian.
pub fn four_byte_float(bytes: [u8; 4]) -> f64 {
    let fractional = i16::from_be_bytes([bytes[0], bytes[1]]);
    let decimal = i16::from_be_bytes([bytes[2], bytes[3]]);
    f64::from(decimal) + f64::from(fractional) / 100.0
}

/// Big-endian unsigned 16-bit reconstruction, no scaling.
pub fn u16_be(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Big-endian unsigned 32-bit reconstruction, no scaling.
pub fn u32_be(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_unsigned() {
        assert_eq!(be_fixed_point(&[0xFF], false, 0).unwrap(), 255.0);
        assert_eq!(be_fixed_point(&[0x03, 0xE8], false, 0).unwrap(), 1000.0);
        assert_eq!(be_fixed_point(&[0x27, 0x94], false, 1).unwrap(), 1013.2);
    }

    #[test]
    fn fixed_point_signed_one_byte() {
        assert_eq!(be_fixed_point(&[0xFF], true, 0).unwrap(), -1.0);
        assert_eq!(be_fixed_point(&[0x7F], true, 0).unwrap(), 127.0);
        assert_eq!(be_fixed_point(&[0x80], true, 0).unwrap(), -128.0);
    }

    #[test]
    fn fixed_point_signed_two_bytes() {
        assert_eq!(be_fixed_point(&[0xFF, 0xFF], true, 0).unwrap(), -1.0);
        assert_eq!(be_fixed_point(&[0xFF, 0xFF], true, 1).unwrap(), -0.1);
        assert_eq!(be_fixed_point(&[0x03, 0xED], true, 2).unwrap(), 10.05);
    }

    #[test]
    fn fixed_point_signed_three_bytes() {
        // 3-byte widths take the manual reduction path.
        assert_eq!(be_fixed_point(&[0xFF, 0xFF, 0xFF], true, 0).unwrap(), -1.0);
        assert_eq!(
            be_fixed_point(&[0xFE, 0x79, 0x60], true, 4).unwrap(),
            -10.0
        );
        assert_eq!(
            be_fixed_point(&[0x06, 0x76, 0x5F], true, 4).unwrap(),
            42.3519
        );
    }

    #[test]
    fn fixed_point_scale_divides_by_powers_of_ten() {
        assert_eq!(be_fixed_point(&[0x01, 0x10], true, 1).unwrap(), 27.2);
        assert_eq!(be_fixed_point(&[0x01, 0x10], true, 0).unwrap(), 272.0);
    }

    #[test]
    fn fixed_point_rejects_unsupported_widths() {
        assert!(matches!(
            be_fixed_point(&[], false, 0),
            Err(CodecError::UnsupportedWidth { width: 0 })
        ));
        assert!(matches!(
            be_fixed_point(&[0u8; 9], false, 0),
            Err(CodecError::UnsupportedWidth { width: 9 })
        ));
    }

    #[test]
    fn byte_pair_float_positive() {
        assert_eq!(byte_pair_float([0x00, 0x00]), 0.0);
        assert_eq!(byte_pair_float([0x36, 0x1B]), 27.54);
    }

    #[test]
    fn byte_pair_float_negative() {
        assert_eq!(byte_pair_float([0xCF, 0xF6]), -10.49);
    }

    #[test]
    fn four_byte_float_values() {
        assert_eq!(four_byte_float([0x00, 0x00, 0x00, 0x00]), 0.0);
        assert_eq!(four_byte_float([0x00, 0x01, 0x00, 0x21]), 33.01);
        assert_eq!(four_byte_float([0x00, 0x48, 0x12, 0x33]), 4659.72);
        assert_eq!(four_byte_float([0x00, 0x12, 0x32, 0x13]), 12819.18);
        assert_eq!(four_byte_float([0xFF, 0xF6, 0xFF, 0xEC]), -20.10);
        assert_eq!(four_byte_float([0xFF, 0xE4, 0xFE, 0x77]), -393.28);
    }

    #[test]
    fn u16_be_values() {
        assert_eq!(u16_be([0xFF, 0xFF]), 65535);
        assert_eq!(u16_be([0x00, 0x01]), 1);
        assert_eq!(u16_be([0x01, 0x00]), 256);
    }

    #[test]
    fn u32_be_values() {
        assert_eq!(u32_be([0xFF, 0xFE, 0xFD, 0xFC]), 4_294_901_244);
        assert_eq!(u32_be([0x00, 0x01, 0x02, 0x03]), 66_051);
    }

    #[test]
    fn unsigned_round_trips_through_be_bytes() {
        for value in [0u32, 1, 255, 256, 65_535, 65_536, u32::MAX] {
            assert_eq!(u32_be(value.to_be_bytes()), value);
        }
        for value in [0u16, 1, 255, 256, u16::MAX] {
            assert_eq!(u16_be(value.to_be_bytes()), value);
        }
    }
}
