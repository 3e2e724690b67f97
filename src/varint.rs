//! Bitcoin VarInt decoding
//!
//! VarInt (Variable Integer) is the compact length/count encoding used
//! throughout the transaction wire format. The leading byte selects the width:
//! - `< 0xfd`: the byte itself (1 byte total)
//! - `0xfd`: 2-byte little-endian payload (3 bytes total)
//! - `0xfe`: 4-byte little-endian payload (5 bytes total)
//! - `0xff`: 8-byte little-endian payload (9 bytes total)
//!
//! Non-canonical encodings (a small value behind a wide marker) are accepted;
//! this is a decoder, not a consensus validator.

use crate::constants::*;
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::types::VarInt;

/// Read one VarInt from the cursor
///
/// `ceiling` bounds the value of the 8-byte form; anything above it fails
/// with [`DecodeError::IntegerPrecisionOverflow`].
pub fn read_varint(cursor: &mut ByteCursor<'_>, ceiling: u64) -> Result<VarInt> {
    let marker = cursor.read_u8()?;

    let varint = match marker {
        VARINT_U16_MARKER => VarInt {
            value: cursor.read_u16_le()? as u64,
            encoded_size: 3,
        },
        VARINT_U32_MARKER => VarInt {
            value: cursor.read_u32_le()? as u64,
            encoded_size: 5,
        },
        VARINT_U64_MARKER => {
            let value = cursor.read_u64_le()?;
            check_precision(value, ceiling)?;
            VarInt {
                value,
                encoded_size: 9,
            }
        }
        b => VarInt {
            value: b as u64,
            encoded_size: 1,
        },
    };

    Ok(varint)
}

/// Decode a VarInt from the start of `data` with the default ceiling
///
/// # Examples
///
/// ```
/// use tx_decoder::varint::decode_varint;
///
/// let v = decode_varint(&[0xfd, 0x34, 0x12]).unwrap();
/// assert_eq!((v.value, v.encoded_size), (0x1234, 3));
/// assert!(decode_varint(&[]).is_err());
/// ```
pub fn decode_varint(data: &[u8]) -> Result<VarInt> {
    read_varint(&mut ByteCursor::new(data), MAX_SAFE_INTEGER)
}

/// Reject 64-bit quantities above the configured exact-integer ceiling
pub fn check_precision(value: u64, ceiling: u64) -> Result<()> {
    if value > ceiling {
        return Err(DecodeError::IntegerPrecisionOverflow { value, ceiling });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_varint_single_byte() {
        for t in 0u8..=252 {
            let v = decode_varint(&[t]).unwrap();
            assert_eq!(v.value, t as u64);
            assert_eq!(v.encoded_size, 1);
        }
    }

    #[test]
    fn test_decode_varint_u16() {
        assert_eq!(
            decode_varint(&[253, 0x34, 0x12]).unwrap(),
            VarInt { value: 0x1234, encoded_size: 3 }
        );
    }

    #[test]
    fn test_decode_varint_u32() {
        assert_eq!(
            decode_varint(&[254, 0x78, 0x56, 0x34, 0x12]).unwrap(),
            VarInt { value: 0x12345678, encoded_size: 5 }
        );
    }

    #[test]
    fn test_decode_varint_u64() {
        assert_eq!(
            decode_varint(&[255, 0, 0, 0, 0, 1, 0, 0, 0]).unwrap(),
            VarInt { value: 1 << 32, encoded_size: 9 }
        );
    }

    #[test]
    fn test_decode_varint_non_canonical_accepted() {
        assert_eq!(decode_varint(&[0xfd, 0x01, 0x00]).unwrap().value, 1);
        assert_eq!(decode_varint(&[0xff, 5, 0, 0, 0, 0, 0, 0, 0]).unwrap().value, 5);
    }

    #[test]
    fn test_decode_varint_at_ceiling() {
        let mut data = vec![0xff];
        data.extend_from_slice(&MAX_SAFE_INTEGER.to_le_bytes());
        assert_eq!(decode_varint(&data).unwrap().value, MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_decode_varint_precision_overflow() {
        let mut data = vec![0xff];
        data.extend_from_slice(&(MAX_SAFE_INTEGER + 1).to_le_bytes());
        assert_eq!(
            decode_varint(&data).unwrap_err(),
            DecodeError::IntegerPrecisionOverflow {
                value: MAX_SAFE_INTEGER + 1,
                ceiling: MAX_SAFE_INTEGER,
            }
        );
    }

    #[test]
    fn test_read_varint_native_ceiling() {
        let data = [0xff; 9];
        let mut cursor = ByteCursor::new(&data);
        let v = read_varint(&mut cursor, u64::MAX).unwrap();
        assert_eq!(v.value, u64::MAX);
        assert_eq!(cursor.offset(), 9);
    }

    #[test]
    fn test_decode_varint_insufficient_bytes() {
        assert!(decode_varint(&[]).is_err());
        assert!(decode_varint(&[0xfd]).is_err());
        assert!(decode_varint(&[0xfd, 0]).is_err());
        assert!(decode_varint(&[0xfe, 0, 0, 0]).is_err());
        assert!(decode_varint(&[0xff, 0, 0, 0, 0, 0, 0, 0]).is_err());

        assert!(matches!(
            decode_varint(&[0xfe, 1]).unwrap_err(),
            DecodeError::UnexpectedEndOfBuffer { offset: 1, needed: 4, remaining: 1 }
        ));
    }

    #[test]
    fn test_read_varint_consumes_encoded_size() {
        let data = [0xfe, 1, 0, 0, 0, 0x07];
        let mut cursor = ByteCursor::new(&data);
        let v = read_varint(&mut cursor, MAX_SAFE_INTEGER).unwrap();
        assert_eq!(cursor.offset(), v.encoded_size);
        assert_eq!(read_varint(&mut cursor, MAX_SAFE_INTEGER).unwrap().value, 7);
    }
}
