//! Length-prefixed script reading
//!
//! Locking and unlocking scripts share one wire shape: a VarInt length
//! followed by that many opaque bytes. Opcodes are never interpreted.

use crate::config::DecoderConfig;
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::types::ByteString;
use crate::varint::read_varint;

/// ReadScript: bytes(varint)
pub fn read_script(cursor: &mut ByteCursor<'_>, config: &DecoderConfig) -> Result<ByteString> {
    let length = read_varint(cursor, config.precision_ceiling)?.value;

    if let Some(limit) = config.max_script_size {
        if length > limit as u64 {
            return Err(DecodeError::ScriptTooLarge { length, limit });
        }
    }

    Ok(cursor.read_bytes_u64(length)?.to_vec())
}
