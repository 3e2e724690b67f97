//! Transaction decoding
//!
//! Wire layout (no segwit marker/flag):
//! - Version (4 bytes, little-endian)
//! - Input count (VarInt)
//! - For each input:
//!   - Previous output hash (32 bytes)
//!   - Previous output index (4 bytes, little-endian)
//!   - Script length (VarInt) + script bytes
//!   - Sequence (4 bytes, little-endian)
//! - Output count (VarInt)
//! - For each output:
//!   - Amount (8 bytes, little-endian)
//!   - Script length (VarInt) + script bytes
//!
//! Decoding is a single forward pass. The first failing read aborts the
//! whole decode; no partial transaction is ever returned.

use crate::config::DecoderConfig;
use crate::constants::*;
use crate::cursor::ByteCursor;
use crate::error::{DecodeError, Result};
use crate::script::read_script;
use crate::types::*;
use crate::varint::{check_precision, read_varint};

/// ReadInput: ℍ × u32 × 𝕊 × u32
pub fn read_input(cursor: &mut ByteCursor<'_>, config: &DecoderConfig) -> Result<TransactionInput> {
    let previous_tx_hash = cursor.read_hash()?;
    let previous_output_index = cursor.read_u32_le()?;
    let unlocking_script = read_script(cursor, config)?;
    let sequence = cursor.read_u32_le()?;

    Ok(TransactionInput {
        previous_tx_hash,
        previous_output_index,
        unlocking_script,
        sequence,
    })
}

/// ReadOutput: u64 × 𝕊
pub fn read_output(cursor: &mut ByteCursor<'_>, config: &DecoderConfig) -> Result<TransactionOutput> {
    let amount = cursor.read_u64_le()?;
    check_precision(amount, config.precision_ceiling)?;
    let locking_script = read_script(cursor, config)?;

    Ok(TransactionOutput {
        amount,
        locking_script,
    })
}

/// Read one transaction starting at the cursor's offset
///
/// Leaves the cursor just past the last output. `id` is always `None`.
pub fn read_transaction(cursor: &mut ByteCursor<'_>, config: &DecoderConfig) -> Result<Transaction> {
    let version = cursor.read_u32_le()?;

    let input_count = read_varint(cursor, config.precision_ceiling)?.value;
    let mut inputs = Vec::with_capacity(capacity_hint(input_count, cursor.remaining(), MIN_INPUT_SIZE));
    for _ in 0..input_count {
        inputs.push(read_input(cursor, config)?);
    }

    let output_count = read_varint(cursor, config.precision_ceiling)?.value;
    let mut outputs = Vec::with_capacity(capacity_hint(output_count, cursor.remaining(), MIN_OUTPUT_SIZE));
    for _ in 0..output_count {
        outputs.push(read_output(cursor, config)?);
    }

    Ok(Transaction {
        id: None,
        version,
        inputs,
        outputs,
    })
}

/// Decode a transaction and report how many bytes it occupied
///
/// Trailing bytes are never an error here.
pub fn decode_transaction_partial(bytes: &[u8], config: &DecoderConfig) -> Result<(Transaction, usize)> {
    let mut cursor = ByteCursor::new(bytes);
    let tx = read_transaction(&mut cursor, config)?;
    Ok((tx, cursor.offset()))
}

/// Decode a transaction from raw bytes
pub fn decode_transaction(bytes: &[u8], config: &DecoderConfig) -> Result<Transaction> {
    let (tx, consumed) = decode_transaction_partial(bytes, config)?;
    check_trailing(bytes.len() - consumed, config)?;
    Ok(tx)
}

/// Decode a transaction from a hex string
pub fn decode_transaction_hex(hex_str: &str, config: &DecoderConfig) -> Result<Transaction> {
    decode_transaction(&parse_hex(hex_str)?, config)
}

/// Hex to bytes; odd length or non-hex characters are `MalformedInput`
pub fn parse_hex(hex_str: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex_str.trim())?)
}

pub(crate) fn check_trailing(remaining: usize, config: &DecoderConfig) -> Result<()> {
    if remaining > 0 && !config.allow_trailing_bytes {
        return Err(DecodeError::TrailingBytes { remaining });
    }
    Ok(())
}

/// Pre-allocation bounded by what the remaining bytes could possibly hold
fn capacity_hint(count: u64, remaining: usize, min_item_size: usize) -> usize {
    let max_items = remaining / min_item_size;
    if count < max_items as u64 {
        count as usize
    } else {
        max_items
    }
}
