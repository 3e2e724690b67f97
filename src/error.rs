//! Error types for transaction decoding

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unexpected end of buffer at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEndOfBuffer {
        offset: usize,
        needed: u64,
        remaining: usize,
    },

    #[error("Integer precision overflow: {value} exceeds ceiling {ceiling}")]
    IntegerPrecisionOverflow { value: u64, ceiling: u64 },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Trailing data: {remaining} bytes left after transaction")]
    TrailingBytes { remaining: usize },

    #[error("Script too large: {length} bytes exceeds limit {limit}")]
    ScriptTooLarge { length: u64, limit: usize },
}

pub type Result<T> = std::result::Result<T, DecodeError>;

impl From<hex::FromHexError> for DecodeError {
    fn from(err: hex::FromHexError) -> Self {
        DecodeError::MalformedInput(err.to_string())
    }
}
