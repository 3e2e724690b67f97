//! # tx-decoder
//!
//! Decoder for serialized Bitcoin-style transactions.
//!
//! Turns a raw byte buffer (or its hex encoding) into a [`Transaction`]: a
//! version, the inputs in wire order and the outputs in wire order. Scripts
//! are kept as opaque byte strings.
//!
//! ## Design Principles
//!
//! 1. **Checked Reads**: every read is bounds-checked; truncated data is an error, never a short value
//! 2. **No Partial Results**: the first failing field aborts the whole decode
//! 3. **Lossless Integers**: 64-bit quantities above the configured ceiling are rejected, not rounded
//! 4. **No Shared State**: each decode owns its cursor; decodes on separate threads never interact
//!
//! ## Usage
//!
//! ```rust
//! use tx_decoder::TransactionDecoder;
//!
//! let decoder = TransactionDecoder::new();
//! let tx = decoder.decode_hex(concat!(
//!     "01000000", "01",
//!     "0000000000000000000000000000000000000000000000000000000000000000",
//!     "00000000", "03aabbcc", "ffffffff",
//!     "01", "00e1f50500000000", "00",
//! )).unwrap();
//!
//! assert_eq!(tx.version, 1);
//! assert_eq!(tx.inputs[0].unlocking_script, vec![0xaa, 0xbb, 0xcc]);
//! assert_eq!(tx.outputs[0].amount, 100_000_000);
//! assert!(tx.id.is_none());
//! ```

pub mod types;
pub mod constants;
pub mod cursor;
pub mod varint;
pub mod script;
pub mod transaction;
pub mod txid;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use config::DecoderConfig;
pub use cursor::ByteCursor;
pub use error::{DecodeError, Result};

/// Main transaction decoder
///
/// # Examples
///
/// ```
/// use tx_decoder::{TransactionDecoder, DecoderConfig};
///
/// let decoder = TransactionDecoder::with_config(DecoderConfig::native().strict());
/// assert!(decoder.decode(&[1, 0, 0, 0, 0, 0]).is_ok());
/// assert!(decoder.decode(&[1, 0, 0, 0, 0, 0, 0]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransactionDecoder {
    config: DecoderConfig,
}

impl TransactionDecoder {
    /// Create a decoder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a transaction from raw bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use tx_decoder::{TransactionDecoder, DecodeError};
    ///
    /// let decoder = TransactionDecoder::new();
    ///
    /// // Version only, input count missing
    /// let err = decoder.decode(&[1, 0, 0, 0]).unwrap_err();
    /// assert!(matches!(err, DecodeError::UnexpectedEndOfBuffer { offset: 4, .. }));
    /// ```
    pub fn decode(&self, bytes: &[u8]) -> Result<Transaction> {
        let tx = transaction::decode_transaction(bytes, &self.config)?;
        log::debug!(
            "decoded transaction: version={} inputs={} outputs={}",
            tx.version,
            tx.inputs.len(),
            tx.outputs.len()
        );
        Ok(tx)
    }

    /// Decode a transaction from a hex string
    ///
    /// # Examples
    ///
    /// ```
    /// use tx_decoder::{TransactionDecoder, DecodeError};
    ///
    /// let decoder = TransactionDecoder::new();
    /// assert!(matches!(decoder.decode_hex("0100000"), Err(DecodeError::MalformedInput(_))));
    /// ```
    pub fn decode_hex(&self, hex_str: &str) -> Result<Transaction> {
        self.decode(&transaction::parse_hex(hex_str)?)
    }

    /// Decode and return the number of bytes the transaction occupied
    ///
    /// Trailing bytes are ignored regardless of configuration.
    pub fn decode_partial(&self, bytes: &[u8]) -> Result<(Transaction, usize)> {
        let (tx, consumed) = transaction::decode_transaction_partial(bytes, &self.config)?;
        log::trace!("consumed {} of {} bytes", consumed, bytes.len());
        Ok((tx, consumed))
    }

    /// Decode and fill `id` with the SHA-256d of the consumed bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use tx_decoder::TransactionDecoder;
    ///
    /// let tx = TransactionDecoder::new().decode_with_id(&[1, 0, 0, 0, 0, 0]).unwrap();
    /// assert!(tx.id.is_some());
    /// ```
    pub fn decode_with_id(&self, bytes: &[u8]) -> Result<Transaction> {
        let (mut tx, consumed) = self.decode_partial(bytes)?;
        transaction::check_trailing(bytes.len() - consumed, &self.config)?;
        let id = txid::compute_tx_id(&bytes[..consumed]);
        log::debug!("computed transaction id {}", txid::tx_id_hex(&id));
        tx.id = Some(id);
        Ok(tx)
    }
}
