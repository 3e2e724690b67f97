//! Wire format constants for serialized transactions

/// Largest integer an IEEE-754 double holds exactly: 2^53 - 1
pub const MAX_SAFE_INTEGER: u64 = 0x001f_ffff_ffff_ffff;

/// VarInt marker: 2-byte little-endian payload follows
pub const VARINT_U16_MARKER: u8 = 0xfd;

/// VarInt marker: 4-byte little-endian payload follows
pub const VARINT_U32_MARKER: u8 = 0xfe;

/// VarInt marker: 8-byte little-endian payload follows
pub const VARINT_U64_MARKER: u8 = 0xff;

/// Size of a transaction hash on the wire
pub const HASH_SIZE: usize = 32;

/// Size of the version field
pub const VERSION_SIZE: usize = 4;

/// Size of the previous output index field
pub const OUTPUT_INDEX_SIZE: usize = 4;

/// Size of the sequence field
pub const SEQUENCE_SIZE: usize = 4;

/// Size of an output amount
pub const AMOUNT_SIZE: usize = 8;

/// Smallest possible encoded input: hash + index + empty script + sequence
pub const MIN_INPUT_SIZE: usize = HASH_SIZE + OUTPUT_INDEX_SIZE + 1 + SEQUENCE_SIZE;

/// Smallest possible encoded output: amount + empty script
pub const MIN_OUTPUT_SIZE: usize = AMOUNT_SIZE + 1;

/// Previous output index used by coinbase inputs
pub const COINBASE_OUTPUT_INDEX: u32 = 0xffffffff;

/// Sequence number for final inputs
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Satoshis per BTC
pub const SATOSHIS_PER_BTC: u64 = 100_000_000;
