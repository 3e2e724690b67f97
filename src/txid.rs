//! Transaction identifier: SHA-256d over the decoded byte range
//!
//! Only the bytes the decoder consumed are hashed. A lock time left in the
//! trailing bytes is not part of that range, so the result matches a network
//! txid only for buffers the decoder consumes in full.

use bitcoin_hashes::{sha256d, Hash as BitcoinHash};

use crate::types::Hash;

/// SHA256(SHA256(bytes)) in internal byte order
pub fn compute_tx_id(bytes: &[u8]) -> Hash {
    let digest = sha256d::Hash::hash(bytes);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&digest[..]);
    hash
}

/// Hex rendering in display order (byte-reversed)
pub fn tx_id_hex(id: &Hash) -> String {
    let mut reversed = *id;
    reversed.reverse();
    hex::encode(reversed)
}
