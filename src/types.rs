//! Decoded transaction types

use serde::{Deserialize, Serialize};

use crate::constants::COINBASE_OUTPUT_INDEX;

/// Hash type: 256-bit hash, kept in wire byte order
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// OutPoint: reference to an output of an earlier transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    #[serde(with = "hex::serde")]
    pub hash: Hash,
    pub index: u32,
}

/// Transaction Input: outpoint, unlocking script, sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    #[serde(rename = "hash", with = "hex::serde")]
    pub previous_tx_hash: Hash,
    #[serde(rename = "index")]
    pub previous_output_index: u32,
    #[serde(rename = "script", with = "hex::serde")]
    pub unlocking_script: ByteString,
    pub sequence: u32,
}

impl TransactionInput {
    /// The outpoint this input spends
    pub fn outpoint(&self) -> OutPoint {
        OutPoint {
            hash: self.previous_tx_hash,
            index: self.previous_output_index,
        }
    }
}

/// Transaction Output: amount in satoshis and locking script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    #[serde(rename = "value")]
    pub amount: u64,
    #[serde(rename = "script", with = "hex::serde")]
    pub locking_script: ByteString,
}

/// Transaction: version, inputs and outputs in wire order
///
/// `id` is only populated by the identifier extension
/// (see [`crate::TransactionDecoder::decode_with_id`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "txId", with = "hex_opt", default)]
    pub id: Option<Hash>,
    pub version: u32,
    #[serde(rename = "vins")]
    pub inputs: Vec<TransactionInput>,
    #[serde(rename = "vouts")]
    pub outputs: Vec<TransactionOutput>,
}

impl Transaction {
    /// A single input spending the null outpoint
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1
            && self.inputs[0].previous_tx_hash == [0u8; 32]
            && self.inputs[0].previous_output_index == COINBASE_OUTPUT_INDEX
    }

    /// Sum of all output amounts, `None` on u64 overflow
    pub fn total_output_value(&self) -> Option<u64> {
        self.outputs
            .iter()
            .try_fold(0u64, |total, output| total.checked_add(output.amount))
    }
}

/// Decoded variable-length integer with its encoded size (1, 3, 5 or 9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarInt {
    pub value: u64,
    pub encoded_size: usize,
}

mod hex_opt {
    use super::Hash;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Hash>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(hash) => serializer.serialize_some(&hex::encode(hash)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Hash>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| -> Result<Hash, D::Error> {
                let mut hash = [0u8; 32];
                hex::decode_to_slice(&s, &mut hash).map_err(serde::de::Error::custom)?;
                Ok(hash)
            })
            .transpose()
    }
}
