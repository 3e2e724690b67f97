//! Decoder configuration
//!
//! Settings can be passed programmatically or loaded from a JSON file.
//! Missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SAFE_INTEGER;
use crate::error::{DecodeError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Largest accepted 8-byte VarInt or output amount.
    /// Default: 2^53 - 1, so every decoded value survives a trip through a JSON number.
    #[serde(default = "default_precision_ceiling")]
    pub precision_ceiling: u64,

    /// Accept unread bytes after the last output (e.g. a lock time).
    /// Default: true
    #[serde(default = "default_true")]
    pub allow_trailing_bytes: bool,

    /// Reject scripts whose length prefix exceeds this many bytes.
    /// Default: None (bounded only by the buffer)
    #[serde(default)]
    pub max_script_size: Option<usize>,
}

fn default_precision_ceiling() -> u64 {
    MAX_SAFE_INTEGER
}

fn default_true() -> bool {
    true
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            precision_ceiling: MAX_SAFE_INTEGER,
            allow_trailing_bytes: true,
            max_script_size: None,
        }
    }
}

impl DecoderConfig {
    /// Full u64 range, no precision ceiling
    pub fn native() -> Self {
        Self {
            precision_ceiling: u64::MAX,
            ..Self::default()
        }
    }

    /// Require the buffer to hold exactly one transaction
    pub fn strict(mut self) -> Self {
        self.allow_trailing_bytes = false;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DecodeError::MalformedInput(format!("invalid config: {}", e)))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DecodeError::MalformedInput(format!("reading config {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }
}
