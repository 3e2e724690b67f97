//! Bounds-checked reader over a transaction byte buffer
//!
//! Every read either returns the requested bytes and advances the offset, or
//! fails with [`DecodeError::UnexpectedEndOfBuffer`] and leaves the offset
//! untouched. The offset never moves past the end of the buffer.

use crate::constants::HASH_SIZE;
use crate::error::{DecodeError, Result};
use crate::types::Hash;

/// Read cursor owned by a single decode
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at offset 0
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Bytes consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Everything consumed so far
    pub fn consumed(&self) -> &'a [u8] {
        &self.buffer[..self.offset]
    }

    /// Read the next `n` raw bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(self.end_of_buffer(n as u64));
        }
        let slice = &self.buffer[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }

    /// Read `n` raw bytes where `n` comes off the wire as a 64-bit length
    pub fn read_bytes_u64(&mut self, n: u64) -> Result<&'a [u8]> {
        if n > self.remaining() as u64 {
            return Err(self.end_of_buffer(n));
        }
        self.read_bytes(n as usize)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Read a 32-byte hash in wire order
    pub fn read_hash(&mut self) -> Result<Hash> {
        self.read_array::<HASH_SIZE>()
    }

    fn end_of_buffer(&self, needed: u64) -> DecodeError {
        DecodeError::UnexpectedEndOfBuffer {
            offset: self.offset,
            needed,
            remaining: self.remaining(),
        }
    }
}
