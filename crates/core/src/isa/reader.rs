//! Instruction word reader.
//!
//! Reads 4-byte instruction words in the decoder's byte order and rebuilds
//! 8-byte prefixed instructions. The prefix word sits at the lower address
//! regardless of byte order, so a prefixed instruction is two independent
//! 32-bit reads rather than one 64-bit read.

use crate::config::Endianness;

/// Width of one instruction word in bytes.
pub const WORD_BYTES: usize = 4;

/// Width of a prefixed instruction (prefix word + base word) in bytes.
pub const PREFIXED_BYTES: usize = 2 * WORD_BYTES;

/// Reads instruction words with a fixed byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordReader {
    endianness: Endianness,
}

impl WordReader {
    /// Creates a reader for the given byte order.
    pub const fn new(endianness: Endianness) -> Self {
        Self { endianness }
    }

    /// Byte order this reader was built with.
    pub const fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Reads the 4-byte word at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than four bytes are available at `offset`. Callers check
    /// the buffer length before reading.
    #[inline]
    pub fn read_u32(&self, bytes: &[u8], offset: usize) -> u32 {
        let b = &bytes[offset..offset + WORD_BYTES];
        let word = [b[0], b[1], b[2], b[3]];
        match self.endianness {
            Endianness::Big => u32::from_be_bytes(word),
            Endianness::Little => u32::from_le_bytes(word),
        }
    }

    /// Reads a prefixed instruction from the first eight bytes.
    ///
    /// The result is `base | prefix << 32`, where `prefix` is the word at
    /// offset 0 and `base` the word at offset 4.
    ///
    /// # Panics
    ///
    /// Panics if fewer than eight bytes are available.
    #[inline]
    pub fn read_prefixed(&self, bytes: &[u8]) -> u64 {
        let prefix = self.read_u32(bytes, 0);
        let base = self.read_u32(bytes, WORD_BYTES);
        u64::from(base) | (u64::from(prefix) << 32)
    }
}
