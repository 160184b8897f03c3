//! PowerPC Instruction Dispatcher.
//!
//! This module decides which decode table gets to look at the input bytes,
//! in strict priority order:
//!
//! 1. **Prefixed:** With `PrefixInstrs` enabled and at least eight bytes
//!    available, the 64-bit composite is tried against `Prefixed64`.
//! 2. **Length check:** Fewer than four bytes is a truncation.
//! 3. **SPE:** With `Spe` enabled, the 32-bit word is tried against `Extension32`.
//! 4. **Standard:** `Standard32` has the final word, success or failure.
//!
//! A data-dependent failure in an earlier table (no match, reserved field)
//! falls through to the next one. An internal table error never does.

use tracing::{debug, error, trace};

use crate::common::error::DecodeError;
use crate::config::{DecoderConfig, Endianness, Feature, FeatureSet};
use crate::isa::disasm::Instructions;
use crate::isa::instruction::{DecodedInstruction, InstructionBits};
use crate::isa::matcher::{DecodeTableId, OpcodeMatcher, TableMatcher};
use crate::isa::reader::{PREFIXED_BYTES, WORD_BYTES, WordReader};

/// Instruction decoder bound to one target configuration.
///
/// The decoder holds no mutable state; a shared reference can decode from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct Decoder<M = TableMatcher> {
    reader: WordReader,
    features: FeatureSet,
    matcher: M,
}

impl Decoder<TableMatcher> {
    /// Creates a decoder backed by the built-in decode tables.
    pub const fn new(config: &DecoderConfig) -> Self {
        Self::with_matcher(config, TableMatcher)
    }
}

impl Default for Decoder<TableMatcher> {
    fn default() -> Self {
        Self::new(&DecoderConfig::default())
    }
}

impl<M> Decoder<M> {
    /// Creates a decoder that consults `matcher` instead of the built-in tables.
    pub const fn with_matcher(config: &DecoderConfig, matcher: M) -> Self {
        Self {
            reader: WordReader::new(config.endianness),
            features: config.features,
            matcher,
        }
    }

    /// Byte order of instruction words.
    pub const fn endianness(&self) -> Endianness {
        self.reader.endianness()
    }

    /// Target features fixed at construction.
    pub const fn features(&self) -> FeatureSet {
        self.features
    }

    /// The matcher consulted for every table lookup.
    pub const fn matcher(&self) -> &M {
        &self.matcher
    }
}

impl<M: OpcodeMatcher> Decoder<M> {
    /// Decodes the instruction at the start of `bytes`, located at `address`.
    ///
    /// # Errors
    ///
    /// See [`dispatch`].
    pub fn decode(&self, bytes: &[u8], address: u64) -> Result<DecodedInstruction, DecodeError> {
        dispatch(&self.matcher, &self.reader, self.features, bytes, address)
    }

    /// Iterates over the instructions of `bytes`, the first one at `address`.
    pub const fn instructions<'a>(&'a self, bytes: &'a [u8], address: u64) -> Instructions<'a, M> {
        Instructions::new(self, bytes, address)
    }
}

/// Decodes one instruction from `bytes` following the table priority rules.
///
/// # Errors
///
/// - `TruncatedInput` when fewer than four bytes are supplied.
/// - `NoMatch` when the last table tried has no template for the word.
/// - `ReservedField` when the last table tried rejected a malformed field.
/// - `InternalTable` as soon as any table hands a decoder an impossible value.
pub fn dispatch<M: OpcodeMatcher + ?Sized>(
    matcher: &M,
    reader: &WordReader,
    features: FeatureSet,
    bytes: &[u8],
    address: u64,
) -> Result<DecodedInstruction, DecodeError> {
    if features.contains(Feature::PrefixInstrs)
        && bytes.len() >= PREFIXED_BYTES
        && reader.read_u32(bytes, 0).is_prefix()
    {
        let word = reader.read_prefixed(bytes);
        if let Some(result) = attempt(matcher, DecodeTableId::Prefixed64, word, address) {
            return result;
        }
    }

    if bytes.len() < WORD_BYTES {
        trace!(available = bytes.len(), address, "truncated input");
        return Err(DecodeError::TruncatedInput {
            available: bytes.len(),
        });
    }

    let word = u64::from(reader.read_u32(bytes, 0));

    if features.contains(Feature::Spe) {
        if let Some(result) = attempt(matcher, DecodeTableId::Extension32, word, address) {
            return result;
        }
    }

    decode_in_table(matcher, DecodeTableId::Standard32, word, address)
}

/// Tries a table that is allowed to fall through.
///
/// Returns `None` when the next table should be consulted.
fn attempt<M: OpcodeMatcher + ?Sized>(
    matcher: &M,
    table: DecodeTableId,
    word: u64,
    address: u64,
) -> Option<Result<DecodedInstruction, DecodeError>> {
    match decode_in_table(matcher, table, word, address) {
        Ok(inst) => Some(Ok(inst)),
        Err(err @ DecodeError::InternalTable { .. }) => Some(Err(err)),
        Err(err) => {
            trace!(?table, word, address, %err, "falling through");
            None
        }
    }
}

/// Looks `word` up in one table and synthesises its operands.
fn decode_in_table<M: OpcodeMatcher + ?Sized>(
    matcher: &M,
    table: DecodeTableId,
    word: u64,
    address: u64,
) -> Result<DecodedInstruction, DecodeError> {
    let size = table.size();
    trace!(?table, word, address, "table lookup");

    let Some(matched) = matcher.match_word(table, word) else {
        return Err(DecodeError::NoMatch { word, size });
    };

    match matched.synthesize() {
        Ok(operands) => Ok(DecodedInstruction {
            address,
            opcode: matched.opcode,
            operands,
            size,
        }),
        Err(source) => {
            let err = DecodeError::from_field(matched.opcode, size, source);
            if source.is_internal() {
                error!(?table, word, address, %err, "decode table invariant violated");
            } else {
                debug!(?table, word, address, %err, "template rejected");
            }
            Err(err)
        }
    }
}
