//! Pattern/mask instruction matcher.
//!
//! Each decode table is plain data: an ordered list of templates, each with a
//! `mask` of fixed bits, the `pattern` those bits must equal, and the operand
//! fields to extract. One generic routine walks a table and returns the first
//! template whose fixed bits match; tables list more specific encodings first.
//!
//! The dispatcher only sees the `OpcodeMatcher` trait, so tests can swap the
//! table walker for a double.

use crate::common::error::FieldError;
use crate::isa::base::table::STANDARD32;
use crate::isa::instruction::{Operand, low_mask};
use crate::isa::opcode::Opcode;
use crate::isa::operands::{FieldDecoder, OperandBuilder};
use crate::isa::prefixed::table::PREFIXED64;
use crate::isa::reader::{PREFIXED_BYTES, WORD_BYTES};
use crate::isa::spe::table::EXTENSION32;

/// Identifies one of the decode tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeTableId {
    /// Standard 32-bit instructions.
    Standard32,
    /// 8-byte prefixed instructions, matched against `base | prefix << 32`.
    Prefixed64,
    /// Signal Processing Engine instructions.
    Extension32,
}

impl DecodeTableId {
    /// Width in bytes of the encodings in this table.
    pub const fn size(self) -> usize {
        match self {
            Self::Standard32 | Self::Extension32 => WORD_BYTES,
            Self::Prefixed64 => PREFIXED_BYTES,
        }
    }
}

/// A contiguous run of bits inside an encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Position of the least significant bit (0 = LSB of the word).
    pub shift: u32,
    /// Number of bits.
    pub width: u32,
}

impl Fragment {
    /// Creates a fragment of `width` bits starting at bit `shift`.
    pub const fn new(shift: u32, width: u32) -> Self {
        Self { shift, width }
    }

    /// Extracts this fragment from `word`; bits above bit 63 read as zero.
    #[inline]
    pub const fn extract(self, word: u64) -> u64 {
        match word.checked_shr(self.shift) {
            Some(bits) => bits & low_mask(self.width),
            None => 0,
        }
    }
}

/// One operand field of a template: where its bits live and how to decode them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Fragments, most significant first; they are concatenated into one value.
    pub fragments: &'static [Fragment],
    /// Decoder applied to the concatenated value.
    pub decoder: FieldDecoder,
}

impl FieldSpec {
    /// Creates a field spec.
    pub const fn new(fragments: &'static [Fragment], decoder: FieldDecoder) -> Self {
        Self { fragments, decoder }
    }

    /// Total width of the field in bits.
    pub fn width(&self) -> u32 {
        self.fragments.iter().map(|f| f.width).sum()
    }

    /// Extracts and concatenates the field's fragments from `word`.
    pub fn extract(&self, word: u64) -> u64 {
        self.fragments
            .iter()
            .fold(0, |acc, frag| {
                acc.checked_shl(frag.width).unwrap_or(0) | frag.extract(word)
            })
    }
}

/// One instruction encoding.
#[derive(Debug)]
pub struct Template {
    /// Opcode produced on a match.
    pub opcode: Opcode,
    /// Bits that are fixed by the encoding.
    pub mask: u64,
    /// Required value of the fixed bits.
    pub pattern: u64,
    /// Operand fields in operand order.
    pub fields: &'static [FieldSpec],
}

impl Template {
    /// Creates a template.
    pub const fn new(
        opcode: Opcode,
        mask: u64,
        pattern: u64,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            opcode,
            mask,
            pattern,
            fields,
        }
    }

    /// Returns true if the fixed bits of `word` match this template.
    #[inline]
    pub const fn matches(&self, word: u64) -> bool {
        word & self.mask == self.pattern
    }

    /// Extracts every field of `word` into a `MatchedTemplate`.
    pub fn capture(&self, word: u64) -> MatchedTemplate {
        MatchedTemplate {
            opcode: self.opcode,
            fields: self
                .fields
                .iter()
                .map(|spec| MatchedField {
                    decoder: spec.decoder,
                    raw: spec.extract(word),
                })
                .collect(),
        }
    }
}

/// An ordered decode table.
#[derive(Debug)]
pub struct DecodeTable {
    /// Which table this is.
    pub id: DecodeTableId,
    /// Templates, most specific first.
    pub templates: &'static [Template],
}

impl DecodeTable {
    /// Returns the first template matching `word`.
    pub fn lookup(&self, word: u64) -> Option<&Template> {
        self.templates.iter().find(|t| t.matches(word))
    }
}

/// A raw field value paired with the decoder that interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchedField {
    /// Decoder bound to the field slot.
    pub decoder: FieldDecoder,
    /// Raw, unsigned field value.
    pub raw: u64,
}

/// Result of a successful match: the opcode and its raw fields in operand order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedTemplate {
    /// Matched opcode.
    pub opcode: Opcode,
    /// Fields in operand order.
    pub fields: Vec<MatchedField>,
}

impl MatchedTemplate {
    /// Runs every field decoder in order and returns the operand list.
    ///
    /// # Errors
    ///
    /// Returns the first `FieldError` raised; the template is then rejected as a whole.
    pub fn synthesize(&self) -> Result<Vec<Operand>, FieldError> {
        let mut ops = OperandBuilder::new(self.opcode);
        for field in &self.fields {
            field.decoder.decode(&mut ops, field.raw)?;
        }
        Ok(ops.into_operands())
    }
}

/// Maps a raw encoding to an instruction template.
pub trait OpcodeMatcher {
    /// Looks `word` up in `table`.
    ///
    /// For `Prefixed64`, `word` is the `base | prefix << 32` composite; for the
    /// 32-bit tables only the low 32 bits are set.
    fn match_word(&self, table: DecodeTableId, word: u64) -> Option<MatchedTemplate>;
}

/// Matcher backed by the built-in decode tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableMatcher;

impl TableMatcher {
    /// Returns the built-in table for `id`.
    pub const fn table(id: DecodeTableId) -> &'static DecodeTable {
        match id {
            DecodeTableId::Standard32 => &STANDARD32,
            DecodeTableId::Prefixed64 => &PREFIXED64,
            DecodeTableId::Extension32 => &EXTENSION32,
        }
    }
}

impl OpcodeMatcher for TableMatcher {
    fn match_word(&self, table: DecodeTableId, word: u64) -> Option<MatchedTemplate> {
        Self::table(table).lookup(word).map(|t| t.capture(word))
    }
}
