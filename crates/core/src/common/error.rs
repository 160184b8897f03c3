//! Decode and configuration error definitions.
//!
//! This module defines the failure taxonomy of the decoder. It provides:
//! 1. **Field Errors:** Failures raised by a single operand field decoder.
//! 2. **Decode Errors:** The outcome reported to callers of `Decoder::decode`.
//! 3. **Configuration Errors:** Failures while loading a `DecoderConfig`.

use thiserror::Error;

use crate::isa::opcode::Opcode;

/// Failure raised while turning one raw field value into operands.
///
/// `ReservedNonZero` and `InvalidCrMask` are caused by the instruction bytes
/// themselves. `RegisterIndex` and `ImmediateWidth` mean the decode table
/// handed a field decoder a value its template can never produce.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// A must-be-zero subfield held a nonzero value.
    #[error("reserved field must be zero, found {value:#x}")]
    ReservedNonZero {
        /// The offending raw value.
        value: u64,
    },

    /// A condition register field mask did not have exactly one of its low 8 bits set.
    #[error("condition register field mask {mask:#x} is not one-hot")]
    InvalidCrMask {
        /// The offending raw mask.
        mask: u64,
    },

    /// A register index was outside the bounds of its register class.
    #[error("register index {index} out of range for class {class}")]
    RegisterIndex {
        /// Register class name.
        class: &'static str,
        /// The out-of-range index.
        index: u64,
    },

    /// A raw immediate did not fit the declared field width.
    #[error("value {value:#x} does not fit in {bits} bits")]
    ImmediateWidth {
        /// Declared field width.
        bits: u32,
        /// The raw value.
        value: u64,
    },
}

impl FieldError {
    /// Returns true for errors that indicate an inconsistent decode table
    /// rather than a malformed instruction.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::RegisterIndex { .. } | Self::ImmediateWidth { .. })
    }
}

/// Failure reported by the instruction dispatcher.
///
/// Every variant knows how many bytes the attempt covered, see
/// [`DecodeError::consumed_bytes`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer than four bytes were available.
    #[error("truncated input: {available} byte(s) available, at least 4 required")]
    TruncatedInput {
        /// Number of bytes the caller supplied.
        available: usize,
    },

    /// No applicable decode table recognised the word.
    #[error("no instruction matches {word:#x} ({size} bytes)")]
    NoMatch {
        /// The raw word (or 64-bit prefixed composite) that was tried last.
        word: u64,
        /// Width that was attempted.
        size: usize,
    },

    /// A template matched but one of its reserved or one-hot fields was malformed.
    #[error("malformed `{}` encoding: {source}", .opcode.mnemonic())]
    ReservedField {
        /// Opcode of the rejected template.
        opcode: Opcode,
        /// Width that was attempted.
        size: usize,
        /// The field-level failure.
        source: FieldError,
    },

    /// A decode table produced a field value its decoder cannot represent.
    #[error("inconsistent decode table for `{}`: {source}", .opcode.mnemonic())]
    InternalTable {
        /// Opcode of the offending template.
        opcode: Opcode,
        /// Width that was attempted.
        size: usize,
        /// The field-level failure.
        source: FieldError,
    },
}

impl DecodeError {
    /// Number of bytes the failed attempt covered.
    ///
    /// Zero for truncated input, otherwise the 4 or 8 bytes that were read.
    pub const fn consumed_bytes(&self) -> usize {
        match self {
            Self::TruncatedInput { .. } => 0,
            Self::NoMatch { size, .. }
            | Self::ReservedField { size, .. }
            | Self::InternalTable { size, .. } => *size,
        }
    }

    /// Builds the decode error for a field failure raised while decoding `opcode`.
    pub const fn from_field(opcode: Opcode, size: usize, source: FieldError) -> Self {
        if source.is_internal() {
            Self::InternalTable {
                opcode,
                size,
                source,
            }
        } else {
            Self::ReservedField {
                opcode,
                size,
                source,
            }
        }
    }
}

/// Failure while loading a decoder configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read decoder config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text was not valid JSON for `DecoderConfig`.
    #[error("failed to parse decoder config: {0}")]
    Parse(#[from] serde_json::Error),
}
