//! PowerPC instruction decoder library.
//!
//! This crate turns raw instruction bytes into structured PowerPC instructions:
//! 1. **Reader:** Endianness-aware 4-byte reads and prefixed 8-byte composition.
//! 2. **Matcher:** Data-driven pattern/mask tables for the standard, SPE and prefixed encodings.
//! 3. **Operands:** Field decoders for registers, immediates, memory forms and CR bit masks.
//! 4. **Dispatch:** Table priority rules (prefixed, then SPE, then standard).
//! 5. **Configuration:** Endianness and target feature flags, loadable from JSON.
//!
//! ```
//! use ppcdis_core::{Decoder, DecoderConfig, Target};
//!
//! let decoder = Decoder::new(&DecoderConfig::for_target(Target::Ppc64));
//! // addi r3, r1, 16
//! let inst = decoder.decode(&[0x38, 0x61, 0x00, 0x10], 0x1000).unwrap();
//! assert_eq!(inst.to_string(), "addi r3, r1, 16");
//! ```

/// Common types (errors, register classes).
pub mod common;
/// Decoder configuration (endianness, feature flags, target presets).
pub mod config;
/// Instruction set (reader, matcher, tables, operand synthesis, dispatch).
pub mod isa;

/// Error returned when an instruction cannot be decoded.
pub use crate::common::error::DecodeError;
/// Decoder configuration; use `DecoderConfig::for_target` or deserialize from JSON.
pub use crate::config::{DecoderConfig, Endianness, Feature, FeatureSet, Target};
/// Main decoder type; owns the matcher and the per-target configuration.
pub use crate::isa::decode::Decoder;
/// Decoded instruction and its operands.
pub use crate::isa::instruction::{DecodedInstruction, Operand};
/// Opcode identities.
pub use crate::isa::opcode::Opcode;
