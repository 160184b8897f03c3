//! Instruction Set Architecture (ISA) decoding.
//!
//! Contains the word reader, the data-driven opcode matcher and its tables,
//! operand synthesis and the top-level dispatcher, organised by encoding space.
//!
//! # Encoding spaces
//!
//! * `base`: Standard 32-bit instructions.
//! * `spe`: Signal Processing Engine encodings (alternate opcode-4 space).
//! * `prefixed`: 8-byte prefixed instructions (prefix word + base word).

/// Standard 32-bit encoding space (opcode constants and decode table).
pub mod base;

/// Top-level dispatcher: table priority and length checks.
pub mod decode;

/// `Display` formatting, branch targets and stream iteration.
pub mod disasm;

/// Decoded instruction and operand types, plus bit helpers.
pub mod instruction;

/// Pattern/mask matcher and decode table structures.
pub mod matcher;

/// Opcode identities and update-form classification.
pub mod opcode;

/// Operand field decoders.
pub mod operands;

/// 8-byte prefixed encoding space.
pub mod prefixed;

/// Endianness-aware instruction word reader.
pub mod reader;

/// Signal Processing Engine encoding space.
pub mod spe;
