//! Instruction Presentation.
//!
//! Renders decoded instructions in assembler syntax and walks byte streams.
//!
//! # Usage
//!
//! ```
//! use ppcdis_core::{Decoder, DecoderConfig, Target};
//!
//! let decoder = Decoder::new(&DecoderConfig::for_target(Target::Ppc32));
//! // bl .+8, then a stray half word
//! let bytes = [0x48, 0x00, 0x00, 0x09, 0x00, 0x00];
//! let mut stream = decoder.instructions(&bytes, 0x100);
//! let call = stream.next().unwrap().unwrap();
//! assert_eq!(call.branch_target(), Some(0x108));
//! assert!(stream.next().unwrap().is_err());
//! assert!(stream.next().is_none());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::common::error::DecodeError;
use crate::isa::decode::Decoder;
use crate::isa::instruction::{DecodedInstruction, Operand};
use crate::isa::matcher::OpcodeMatcher;
use crate::isa::opcode::Opcode;
use crate::isa::reader::WORD_BYTES;

/// Branch displacements count words.
const BRANCH_SCALE: i64 = 4;

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(reg) => write!(f, "{reg}"),
            Self::Immediate(imm) => write!(f, "{imm}"),
        }
    }
}

/// Trailing `R` flag printed after the operands of PC-relative forms.
const PC_RELATIVE_SUFFIX: &str = ", 1";

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.opcode.mnemonic())?;
        for (i, operand) in self.operands.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{operand}")?;
        }
        if self.opcode.is_pc_relative() {
            f.write_str(PC_RELATIVE_SUFFIX)?;
        }
        Ok(())
    }
}

impl DecodedInstruction {
    /// Absolute target of a relative branch (`b`, `bl`, `bc`, `bcl`).
    pub fn branch_target(&self) -> Option<u64> {
        match self.opcode {
            Opcode::B | Opcode::Bl | Opcode::Bc | Opcode::Bcl => {
                let words = self.operands.last()?.immediate()?;
                Some(self.address.wrapping_add_signed(words.wrapping_mul(BRANCH_SCALE)))
            }
            _ => None,
        }
    }

    /// Effective address of a PC-relative prefixed instruction.
    pub fn pc_relative_target(&self) -> Option<u64> {
        if !self.opcode.is_pc_relative() {
            return None;
        }
        // paddi puts its constant last; loads and stores keep the
        // displacement right after the target register.
        let slot = if self.opcode == Opcode::PaddiPc { 2 } else { 1 };
        let disp = self.operands.get(slot)?.immediate()?;
        Some(self.address.wrapping_add_signed(disp))
    }
}

/// Disassembles the instruction at the start of `bytes` into a string.
///
/// Returns `"unknown"` when the bytes do not decode.
pub fn disassemble<M: OpcodeMatcher>(decoder: &Decoder<M>, bytes: &[u8], address: u64) -> String {
    decoder
        .decode(bytes, address)
        .map_or_else(|_| String::from("unknown"), |inst| inst.to_string())
}

/// Iterator over the instructions of a byte buffer.
///
/// A successful decode advances by its size. A failure is yielded and the
/// walk resumes one word later, except for truncated input, which ends it.
#[derive(Debug, Clone)]
pub struct Instructions<'a, M> {
    decoder: &'a Decoder<M>,
    bytes: &'a [u8],
    address: u64,
    finished: bool,
}

impl<'a, M> Instructions<'a, M> {
    pub(crate) const fn new(decoder: &'a Decoder<M>, bytes: &'a [u8], address: u64) -> Self {
        Self {
            decoder,
            bytes,
            address,
            finished: false,
        }
    }

    /// Address of the next instruction.
    pub const fn address(&self) -> u64 {
        self.address
    }

    /// Bytes not yet decoded.
    pub const fn remaining(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<M: OpcodeMatcher> Iterator for Instructions<'_, M> {
    type Item = Result<DecodedInstruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.bytes.is_empty() {
            return None;
        }

        let result = self.decoder.decode(self.bytes, self.address);
        let step = match &result {
            Ok(inst) => inst.size,
            Err(DecodeError::TruncatedInput { .. }) => {
                self.finished = true;
                0
            }
            Err(_) => WORD_BYTES,
        };

        self.bytes = self.bytes.get(step..).unwrap_or_default();
        self.address = self.address.wrapping_add(step as u64);
        Some(result)
    }
}

impl<M: OpcodeMatcher> FusedIterator for Instructions<'_, M> {}
