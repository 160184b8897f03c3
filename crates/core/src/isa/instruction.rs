//! Decoded instruction structures and bit extraction utilities.
//!
//! Provides the output types of the decoder together with the small set of
//! bit helpers shared by the matcher and the operand decoders.

use crate::common::reg::Register;
use crate::isa::base::opcodes::OP_PREFIX;
use crate::isa::opcode::Opcode;

/// Bit shift of the primary opcode field (bits 0-5 in ISA numbering).
pub const PRIMARY_SHIFT: u32 = 26;
/// Bit mask of the primary opcode field after shifting.
pub const PRIMARY_MASK: u32 = 0x3F;

/// Trait for reading fixed fields out of a raw 32-bit instruction word.
pub trait InstructionBits {
    /// Extracts the 6-bit primary opcode.
    fn primary_opcode(&self) -> u32;

    /// Returns true if the word carries the prefix primary opcode.
    fn is_prefix(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn primary_opcode(&self) -> u32 {
        (self >> PRIMARY_SHIFT) & PRIMARY_MASK
    }

    #[inline(always)]
    fn is_prefix(&self) -> bool {
        self.primary_opcode() == OP_PREFIX
    }
}

/// Returns a mask with the low `bits` bits set.
#[inline]
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Returns true if `value` is representable as an unsigned `bits`-bit field.
#[inline]
pub const fn fits_unsigned(value: u64, bits: u32) -> bool {
    value & !low_mask(bits) == 0
}

/// Largest field width the decoders accept.
pub const MAX_FIELD_BITS: u32 = u64::BITS;

/// Sign extends the low `bits` bits of `value` to a 64-bit signed integer.
///
/// Higher bits of `value` are ignored. A zero width yields 0 and widths of
/// 64 or more return `value` reinterpreted unchanged.
#[inline]
pub const fn sign_extend(value: u64, bits: u32) -> i64 {
    if bits == 0 {
        return 0;
    }
    if bits >= MAX_FIELD_BITS {
        return value as i64;
    }
    let shift = MAX_FIELD_BITS - bits;
    ((value << shift) as i64) >> shift
}

/// One operand of a decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A register operand.
    Register(Register),
    /// A signed immediate (displacements, branch offsets, masks, constants).
    Immediate(i64),
}

impl Operand {
    /// Returns the register if this operand is one.
    pub const fn register(&self) -> Option<Register> {
        match self {
            Self::Register(reg) => Some(*reg),
            Self::Immediate(_) => None,
        }
    }

    /// Returns the immediate value if this operand is one.
    pub const fn immediate(&self) -> Option<i64> {
        match self {
            Self::Immediate(imm) => Some(*imm),
            Self::Register(_) => None,
        }
    }
}

/// A fully decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Address the instruction was decoded at.
    pub address: u64,
    /// Opcode identity.
    pub opcode: Opcode,
    /// Operands in the instruction's defined order, tied operands included.
    pub operands: Vec<Operand>,
    /// Number of bytes consumed (4 or 8).
    pub size: usize,
}
