//! Standard 32-bit PowerPC encodings.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 0-5 in ISA numbering).
//! - `xo`: Extended opcodes distinguishing instructions within a primary opcode.
//! - `fields`: Operand field layouts shared with the prefixed table.
//! - `table`: The `Standard32` decode table.

/// Operand field layouts and their decoders.
pub mod fields;

/// Primary opcode constants.
pub mod opcodes;

/// Standard 32-bit decode table.
pub mod table;

/// Extended opcode constants.
pub mod xo;

/// Mask of the primary opcode in a 32-bit word.
pub const PRIMARY: u64 = 0xFC00_0000;

/// Record bit (Rc), bit 31 in ISA numbering.
pub const RC: u64 = 1;

/// X-form extended opcode mask (bits 21-30).
pub const XO_X: u64 = 0x7FE;

/// VX-form extended opcode mask (bits 21-31).
pub const XO_VX: u64 = 0x7FF;

/// A-form extended opcode mask (bits 26-30).
pub const XO_A: u64 = 0x3E;

/// DS-form extended opcode mask (bits 30-31).
pub const XO_DS: u64 = 0x3;

/// DQ-form extended opcode mask (bits 29-31).
pub const XO_DQ: u64 = 0x7;

/// XX3-form extended opcode mask (bits 21-28).
pub const XO_XX3: u64 = 0x7F8;

/// Places a primary opcode in bits 0-5.
pub const fn op(primary: u32) -> u64 {
    (primary as u64) << 26
}

/// Places an X-form (or XO-form with OE=0) extended opcode.
pub const fn xo_x(xo: u32) -> u64 {
    (xo as u64) << 1
}

/// Places an A-form extended opcode.
pub const fn xo_a(xo: u32) -> u64 {
    (xo as u64) << 1
}

/// Places a DS-form or DQ-form extended opcode.
pub const fn xo_ds(xo: u32) -> u64 {
    xo as u64
}

/// Places a VX-form extended opcode.
pub const fn xo_vx(xo: u32) -> u64 {
    xo as u64
}

/// Places an XX3-form extended opcode.
pub const fn xo_xx3(xo: u32) -> u64 {
    (xo as u64) << 3
}
