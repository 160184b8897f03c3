//! PowerPC primary opcodes.
//!
//! Defines the primary opcode (bits 0-5 in ISA numbering, the top six bits of
//! the word) for each instruction group in the standard table.

/// Prefix word of an 8-byte prefixed instruction.
pub const OP_PREFIX: u32 = 1;

/// AltiVec VX-form instructions (shared with SPE).
pub const OP_VECTOR: u32 = 4;

/// Multiply low immediate (MULLI).
pub const OP_MULLI: u32 = 7;

/// Compare logical immediate (CMPLWI, CMPLDI).
pub const OP_CMPLI: u32 = 10;

/// Compare immediate (CMPWI, CMPDI).
pub const OP_CMPI: u32 = 11;

/// Add immediate (ADDI); also the base word of PADDI.
pub const OP_ADDI: u32 = 14;

/// Add immediate shifted (ADDIS).
pub const OP_ADDIS: u32 = 15;

/// Conditional branch (BC, BCL).
pub const OP_BC: u32 = 16;

/// System call (SC).
pub const OP_SC: u32 = 17;

/// Unconditional branch (B, BL).
pub const OP_B: u32 = 18;

/// XL-form condition register operations (MCRF, CRAND, ...).
pub const OP_CR: u32 = 19;

/// Rotate left word immediate then AND with mask (RLWINM).
pub const OP_RLWINM: u32 = 21;

/// OR immediate (ORI).
pub const OP_ORI: u32 = 24;

/// OR immediate shifted (ORIS).
pub const OP_ORIS: u32 = 25;

/// AND immediate, recording (ANDI.).
pub const OP_ANDI_DOT: u32 = 28;

/// X/XO/A-form integer instructions.
pub const OP_X: u32 = 31;

/// Load word and zero.
pub const OP_LWZ: u32 = 32;
/// Load word and zero with update.
pub const OP_LWZU: u32 = 33;
/// Load byte and zero.
pub const OP_LBZ: u32 = 34;
/// Load byte and zero with update.
pub const OP_LBZU: u32 = 35;
/// Store word.
pub const OP_STW: u32 = 36;
/// Store word with update.
pub const OP_STWU: u32 = 37;
/// Store byte.
pub const OP_STB: u32 = 38;
/// Store byte with update.
pub const OP_STBU: u32 = 39;
/// Load halfword and zero.
pub const OP_LHZ: u32 = 40;
/// Load halfword and zero with update; base word of PLWA.
pub const OP_LHZU: u32 = 41;
/// Load halfword algebraic.
pub const OP_LHA: u32 = 42;
/// Load halfword algebraic with update.
pub const OP_LHAU: u32 = 43;
/// Store halfword.
pub const OP_STH: u32 = 44;
/// Store halfword with update.
pub const OP_STHU: u32 = 45;
/// Load floating-point single.
pub const OP_LFS: u32 = 48;
/// Load floating-point single with update.
pub const OP_LFSU: u32 = 49;
/// Load floating-point double.
pub const OP_LFD: u32 = 50;
/// Load floating-point double with update.
pub const OP_LFDU: u32 = 51;
/// Store floating-point single.
pub const OP_STFS: u32 = 52;
/// Store floating-point single with update.
pub const OP_STFSU: u32 = 53;
/// Store floating-point double.
pub const OP_STFD: u32 = 54;
/// Store floating-point double with update.
pub const OP_STFDU: u32 = 55;

/// DS-form VSX scalar loads (LXSD); base word of PLD.
pub const OP_DS_VSX_LOAD: u32 = 57;

/// DS-form loads (LD, LDU, LWA).
pub const OP_DS_LOAD: u32 = 58;

/// Single-precision A-form floating point (FADDS).
pub const OP_FP_SINGLE: u32 = 59;

/// VSX XX-form instructions.
pub const OP_VSX: u32 = 60;

/// DQ-form vector loads/stores (LXV, STXV); base word of PSTD.
pub const OP_DQ: u32 = 61;

/// DS-form stores (STD, STDU).
pub const OP_DS_STORE: u32 = 62;

/// Double-precision floating point (FADD, FMR).
pub const OP_FP_DOUBLE: u32 = 63;
