//! PowerPC extended opcodes.
//!
//! Extended opcodes select an instruction within a primary opcode. The field
//! position depends on the instruction form (X, XO, XL, A, DS, DQ, VX, XX3).

// XL-form, primary opcode 19.
/// Move condition register field.
pub const MCRF: u32 = 0;
/// Condition register XOR.
pub const CRXOR: u32 = 193;
/// Condition register AND.
pub const CRAND: u32 = 257;
/// Condition register OR.
pub const CROR: u32 = 449;

// X/XO-form, primary opcode 31.
/// Compare (word when L=0, doubleword when L=1).
pub const CMP: u32 = 0;
/// Move from one condition register field.
pub const MFOCRF: u32 = 19;
/// Load doubleword indexed.
pub const LDX: u32 = 21;
/// Load word and zero indexed.
pub const LWZX: u32 = 23;
/// AND.
pub const AND: u32 = 28;
/// Subtract from (XO-form, OE=0).
pub const SUBF: u32 = 40;
/// Move to one condition register field.
pub const MTOCRF: u32 = 144;
/// Add (XO-form, OE=0).
pub const ADD: u32 = 266;
/// OR.
pub const OR: u32 = 444;

// A-form, primary opcode 31.
/// Integer select.
pub const ISEL: u32 = 15;

// DS-form.
/// Load doubleword.
pub const LD: u32 = 0;
/// Load doubleword with update.
pub const LDU: u32 = 1;
/// Load word algebraic.
pub const LWA: u32 = 2;
/// Load VSX scalar doubleword (primary opcode 57).
pub const LXSD: u32 = 2;
/// Store doubleword.
pub const STD: u32 = 0;
/// Store doubleword with update.
pub const STDU: u32 = 1;

// DQ-form, primary opcode 61.
/// Load VSX vector.
pub const LXV: u32 = 1;
/// Store VSX vector.
pub const STXV: u32 = 5;

// VX-form, primary opcode 4.
/// Vector add unsigned byte modulo.
pub const VADDUBM: u32 = 0;
/// Vector add unsigned halfword modulo.
pub const VADDUHM: u32 = 64;
/// Vector add unsigned word modulo.
pub const VADDUWM: u32 = 128;
/// Vector add unsigned byte saturate (same bits as SPE `evaddw`).
pub const VADDUBS: u32 = 512;
/// Vector splat immediate signed byte.
pub const VSPLTISB: u32 = 780;
/// Vector logical AND.
pub const VAND: u32 = 1028;
/// Vector logical OR.
pub const VOR: u32 = 1156;

// XX3-form, primary opcode 60.
/// VSX scalar add single-precision.
pub const XSADDSP: u32 = 0;
/// VSX scalar add double-precision.
pub const XSADDDP: u32 = 32;
/// VSX logical AND.
pub const XXLAND: u32 = 130;
/// VSX logical OR.
pub const XXLOR: u32 = 146;

// Floating point, primary opcodes 59 and 63.
/// Floating add (A-form).
pub const FADD: u32 = 21;
/// Floating move register (X-form).
pub const FMR: u32 = 72;
