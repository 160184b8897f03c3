//! 8-byte prefixed encodings (ISA 3.1).
//!
//! A prefixed instruction is a prefix word (primary opcode 1) followed by a
//! base word. The matcher sees both as one composite, `base | prefix << 32`,
//! so prefix fields live in the high half and base fields keep the positions
//! they have in a standalone word.
//!
//! # Prefix layout (composite bit positions)
//!
//! | Bits  | Field                                     |
//! |-------|-------------------------------------------|
//! | 58-63 | primary opcode, always 1                  |
//! | 56-57 | type: `0b10` MLS, `0b00` 8LS              |
//! | 53-55 | subtype and reserved, zero                |
//! | 52    | R, PC-relative addressing                 |
//! | 50-51 | reserved, zero                            |
//! | 32-49 | `d0`, high 18 bits of the 34-bit immediate |

/// Prefixed decode table.
pub mod table;

use crate::isa::base::op;
use crate::isa::base::opcodes::OP_PREFIX;

/// Fixed prefix bits: primary opcode, type, subtype, R and the reserved bits.
pub const PREFIX_FIXED: u64 = 0xFFFC_0000_0000_0000;

/// Primary opcode 1 in the prefix word.
pub const PREFIX_OPCODE: u64 = op(OP_PREFIX) << 32;

/// Modified load/store (MLS) prefix type.
pub const TYPE_MLS: u64 = 0b10 << 56;

/// Eight-byte load/store (8LS) prefix type.
pub const TYPE_8LS: u64 = 0b00 << 56;

/// R bit: the displacement is relative to the instruction address.
pub const PCREL: u64 = 1 << 52;
