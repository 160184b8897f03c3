//! Prefixed decode table.
//!
//! Every instruction appears twice: `R=0` with a base register, and `R=1`
//! where the base field is reserved and must be zero.

use super::{PCREL, PREFIX_FIXED, PREFIX_OPCODE, TYPE_8LS, TYPE_MLS};
use crate::isa::base::fields::{RA_GPRC_NOR0, RT_F4RC, RT_F8RC, RT_G8RC, RT_GPRC};
use crate::isa::base::opcodes::{
    OP_ADDI, OP_DQ, OP_DS_VSX_LOAD, OP_LBZ, OP_LFD, OP_LFS, OP_LHA, OP_LHZ, OP_LHZU, OP_LWZ,
    OP_STB, OP_STFD, OP_STFS, OP_STH, OP_STW,
};
use crate::isa::base::{PRIMARY, op};
use crate::isa::matcher::{DecodeTable, DecodeTableId, FieldSpec, Fragment, Template};
use crate::isa::opcode::Opcode;
use crate::isa::operands::FieldDecoder;

/// Prefix fixed bits plus the base word's primary opcode.
const MASK: u64 = PREFIX_FIXED | PRIMARY;

/// `plwa` shares its base primary opcode with `lhzu`.
const OP_PLWA: u32 = OP_LHZU;
/// `pld` shares its base primary opcode with `lxsd`.
const OP_PLD: u32 = OP_DS_VSX_LOAD;
/// `pstd` shares its base primary opcode with the DQ-form space.
const OP_PSTD: u32 = OP_DQ;

const F_RA: &[Fragment] = &[Fragment::new(16, 5)];
/// `d0:18 | d1:16`.
const F_SI34: &[Fragment] = &[Fragment::new(32, 18), Fragment::new(0, 16)];
/// `RA:5 | d0:18 | d1:16`.
const F_MEMRI34: &[Fragment] = &[
    Fragment::new(16, 5),
    Fragment::new(32, 18),
    Fragment::new(0, 16),
];

/// PC-relative `paddi` has no base; RA is reserved.
const RA_ZERO: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::ImmZero);
const SI34: FieldSpec = FieldSpec::new(F_SI34, FieldDecoder::SignedImm(34));
const MEMRI34: FieldSpec = FieldSpec::new(F_MEMRI34, FieldDecoder::MemRi34);
const MEMRI34_PCREL: FieldSpec = FieldSpec::new(F_MEMRI34, FieldDecoder::MemRi34PcRel);

const fn mls(opcode: Opcode, primary: u32, fields: &'static [FieldSpec]) -> Template {
    Template::new(opcode, MASK, PREFIX_OPCODE | TYPE_MLS | op(primary), fields)
}

const fn mls_pc(opcode: Opcode, primary: u32, fields: &'static [FieldSpec]) -> Template {
    Template::new(opcode, MASK, PREFIX_OPCODE | TYPE_MLS | PCREL | op(primary), fields)
}

const fn ls8(opcode: Opcode, primary: u32, fields: &'static [FieldSpec]) -> Template {
    Template::new(opcode, MASK, PREFIX_OPCODE | TYPE_8LS | op(primary), fields)
}

const fn ls8_pc(opcode: Opcode, primary: u32, fields: &'static [FieldSpec]) -> Template {
    Template::new(opcode, MASK, PREFIX_OPCODE | TYPE_8LS | PCREL | op(primary), fields)
}

/// Prefixed instructions, matched against the 64-bit composite.
pub static PREFIXED64: DecodeTable = DecodeTable {
    id: DecodeTableId::Prefixed64,
    templates: &[
        mls(Opcode::Paddi, OP_ADDI, &[RT_GPRC, RA_GPRC_NOR0, SI34]),
        mls_pc(Opcode::PaddiPc, OP_ADDI, &[RT_GPRC, RA_ZERO, SI34]),
        // MLS loads.
        mls(Opcode::Plbz, OP_LBZ, &[RT_GPRC, MEMRI34]),
        mls_pc(Opcode::PlbzPc, OP_LBZ, &[RT_GPRC, MEMRI34_PCREL]),
        mls(Opcode::Plhz, OP_LHZ, &[RT_GPRC, MEMRI34]),
        mls_pc(Opcode::PlhzPc, OP_LHZ, &[RT_GPRC, MEMRI34_PCREL]),
        mls(Opcode::Plha, OP_LHA, &[RT_GPRC, MEMRI34]),
        mls_pc(Opcode::PlhaPc, OP_LHA, &[RT_GPRC, MEMRI34_PCREL]),
        mls(Opcode::Plwz, OP_LWZ, &[RT_GPRC, MEMRI34]),
        mls_pc(Opcode::PlwzPc, OP_LWZ, &[RT_GPRC, MEMRI34_PCREL]),
        mls(Opcode::Plfs, OP_LFS, &[RT_F4RC, MEMRI34]),
        mls_pc(Opcode::PlfsPc, OP_LFS, &[RT_F4RC, MEMRI34_PCREL]),
        mls(Opcode::Plfd, OP_LFD, &[RT_F8RC, MEMRI34]),
        mls_pc(Opcode::PlfdPc, OP_LFD, &[RT_F8RC, MEMRI34_PCREL]),
        // MLS stores.
        mls(Opcode::Pstb, OP_STB, &[RT_GPRC, MEMRI34]),
        mls_pc(Opcode::PstbPc, OP_STB, &[RT_GPRC, MEMRI34_PCREL]),
        mls(Opcode::Psth, OP_STH, &[RT_GPRC, MEMRI34]),
        mls_pc(Opcode::PsthPc, OP_STH, &[RT_GPRC, MEMRI34_PCREL]),
        mls(Opcode::Pstw, OP_STW, &[RT_GPRC, MEMRI34]),
        mls_pc(Opcode::PstwPc, OP_STW, &[RT_GPRC, MEMRI34_PCREL]),
        mls(Opcode::Pstfs, OP_STFS, &[RT_F4RC, MEMRI34]),
        mls_pc(Opcode::PstfsPc, OP_STFS, &[RT_F4RC, MEMRI34_PCREL]),
        mls(Opcode::Pstfd, OP_STFD, &[RT_F8RC, MEMRI34]),
        mls_pc(Opcode::PstfdPc, OP_STFD, &[RT_F8RC, MEMRI34_PCREL]),
        // 8LS.
        ls8(Opcode::Plwa, OP_PLWA, &[RT_G8RC, MEMRI34]),
        ls8_pc(Opcode::PlwaPc, OP_PLWA, &[RT_G8RC, MEMRI34_PCREL]),
        ls8(Opcode::Pld, OP_PLD, &[RT_G8RC, MEMRI34]),
        ls8_pc(Opcode::PldPc, OP_PLD, &[RT_G8RC, MEMRI34_PCREL]),
        ls8(Opcode::Pstd, OP_PSTD, &[RT_G8RC, MEMRI34]),
        ls8_pc(Opcode::PstdPc, OP_PSTD, &[RT_G8RC, MEMRI34_PCREL]),
    ],
};
