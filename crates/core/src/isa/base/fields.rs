//! Operand field layouts.
//!
//! Each constant pairs a bit layout with the decoder that interprets it.
//! Positions are LSB-based (bit 0 is the least significant bit of the word),
//! the reverse of ISA bit numbering. Prefixed templates reuse the base-word
//! layouts unchanged because the base word occupies the low 32 bits of the
//! composite.

use crate::common::reg::{
    CRBITRC, CRRC, F4RC, F8RC, G8RC, G8RC_NOX0, GPRC, GPRC_NOR0, PTR_RC, PTR_RC_NOR0, VFRC, VRRC,
    VSFRC, VSRC, VSSRC,
};
use crate::isa::matcher::{FieldSpec, Fragment};
use crate::isa::operands::FieldDecoder;

/// RT / RS / FRT / VRT / BO / BT (ISA bits 6-10).
const F_RT: &[Fragment] = &[Fragment::new(21, 5)];
/// RA / FRA / VRA / BI / BA (ISA bits 11-15).
const F_RA: &[Fragment] = &[Fragment::new(16, 5)];
/// RB / FRB / VRB / SH / BB (ISA bits 16-20).
const F_RB: &[Fragment] = &[Fragment::new(11, 5)];
/// MB / BC (ISA bits 21-25).
const F_MB: &[Fragment] = &[Fragment::new(6, 5)];
/// ME (ISA bits 26-30).
const F_ME: &[Fragment] = &[Fragment::new(1, 5)];
/// D / SI / UI (ISA bits 16-31).
const F_D: &[Fragment] = &[Fragment::new(0, 16)];
/// BF (ISA bits 6-8).
const F_BF: &[Fragment] = &[Fragment::new(23, 3)];
/// BFA (ISA bits 11-13).
const F_BFA: &[Fragment] = &[Fragment::new(18, 3)];
/// BD (ISA bits 16-29).
const F_BD: &[Fragment] = &[Fragment::new(2, 14)];
/// LI (ISA bits 6-29).
const F_LI: &[Fragment] = &[Fragment::new(2, 24)];
/// FXM (ISA bits 12-19).
const F_FXM: &[Fragment] = &[Fragment::new(12, 8)];
/// LEV (ISA bits 20-26).
const F_LEV: &[Fragment] = &[Fragment::new(5, 7)];
/// `RA:5 | D:16`.
const F_MEMRI: &[Fragment] = &[Fragment::new(16, 5), Fragment::new(0, 16)];
/// `RA:5 | DS:14`.
const F_MEMRIX: &[Fragment] = &[Fragment::new(16, 5), Fragment::new(2, 14)];
/// `RA:5 | DQ:12`.
const F_MEMRIX16: &[Fragment] = &[Fragment::new(16, 5), Fragment::new(4, 12)];
/// DQ-form `TX:1 | T:5`.
const F_XT_DQ: &[Fragment] = &[Fragment::new(3, 1), Fragment::new(21, 5)];
/// XX3-form `TX:1 | T:5`.
const F_XT: &[Fragment] = &[Fragment::new(0, 1), Fragment::new(21, 5)];
/// XX3-form `AX:1 | A:5`.
const F_XA: &[Fragment] = &[Fragment::new(2, 1), Fragment::new(16, 5)];
/// XX3-form `BX:1 | B:5`.
const F_XB: &[Fragment] = &[Fragment::new(1, 1), Fragment::new(11, 5)];

/// Target/source GPR.
pub const RT_GPRC: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&GPRC));
/// Target/source 64-bit GPR.
pub const RT_G8RC: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&G8RC));
/// Target/source single-precision FPR.
pub const RT_F4RC: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&F4RC));
/// Target/source double-precision FPR.
pub const RT_F8RC: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&F8RC));
/// Target vector register.
pub const RT_VRRC: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&VRRC));
/// Target vector register holding a scalar float.
pub const RT_VFRC: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&VFRC));

/// RA as a plain GPR.
pub const RA_GPRC: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&GPRC));
/// RA with `RA|0` semantics.
pub const RA_GPRC_NOR0: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&GPRC_NOR0));
/// RA as a 64-bit GPR.
pub const RA_G8RC: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&G8RC));
/// 64-bit RA with `RA|0` semantics.
pub const RA_G8RC_NOX0: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&G8RC_NOX0));
/// FRA, single precision.
pub const RA_F4RC: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&F4RC));
/// FRA, double precision.
pub const RA_F8RC: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&F8RC));
/// VRA.
pub const RA_VRRC: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&VRRC));
/// Pointer-like base register of an indexed access (`RA|0`).
pub const RA_PTR_NOR0: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(PTR_RC_NOR0));

/// RB as a plain GPR.
pub const RB_GPRC: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(&GPRC));
/// RB as a 64-bit GPR.
pub const RB_G8RC: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(&G8RC));
/// FRB, single precision.
pub const RB_F4RC: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(&F4RC));
/// FRB, double precision.
pub const RB_F8RC: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(&F8RC));
/// VRB.
pub const RB_VRRC: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(&VRRC));
/// Pointer-like index register of an indexed access.
pub const RB_PTR: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(PTR_RC));

/// Signed 16-bit immediate.
pub const SI16: FieldSpec = FieldSpec::new(F_D, FieldDecoder::SignedImm(16));
/// Unsigned 16-bit immediate.
pub const UI16: FieldSpec = FieldSpec::new(F_D, FieldDecoder::UnsignedImm(16));
/// Signed 5-bit immediate in the VRA slot (vector splats).
pub const SIMM5: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::SignedImm(5));

/// Target CR field.
pub const BF_CRRC: FieldSpec = FieldSpec::new(F_BF, FieldDecoder::Register(&CRRC));
/// Source CR field.
pub const BFA_CRRC: FieldSpec = FieldSpec::new(F_BFA, FieldDecoder::Register(&CRRC));

/// Branch options.
pub const BO: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::UnsignedImm(5));
/// Branch condition bit.
pub const BI_CRBIT: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&CRBITRC));
/// Conditional branch displacement.
pub const BD: FieldSpec = FieldSpec::new(F_BD, FieldDecoder::CondBrTarget);
/// Unconditional branch displacement.
pub const LI: FieldSpec = FieldSpec::new(F_LI, FieldDecoder::DirectBrTarget);

/// CR logic target bit.
pub const BT_CRBIT: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&CRBITRC));
/// CR logic first source bit.
pub const BA_CRBIT: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&CRBITRC));
/// CR logic second source bit.
pub const BB_CRBIT: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(&CRBITRC));
/// `isel` condition bit.
pub const BC_CRBIT: FieldSpec = FieldSpec::new(F_MB, FieldDecoder::Register(&CRBITRC));

/// Rotate shift amount.
pub const SH: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::UnsignedImm(5));
/// Mask begin.
pub const MB: FieldSpec = FieldSpec::new(F_MB, FieldDecoder::UnsignedImm(5));
/// Mask end.
pub const ME: FieldSpec = FieldSpec::new(F_ME, FieldDecoder::UnsignedImm(5));

/// One-hot CR field mask.
pub const FXM: FieldSpec = FieldSpec::new(F_FXM, FieldDecoder::CrBitMask);
/// System call level.
pub const LEV: FieldSpec = FieldSpec::new(F_LEV, FieldDecoder::UnsignedImm(7));

/// D-form memory operand.
pub const MEMRI: FieldSpec = FieldSpec::new(F_MEMRI, FieldDecoder::MemRi);
/// DS-form memory operand.
pub const MEMRIX: FieldSpec = FieldSpec::new(F_MEMRIX, FieldDecoder::MemRix);
/// DQ-form memory operand.
pub const MEMRIX16: FieldSpec = FieldSpec::new(F_MEMRIX16, FieldDecoder::MemRix16);

/// DQ-form VSX target/source.
pub const XT_DQ: FieldSpec = FieldSpec::new(F_XT_DQ, FieldDecoder::Register(&VSRC));
/// XX3-form VSX target.
pub const XT_VSRC: FieldSpec = FieldSpec::new(F_XT, FieldDecoder::Register(&VSRC));
/// XX3-form VSX first source.
pub const XA_VSRC: FieldSpec = FieldSpec::new(F_XA, FieldDecoder::Register(&VSRC));
/// XX3-form VSX second source.
pub const XB_VSRC: FieldSpec = FieldSpec::new(F_XB, FieldDecoder::Register(&VSRC));
/// XX3-form VSX scalar double target.
pub const XT_VSFRC: FieldSpec = FieldSpec::new(F_XT, FieldDecoder::Register(&VSFRC));
/// XX3-form VSX scalar double first source.
pub const XA_VSFRC: FieldSpec = FieldSpec::new(F_XA, FieldDecoder::Register(&VSFRC));
/// XX3-form VSX scalar double second source.
pub const XB_VSFRC: FieldSpec = FieldSpec::new(F_XB, FieldDecoder::Register(&VSFRC));
/// XX3-form VSX scalar single target.
pub const XT_VSSRC: FieldSpec = FieldSpec::new(F_XT, FieldDecoder::Register(&VSSRC));
/// XX3-form VSX scalar single first source.
pub const XA_VSSRC: FieldSpec = FieldSpec::new(F_XA, FieldDecoder::Register(&VSSRC));
/// XX3-form VSX scalar single second source.
pub const XB_VSSRC: FieldSpec = FieldSpec::new(F_XB, FieldDecoder::Register(&VSSRC));
