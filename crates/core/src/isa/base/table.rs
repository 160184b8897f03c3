//! Standard 32-bit decode table.
//!
//! Templates are grouped by primary opcode. Within a group, entries whose mask
//! is a superset of another entry's come first.

use super::fields::{
    BA_CRBIT, BB_CRBIT, BC_CRBIT, BD, BF_CRRC, BFA_CRRC, BI_CRBIT, BO, BT_CRBIT, FXM, LEV, LI,
    MB, ME, MEMRI, MEMRIX, MEMRIX16, RA_F4RC, RA_F8RC, RA_G8RC, RA_G8RC_NOX0, RA_GPRC,
    RA_GPRC_NOR0, RA_PTR_NOR0, RA_VRRC, RB_F4RC, RB_F8RC, RB_G8RC, RB_GPRC, RB_PTR, RB_VRRC,
    RT_F4RC, RT_F8RC, RT_G8RC, RT_GPRC, RT_VFRC, RT_VRRC, SH, SI16, SIMM5, UI16, XA_VSFRC,
    XA_VSRC, XA_VSSRC, XB_VSFRC, XB_VSRC, XB_VSSRC, XT_DQ, XT_VSFRC, XT_VSRC, XT_VSSRC,
};
use super::opcodes::{
    OP_ADDI, OP_ADDIS, OP_ANDI_DOT, OP_B, OP_BC, OP_CMPI, OP_CMPLI, OP_CR, OP_DQ, OP_DS_LOAD,
    OP_DS_STORE, OP_DS_VSX_LOAD, OP_FP_DOUBLE, OP_FP_SINGLE, OP_LBZ, OP_LBZU, OP_LFD, OP_LFDU,
    OP_LFS, OP_LFSU, OP_LHA, OP_LHAU, OP_LHZ, OP_LHZU, OP_LWZ, OP_LWZU, OP_MULLI, OP_ORI,
    OP_ORIS, OP_RLWINM, OP_SC, OP_STB, OP_STBU, OP_STFD, OP_STFDU, OP_STFS, OP_STFSU, OP_STH,
    OP_STHU, OP_STW, OP_STWU, OP_VECTOR, OP_VSX, OP_X,
};
use super::{
    PRIMARY, RC, XO_A, XO_DQ, XO_DS, XO_VX, XO_X, XO_XX3, op, xo, xo_a, xo_ds, xo_vx, xo_x, xo_xx3,
};
use crate::isa::matcher::{DecodeTable, DecodeTableId, Template};
use crate::isa::opcode::Opcode;

/// Compare L bit (ISA bit 10) plus the reserved bit before it.
const CMP_L: u64 = 0x0060_0000;
/// Selects the 64-bit compare.
const CMP_L64: u64 = 0x0020_0000;
/// AA and LK bits of branch instructions.
const AA_LK: u64 = 0x3;
/// LK bit.
const LK: u64 = 0x1;
/// `mfocrf`/`mtocrf` single-field selector (ISA bit 11).
const ONE_FIELD: u64 = 0x0010_0000;
/// FRC slot of A-form floating adds.
const FRC: u64 = 0x0000_07C0;
/// RA slot.
const RA_SLOT: u64 = 0x001F_0000;
/// RB slot.
const RB_SLOT: u64 = 0x0000_F800;
/// `sc`: every bit but LEV is fixed.
const SC_MASK: u64 = 0xFFFF_F01F;
/// `sc` with bit 30 set.
const SC_PATTERN: u64 = op(OP_SC) | 0x2;

const D_FORM: u64 = PRIMARY;
const X_FORM: u64 = PRIMARY | XO_X | RC;
const A_FORM: u64 = PRIMARY | XO_A | RC;
const VX_FORM: u64 = PRIMARY | XO_VX;
const XX3_FORM: u64 = PRIMARY | XO_XX3;

/// Standard 32-bit instructions.
pub static STANDARD32: DecodeTable = DecodeTable {
    id: DecodeTableId::Standard32,
    templates: &[
        // Integer immediates.
        Template::new(Opcode::Addi, D_FORM, op(OP_ADDI), &[RT_GPRC, RA_GPRC_NOR0, SI16]),
        Template::new(Opcode::Addis, D_FORM, op(OP_ADDIS), &[RT_GPRC, RA_GPRC_NOR0, SI16]),
        Template::new(Opcode::Mulli, D_FORM, op(OP_MULLI), &[RT_GPRC, RA_GPRC, SI16]),
        Template::new(Opcode::Cmpwi, D_FORM | CMP_L, op(OP_CMPI), &[BF_CRRC, RA_GPRC, SI16]),
        Template::new(
            Opcode::Cmpdi,
            D_FORM | CMP_L,
            op(OP_CMPI) | CMP_L64,
            &[BF_CRRC, RA_G8RC, SI16],
        ),
        Template::new(Opcode::Cmplwi, D_FORM | CMP_L, op(OP_CMPLI), &[BF_CRRC, RA_GPRC, UI16]),
        Template::new(
            Opcode::Cmpldi,
            D_FORM | CMP_L,
            op(OP_CMPLI) | CMP_L64,
            &[BF_CRRC, RA_G8RC, UI16],
        ),
        Template::new(Opcode::Ori, D_FORM, op(OP_ORI), &[RA_GPRC, RT_GPRC, UI16]),
        Template::new(Opcode::Oris, D_FORM, op(OP_ORIS), &[RA_GPRC, RT_GPRC, UI16]),
        Template::new(Opcode::AndiDot, D_FORM, op(OP_ANDI_DOT), &[RA_GPRC, RT_GPRC, UI16]),
        // Branches.
        Template::new(Opcode::B, PRIMARY | AA_LK, op(OP_B), &[LI]),
        Template::new(Opcode::Bl, PRIMARY | AA_LK, op(OP_B) | LK, &[LI]),
        Template::new(Opcode::Bc, PRIMARY | AA_LK, op(OP_BC), &[BO, BI_CRBIT, BD]),
        Template::new(Opcode::Bcl, PRIMARY | AA_LK, op(OP_BC) | LK, &[BO, BI_CRBIT, BD]),
        Template::new(Opcode::Sc, SC_MASK, SC_PATTERN, &[LEV]),
        // CR logic.
        Template::new(Opcode::Mcrf, X_FORM, op(OP_CR) | xo_x(xo::MCRF), &[BF_CRRC, BFA_CRRC]),
        Template::new(
            Opcode::Crand,
            X_FORM,
            op(OP_CR) | xo_x(xo::CRAND),
            &[BT_CRBIT, BA_CRBIT, BB_CRBIT],
        ),
        Template::new(
            Opcode::Cror,
            X_FORM,
            op(OP_CR) | xo_x(xo::CROR),
            &[BT_CRBIT, BA_CRBIT, BB_CRBIT],
        ),
        Template::new(
            Opcode::Crxor,
            X_FORM,
            op(OP_CR) | xo_x(xo::CRXOR),
            &[BT_CRBIT, BA_CRBIT, BB_CRBIT],
        ),
        Template::new(Opcode::Rlwinm, PRIMARY | RC, op(OP_RLWINM), &[RA_GPRC, RT_GPRC, SH, MB, ME]),
        // Primary opcode 31.
        Template::new(
            Opcode::Cmpw,
            X_FORM | CMP_L,
            op(OP_X) | xo_x(xo::CMP),
            &[BF_CRRC, RA_GPRC, RB_GPRC],
        ),
        Template::new(
            Opcode::Cmpd,
            X_FORM | CMP_L,
            op(OP_X) | xo_x(xo::CMP) | CMP_L64,
            &[BF_CRRC, RA_G8RC, RB_G8RC],
        ),
        Template::new(
            Opcode::Mfocrf,
            X_FORM | ONE_FIELD,
            op(OP_X) | xo_x(xo::MFOCRF) | ONE_FIELD,
            &[RT_GPRC, FXM],
        ),
        Template::new(
            Opcode::Mtocrf,
            X_FORM | ONE_FIELD,
            op(OP_X) | xo_x(xo::MTOCRF) | ONE_FIELD,
            &[FXM, RT_GPRC],
        ),
        Template::new(
            Opcode::Lwzx,
            X_FORM,
            op(OP_X) | xo_x(xo::LWZX),
            &[RT_GPRC, RA_PTR_NOR0, RB_PTR],
        ),
        Template::new(
            Opcode::Ldx,
            X_FORM,
            op(OP_X) | xo_x(xo::LDX),
            &[RT_G8RC, RA_G8RC_NOX0, RB_G8RC],
        ),
        Template::new(Opcode::And, X_FORM, op(OP_X) | xo_x(xo::AND), &[RA_GPRC, RT_GPRC, RB_GPRC]),
        Template::new(Opcode::Or, X_FORM, op(OP_X) | xo_x(xo::OR), &[RA_GPRC, RT_GPRC, RB_GPRC]),
        Template::new(Opcode::Add, X_FORM, op(OP_X) | xo_x(xo::ADD), &[RT_GPRC, RA_GPRC, RB_GPRC]),
        Template::new(
            Opcode::Subf,
            X_FORM,
            op(OP_X) | xo_x(xo::SUBF),
            &[RT_GPRC, RA_GPRC, RB_GPRC],
        ),
        Template::new(
            Opcode::Isel,
            A_FORM,
            op(OP_X) | xo_a(xo::ISEL),
            &[RT_GPRC, RA_GPRC_NOR0, RB_GPRC, BC_CRBIT],
        ),
        // D-form loads and stores.
        Template::new(Opcode::Lwz, D_FORM, op(OP_LWZ), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Lwzu, D_FORM, op(OP_LWZU), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Lbz, D_FORM, op(OP_LBZ), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Lbzu, D_FORM, op(OP_LBZU), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Stw, D_FORM, op(OP_STW), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Stwu, D_FORM, op(OP_STWU), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Stb, D_FORM, op(OP_STB), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Stbu, D_FORM, op(OP_STBU), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Lhz, D_FORM, op(OP_LHZ), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Lhzu, D_FORM, op(OP_LHZU), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Lha, D_FORM, op(OP_LHA), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Lhau, D_FORM, op(OP_LHAU), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Sth, D_FORM, op(OP_STH), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Sthu, D_FORM, op(OP_STHU), &[RT_GPRC, MEMRI]),
        Template::new(Opcode::Lfs, D_FORM, op(OP_LFS), &[RT_F4RC, MEMRI]),
        Template::new(Opcode::Lfsu, D_FORM, op(OP_LFSU), &[RT_F4RC, MEMRI]),
        Template::new(Opcode::Lfd, D_FORM, op(OP_LFD), &[RT_F8RC, MEMRI]),
        Template::new(Opcode::Lfdu, D_FORM, op(OP_LFDU), &[RT_F8RC, MEMRI]),
        Template::new(Opcode::Stfs, D_FORM, op(OP_STFS), &[RT_F4RC, MEMRI]),
        Template::new(Opcode::Stfsu, D_FORM, op(OP_STFSU), &[RT_F4RC, MEMRI]),
        Template::new(Opcode::Stfd, D_FORM, op(OP_STFD), &[RT_F8RC, MEMRI]),
        Template::new(Opcode::Stfdu, D_FORM, op(OP_STFDU), &[RT_F8RC, MEMRI]),
        // DS-form.
        Template::new(
            Opcode::Ld,
            PRIMARY | XO_DS,
            op(OP_DS_LOAD) | xo_ds(xo::LD),
            &[RT_G8RC, MEMRIX],
        ),
        Template::new(
            Opcode::Ldu,
            PRIMARY | XO_DS,
            op(OP_DS_LOAD) | xo_ds(xo::LDU),
            &[RT_G8RC, MEMRIX],
        ),
        Template::new(
            Opcode::Lwa,
            PRIMARY | XO_DS,
            op(OP_DS_LOAD) | xo_ds(xo::LWA),
            &[RT_G8RC, MEMRIX],
        ),
        Template::new(
            Opcode::Std,
            PRIMARY | XO_DS,
            op(OP_DS_STORE) | xo_ds(xo::STD),
            &[RT_G8RC, MEMRIX],
        ),
        Template::new(
            Opcode::Stdu,
            PRIMARY | XO_DS,
            op(OP_DS_STORE) | xo_ds(xo::STDU),
            &[RT_G8RC, MEMRIX],
        ),
        Template::new(
            Opcode::Lxsd,
            PRIMARY | XO_DS,
            op(OP_DS_VSX_LOAD) | xo_ds(xo::LXSD),
            &[RT_VFRC, MEMRIX],
        ),
        // DQ-form.
        Template::new(
            Opcode::Lxv,
            PRIMARY | XO_DQ,
            op(OP_DQ) | xo_ds(xo::LXV),
            &[XT_DQ, MEMRIX16],
        ),
        Template::new(
            Opcode::Stxv,
            PRIMARY | XO_DQ,
            op(OP_DQ) | xo_ds(xo::STXV),
            &[XT_DQ, MEMRIX16],
        ),
        // AltiVec.
        Template::new(
            Opcode::Vaddubm,
            VX_FORM,
            op(OP_VECTOR) | xo_vx(xo::VADDUBM),
            &[RT_VRRC, RA_VRRC, RB_VRRC],
        ),
        Template::new(
            Opcode::Vadduhm,
            VX_FORM,
            op(OP_VECTOR) | xo_vx(xo::VADDUHM),
            &[RT_VRRC, RA_VRRC, RB_VRRC],
        ),
        Template::new(
            Opcode::Vadduwm,
            VX_FORM,
            op(OP_VECTOR) | xo_vx(xo::VADDUWM),
            &[RT_VRRC, RA_VRRC, RB_VRRC],
        ),
        Template::new(
            Opcode::Vaddubs,
            VX_FORM,
            op(OP_VECTOR) | xo_vx(xo::VADDUBS),
            &[RT_VRRC, RA_VRRC, RB_VRRC],
        ),
        Template::new(
            Opcode::Vand,
            VX_FORM,
            op(OP_VECTOR) | xo_vx(xo::VAND),
            &[RT_VRRC, RA_VRRC, RB_VRRC],
        ),
        Template::new(
            Opcode::Vor,
            VX_FORM,
            op(OP_VECTOR) | xo_vx(xo::VOR),
            &[RT_VRRC, RA_VRRC, RB_VRRC],
        ),
        Template::new(
            Opcode::Vspltisb,
            VX_FORM | RB_SLOT,
            op(OP_VECTOR) | xo_vx(xo::VSPLTISB),
            &[RT_VRRC, SIMM5],
        ),
        // VSX.
        Template::new(
            Opcode::Xxland,
            XX3_FORM,
            op(OP_VSX) | xo_xx3(xo::XXLAND),
            &[XT_VSRC, XA_VSRC, XB_VSRC],
        ),
        Template::new(
            Opcode::Xxlor,
            XX3_FORM,
            op(OP_VSX) | xo_xx3(xo::XXLOR),
            &[XT_VSRC, XA_VSRC, XB_VSRC],
        ),
        Template::new(
            Opcode::Xsadddp,
            XX3_FORM,
            op(OP_VSX) | xo_xx3(xo::XSADDDP),
            &[XT_VSFRC, XA_VSFRC, XB_VSFRC],
        ),
        Template::new(
            Opcode::Xsaddsp,
            XX3_FORM,
            op(OP_VSX) | xo_xx3(xo::XSADDSP),
            &[XT_VSSRC, XA_VSSRC, XB_VSSRC],
        ),
        // Floating point.
        Template::new(
            Opcode::Fadd,
            A_FORM | FRC,
            op(OP_FP_DOUBLE) | xo_a(xo::FADD),
            &[RT_F8RC, RA_F8RC, RB_F8RC],
        ),
        Template::new(
            Opcode::Fadds,
            A_FORM | FRC,
            op(OP_FP_SINGLE) | xo_a(xo::FADD),
            &[RT_F4RC, RA_F4RC, RB_F4RC],
        ),
        Template::new(
            Opcode::Fmr,
            X_FORM | RA_SLOT,
            op(OP_FP_DOUBLE) | xo_x(xo::FMR),
            &[RT_F8RC, RB_F8RC],
        ),
    ],
};
