//! SPE decode table.

use super::xo;
use crate::common::reg::{GPRC, SPERC};
use crate::isa::base::opcodes::OP_VECTOR;
use crate::isa::base::{PRIMARY, XO_VX, op, xo_vx};
use crate::isa::matcher::{DecodeTable, DecodeTableId, FieldSpec, Fragment, Template};
use crate::isa::opcode::Opcode;
use crate::isa::operands::FieldDecoder;

const EVX_FORM: u64 = PRIMARY | XO_VX;

const F_RT: &[Fragment] = &[Fragment::new(21, 5)];
const F_RA: &[Fragment] = &[Fragment::new(16, 5)];
const F_RB: &[Fragment] = &[Fragment::new(11, 5)];
/// `RA:5 | UIMM:5`; the displacement sits where RB would be.
const F_DIS: &[Fragment] = &[Fragment::new(16, 5), Fragment::new(11, 5)];

const RT: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&SPERC));
const RA: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&SPERC));
const RB: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(&SPERC));
const RT_GPR: FieldSpec = FieldSpec::new(F_RT, FieldDecoder::Register(&GPRC));
const RA_GPR: FieldSpec = FieldSpec::new(F_RA, FieldDecoder::Register(&GPRC));
const RB_GPR: FieldSpec = FieldSpec::new(F_RB, FieldDecoder::Register(&GPRC));
const DIS8: FieldSpec = FieldSpec::new(F_DIS, FieldDecoder::Spe8Dis);
const DIS4: FieldSpec = FieldSpec::new(F_DIS, FieldDecoder::Spe4Dis);
const DIS2: FieldSpec = FieldSpec::new(F_DIS, FieldDecoder::Spe2Dis);

const fn evx(opcode: Opcode, xo: u32, fields: &'static [FieldSpec]) -> Template {
    Template::new(opcode, EVX_FORM, op(OP_VECTOR) | xo_vx(xo), fields)
}

/// Signal Processing Engine instructions.
pub static EXTENSION32: DecodeTable = DecodeTable {
    id: DecodeTableId::Extension32,
    templates: &[
        evx(Opcode::Evaddw, xo::EVADDW, &[RT, RA, RB]),
        evx(Opcode::Evsubfw, xo::EVSUBFW, &[RT, RA, RB]),
        evx(Opcode::Evand, xo::EVAND, &[RT, RA, RB]),
        evx(Opcode::Evxor, xo::EVXOR, &[RT, RA, RB]),
        evx(Opcode::Evor, xo::EVOR, &[RT, RA, RB]),
        evx(Opcode::Efsadd, xo::EFSADD, &[RT_GPR, RA_GPR, RB_GPR]),
        evx(Opcode::Efdadd, xo::EFDADD, &[RT, RA, RB]),
        evx(Opcode::Evldd, xo::EVLDD, &[RT, DIS8]),
        evx(Opcode::Evldw, xo::EVLDW, &[RT, DIS8]),
        evx(Opcode::Evldh, xo::EVLDH, &[RT, DIS8]),
        evx(Opcode::Evlhhesplat, xo::EVLHHESPLAT, &[RT, DIS2]),
        evx(Opcode::Evlwhe, xo::EVLWHE, &[RT, DIS4]),
        evx(Opcode::Evlwhsplat, xo::EVLWHSPLAT, &[RT, DIS4]),
        evx(Opcode::Evstdd, xo::EVSTDD, &[RT, DIS8]),
        evx(Opcode::Evstdw, xo::EVSTDW, &[RT, DIS8]),
        evx(Opcode::Evstdh, xo::EVSTDH, &[RT, DIS8]),
        evx(Opcode::Evstwhe, xo::EVSTWHE, &[RT, DIS4]),
    ],
};
