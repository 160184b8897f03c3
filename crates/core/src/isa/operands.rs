//! Operand field decoders.
//!
//! A matched template hands each of its fields to one `FieldDecoder`, in
//! template order. Decoders append operands to an `OperandBuilder`; memory
//! decoders of update forms may also insert a tied base register.
//!
//! # Memory field layouts
//!
//! | Decoder        | Composite              | Displacement                   |
//! |----------------|------------------------|--------------------------------|
//! | `MemRi`        | `base:5 \| disp:16`    | `sext16(disp)`                 |
//! | `MemRix`       | `base:5 \| disp:14`    | `sext16(disp << 2)`            |
//! | `MemRix16`     | `base:5 \| disp:12`    | `sext16(disp << 4)`            |
//! | `MemRi34`      | `base:5 \| disp:34`    | `sext34(disp)`                 |
//! | `Spe{8,4,2}Dis`| `base:5 \| disp:5`     | `disp << 3`, `<< 2`, `<< 1`    |

use crate::common::error::FieldError;
use crate::common::reg::{CRRC, GPRC_NOR0, Register, RegisterClass};
use crate::isa::instruction::{MAX_FIELD_BITS, Operand, fits_unsigned, low_mask, sign_extend};
use crate::isa::opcode::{Opcode, UpdateForm};

/// Width of the conditional branch displacement field (BD).
const COND_BR_BITS: u32 = 14;
/// Width of the unconditional branch displacement field (LI).
const DIRECT_BR_BITS: u32 = 24;

/// Width of the D-form displacement.
const MEMRI_DISP_BITS: u32 = 16;
/// Width of the DS-form displacement (before scaling by 4).
const MEMRIX_DISP_BITS: u32 = 14;
/// Width of the DQ-form displacement (before scaling by 16).
const MEMRIX16_DISP_BITS: u32 = 12;
/// Width of the prefixed 34-bit displacement.
const MEMRI34_DISP_BITS: u32 = 34;
/// Width of the SPE scaled displacement.
const SPE_DISP_BITS: u32 = 5;
/// All memory displacements are sign extended over 16 bits after scaling,
/// except the 34-bit prefixed form.
const SCALED_DISP_BITS: u32 = 16;

/// Number of bits in a CR field mask (FXM).
const CR_MASK_BITS: u32 = 8;

/// Accumulates operands for one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandBuilder {
    opcode: Opcode,
    operands: Vec<Operand>,
}

impl OperandBuilder {
    /// Starts an empty operand list for `opcode`.
    pub const fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            operands: Vec::new(),
        }
    }

    /// Opcode the operands belong to.
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Operands decoded so far.
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// Appends an operand.
    pub fn push(&mut self, operand: Operand) {
        self.operands.push(operand);
    }

    /// Inserts an operand before all others.
    pub fn insert_front(&mut self, operand: Operand) {
        self.operands.insert(0, operand);
    }

    /// Finishes the list.
    pub fn into_operands(self) -> Vec<Operand> {
        self.operands
    }

    fn push_reg(&mut self, reg: Register) {
        self.push(Operand::Register(reg));
    }

    fn push_imm(&mut self, imm: i64) {
        self.push(Operand::Immediate(imm));
    }
}

/// Decoder bound to one field slot of a template.
///
/// Several slots may share the same decoder value; register classes are
/// referenced, never copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldDecoder {
    /// Register index into a register class.
    Register(&'static RegisterClass),
    /// Unsigned immediate of the given width.
    UnsignedImm(u32),
    /// Signed immediate of the given width.
    SignedImm(u32),
    /// Reserved field that must be zero; decodes to `Immediate(0)`.
    ImmZero,
    /// 14-bit conditional branch displacement.
    CondBrTarget,
    /// 24-bit unconditional branch displacement.
    DirectBrTarget,
    /// D-form memory operand.
    MemRi,
    /// DS-form memory operand.
    MemRix,
    /// DQ-form memory operand.
    MemRix16,
    /// Prefixed 34-bit memory operand.
    MemRi34,
    /// Prefixed 34-bit PC-relative memory operand (base must be zero).
    MemRi34PcRel,
    /// SPE doubleword-scaled memory operand.
    Spe8Dis,
    /// SPE word-scaled memory operand.
    Spe4Dis,
    /// SPE halfword-scaled memory operand.
    Spe2Dis,
    /// One-hot CR field mask.
    CrBitMask,
}

impl FieldDecoder {
    /// Decodes `raw` and appends the resulting operand(s) to `ops`.
    ///
    /// # Errors
    ///
    /// Returns a `FieldError` when the value is malformed (reserved bits,
    /// non one-hot mask) or inconsistent with the decoder (index or width).
    pub fn decode(self, ops: &mut OperandBuilder, raw: u64) -> Result<(), FieldError> {
        match self {
            Self::Register(class) => decode_register_class(ops, raw, class),
            Self::UnsignedImm(bits) => decode_uimm(ops, raw, bits),
            Self::SignedImm(bits) => decode_simm(ops, raw, bits),
            Self::ImmZero => decode_imm_zero(ops, raw),
            Self::CondBrTarget => decode_simm(ops, raw, COND_BR_BITS),
            Self::DirectBrTarget => decode_simm(ops, raw, DIRECT_BR_BITS),
            Self::MemRi => decode_mem_ri(ops, raw),
            Self::MemRix => decode_mem_rix(ops, raw),
            Self::MemRix16 => decode_mem_rix16(ops, raw),
            Self::MemRi34 => decode_mem_ri34(ops, raw),
            Self::MemRi34PcRel => decode_mem_ri34_pcrel(ops, raw),
            Self::Spe8Dis => decode_spe_dis(ops, raw, 3),
            Self::Spe4Dis => decode_spe_dis(ops, raw, 2),
            Self::Spe2Dis => decode_spe_dis(ops, raw, 1),
            Self::CrBitMask => decode_crbit_mask(ops, raw),
        }
    }
}

/// Appends `class[index]`.
///
/// # Errors
///
/// `FieldError::RegisterIndex` if `index` is outside the class.
pub fn decode_register_class(
    ops: &mut OperandBuilder,
    index: u64,
    class: &RegisterClass,
) -> Result<(), FieldError> {
    let reg = class.get(index).ok_or(FieldError::RegisterIndex {
        class: class.name,
        index,
    })?;
    ops.push_reg(reg);
    Ok(())
}

/// Appends an unsigned `bits`-wide immediate unchanged.
///
/// # Errors
///
/// `FieldError::ImmediateWidth` if `value` does not fit in `bits` bits.
pub fn decode_uimm(ops: &mut OperandBuilder, value: u64, bits: u32) -> Result<(), FieldError> {
    check_width(value, bits)?;
    ops.push_imm(value as i64);
    Ok(())
}

/// Appends a `bits`-wide immediate sign extended to 64 bits.
///
/// # Errors
///
/// `FieldError::ImmediateWidth` if `value` does not fit in `bits` bits.
pub fn decode_simm(ops: &mut OperandBuilder, value: u64, bits: u32) -> Result<(), FieldError> {
    check_width(value, bits)?;
    ops.push_imm(sign_extend(value, bits));
    Ok(())
}

/// Appends `Immediate(0)` for a must-be-zero field.
///
/// # Errors
///
/// `FieldError::ReservedNonZero` if `value` is not zero.
pub fn decode_imm_zero(ops: &mut OperandBuilder, value: u64) -> Result<(), FieldError> {
    if value != 0 {
        return Err(FieldError::ReservedNonZero { value });
    }
    ops.push_imm(0);
    Ok(())
}

/// Decodes a D-form `(disp, base)` pair, with tied base for update forms.
///
/// # Errors
///
/// `FieldError::RegisterIndex` if the base field exceeds five bits.
pub fn decode_mem_ri(ops: &mut OperandBuilder, raw: u64) -> Result<(), FieldError> {
    let base = raw >> MEMRI_DISP_BITS;
    let disp = raw & low_mask(MEMRI_DISP_BITS);
    let base = base_register(base)?;

    add_tied_base(ops, base);
    ops.push_imm(sign_extend(disp, SCALED_DISP_BITS));
    ops.push_reg(base);
    Ok(())
}

/// Decodes a DS-form `(disp, base)` pair; the displacement is word scaled.
///
/// # Errors
///
/// `FieldError::RegisterIndex` if the base field exceeds five bits.
pub fn decode_mem_rix(ops: &mut OperandBuilder, raw: u64) -> Result<(), FieldError> {
    let base = raw >> MEMRIX_DISP_BITS;
    let disp = raw & low_mask(MEMRIX_DISP_BITS);
    let base = base_register(base)?;

    add_tied_base(ops, base);
    ops.push_imm(sign_extend(disp << 2, SCALED_DISP_BITS));
    ops.push_reg(base);
    Ok(())
}

/// Decodes a DQ-form `(disp, base)` pair; the displacement is 16-byte aligned.
///
/// # Errors
///
/// `FieldError::RegisterIndex` if the base field exceeds five bits.
pub fn decode_mem_rix16(ops: &mut OperandBuilder, raw: u64) -> Result<(), FieldError> {
    let base = raw >> MEMRIX16_DISP_BITS;
    let disp = raw & low_mask(MEMRIX16_DISP_BITS);
    let base = base_register(base)?;

    ops.push_imm(sign_extend(disp << 4, SCALED_DISP_BITS));
    ops.push_reg(base);
    Ok(())
}

/// Decodes a prefixed 34-bit `(disp, base)` pair.
///
/// # Errors
///
/// `FieldError::RegisterIndex` if the base field exceeds five bits.
pub fn decode_mem_ri34(ops: &mut OperandBuilder, raw: u64) -> Result<(), FieldError> {
    let base = raw >> MEMRI34_DISP_BITS;
    let disp = raw & low_mask(MEMRI34_DISP_BITS);
    let base = base_register(base)?;

    ops.push_imm(sign_extend(disp, MEMRI34_DISP_BITS));
    ops.push_reg(base);
    Ok(())
}

/// Decodes a PC-relative prefixed 34-bit displacement whose base must be 0.
///
/// # Errors
///
/// `FieldError::ReservedNonZero` if the base field is not zero.
pub fn decode_mem_ri34_pcrel(ops: &mut OperandBuilder, raw: u64) -> Result<(), FieldError> {
    let base = raw >> MEMRI34_DISP_BITS;
    let disp = raw & low_mask(MEMRI34_DISP_BITS);

    ops.push_imm(sign_extend(disp, MEMRI34_DISP_BITS));
    decode_imm_zero(ops, base)
}

/// Decodes an SPE `(disp, base)` pair, scaling the 5-bit displacement by `1 << shift`.
///
/// # Errors
///
/// `FieldError::RegisterIndex` if the base field exceeds five bits.
pub fn decode_spe_dis(ops: &mut OperandBuilder, raw: u64, shift: u32) -> Result<(), FieldError> {
    let base = raw >> SPE_DISP_BITS;
    let disp = raw & low_mask(SPE_DISP_BITS);
    let base = base_register(base)?;

    ops.push_imm((disp << shift) as i64);
    ops.push_reg(base);
    Ok(())
}

/// Decodes a one-hot CR field mask; `0x80 >> n` selects `cr{n}`.
///
/// # Errors
///
/// `FieldError::InvalidCrMask` unless exactly one of the low 8 bits is set.
pub fn decode_crbit_mask(ops: &mut OperandBuilder, mask: u64) -> Result<(), FieldError> {
    if !fits_unsigned(mask, CR_MASK_BITS) || !mask.is_power_of_two() {
        return Err(FieldError::InvalidCrMask { mask });
    }
    let zeros = mask.trailing_zeros();
    decode_register_class(ops, u64::from(CR_MASK_BITS - 1 - zeros), &CRRC)
}

/// Widths outside `1..=64` never describe a real field.
fn check_width(value: u64, bits: u32) -> Result<(), FieldError> {
    if (1..=MAX_FIELD_BITS).contains(&bits) && fits_unsigned(value, bits) {
        Ok(())
    } else {
        Err(FieldError::ImmediateWidth { bits, value })
    }
}

/// Memory base registers use `RA|0` semantics.
fn base_register(base: u64) -> Result<Register, FieldError> {
    GPRC_NOR0.get(base).ok_or(FieldError::RegisterIndex {
        class: GPRC_NOR0.name,
        index: base,
    })
}

/// Adds the written-back base of an update form.
///
/// Loads append it after the operands decoded so far (the loaded register);
/// stores put it in front of everything.
fn add_tied_base(ops: &mut OperandBuilder, base: Register) {
    match ops.opcode().update_form() {
        UpdateForm::Load => ops.push_reg(base),
        UpdateForm::Store => ops.insert_front(Operand::Register(base)),
        UpdateForm::None => {}
    }
}
