//! Encoders for PowerPC instruction forms.
//!
//! Field arguments take ISA register numbers and byte displacements; the
//! encoders do the scaling and split wide register numbers (VSX) into their
//! high and low parts. Signed values are truncated to their field width.

use ppcdis_core::Endianness;

/// Places a primary opcode.
pub fn primary(op: u32) -> u32 {
    (op & 0x3F) << 26
}

/// D-form: `op | RT | RA | D`.
pub fn d_form(op: u32, rt: u32, ra: u32, d: i32) -> u32 {
    primary(op) | (rt & 0x1F) << 21 | (ra & 0x1F) << 16 | (d as u32 & 0xFFFF)
}

/// X-form (and XO-form with OE=0): `op | RT | RA | RB | XO | Rc`.
pub fn x_form(op: u32, rt: u32, ra: u32, rb: u32, xo: u32) -> u32 {
    primary(op) | (rt & 0x1F) << 21 | (ra & 0x1F) << 16 | (rb & 0x1F) << 11 | (xo & 0x3FF) << 1
}

/// DS-form; `ds` is the byte displacement (a multiple of 4).
pub fn ds_form(op: u32, rt: u32, ra: u32, ds: i32, xo: u32) -> u32 {
    primary(op) | (rt & 0x1F) << 21 | (ra & 0x1F) << 16 | (ds as u32 & 0xFFFC) | (xo & 0x3)
}

/// DQ-form; `xt` is the 6-bit VSX register, `dq` the byte displacement (a multiple of 16).
pub fn dq_form(op: u32, xt: u32, ra: u32, dq: i32, xo: u32) -> u32 {
    primary(op)
        | (xt & 0x1F) << 21
        | (ra & 0x1F) << 16
        | (dq as u32 & 0xFFF0)
        | (xt >> 5 & 1) << 3
        | (xo & 0x7)
}

/// VX-form (also the SPE EVX form): `op | VRT | VRA | VRB | XO:11`.
pub fn vx_form(op: u32, vt: u32, va: u32, vb: u32, xo: u32) -> u32 {
    primary(op) | (vt & 0x1F) << 21 | (va & 0x1F) << 16 | (vb & 0x1F) << 11 | (xo & 0x7FF)
}

/// XX3-form with 6-bit VSX register numbers.
pub fn xx3_form(op: u32, xt: u32, xa: u32, xb: u32, xo: u32) -> u32 {
    primary(op)
        | (xt & 0x1F) << 21
        | (xa & 0x1F) << 16
        | (xb & 0x1F) << 11
        | (xo & 0xFF) << 3
        | (xa >> 5 & 1) << 2
        | (xb >> 5 & 1) << 1
        | (xt >> 5 & 1)
}

/// A-form: `op | FRT | FRA | FRB | FRC | XO:5`.
pub fn a_form(op: u32, frt: u32, fra: u32, frb: u32, frc: u32, xo: u32) -> u32 {
    primary(op)
        | (frt & 0x1F) << 21
        | (fra & 0x1F) << 16
        | (frb & 0x1F) << 11
        | (frc & 0x1F) << 6
        | (xo & 0x1F) << 1
}

/// SPE load/store: the displacement is scaled down by `scale` into the RB slot.
pub fn evx_mem(xo: u32, rt: u32, ra: u32, disp: u32, scale: u32) -> u32 {
    vx_form(4, rt, ra, disp / scale, xo)
}

/// I-form branch; `words` is the signed word displacement.
pub fn i_form(words: i32, link: bool) -> u32 {
    primary(18) | (words as u32 & 0x00FF_FFFF) << 2 | u32::from(link)
}

/// B-form conditional branch; `words` is the signed word displacement.
pub fn b_form(bo: u32, bi: u32, words: i32, link: bool) -> u32 {
    primary(16) | (bo & 0x1F) << 21 | (bi & 0x1F) << 16 | (words as u32 & 0x3FFF) << 2 | u32::from(link)
}

/// Prefix word kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixKind {
    /// Modified load/store (type `0b10`).
    Mls,
    /// Eight-byte load/store (type `0b00`).
    Ls8,
}

/// Fluent builder for prefixed (prefix + base word) instructions.
#[derive(Clone, Copy, Debug)]
pub struct PrefixedBuilder {
    kind: PrefixKind,
    pcrel: bool,
    reserved: u32,
    op: u32,
    rt: u32,
    ra: u32,
    imm: i64,
}

impl PrefixedBuilder {
    pub fn new(kind: PrefixKind, op: u32) -> Self {
        Self {
            kind,
            pcrel: false,
            reserved: 0,
            op,
            rt: 0,
            ra: 0,
            imm: 0,
        }
    }

    pub fn rt(mut self, rt: u32) -> Self {
        self.rt = rt;
        self
    }

    pub fn ra(mut self, ra: u32) -> Self {
        self.ra = ra;
        self
    }

    /// Signed 34-bit immediate or displacement.
    pub fn imm(mut self, imm: i64) -> Self {
        self.imm = imm;
        self
    }

    pub fn pcrel(mut self) -> Self {
        self.pcrel = true;
        self
    }

    /// Sets prefix bits that must be zero (prefix word bits 12-13, ISA numbering).
    pub fn reserved(mut self, bits: u32) -> Self {
        self.reserved = bits & 0x3;
        self
    }

    /// Returns `[prefix, base]`.
    pub fn build(self) -> [u32; 2] {
        let imm = self.imm as u64 & 0x3_FFFF_FFFF;
        let kind = match self.kind {
            PrefixKind::Mls => 0b10,
            PrefixKind::Ls8 => 0b00,
        };
        let prefix = primary(1)
            | kind << 24
            | u32::from(self.pcrel) << 20
            | self.reserved << 18
            | (imm >> 16) as u32 & 0x3_FFFF;
        let base = primary(self.op) | (self.rt & 0x1F) << 21 | (self.ra & 0x1F) << 16 | (imm as u32 & 0xFFFF);
        [prefix, base]
    }
}

/// Serialises words in the given byte order.
pub fn to_bytes(words: &[u32], endianness: Endianness) -> Vec<u8> {
    words
        .iter()
        .flat_map(|w| match endianness {
            Endianness::Big => w.to_be_bytes(),
            Endianness::Little => w.to_le_bytes(),
        })
        .collect()
}

/// Big-endian bytes of `words`.
pub fn be(words: &[u32]) -> Vec<u8> {
    to_bytes(words, Endianness::Big)
}
