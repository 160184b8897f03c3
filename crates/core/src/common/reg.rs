//! Register identities and register-class tables.
//!
//! Operand fields carry small indices; each field is tied to one register
//! class that maps the index to a concrete register. Classes are fixed,
//! `'static` tables so the same class can be shared by any number of fields.

use std::fmt;

/// Architectural register file a [`Register`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterKind {
    /// 32-bit view of a general-purpose register (`r0`–`r31`).
    Gpr,
    /// 64-bit view of a general-purpose register.
    Gpr64,
    /// The literal zero that `RA|0` addressing reads when `RA` is 0 (32-bit).
    Zero,
    /// The literal zero for 64-bit `RA|0` operands.
    Zero64,
    /// Floating-point register (`f0`–`f31`).
    Fpr,
    /// AltiVec vector register (`v0`–`v31`).
    Vr,
    /// Scalar floating-point view of a vector register.
    Vf,
    /// Low half of the VSX register file (`vs0`–`vs31`, aliasing the FPRs).
    Vsl,
    /// 4-bit condition register field (`cr0`–`cr7`).
    Cr,
    /// Single condition register bit (0–31, four per field).
    CrBit,
    /// 64-bit SPE view of a general-purpose register.
    Spe,
}

/// A concrete register produced by an operand field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Register {
    /// Register file.
    pub kind: RegisterKind,
    /// Index within the register file.
    pub index: u8,
}

impl Register {
    /// Creates a register of `kind` with the given index.
    pub const fn new(kind: RegisterKind, index: u8) -> Self {
        Self { kind, index }
    }
}

/// Condition bit names within one CR field, in bit order.
const CR_BIT_NAMES: [&str; 4] = ["lt", "gt", "eq", "un"];

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.index;
        match self.kind {
            RegisterKind::Gpr | RegisterKind::Gpr64 | RegisterKind::Spe => write!(f, "r{n}"),
            RegisterKind::Zero | RegisterKind::Zero64 => write!(f, "0"),
            RegisterKind::Fpr => write!(f, "f{n}"),
            RegisterKind::Vr | RegisterKind::Vf => write!(f, "v{n}"),
            RegisterKind::Vsl => write!(f, "vs{n}"),
            RegisterKind::Cr => write!(f, "cr{n}"),
            RegisterKind::CrBit => {
                write!(f, "cr{}{}", n / 4, CR_BIT_NAMES[usize::from(n % 4)])
            }
        }
    }
}

/// A fixed-size table mapping field indices to registers.
#[derive(Debug, PartialEq, Eq)]
pub struct RegisterClass {
    /// Class name, used in diagnostics.
    pub name: &'static str,
    /// Registers in encoding order.
    pub regs: &'static [Register],
}

impl RegisterClass {
    /// Looks up the register for a raw field index.
    ///
    /// Returns `None` when `index` is outside the table.
    pub fn get(&self, index: u64) -> Option<Register> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.regs.get(i))
            .copied()
    }

    /// Number of registers in the class.
    pub const fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns true if the class has no registers.
    pub const fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }
}

/// Builds registers `0..N` of one kind.
const fn bank<const N: usize>(kind: RegisterKind) -> [Register; N] {
    let mut regs = [Register::new(kind, 0); N];
    let mut i = 0;
    while i < N {
        regs[i] = Register::new(kind, i as u8);
        i += 1;
    }
    regs
}

/// Replaces index 0 with the literal-zero pseudo register.
const fn no_zero(mut regs: [Register; 32], zero: RegisterKind) -> [Register; 32] {
    regs[0] = Register::new(zero, 0);
    regs
}

/// Concatenates two 32-entry banks into a 64-entry class.
const fn pair(lo: [Register; 32], hi: [Register; 32]) -> [Register; 64] {
    let mut regs = [lo[0]; 64];
    let mut i = 0;
    while i < 32 {
        regs[i] = lo[i];
        regs[i + 32] = hi[i];
        i += 1;
    }
    regs
}

const R_REGS: [Register; 32] = bank(RegisterKind::Gpr);
const R_REGS_NO_R0: [Register; 32] = no_zero(bank(RegisterKind::Gpr), RegisterKind::Zero);
const X_REGS: [Register; 32] = bank(RegisterKind::Gpr64);
const X_REGS_NO_X0: [Register; 32] = no_zero(bank(RegisterKind::Gpr64), RegisterKind::Zero64);
const F_REGS: [Register; 32] = bank(RegisterKind::Fpr);
const V_REGS: [Register; 32] = bank(RegisterKind::Vr);
const VF_REGS: [Register; 32] = bank(RegisterKind::Vf);
const VS_REGS: [Register; 64] = pair(bank(RegisterKind::Vsl), bank(RegisterKind::Vr));
const VSF_REGS: [Register; 64] = pair(bank(RegisterKind::Fpr), bank(RegisterKind::Vf));
const CR_REGS: [Register; 8] = bank(RegisterKind::Cr);
const CR_BIT_REGS: [Register; 32] = bank(RegisterKind::CrBit);
const SPE_REGS: [Register; 32] = bank(RegisterKind::Spe);

/// 32-bit general-purpose registers.
pub const GPRC: RegisterClass = RegisterClass { name: "gprc", regs: &R_REGS };
/// 32-bit general-purpose registers where index 0 reads as zero.
pub const GPRC_NOR0: RegisterClass = RegisterClass { name: "gprc_nor0", regs: &R_REGS_NO_R0 };
/// 64-bit general-purpose registers.
pub const G8RC: RegisterClass = RegisterClass { name: "g8rc", regs: &X_REGS };
/// 64-bit general-purpose registers where index 0 reads as zero.
pub const G8RC_NOX0: RegisterClass = RegisterClass { name: "g8rc_nox0", regs: &X_REGS_NO_X0 };
/// Single-precision floating-point registers.
pub const F4RC: RegisterClass = RegisterClass { name: "f4rc", regs: &F_REGS };
/// Double-precision floating-point registers.
pub const F8RC: RegisterClass = RegisterClass { name: "f8rc", regs: &F_REGS };
/// AltiVec vector registers.
pub const VRRC: RegisterClass = RegisterClass { name: "vrrc", regs: &V_REGS };
/// Scalar floating-point views of the vector registers.
pub const VFRC: RegisterClass = RegisterClass { name: "vfrc", regs: &VF_REGS };
/// Full 64-entry VSX register file.
pub const VSRC: RegisterClass = RegisterClass { name: "vsrc", regs: &VS_REGS };
/// VSX scalar double registers.
pub const VSFRC: RegisterClass = RegisterClass { name: "vsfrc", regs: &VSF_REGS };
/// VSX scalar single registers.
pub const VSSRC: RegisterClass = RegisterClass { name: "vssrc", regs: &VSF_REGS };
/// Condition register fields.
pub const CRRC: RegisterClass = RegisterClass { name: "crrc", regs: &CR_REGS };
/// Individual condition register bits.
pub const CRBITRC: RegisterClass = RegisterClass { name: "crbitrc", regs: &CR_BIT_REGS };
/// 64-bit SPE registers.
pub const SPERC: RegisterClass = RegisterClass { name: "sperc", regs: &SPE_REGS };

/// Pointer-like operand, kind 0 (plain GPR).
pub const PTR_RC: &RegisterClass = &GPRC;
/// Pointer-like operand, kind 1 (GPR with `RA|0` semantics).
pub const PTR_RC_NOR0: &RegisterClass = &GPRC_NOR0;
