//! SPE extended opcodes (EVX form, bits 21-31 in ISA numbering).

/// Vector add word.
pub const EVADDW: u32 = 512;
/// Vector subtract from word.
pub const EVSUBFW: u32 = 516;
/// Vector AND.
pub const EVAND: u32 = 529;
/// Vector XOR.
pub const EVXOR: u32 = 534;
/// Vector OR.
pub const EVOR: u32 = 535;
/// Scalar single-precision add.
pub const EFSADD: u32 = 704;
/// Scalar double-precision add.
pub const EFDADD: u32 = 736;

/// Load double word into double word.
pub const EVLDD: u32 = 769;
/// Load double word into two words.
pub const EVLDW: u32 = 771;
/// Load double word into four half words.
pub const EVLDH: u32 = 773;
/// Load half word into half words even and splat.
pub const EVLHHESPLAT: u32 = 777;
/// Load word into two half words even.
pub const EVLWHE: u32 = 785;
/// Load word into two half words and splat.
pub const EVLWHSPLAT: u32 = 797;
/// Store double of double.
pub const EVSTDD: u32 = 801;
/// Store double of two words.
pub const EVSTDW: u32 = 803;
/// Store double of four half words.
pub const EVSTDH: u32 = 805;
/// Store word of two half words from even.
pub const EVSTWHE: u32 = 817;
