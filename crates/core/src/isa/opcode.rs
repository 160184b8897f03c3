//! Opcode identities.
//!
//! Every template in every decode table names one `Opcode`. Besides the
//! mnemonic, the opcode decides whether a memory field adds a tied base
//! register (update forms).

/// How an instruction's memory operand writes back its base register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateForm {
    /// The base register is only read.
    None,
    /// Load with update: the tied base follows the loaded register.
    Load,
    /// Store with update: the tied base precedes all other operands.
    Store,
}

macro_rules! opcodes {
    ($($name:ident => $mnemonic:literal),* $(,)?) => {
        /// Identity of a decoded instruction.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Opcode {
            $(
                #[doc = concat!("`", $mnemonic, "`")]
                $name,
            )*
        }

        impl Opcode {
            /// Every opcode known to the decode tables.
            pub const ALL: &'static [Self] = &[$(Self::$name),*];

            /// Assembly mnemonic.
            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $(Self::$name => $mnemonic,)*
                }
            }
        }
    };
}

opcodes! {
    // Standard 32-bit: integer arithmetic, compare and logical immediates.
    Addi => "addi",
    Addis => "addis",
    Mulli => "mulli",
    Cmpwi => "cmpwi",
    Cmpdi => "cmpdi",
    Cmplwi => "cmplwi",
    Cmpldi => "cmpldi",
    Ori => "ori",
    Oris => "oris",
    AndiDot => "andi.",
    // Branches and system call.
    B => "b",
    Bl => "bl",
    Bc => "bc",
    Bcl => "bcl",
    Sc => "sc",
    // Condition register logic.
    Mcrf => "mcrf",
    Crand => "crand",
    Cror => "cror",
    Crxor => "crxor",
    // Rotate, X/XO-form arithmetic and CR moves.
    Rlwinm => "rlwinm",
    Cmpw => "cmpw",
    Cmpd => "cmpd",
    Add => "add",
    Subf => "subf",
    And => "and",
    Or => "or",
    Lwzx => "lwzx",
    Ldx => "ldx",
    Isel => "isel",
    Mfocrf => "mfocrf",
    Mtocrf => "mtocrf",
    // D-form loads and stores.
    Lwz => "lwz",
    Lwzu => "lwzu",
    Lbz => "lbz",
    Lbzu => "lbzu",
    Stw => "stw",
    Stwu => "stwu",
    Stb => "stb",
    Stbu => "stbu",
    Lhz => "lhz",
    Lhzu => "lhzu",
    Lha => "lha",
    Lhau => "lhau",
    Sth => "sth",
    Sthu => "sthu",
    Lfs => "lfs",
    Lfsu => "lfsu",
    Lfd => "lfd",
    Lfdu => "lfdu",
    Stfs => "stfs",
    Stfsu => "stfsu",
    Stfd => "stfd",
    Stfdu => "stfdu",
    // DS-form and DQ-form.
    Ld => "ld",
    Ldu => "ldu",
    Lwa => "lwa",
    Std => "std",
    Stdu => "stdu",
    Lxsd => "lxsd",
    Lxv => "lxv",
    Stxv => "stxv",
    // AltiVec and VSX.
    Vaddubm => "vaddubm",
    Vadduhm => "vadduhm",
    Vadduwm => "vadduwm",
    Vaddubs => "vaddubs",
    Vand => "vand",
    Vor => "vor",
    Vspltisb => "vspltisb",
    Xxland => "xxland",
    Xxlor => "xxlor",
    Xsadddp => "xsadddp",
    Xsaddsp => "xsaddsp",
    // Floating point.
    Fadd => "fadd",
    Fadds => "fadds",
    Fmr => "fmr",
    // Signal Processing Engine.
    Evaddw => "evaddw",
    Evsubfw => "evsubfw",
    Evand => "evand",
    Evor => "evor",
    Evxor => "evxor",
    Evldd => "evldd",
    Evldw => "evldw",
    Evldh => "evldh",
    Evlhhesplat => "evlhhesplat",
    Evlwhe => "evlwhe",
    Evlwhsplat => "evlwhsplat",
    Evstdd => "evstdd",
    Evstdw => "evstdw",
    Evstdh => "evstdh",
    Evstwhe => "evstwhe",
    Efsadd => "efsadd",
    Efdadd => "efdadd",
    // Prefixed (ISA 3.1). `*Pc` variants are the PC-relative (R=1) forms.
    Paddi => "paddi",
    PaddiPc => "paddi",
    Plbz => "plbz",
    PlbzPc => "plbz",
    Plhz => "plhz",
    PlhzPc => "plhz",
    Plha => "plha",
    PlhaPc => "plha",
    Plwz => "plwz",
    PlwzPc => "plwz",
    Plwa => "plwa",
    PlwaPc => "plwa",
    Pld => "pld",
    PldPc => "pld",
    Pstb => "pstb",
    PstbPc => "pstb",
    Psth => "psth",
    PsthPc => "psth",
    Pstw => "pstw",
    PstwPc => "pstw",
    Pstd => "pstd",
    PstdPc => "pstd",
    Plfs => "plfs",
    PlfsPc => "plfs",
    Plfd => "plfd",
    PlfdPc => "plfd",
    Pstfs => "pstfs",
    PstfsPc => "pstfs",
    Pstfd => "pstfd",
    PstfdPc => "pstfd",
}

impl Opcode {
    /// Classifies the opcode's memory operand for tied-register insertion.
    pub const fn update_form(self) -> UpdateForm {
        match self {
            Self::Lbzu | Self::Lhau | Self::Lhzu | Self::Lwzu | Self::Lfsu | Self::Lfdu
            | Self::Ldu => UpdateForm::Load,
            Self::Stbu | Self::Sthu | Self::Stwu | Self::Stfsu | Self::Stfdu | Self::Stdu => {
                UpdateForm::Store
            }
            _ => UpdateForm::None,
        }
    }

    /// Returns true for the PC-relative prefixed forms.
    pub const fn is_pc_relative(self) -> bool {
        matches!(
            self,
            Self::PaddiPc
                | Self::PlbzPc
                | Self::PlhzPc
                | Self::PlhaPc
                | Self::PlwzPc
                | Self::PlwaPc
                | Self::PldPc
                | Self::PstbPc
                | Self::PsthPc
                | Self::PstwPc
                | Self::PstdPc
                | Self::PlfsPc
                | Self::PlfdPc
                | Self::PstfsPc
                | Self::PstfdPc
        )
    }
}
