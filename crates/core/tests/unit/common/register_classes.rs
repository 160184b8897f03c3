//! # Register Class Tests
//!
//! Class sizes, the `RA|0` zero entry, VSX aliasing and register names.

use ppcdis_core::common::reg::{
    CRBITRC, CRRC, G8RC, G8RC_NOX0, GPRC, GPRC_NOR0, SPERC, VFRC, VSFRC, VSRC, VSSRC, Register,
    RegisterKind,
};
use rstest::rstest;

#[test]
fn test_class_sizes() {
    assert_eq!(GPRC.len(), 32);
    assert_eq!(G8RC.len(), 32);
    assert_eq!(CRRC.len(), 8);
    assert_eq!(CRBITRC.len(), 32);
    assert_eq!(SPERC.len(), 32);
    assert_eq!(VFRC.len(), 32);
    assert_eq!(VSRC.len(), 64);
    assert_eq!(VSFRC.len(), 64);
    assert_eq!(VSSRC.len(), 64);
}

#[test]
fn test_out_of_range_index_is_none() {
    assert_eq!(GPRC.get(32), None);
    assert_eq!(CRRC.get(8), None);
    assert_eq!(VSRC.get(64), None);
    assert_eq!(GPRC.get(u64::MAX), None);
}

#[test]
fn test_nor0_classes_replace_index_zero_only() {
    assert_eq!(GPRC_NOR0.get(0), Some(Register::new(RegisterKind::Zero, 0)));
    assert_eq!(G8RC_NOX0.get(0), Some(Register::new(RegisterKind::Zero64, 0)));
    assert_eq!(GPRC_NOR0.get(1), GPRC.get(1));
    assert_eq!(GPRC_NOR0.get(31), GPRC.get(31));
}

#[test]
fn test_vsx_high_half_aliases_vector_registers() {
    assert_eq!(VSRC.get(0), Some(Register::new(RegisterKind::Vsl, 0)));
    assert_eq!(VSRC.get(32), Some(Register::new(RegisterKind::Vr, 0)));
    assert_eq!(VSFRC.get(5), Some(Register::new(RegisterKind::Fpr, 5)));
    assert_eq!(VSFRC.get(37), Some(Register::new(RegisterKind::Vf, 5)));
    assert_eq!(VSFRC.get(37), VFRC.get(5));
}

#[rstest]
#[case(Register::new(RegisterKind::Gpr, 31), "r31")]
#[case(Register::new(RegisterKind::Gpr64, 1), "r1")]
#[case(Register::new(RegisterKind::Zero, 0), "0")]
#[case(Register::new(RegisterKind::Fpr, 2), "f2")]
#[case(Register::new(RegisterKind::Vr, 3), "v3")]
#[case(Register::new(RegisterKind::Vsl, 4), "vs4")]
#[case(Register::new(RegisterKind::Cr, 7), "cr7")]
#[case(Register::new(RegisterKind::CrBit, 0), "cr0lt")]
#[case(Register::new(RegisterKind::CrBit, 6), "cr1eq")]
#[case(Register::new(RegisterKind::CrBit, 31), "cr7un")]
#[case(Register::new(RegisterKind::Spe, 9), "r9")]
fn test_register_names(#[case] reg: Register, #[case] name: &str) {
    assert_eq!(reg.to_string(), name);
}
