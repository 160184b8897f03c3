//! # Presentation Tests
//!
//! Assembler-style rendering, branch target resolution and byte stream walking.

use ppcdis_core::isa::disasm::disassemble;
use ppcdis_core::{DecodeError, Opcode};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::{PrefixKind, PrefixedBuilder, b_form, be, d_form, i_form};
use crate::common::harness::{ppc64, power10};

#[test]
fn test_disassemble_renders_or_reports_unknown() {
    let decoder = ppc64();
    assert_eq!(disassemble(&decoder, &be(&[d_form(14, 3, 1, 16)]), 0), "addi r3, r1, 16");
    assert_eq!(disassemble(&decoder, &be(&[0]), 0), "unknown");
    assert_eq!(disassemble(&decoder, &[0x38, 0x61], 0), "unknown");
}

#[rstest]
#[case(i_form(2, false), 0x1000, Opcode::B, 0x1008)]
#[case(i_form(-1, true), 0x1000, Opcode::Bl, 0x0FFC)]
#[case(b_form(12, 2, 4, false), 0x2000, Opcode::Bc, 0x2010)]
#[case(b_form(16, 0, -2, true), 0x2000, Opcode::Bcl, 0x1FF8)]
fn test_branch_targets(
    #[case] word: u32,
    #[case] address: u64,
    #[case] opcode: Opcode,
    #[case] target: u64,
) {
    let inst = ppc64().decode(&be(&[word]), address).unwrap();
    assert_eq!(inst.opcode, opcode);
    assert_eq!(inst.branch_target(), Some(target));
}

#[test]
fn test_non_branches_have_no_target() {
    let inst = ppc64().decode(&be(&[d_form(14, 3, 1, 16)]), 0).unwrap();
    assert_eq!(inst.branch_target(), None);
    assert_eq!(inst.pc_relative_target(), None);
}

#[test]
fn test_pc_relative_load_target() {
    let words = PrefixedBuilder::new(PrefixKind::Mls, 32).rt(9).imm(0x100).pcrel().build();
    let inst = power10().decode(&be(&words), 0x8000).unwrap();
    assert_eq!(inst.opcode, Opcode::PlwzPc);
    assert_eq!(inst.to_string(), "plwz r9, 256, 0, 1");
    assert_eq!(inst.pc_relative_target(), Some(0x8100));
}

#[test]
fn test_stream_skips_one_word_after_failure() {
    let paddi = PrefixedBuilder::new(PrefixKind::Mls, 14).rt(3).ra(1).imm(16).build();
    let bytes = be(&[d_form(14, 3, 1, 16), 0, paddi[0], paddi[1]]);
    let decoder = power10();

    let items: Vec<_> = decoder.instructions(&bytes, 0x100).collect();
    assert_eq!(items.len(), 3);

    let addi = items[0].as_ref().unwrap();
    assert_eq!((addi.address, addi.size), (0x100, 4));

    assert_eq!(
        items[1],
        Err(DecodeError::NoMatch {
            word: 0,
            size: 4
        })
    );

    let prefixed = items[2].as_ref().unwrap();
    assert_eq!(prefixed.opcode, Opcode::Paddi);
    assert_eq!((prefixed.address, prefixed.size), (0x108, 8));
}

#[test]
fn test_stream_stops_at_truncated_tail() {
    let mut bytes = be(&[d_form(14, 3, 1, 16)]);
    bytes.extend_from_slice(&[0xAA, 0xBB]);
    let decoder = ppc64();
    let mut stream = decoder.instructions(&bytes, 0x40);

    assert_eq!(stream.next().unwrap().unwrap().opcode, Opcode::Addi);
    assert_eq!(stream.address(), 0x44);
    assert_eq!(stream.remaining(), &[0xAA, 0xBB]);

    assert_eq!(
        stream.next(),
        Some(Err(DecodeError::TruncatedInput { available: 2 }))
    );
    assert_eq!(stream.address(), 0x44);
    assert_eq!(stream.remaining(), &[0xAA, 0xBB]);
    assert_eq!(stream.next(), None);
    assert_eq!(stream.next(), None);
}

#[test]
fn test_empty_stream() {
    let decoder = ppc64();
    assert_eq!(decoder.instructions(&[], 0).next(), None);
}

#[test]
fn test_stream_renders_listing() {
    let bytes = be(&[
        d_form(14, 1, 1, -32),
        d_form(36, 31, 1, 28),
        i_form(-2, false),
    ]);
    let listing: Vec<String> = ppc64()
        .instructions(&bytes, 0)
        .map(|r| r.map_or_else(|_| String::from("unknown"), |i| i.to_string()))
        .collect();
    assert_eq!(listing, ["addi r1, r1, -32", "stw r31, 28, r1", "b -2"]);
}
