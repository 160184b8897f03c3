//! # Dispatcher Tests
//!
//! Drives the dispatcher through a mocked matcher to pin down table
//! priority, fall-through and error propagation independently of the
//! built-in tables.

use std::thread;

use mockall::Sequence;
use mockall::predicate::{always, eq};
use ppcdis_core::common::error::FieldError;
use ppcdis_core::isa::matcher::DecodeTableId;
use ppcdis_core::{DecodeError, Decoder, DecoderConfig, Feature, Opcode, Target};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{PrefixKind, PrefixedBuilder, be, d_form, to_bytes};
use crate::common::harness::{init_tracing, ppc64, power10};
use crate::common::mocks::matcher::{
    MockMatcher, broken_match, register_match, reserved_match, width_match,
};

const PADDI: [u32; 2] = [0x0600_0000, 0x3861_0010];

fn config(features: &[Feature]) -> DecoderConfig {
    features
        .iter()
        .fold(DecoderConfig::for_target(Target::Ppc64), |c, &f| c.with_feature(f))
}

fn all_features() -> DecoderConfig {
    config(&[Feature::PrefixInstrs, Feature::Spe])
}

fn mocked(config: &DecoderConfig, matcher: MockMatcher) -> Decoder<MockMatcher> {
    init_tracing();
    Decoder::with_matcher(config, matcher)
}

#[test]
fn test_tables_are_tried_in_priority_order() {
    let mut matcher = MockMatcher::new();
    let mut seq = Sequence::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Prefixed64), always())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| None);
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Extension32), always())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| None);
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), always())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Some(register_match(Opcode::Addi, 3)));

    let decoder = mocked(&all_features(), matcher);
    let inst = decoder.decode(&be(&PADDI), 0x40).unwrap();
    assert_eq!(inst.opcode, Opcode::Addi);
    assert_eq!(inst.size, 4);
    assert_eq!(inst.address, 0x40);
    assert_eq!(inst.to_string(), "addi r3");
}

#[test]
fn test_words_handed_to_each_table() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Prefixed64), eq(0x0600_0000_3861_0010_u64))
        .times(1)
        .returning(|_, _| None);
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), eq(0x0600_0000_u64))
        .times(1)
        .returning(|_, _| None);

    let decoder = mocked(&config(&[Feature::PrefixInstrs]), matcher);
    assert_eq!(
        decoder.decode(&be(&PADDI), 0),
        Err(DecodeError::NoMatch {
            word: 0x0600_0000,
            size: 4
        })
    );
}

#[test]
fn test_little_endian_composite() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Prefixed64), eq(0x0600_0000_3861_0010_u64))
        .times(1)
        .returning(|_, _| Some(register_match(Opcode::Paddi, 3)));

    let config = DecoderConfig::for_target(Target::Ppc64Le).with_feature(Feature::PrefixInstrs);
    let decoder = mocked(&config, matcher);
    let bytes = to_bytes(&PADDI, ppcdis_core::Endianness::Little);
    assert_eq!(decoder.decode(&bytes, 0).unwrap().size, 8);
}

#[test]
fn test_prefixed_hit_stops_dispatch() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Prefixed64), always())
        .times(1)
        .returning(|_, _| Some(register_match(Opcode::Paddi, 3)));
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Extension32), always())
        .never();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), always())
        .never();

    let decoder = mocked(&all_features(), matcher);
    let inst = decoder.decode(&be(&PADDI), 0).unwrap();
    assert_eq!(inst.opcode, Opcode::Paddi);
    assert_eq!(inst.size, 8);
}

#[test]
fn test_internal_error_is_not_masked() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Prefixed64), always())
        .times(1)
        .returning(|_, _| Some(broken_match(Opcode::Paddi)));
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), always())
        .never();

    let decoder = mocked(&config(&[Feature::PrefixInstrs]), matcher);
    let err = decoder.decode(&be(&PADDI), 0).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InternalTable {
            opcode: Opcode::Paddi,
            size: 8,
            source: FieldError::RegisterIndex {
                class: "gprc",
                index: 40
            },
        }
    );
    assert_eq!(err.consumed_bytes(), 8);
}

#[test]
fn test_internal_error_in_spe_table_is_not_masked() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Extension32), always())
        .times(1)
        .returning(|_, _| Some(broken_match(Opcode::Evaddw)));

    let decoder = mocked(&config(&[Feature::Spe]), matcher);
    assert!(matches!(
        decoder.decode(&be(&[0x1022_1A00]), 0),
        Err(DecodeError::InternalTable {
            opcode: Opcode::Evaddw,
            size: 4,
            ..
        })
    ));
}

#[test]
fn test_impossible_immediate_width_is_internal() {
    for bits in [0, 65, u32::MAX] {
        let mut matcher = MockMatcher::new();
        let _ = matcher
            .expect_match_word()
            .with(eq(DecodeTableId::Standard32), always())
            .times(1)
            .returning(move |_, _| Some(width_match(Opcode::Addi, bits)));

        let decoder = mocked(&config(&[]), matcher);
        assert_eq!(
            decoder.decode(&be(&[0x3860_0000]), 0),
            Err(DecodeError::InternalTable {
                opcode: Opcode::Addi,
                size: 4,
                source: FieldError::ImmediateWidth { bits, value: 0 },
            })
        );
    }
}

#[test]
fn test_full_width_immediate_decodes() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), always())
        .times(1)
        .returning(|_, _| Some(width_match(Opcode::Addi, 64)));

    let decoder = mocked(&config(&[]), matcher);
    assert_eq!(decoder.decode(&be(&[0x3860_0000]), 0).unwrap().to_string(), "addi 0");
}

#[test]
fn test_prefixed_table_skipped_without_prefix_word() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Prefixed64), always())
        .never();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), eq(0x3860_0010_u64))
        .times(1)
        .returning(|_, _| Some(register_match(Opcode::Addi, 3)));

    let decoder = mocked(&config(&[Feature::PrefixInstrs]), matcher);
    let inst = decoder.decode(&be(&[0x3860_0010, 0x3861_0010]), 0).unwrap();
    assert_eq!(inst.opcode, Opcode::Addi);
    assert_eq!(inst.size, 4);
}

#[test]
fn test_reserved_field_falls_through() {
    let mut matcher = MockMatcher::new();
    let mut seq = Sequence::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Extension32), always())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Some(reserved_match(Opcode::Evaddw)));
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), always())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Some(register_match(Opcode::Vaddubm, 1)));

    let decoder = mocked(&config(&[Feature::Spe]), matcher);
    assert_eq!(decoder.decode(&be(&[0x1022_1A00]), 0).unwrap().opcode, Opcode::Vaddubm);
}

#[test]
fn test_reserved_field_in_last_table_is_reported() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), always())
        .times(1)
        .returning(|_, _| Some(reserved_match(Opcode::Mtocrf)));

    let decoder = mocked(&config(&[]), matcher);
    let err = decoder.decode(&be(&[0x7C70_1120]), 0).unwrap_err();
    assert_eq!(
        err,
        DecodeError::ReservedField {
            opcode: Opcode::Mtocrf,
            size: 4,
            source: FieldError::ReservedNonZero { value: 1 },
        }
    );
    assert_eq!(err.to_string(), "malformed `mtocrf` encoding: reserved field must be zero, found 0x1");
}

#[test]
fn test_prefixed_table_skipped_below_eight_bytes() {
    let mut matcher = MockMatcher::new();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Prefixed64), always())
        .never();
    let _ = matcher
        .expect_match_word()
        .with(eq(DecodeTableId::Standard32), eq(0x0600_0000_u64))
        .times(1)
        .returning(|_, _| Some(register_match(Opcode::Addi, 0)));

    let decoder = mocked(&config(&[Feature::PrefixInstrs]), matcher);
    let bytes = be(&PADDI);
    assert_eq!(decoder.decode(&bytes[..7], 0).unwrap().size, 4);
}

#[test]
fn test_truncated_input_consults_no_table() {
    let decoder = mocked(&all_features(), MockMatcher::new());
    for len in 0..4 {
        let err = decoder.decode(&[0x38; 3][..len], 0).unwrap_err();
        assert_eq!(err, DecodeError::TruncatedInput { available: len });
        assert_eq!(err.consumed_bytes(), 0);
    }
}

#[test]
fn test_decode_is_deterministic() {
    let words = PrefixedBuilder::new(PrefixKind::Ls8, 57).rt(3).ra(4).imm(8).build();
    let bytes = be(&words);
    let decoder = power10();
    let first = decoder.decode(&bytes, 0x10);
    for _ in 0..8 {
        assert_eq!(decoder.decode(&bytes, 0x10), first);
    }
}

#[test]
fn test_decoder_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Decoder>();

    let decoder = ppc64();
    let bytes = be(&[d_form(14, 3, 1, 16), d_form(32, 4, 1, -8)]);
    let expected: Vec<_> = decoder.instructions(&bytes, 0).collect();

    let (decoder, bytes) = (&decoder, bytes.as_slice());
    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || decoder.instructions(bytes, 0).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
