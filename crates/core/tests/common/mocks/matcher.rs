use mockall::mock;
use ppcdis_core::common::reg::GPRC;
use ppcdis_core::isa::matcher::{DecodeTableId, MatchedField, MatchedTemplate, OpcodeMatcher};
use ppcdis_core::isa::operands::FieldDecoder;
use ppcdis_core::Opcode;

mock! {
    pub Matcher {}
    impl OpcodeMatcher for Matcher {
        fn match_word(&self, table: DecodeTableId, word: u64) -> Option<MatchedTemplate>;
    }
}

/// A match whose single field decodes cleanly to `r<index>`.
pub fn register_match(opcode: Opcode, index: u64) -> MatchedTemplate {
    MatchedTemplate {
        opcode,
        fields: vec![MatchedField {
            decoder: FieldDecoder::Register(&GPRC),
            raw: index,
        }],
    }
}

/// A match that hands a register decoder an index no 32-entry class has.
pub fn broken_match(opcode: Opcode) -> MatchedTemplate {
    register_match(opcode, 40)
}

/// A match whose must-be-zero field is set.
pub fn reserved_match(opcode: Opcode) -> MatchedTemplate {
    MatchedTemplate {
        opcode,
        fields: vec![MatchedField {
            decoder: FieldDecoder::ImmZero,
            raw: 1,
        }],
    }
}

/// A match whose signed immediate claims a `bits`-wide field.
pub fn width_match(opcode: Opcode, bits: u32) -> MatchedTemplate {
    MatchedTemplate {
        opcode,
        fields: vec![MatchedField {
            decoder: FieldDecoder::SignedImm(bits),
            raw: 0,
        }],
    }
}
