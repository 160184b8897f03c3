//! Test doubles.

/// Mock opcode matcher.
pub mod matcher;
