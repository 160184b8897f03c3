//! Common types shared by the reader, matcher and operand decoders.
//!
//! 1. **Error Handling:** Decode, field and configuration errors.
//! 2. **Register Classes:** The fixed register tables indexed by operand fields.

/// Error types for decoding and configuration.
pub mod error;

/// Register identities and register-class tables.
pub mod reg;

pub use error::{ConfigError, DecodeError, FieldError};
pub use reg::{Register, RegisterClass, RegisterKind};
