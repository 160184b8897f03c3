//! Signal Processing Engine encodings.
//!
//! SPE reuses primary opcode 4, so its encodings collide with AltiVec. The
//! dispatcher consults this table before the standard one only when the
//! target enables the SPE feature.

/// SPE decode table.
pub mod table;

/// SPE extended opcodes.
pub mod xo;
