//! # Unit Components
//!
//! Fine-grained tests of the decoder's building blocks: configuration,
//! register classes and errors, and the ISA pipeline from word reading to
//! operand synthesis.
