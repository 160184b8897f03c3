//! Shared test infrastructure.



/// Test doubles for decoder seams.
pub mod mocks;
