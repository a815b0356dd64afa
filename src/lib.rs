//! Fieldmarshal engine library.
//!
//! A two-player Stratego rules engine: board and piece data model, legal
//! move generation, combat resolution, and the turn state machine, plus
//! the text notation used by the binary and integration tests.

pub mod board;
pub mod error;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod session;
