//! Text interface: command parsing and square/move notation.
//!
//! The engine core is display-independent; this module gives the binary
//! and tests a small textual boundary to drive it through.

pub mod notation;
pub mod parser;

pub use notation::{format_coord, format_move, parse_coord, parse_move, NotationError};
pub use parser::{parse_command, Command};
