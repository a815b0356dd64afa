//! Board representation and piece data model.
//!
//! Contains the core data structures for squares and terrain, pieces and
//! ranks, per-side rosters, and move history.

pub mod history;
pub mod piece;
pub mod roster;
pub mod square;

pub use history::{MoveHistory, MoveRecord};
pub use piece::{Lifecycle, Piece, PieceId, Rank, Side, ALL_RANKS, ALL_SIDES};
pub use roster::Roster;
pub use square::{Board, BoardHalf, Coord, Direction, Terrain, ALL_DIRECTIONS, BOARD_SIZE};
