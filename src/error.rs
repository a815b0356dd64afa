//! Engine error types.
//!
//! All validation failures are returned to the caller as `EngineError`
//! values; none of them poison the session, which stays usable after a
//! rejected request.

use crate::board::piece::{PieceId, Side};

/// Errors produced by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A coordinate outside the 10x10 grid.
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: u8, y: u8 },

    /// An operation on a piece that is not in the `Active` lifecycle state.
    #[error("piece {0:?} is not active")]
    NotActive(PieceId),

    /// A piece index that does not name any piece in the roster.
    #[error("no piece with index {0}")]
    UnknownPiece(u8),

    /// A destination outside the legal set, or a command issued in the
    /// wrong phase.
    #[error("move is not legal")]
    InvalidMove,

    /// A move attempted by the side whose turn it is not.
    #[error("it is not {0}'s turn")]
    WrongTurn(Side),

    /// A move request that is neither horizontal nor vertical.
    #[error("pieces may not move diagonally")]
    IllegalDiagonal,

    /// A move request whose destination equals its origin.
    #[error("move has zero length")]
    NoMovement,
}
