//! Per-player move history and the two-square rule.
//!
//! Each player keeps only their two most recent move records, which is
//! exactly the lookback the anti-shuttle rule needs. The forbidden
//! square is computed positionally from those records, never from piece
//! identity.

use serde::{Deserialize, Serialize};

use super::square::Coord;

/// One move: origin and destination squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Coord,
    pub to: Coord,
}

/// A player's two most recent moves, oldest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: [Option<MoveRecord>; 2],
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        MoveHistory::default()
    }

    /// Records a move, evicting the older of the two slots.
    pub fn push(&mut self, record: MoveRecord) {
        self.moves = [self.moves[1], Some(record)];
    }

    /// Returns the most recent move, if any.
    pub fn last(&self) -> Option<MoveRecord> {
        self.moves[1]
    }

    /// Computes the square a piece at `piece_coord` may not move to.
    ///
    /// Given moves a->b then b->a with the queried piece now sitting at
    /// `a`, the forbidden square is `b`: a third reversal is disallowed.
    /// Any other history yields no restriction. The check is positional;
    /// a different piece now occupying `a` inherits the restriction,
    /// matching the rule's original formulation.
    pub fn forbidden_square(&self, piece_coord: Coord) -> Option<Coord> {
        match (self.moves[0], self.moves[1]) {
            (Some(older), Some(newer))
                if older.from == newer.to
                    && older.from == piece_coord
                    && older.to == newer.from =>
            {
                Some(older.to)
            }
            _ => None,
        }
    }
}
