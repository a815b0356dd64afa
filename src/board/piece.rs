//! Piece taxonomy and lifecycle.
//!
//! Defines the two sides, the twelve Stratego ranks with their fixed
//! per-side counts, and the piece lifecycle from creation through
//! capture.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::square::{BoardHalf, Coord};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Blue,
}

/// Both sides, in move order.
pub const ALL_SIDES: [Side; 2] = [Side::Red, Side::Blue];

impl Side {
    /// Returns the opposing side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Returns the board half this side sets up in.
    pub const fn home_half(self) -> BoardHalf {
        match self {
            Side::Red => BoardHalf::Front,
            Side::Blue => BoardHalf::Back,
        }
    }

    /// Index into per-side arrays.
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Blue => write!(f, "Blue"),
        }
    }
}

/// A piece rank.
///
/// The nine fighting ranks carry a numeric strength where lower is
/// stronger; Spy, Bomb, and Flag resolve by special rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Marshal,
    General,
    Colonel,
    Major,
    Captain,
    Lieutenant,
    Sergeant,
    Miner,
    Scout,
    Spy,
    Bomb,
    Flag,
}

/// All ranks, strongest fighting rank first.
pub const ALL_RANKS: [Rank; 12] = [
    Rank::Marshal,
    Rank::General,
    Rank::Colonel,
    Rank::Major,
    Rank::Captain,
    Rank::Lieutenant,
    Rank::Sergeant,
    Rank::Miner,
    Rank::Scout,
    Rank::Spy,
    Rank::Bomb,
    Rank::Flag,
];

impl Rank {
    /// Returns the numeric strength for fighting ranks (1 is strongest),
    /// or `None` for Spy, Bomb, and Flag.
    pub const fn value(self) -> Option<u8> {
        match self {
            Rank::Marshal => Some(1),
            Rank::General => Some(2),
            Rank::Colonel => Some(3),
            Rank::Major => Some(4),
            Rank::Captain => Some(5),
            Rank::Lieutenant => Some(6),
            Rank::Sergeant => Some(7),
            Rank::Miner => Some(8),
            Rank::Scout => Some(9),
            Rank::Spy | Rank::Bomb | Rank::Flag => None,
        }
    }

    /// Returns how many pieces of this rank each side fields.
    pub const fn count(self) -> usize {
        match self {
            Rank::Marshal => 1,
            Rank::General => 1,
            Rank::Colonel => 2,
            Rank::Major => 3,
            Rank::Captain => 4,
            Rank::Lieutenant => 4,
            Rank::Sergeant => 4,
            Rank::Miner => 5,
            Rank::Scout => 8,
            Rank::Spy => 1,
            Rank::Bomb => 6,
            Rank::Flag => 1,
        }
    }

    /// Returns false for Bomb and Flag, which never move.
    pub const fn is_movable(self) -> bool {
        !matches!(self, Rank::Bomb | Rank::Flag)
    }

    /// Returns the rank's display name.
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Marshal => "Marshal",
            Rank::General => "General",
            Rank::Colonel => "Colonel",
            Rank::Major => "Major",
            Rank::Captain => "Captain",
            Rank::Lieutenant => "Lieutenant",
            Rank::Sergeant => "Sergeant",
            Rank::Miner => "Miner",
            Rank::Scout => "Scout",
            Rank::Spy => "Spy",
            Rank::Bomb => "Bomb",
            Rank::Flag => "Flag",
        }
    }

    /// Returns the single-character abbreviation used in board display:
    /// the digit for fighting ranks, 'S', 'B', or 'F' for the specials.
    pub const fn abbrev(self) -> char {
        match self {
            Rank::Marshal => '1',
            Rank::General => '2',
            Rank::Colonel => '3',
            Rank::Major => '4',
            Rank::Captain => '5',
            Rank::Lieutenant => '6',
            Rank::Sergeant => '7',
            Rank::Miner => '8',
            Rank::Scout => '9',
            Rank::Spy => 'S',
            Rank::Bomb => 'B',
            Rank::Flag => 'F',
        }
    }
}

/// A piece's lifecycle state.
///
/// Pieces begin `Created`, become `Active` when placed during setup, and
/// become `Captured` when they lose combat. A piece's coordinate is
/// defined only while `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    Created,
    Active,
    Captured,
}

/// Index of a piece within its side's roster arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

/// A single game piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub rank: Rank,
    pub lifecycle: Lifecycle,
    pub coord: Option<Coord>,
}

impl Piece {
    /// Creates a piece in the `Created` state with no position.
    pub fn new(id: PieceId, side: Side, rank: Rank) -> Self {
        Piece {
            id,
            side,
            rank,
            lifecycle: Lifecycle::Created,
            coord: None,
        }
    }

    /// Returns true if the piece is on the board.
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }
}
