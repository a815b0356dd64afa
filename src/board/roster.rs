//! Per-side piece rosters.
//!
//! Each side owns exactly 40 pieces with the fixed Stratego rank
//! multiset, stored in an arena indexed by `PieceId`. The roster answers
//! occupancy queries and applies lifecycle transitions; it never gains
//! or loses members.

use super::piece::{Lifecycle, Piece, PieceId, Rank, Side, ALL_RANKS};
use super::square::Coord;
use crate::error::EngineError;

/// A side's 40-piece arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    side: Side,
    pieces: Vec<Piece>,
}

impl Roster {
    /// Creates the full roster for a side, all pieces `Created`.
    ///
    /// Pieces are laid out rank by rank in `ALL_RANKS` order, so the Flag
    /// is always the last arena slot.
    pub fn new(side: Side) -> Self {
        let mut pieces = Vec::with_capacity(40);
        for rank in ALL_RANKS {
            for _ in 0..rank.count() {
                let id = PieceId(pieces.len() as u8);
                pieces.push(Piece::new(id, side, rank));
            }
        }
        Roster { side, pieces }
    }

    /// Returns the owning side.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Looks up a piece by arena index.
    pub fn piece(&self, id: PieceId) -> Result<&Piece, EngineError> {
        self.pieces
            .get(id.0 as usize)
            .ok_or(EngineError::UnknownPiece(id.0))
    }

    fn piece_mut(&mut self, id: PieceId) -> Result<&mut Piece, EngineError> {
        self.pieces
            .get_mut(id.0 as usize)
            .ok_or(EngineError::UnknownPiece(id.0))
    }

    /// Returns all 40 pieces, in arena order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Iterates over the pieces currently on the board.
    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_active())
    }

    /// Returns the active piece at a coordinate, if any.
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.active_pieces().find(|p| p.coord == Some(coord))
    }

    /// Returns true if an active piece of this side occupies the coordinate.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_some()
    }

    /// Returns true once every piece has been placed.
    pub fn all_placed(&self) -> bool {
        self.pieces
            .iter()
            .all(|p| p.lifecycle != Lifecycle::Created)
    }

    /// Places a piece during setup, activating it at the coordinate.
    ///
    /// A `Created` piece is activated; an already-`Active` piece is
    /// repositioned. The target square must not hold another own piece.
    pub fn place(&mut self, id: PieceId, coord: Coord) -> Result<(), EngineError> {
        match self.piece_at(coord) {
            Some(occupant) if occupant.id != id => return Err(EngineError::InvalidMove),
            _ => {}
        }
        let piece = self.piece_mut(id)?;
        if piece.lifecycle == Lifecycle::Captured {
            return Err(EngineError::NotActive(id));
        }
        piece.lifecycle = Lifecycle::Active;
        piece.coord = Some(coord);
        Ok(())
    }

    /// Activates every piece at once, one square per arena slot.
    ///
    /// Used for bulk setup. Requires exactly 40 distinct squares and no
    /// captured pieces; any prior placement is overwritten.
    pub fn arrange(&mut self, squares: &[Coord]) -> Result<(), EngineError> {
        if squares.len() != self.pieces.len() {
            return Err(EngineError::InvalidMove);
        }
        for (i, square) in squares.iter().enumerate() {
            if squares[..i].contains(square) {
                return Err(EngineError::InvalidMove);
            }
        }
        if self.pieces.iter().any(|p| p.lifecycle == Lifecycle::Captured) {
            return Err(EngineError::InvalidMove);
        }
        for (piece, square) in self.pieces.iter_mut().zip(squares) {
            piece.lifecycle = Lifecycle::Active;
            piece.coord = Some(*square);
        }
        Ok(())
    }

    /// Swaps the positions of two active pieces.
    pub fn swap(&mut self, a: PieceId, b: PieceId) -> Result<(), EngineError> {
        let coord_a = self.require_active(a)?;
        let coord_b = self.require_active(b)?;
        self.piece_mut(a)?.coord = Some(coord_b);
        self.piece_mut(b)?.coord = Some(coord_a);
        Ok(())
    }

    /// Moves an active piece to a new coordinate.
    pub fn move_to(&mut self, id: PieceId, coord: Coord) -> Result<(), EngineError> {
        self.require_active(id)?;
        self.piece_mut(id)?.coord = Some(coord);
        Ok(())
    }

    /// Transitions an active piece to `Captured`, clearing its coordinate.
    pub fn capture(&mut self, id: PieceId) -> Result<(), EngineError> {
        self.require_active(id)?;
        let piece = self.piece_mut(id)?;
        piece.lifecycle = Lifecycle::Captured;
        piece.coord = None;
        Ok(())
    }

    /// Returns the coordinate of an active piece, or `NotActive`.
    fn require_active(&self, id: PieceId) -> Result<Coord, EngineError> {
        let piece = self.piece(id)?;
        piece.coord.ok_or(EngineError::NotActive(id))
    }

    /// Counts pieces of the given rank, any lifecycle state.
    pub fn rank_count(&self, rank: Rank) -> usize {
        self.pieces.iter().filter(|p| p.rank == rank).count()
    }
}
