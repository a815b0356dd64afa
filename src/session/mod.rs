//! Game session state machine.
//!
//! Owns both rosters, both move histories, and the board, and drives the
//! game through setup, alternating play, and the finished state. All
//! mutation goes through `apply_move` and the setup commands; every
//! request is validated defensively even though a well-behaved UI only
//! offers legal choices.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, MoveHistory, MoveRecord, PieceId, Rank, Roster, Side};
use crate::error::EngineError;
use crate::movegen::{legal_destinations, side_has_movable_piece};
use crate::resolve::{resolve, Outcome};

/// The session's phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Setup,
    InPlay,
    Finished,
}

/// A resolved strike, reported to the caller for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    pub attacker: Rank,
    pub defender: Rank,
    pub outcome: Outcome,
}

/// The result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveApplied {
    pub record: MoveRecord,
    /// Present when the destination held an enemy piece.
    pub strike: Option<Strike>,
    pub phase: GamePhase,
    pub winner: Option<Side>,
}

/// A two-player Stratego game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    rosters: [Roster; 2],
    histories: [MoveHistory; 2],
    phase: GamePhase,
    active: Side,
    winner: Option<Side>,
}

impl GameSession {
    /// Creates a new game in the setup phase. Red sets up in the front
    /// half and moves first.
    pub fn new_game() -> Self {
        GameSession {
            board: Board::new(),
            rosters: [Roster::new(Side::Red), Roster::new(Side::Blue)],
            histories: [MoveHistory::new(), MoveHistory::new()],
            phase: GamePhase::Setup,
            active: Side::Red,
            winner: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a side's roster.
    pub fn roster(&self, side: Side) -> &Roster {
        &self.rosters[side.index()]
    }

    fn roster_mut(&mut self, side: Side) -> &mut Roster {
        &mut self.rosters[side.index()]
    }

    /// Returns a side's move history.
    pub fn history(&self, side: Side) -> &MoveHistory {
        &self.histories[side.index()]
    }

    /// Returns the current phase.
    pub fn current_phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the winner once the game is finished.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Returns the side whose turn it is.
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// Places a piece on one of its side's starting squares during setup.
    pub fn place_piece(
        &mut self,
        side: Side,
        id: PieceId,
        coord: Coord,
    ) -> Result<(), EngineError> {
        if self.phase != GamePhase::Setup {
            return Err(EngineError::InvalidMove);
        }
        if !self
            .board
            .starting_squares(side.home_half())
            .contains(&coord)
        {
            return Err(EngineError::InvalidMove);
        }
        self.roster_mut(side).place(id, coord)
    }

    /// Swaps two of a side's placed pieces during setup.
    pub fn swap_pieces(
        &mut self,
        side: Side,
        a: PieceId,
        b: PieceId,
    ) -> Result<(), EngineError> {
        if self.phase != GamePhase::Setup {
            return Err(EngineError::InvalidMove);
        }
        self.roster_mut(side).swap(a, b)
    }

    /// Places a side's full roster on a random permutation of its
    /// starting squares.
    pub fn random_setup(&mut self, side: Side, rng: &mut impl Rng) -> Result<(), EngineError> {
        if self.phase != GamePhase::Setup {
            return Err(EngineError::InvalidMove);
        }
        let mut squares = self.board.starting_squares(side.home_half());
        squares.shuffle(rng);
        self.roster_mut(side).arrange(&squares)
    }

    /// Leaves setup once both sides have placed all 40 pieces.
    pub fn finish_setup(&mut self) -> Result<(), EngineError> {
        if self.phase != GamePhase::Setup {
            return Err(EngineError::InvalidMove);
        }
        if !self.rosters.iter().all(Roster::all_placed) {
            return Err(EngineError::InvalidMove);
        }
        self.phase = GamePhase::InPlay;
        Ok(())
    }

    /// Returns the legal destinations for one of a side's pieces.
    ///
    /// Pure query; uses the side's own forbidden square. Only valid
    /// while the game is in play.
    pub fn legal_destinations(
        &self,
        side: Side,
        id: PieceId,
    ) -> Result<Vec<Coord>, EngineError> {
        if self.phase != GamePhase::InPlay {
            return Err(EngineError::InvalidMove);
        }
        let piece = self.roster(side).piece(id)?;
        let from = piece.coord.ok_or(EngineError::NotActive(id))?;
        let forbidden = self.history(side).forbidden_square(from);
        legal_destinations(
            piece,
            self.roster(side),
            self.roster(side.opponent()),
            &self.board,
            forbidden,
        )
    }

    /// Applies one move for the active side.
    ///
    /// Validates phase, turn, piece state, move shape, and membership in
    /// the legal-destination set before touching any state; a rejected
    /// request leaves the session unchanged. On success the turn passes
    /// to the opponent unless the game ended.
    pub fn apply_move(
        &mut self,
        side: Side,
        id: PieceId,
        dest: Coord,
    ) -> Result<MoveApplied, EngineError> {
        if self.phase != GamePhase::InPlay {
            return Err(EngineError::InvalidMove);
        }
        if side != self.active {
            return Err(EngineError::WrongTurn(side));
        }
        let piece = *self.roster(side).piece(id)?;
        let from = piece.coord.ok_or(EngineError::NotActive(id))?;
        if dest == from {
            return Err(EngineError::NoMovement);
        }
        if dest.x != from.x && dest.y != from.y {
            return Err(EngineError::IllegalDiagonal);
        }

        let legal = self.legal_destinations(side, id)?;
        if !legal.contains(&dest) {
            return Err(EngineError::InvalidMove);
        }

        let opponent = side.opponent();
        let defender = self
            .roster(opponent)
            .piece_at(dest)
            .map(|p| (p.id, p.rank));

        let strike = match defender {
            None => {
                self.roster_mut(side).move_to(id, dest)?;
                None
            }
            Some((def_id, def_rank)) => {
                let outcome = resolve(piece.rank, def_rank);
                match outcome {
                    Outcome::AttackerWins | Outcome::FlagCaptured => {
                        self.roster_mut(opponent).capture(def_id)?;
                        self.roster_mut(side).move_to(id, dest)?;
                    }
                    Outcome::DefenderWins => {
                        self.roster_mut(side).capture(id)?;
                    }
                    Outcome::BothDie => {
                        self.roster_mut(side).capture(id)?;
                        self.roster_mut(opponent).capture(def_id)?;
                    }
                }
                Some(Strike {
                    attacker: piece.rank,
                    defender: def_rank,
                    outcome,
                })
            }
        };

        let record = MoveRecord { from, to: dest };
        self.histories[side.index()].push(record);

        let flag_captured = matches!(
            strike,
            Some(Strike {
                outcome: Outcome::FlagCaptured,
                ..
            })
        );
        if flag_captured {
            self.phase = GamePhase::Finished;
            self.winner = Some(side);
        } else if !side_has_movable_piece(
            self.roster(opponent),
            self.roster(side),
            &self.board,
            self.history(opponent),
        ) {
            // The opponent has nothing left to move; the mover wins.
            self.phase = GamePhase::Finished;
            self.winner = Some(side);
        } else {
            self.active = opponent;
        }

        Ok(MoveApplied {
            record,
            strike,
            phase: self.phase,
            winner: self.winner,
        })
    }

    /// Returns true if the side has any piece with a legal move.
    pub fn has_movable_piece(&self, side: Side) -> bool {
        side_has_movable_piece(
            self.roster(side),
            self.roster(side.opponent()),
            &self.board,
            self.history(side),
        )
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new_game()
    }
}
