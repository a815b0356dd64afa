//! Legal move generation.
//!
//! Computes the set of squares a piece may move or strike to, given both
//! sides' occupancy, the board terrain, and the forbidden square from
//! the two-square rule. Pure queries; nothing here mutates state.

use crate::board::{Board, Coord, MoveHistory, Piece, Rank, Roster, ALL_DIRECTIONS};
use crate::error::EngineError;

/// Returns every square the piece may legally move or strike to.
///
/// Bomb and Flag yield the empty set. Step pieces reach their orthogonal
/// neighbors; the Scout slides along each cardinal direction until
/// obstructed. Squares holding an enemy piece are included and represent
/// a strike. The forbidden square, lake squares, and own-occupied
/// squares are never included.
pub fn legal_destinations(
    piece: &Piece,
    own: &Roster,
    enemy: &Roster,
    board: &Board,
    forbidden: Option<Coord>,
) -> Result<Vec<Coord>, EngineError> {
    let coord = match piece.coord {
        Some(c) if piece.is_active() => c,
        _ => return Err(EngineError::NotActive(piece.id)),
    };

    if !piece.rank.is_movable() {
        return Ok(Vec::new());
    }

    if piece.rank == Rank::Scout {
        Ok(scout_destinations(coord, own, enemy, board, forbidden))
    } else {
        Ok(step_destinations(coord, own, board, forbidden))
    }
}

/// Destinations for a single-step piece: the open orthogonal neighbors.
fn step_destinations(
    coord: Coord,
    own: &Roster,
    board: &Board,
    forbidden: Option<Coord>,
) -> Vec<Coord> {
    coord
        .orthogonal_neighbors()
        .filter(|&dest| !board.is_lake(dest) && !own.is_occupied(dest) && Some(dest) != forbidden)
        .collect()
}

/// Destinations for the Scout: four outward rays.
///
/// Each ray extends over empty squares and ends either at the board
/// edge, just before an obstruction (lake, own piece, or the forbidden
/// square), or on the first enemy piece, which is included as a strike.
fn scout_destinations(
    coord: Coord,
    own: &Roster,
    enemy: &Roster,
    board: &Board,
    forbidden: Option<Coord>,
) -> Vec<Coord> {
    let mut destinations = Vec::new();
    for dir in ALL_DIRECTIONS {
        let mut cursor = coord;
        while let Some(next) = cursor.step(dir) {
            if board.is_lake(next) || own.is_occupied(next) || Some(next) == forbidden {
                break;
            }
            destinations.push(next);
            if enemy.is_occupied(next) {
                break;
            }
            cursor = next;
        }
    }
    destinations
}

/// Returns true if the side has at least one active piece with a legal move.
///
/// A side for which this is false at the start of its turn has lost.
pub fn side_has_movable_piece(
    own: &Roster,
    enemy: &Roster,
    board: &Board,
    history: &MoveHistory,
) -> bool {
    own.active_pieces().any(|piece| {
        let forbidden = piece.coord.and_then(|c| history.forbidden_square(c));
        legal_destinations(piece, own, enemy, board, forbidden)
            .map(|dests| !dests.is_empty())
            .unwrap_or(false)
    })
}
