//! Coordinate and move notation.
//!
//! Squares are written as a file letter and a rank number, `a1` through
//! `j10`: the letter is the x component (a = 1) and the number is the y
//! component. Moves are written `from-to`, e.g. `e7-e6`. This is a
//! display and command notation only; it defines no save format.

use crate::board::{Coord, MoveRecord, BOARD_SIZE};

/// Errors produced when parsing notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("invalid square notation: '{0}'")]
    InvalidSquare(String),

    #[error("invalid move notation: '{0}'")]
    InvalidMove(String),
}

/// Formats a coordinate, e.g. `a1` or `j10`.
pub fn format_coord(coord: Coord) -> String {
    let file = (b'a' + coord.x - 1) as char;
    format!("{}{}", file, coord.y)
}

/// Parses a coordinate from notation like `e5`.
pub fn parse_coord(s: &str) -> Result<Coord, NotationError> {
    let err = || NotationError::InvalidSquare(s.to_string());
    let mut chars = s.chars();
    let file = chars.next().ok_or_else(err)?;
    if !file.is_ascii_lowercase() {
        return Err(err());
    }
    let x = (file as u8) - b'a' + 1;
    let y: u8 = chars.as_str().parse().map_err(|_| err())?;
    if x > BOARD_SIZE {
        return Err(err());
    }
    Coord::new(x, y).map_err(|_| err())
}

/// Formats a move record, e.g. `e7-e6`.
pub fn format_move(record: MoveRecord) -> String {
    format!("{}-{}", format_coord(record.from), format_coord(record.to))
}

/// Parses a move from notation like `e7-e6` into (from, to).
pub fn parse_move(s: &str) -> Result<(Coord, Coord), NotationError> {
    let (from, to) = s
        .split_once('-')
        .ok_or_else(|| NotationError::InvalidMove(s.to_string()))?;
    Ok((parse_coord(from)?, parse_coord(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn every_square_round_trips() {
        for x in 1..=BOARD_SIZE {
            for y in 1..=BOARD_SIZE {
                let c = coord(x, y);
                assert_eq!(parse_coord(&format_coord(c)), Ok(c));
            }
        }
    }

    #[test]
    fn corner_squares_format_as_expected() {
        assert_eq!(format_coord(coord(1, 1)), "a1");
        assert_eq!(format_coord(coord(10, 10)), "j10");
        assert_eq!(format_coord(coord(5, 7)), "e7");
    }

    #[test]
    fn junk_squares_rejected() {
        for s in ["", "a", "11", "k1", "a0", "a11", "A5", "e5x"] {
            assert!(parse_coord(s).is_err(), "accepted '{}'", s);
        }
    }

    #[test]
    fn move_notation_round_trips() {
        let record = MoveRecord {
            from: coord(5, 7),
            to: coord(5, 6),
        };
        assert_eq!(format_move(record), "e7-e6");
        assert_eq!(parse_move("e7-e6"), Ok((coord(5, 7), coord(5, 6))));
    }

    #[test]
    fn junk_moves_rejected() {
        for s in ["", "e7", "e7 e6", "e7-k1", "-e6"] {
            assert!(parse_move(s).is_err(), "accepted '{}'", s);
        }
    }
}
