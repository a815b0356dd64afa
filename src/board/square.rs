//! Board geometry: coordinates, terrain, and starting halves.
//!
//! The board is a fixed 10x10 grid with 1-based coordinates. Eight lake
//! squares in the middle two rows are impassable for the life of a game.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 10;

/// A square's terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Normal,
    Lake,
}

/// A board coordinate with components in [1, 10].
///
/// Construction is bounds-checked; a `Coord` value is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Creates a coordinate, rejecting components outside [1, 10].
    pub fn new(x: u8, y: u8) -> Result<Coord, EngineError> {
        if (1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y) {
            Ok(Coord { x, y })
        } else {
            Err(EngineError::OutOfBounds { x, y })
        }
    }

    /// Returns the adjacent coordinate in the given direction, or `None`
    /// at the board edge.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let (dx, dy) = dir.delta();
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (1..=BOARD_SIZE as i8).contains(&x) && (1..=BOARD_SIZE as i8).contains(&y) {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Returns the up-to-4 orthogonally adjacent coordinates.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coord> {
        ALL_DIRECTIONS.iter().filter_map(move |&d| self.step(d))
    }
}

/// A cardinal direction on the grid. `North` is toward row 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// All four cardinal directions.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    /// Returns the (dx, dy) step for this direction.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// One of the two 40-square setup areas.
///
/// `Front` is rows 7-10, `Back` is rows 1-4. The middle two rows belong
/// to neither half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardHalf {
    Front,
    Back,
}

/// The 10x10 playing board.
///
/// Pure terrain data; piece positions live in the rosters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    terrain: [[Terrain; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates the standard board with lakes at x in {3,4,7,8}, y in {5,6}.
    pub fn new() -> Self {
        let mut terrain = [[Terrain::Normal; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for y in [5u8, 6] {
            for x in [3u8, 4, 7, 8] {
                terrain[y as usize - 1][x as usize - 1] = Terrain::Lake;
            }
        }
        Board { terrain }
    }

    /// Returns the terrain at a coordinate.
    pub fn terrain(&self, coord: Coord) -> Terrain {
        self.terrain[coord.y as usize - 1][coord.x as usize - 1]
    }

    /// Returns the terrain at raw components, rejecting out-of-range values.
    pub fn terrain_at(&self, x: u8, y: u8) -> Result<Terrain, EngineError> {
        let coord = Coord::new(x, y)?;
        Ok(self.terrain(coord))
    }

    /// Returns true if the coordinate is a lake square.
    pub fn is_lake(&self, coord: Coord) -> bool {
        self.terrain(coord) == Terrain::Lake
    }

    /// Returns the 40 setup squares for a board half, column-major from
    /// the left edge.
    pub fn starting_squares(&self, half: BoardHalf) -> Vec<Coord> {
        let rows = match half {
            BoardHalf::Front => 7u8..=10,
            BoardHalf::Back => 1u8..=4,
        };
        let mut squares = Vec::with_capacity(40);
        for x in 1..=BOARD_SIZE {
            for y in rows.clone() {
                squares.push(Coord { x, y });
            }
        }
        squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
