//! Core types for the invasion simulation
//!
//! Directions double as bit flags inside a direction mask.

use std::fmt;
use std::str::FromStr;

use super::error::InvasionError;

/// Mask bit for a road to the east
pub const EAST: u8 = 1;
/// Mask bit for a road to the west
pub const WEST: u8 = 2;
/// Mask bit for a road to the north
pub const NORTH: u8 = 4;
/// Mask bit for a road to the south
pub const SOUTH: u8 = 8;

/// One of the four compass directions a road can leave a city in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// All directions in mask bit order
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// The mask bit for this direction
    pub fn bit(self) -> u8 {
        match self {
            Direction::East => EAST,
            Direction::West => WEST,
            Direction::North => NORTH,
            Direction::South => SOUTH,
        }
    }

    /// The direction a road points back from the neighbor
    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    /// Slot of this direction in a node's neighbor array
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::East => 0,
            Direction::West => 1,
            Direction::North => 2,
            Direction::South => 3,
        }
    }

    /// Keyword used by the textual map format
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
            Direction::South => "south",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Direction {
    type Err = InvasionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            other => Err(InvasionError::InvalidInput(format!(
                "unknown direction '{}'",
                other
            ))),
        }
    }
}
