//! Cardinal step directions.

use std::fmt;

use crate::point::Point;

/// One of the four cardinal unit steps.
///
/// The discriminants give the clockwise cycle order starting at North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// `(0, +1)`
    North = 0,
    /// `(+1, 0)`
    East = 1,
    /// `(0, -1)`
    South = 2,
    /// `(-1, 0)`
    West = 3,
}

impl Direction {
    /// All four directions in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the zero-based cycle index (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Unit step vector for this direction.
    pub fn step(self) -> Point {
        match self {
            Self::North => Point::new(0, 1),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, -1),
            Self::West => Point::new(-1, 0),
        }
    }

    /// Next direction in the clockwise cycle (West wraps to North).
    pub fn clockwise(self) -> Direction {
        Self::ALL[(self.as_index() + 1) % Self::ALL.len()]
    }

    /// Parses a single-letter cardinal label (`N`, `E`, `S`, `W`).
    ///
    /// Surrounding whitespace is ignored; anything else returns `None`.
    pub fn from_label(label: &str) -> Option<Direction> {
        match label.trim() {
            "N" => Some(Self::North),
            "E" => Some(Self::East),
            "S" => Some(Self::South),
            "W" => Some(Self::West),
            _ => None,
        }
    }

    /// Single-letter label for this direction.
    pub fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
