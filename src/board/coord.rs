//! Board coordinates.
//!
//! A coordinate is an `(x, y)` pair in the board's native system: `x` is the
//! horizontal axis (the diagonal index on a hex board, the column on a square
//! board) and `y` is the row counted from the top.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A location on the board in native coordinates.
///
/// The derived ordering compares `x` first and `y` second. Strategies rely on
/// this ordering to break ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate shifted by the given offset.
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error returned when a coordinate string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected two integers 'x y', got '{0}'")]
pub struct ParseCoordError(pub String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses `"x y"`, `"x,y"` or `"(x, y)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .chars()
            .map(|c| if c == ',' || c == '(' || c == ')' { ' ' } else { c })
            .collect();
        let mut parts = cleaned.split_whitespace();
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseCoordError(s.trim().to_string()));
        };
        match (x.parse::<i32>(), y.parse::<i32>()) {
            (Ok(x), Ok(y)) => Ok(Coord::new(x, y)),
            _ => Err(ParseCoordError(s.trim().to_string())),
        }
    }
}
