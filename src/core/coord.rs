//! Grid coordinates and orthogonal directions.
//!
//! Coordinates are `(row, col)` with row 0 at the top. They are signed so a
//! shortcut such as "two rows up from row 0" yields an off-board coordinate
//! that fails ordinary bounds validation instead of underflowing.

use serde::{Deserialize, Serialize};

/// A `(row, col)` position on a board grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate `steps` slots away in `direction`, or `None` if it
    /// falls outside the `i32` range.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: i32) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_add(dr.checked_mul(steps)?)?,
            col: self.col.checked_add(dc.checked_mul(steps)?)?,
        })
    }

    /// Manhattan distance to `other`, saturating at `u32::MAX`.
    #[must_use]
    pub const fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row).saturating_add(self.col.abs_diff(other.col))
    }

    /// The slot jumped over when moving from `self` to `other`.
    ///
    /// Only defined for a pair sharing exactly one axis at distance exactly 2;
    /// returns `None` for diagonal, zero-length, or any other distance.
    ///
    /// ```
    /// use peg_solitaire::core::Coord;
    ///
    /// assert_eq!(Coord::new(1, 3).midpoint(Coord::new(3, 3)), Some(Coord::new(2, 3)));
    /// assert_eq!(Coord::new(1, 3).midpoint(Coord::new(3, 5)), None);
    /// assert_eq!(Coord::new(1, 3).midpoint(Coord::new(1, 6)), None);
    /// ```
    #[must_use]
    pub const fn midpoint(self, other: Coord) -> Option<Coord> {
        let same_row = self.row == other.row;
        let same_col = self.col == other.col;
        if same_row == same_col || self.manhattan(other) != 2 {
            return None;
        }
        // Distance is 2, so the half step cannot overflow
        Some(Coord {
            row: self.row + (other.row - self.row) / 2,
            col: self.col + (other.col - self.col) / 2,
        })
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal jump directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order move scans visit them.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(row, col)` unit step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Parse a direction word; accepts full names and single-letter forms.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Direction> {
        match word {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(word)
    }
}
