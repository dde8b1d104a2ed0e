//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1. Components are
/// signed so that off-board coordinates can be represented and rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i32, pub i32); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let sq = Square(row, col);
        sq.is_valid().then_some(sq)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i32 {
        self.1
    }

    /// True when both components lie in `0..8`.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 0 && self.0 < 8 && self.1 >= 0 && self.1 < 8
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square((idx / 8) as i32, (idx % 8) as i32)
    }

    /// Square shifted by a (row, col) delta. May be off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Square(self.0 + d_row, self.1 + d_col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        if !(0..8).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if !(0..8).contains(&col) {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file.to_ascii_lowercase() {
            f @ 'a'..='h' => f as i32 - 'a' as i32,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as i32 - '0' as i32),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
