//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::board::error::SquareError;

/// Returns true if (row, column) names a square of the 8x8 board (both 1-8).
#[inline]
#[must_use]
pub const fn on_board(row: i32, column: i32) -> bool {
    row >= 1 && row <= 8 && column >= 1 && column <= 8
}

/// A square on the chess board, 1-indexed as (row, column).
///
/// Row 1 is White's back rank, column 1 is the a-file. A `Square` always
/// names a real square; out-of-range coordinates are rejected by
/// [`Square::new`] and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Square {
    row: u8,
    column: u8,
}

/// Deserializing goes through [`Square::new`], so off-board coordinates are
/// rejected instead of stored.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawSquare {
            row: i32,
            column: i32,
        }

        let raw = RawSquare::deserialize(deserializer)?;
        Square::new(raw.row, raw.column).map_err(serde::de::Error::custom)
    }
}

impl Square {
    /// Create a new square with bounds checking
    pub fn new(row: i32, column: i32) -> Result<Self, SquareError> {
        if on_board(row, column) {
            Ok(Square::at(row as u8, column as u8))
        } else {
            Err(SquareError::NoSuchSquare { row, column })
        }
    }

    /// Caller guarantees both coordinates are 1-8.
    #[inline]
    pub(crate) const fn at(row: u8, column: u8) -> Self {
        Square { row, column }
    }

    /// Get the row (1-8, where 1 = White's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Get the column (1-8, where 1 = file a)
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// The square `d_row` rows and `d_column` columns away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i32, d_column: i32) -> Option<Square> {
        let row = i32::from(self.row) + d_row;
        let column = i32::from(self.column) + d_column;
        if on_board(row, column) {
            Some(Square::at(row as u8, column as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order (a1, b1, ..., h1, a2, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |column| Square::at(row, column)))
    }

    #[inline]
    pub(crate) const fn grid_index(self) -> (usize, usize) {
        (self.row as usize - 1, self.column as usize - 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.column - 1 + b'a') as char, self.row)
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = SquareError;

    fn try_from((row, column): (i32, i32)) -> Result<Self, Self::Error> {
        Square::new(row, column)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let column = match chars[0].to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a' + 1,
            _ => return Err(invalid()),
        };

        let row = match chars[1] {
            c @ '1'..='8' => c as u8 - b'0',
            _ => return Err(invalid()),
        };

        Ok(Square::at(row, column))
    }
}
