//! Error types for board and move operations.

use std::fmt;

use super::types::{Color, Move, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 1-8
    NoSuchSquare { row: i32, column: i32 },
    /// Malformed algebraic notation (anything but `<a-h><1-8>`)
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::NoSuchSquare { row, column } => {
                write!(f, "No square at row {row}, column {column} (both must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error returned when a move cannot be applied to a game.
///
/// A game that returns this error has not been modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// There is no piece on the origin square
    EmptySquare { square: Square },
    /// The piece on the origin square belongs to the side not on move
    WrongSide { square: Square, to_move: Color },
    /// The move is not among the legal moves of the piece
    NotLegal { mv: Move },
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::EmptySquare { square } => {
                write!(f, "Illegal move: no piece on {square}")
            }
            IllegalMove::WrongSide { square, to_move } => {
                write!(f, "Illegal move: piece on {square} does not belong to {to_move}")
            }
            IllegalMove::NotLegal { mv } => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// One of the two squares is malformed
    InvalidSquare(SquareError),
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare(err) => write!(f, "{err}"),
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::InvalidSquare(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveParseError {
    fn from(err: SquareError) -> Self {
        MoveParseError::InvalidSquare(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_square_error_no_such_square() {
        let err = SquareError::NoSuchSquare { row: 9, column: 0 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_illegal_move_empty_square() {
        let err = IllegalMove::EmptySquare { square: sq("e4") };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_illegal_move_wrong_side() {
        let err = IllegalMove::WrongSide {
            square: sq("e7"),
            to_move: Color::White,
        };
        assert!(err.to_string().contains("e7"));
        assert!(err.to_string().contains("White"));
    }

    #[test]
    fn test_illegal_move_not_legal() {
        let err = IllegalMove::NotLegal {
            mv: Move::with_promotion(sq("a7"), sq("a8"), PieceKind::Queen),
        };
        assert!(err.to_string().contains("a7a8q"));
    }

    #[test]
    fn test_move_parse_error_wraps_square_error() {
        use std::error::Error;

        let err: MoveParseError = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        }
        .into();
        assert!(err.to_string().contains("z9"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_clone() {
        let err = MoveParseError::InvalidPromotion { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
