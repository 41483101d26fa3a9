//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `Color`, `PieceKind` and `Piece` - piece identity plus per-piece flags
//! - `Square` - a validated (row, column) coordinate
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::{on_board, Square};

pub(crate) use piece::PROMOTION_CHOICES;
