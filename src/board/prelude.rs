//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = Game::new();
//! game.apply_move("e2e4".parse().unwrap()).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! ```

pub use super::{
    Board, BoardBuilder, Color, IllegalMove, Move, MoveList, MoveParseError, Piece, PieceKind,
    Square, SquareError,
};
pub use crate::game::{Game, GameStatus};
