//! Chess board representation and move generation.
//!
//! A mailbox board of optional pieces, with one pseudo-legal move generator
//! per piece kind and the routine that performs a move with all of its side
//! effects (castling rook, en passant capture, promotion, piece flags).
//! Legality filtering lives in [`Game`](crate::Game).
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let board = Board::standard();
//! let e2 = "e2".parse().unwrap();
//! println!("e2 pawn has {} candidate moves", board.pseudo_legal_moves(e2).len());
//! assert!(!board.is_attacked(board.king_square(Color::White).unwrap(), Color::Black));
//! ```

mod builder;
mod error;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{IllegalMove, MoveParseError, SquareError};
pub use state::Board;
pub use types::{on_board, Color, Move, MoveList, Piece, PieceKind, Square};

pub(crate) use types::PROMOTION_CHOICES;
