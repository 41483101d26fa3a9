//! Fluent builder for constructing boards.
//!
//! Allows creating arbitrary starting boards piece by piece, including the
//! per-piece flags that castling and en passant depend on.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .moved_piece("a2".parse().unwrap(), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.king_square(Color::White), Some(e1));
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::standard().occupied().collect(),
        }
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.with(square, Piece::new(color, kind))
    }

    /// Place a piece that has already moved (no castling, no double step).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        let mut piece = Piece::new(color, kind);
        piece.mark_moved();
        self.with(square, piece)
    }

    /// Place a pawn that has just made its double step and may be taken en passant.
    #[must_use]
    pub fn en_passant_pawn(self, square: Square, color: Color) -> Self {
        let mut pawn = Piece::new(color, PieceKind::Pawn);
        pawn.mark_moved();
        pawn.set_en_passant_eligible(true);
        self.with(square, pawn)
    }

    /// Place an exact piece, flags included.
    #[must_use]
    pub fn with(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.place(square, piece);
        }
        board
    }
}
