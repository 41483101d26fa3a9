use std::fmt;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STANDARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (i, &kind) in BACK_RANK.iter().enumerate() {
        let column = i as u8 + 1;
        for color in Color::BOTH {
            board.place(
                Square::at(color.back_rank(), column),
                Piece::new(color, kind),
            );
            board.place(
                Square::at(color.pawn_start_rank(), column),
                Piece::new(color, PieceKind::Pawn),
            );
        }
    }
    board
});

/// An 8x8 grid of optional pieces.
///
/// The board owns its pieces by value, so `clone()` is a deep copy: flag
/// changes on a copy never reach the original. Nothing here checks legality;
/// `place` and `remove` are raw edits used both by real play and by
/// hypothetical simulation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard starting layout.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Put `piece` on `square`, replacing whatever stood there.
    pub fn place(&mut self, square: Square, piece: Piece) {
        let (r, c) = square.grid_index();
        self.squares[r][c] = Some(piece);
    }

    /// Clear `square`, returning the piece that stood there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let (r, c) = square.grid_index();
        self.squares[r][c].take()
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (r, c) = square.grid_index();
        self.squares[r][c]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Every square occupied by `color`, in row-major order.
    #[must_use]
    pub fn pieces_of(&self, color: Color) -> Vec<Square> {
        self.occupied()
            .filter(|(_, piece)| piece.color() == color)
            .map(|(square, _)| square)
            .collect()
    }

    /// All occupied squares with their pieces, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// The square of `color`'s king, if it has one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, piece)| piece.is(color, PieceKind::King))
            .map(|(square, _)| square)
    }

    /// Clear the en passant flag of every piece on the board.
    pub fn clear_en_passant_flags(&mut self) {
        for piece in self.squares.iter_mut().flatten().flatten() {
            piece.set_en_passant_eligible(false);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

/// Rows 8 down to 1, each cell `|`-separated; White uppercase, Black lowercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8u8).rev() {
            write!(f, "|")?;
            for column in 1..=8u8 {
                let cell = self
                    .piece_at(Square::at(row, column))
                    .map_or(' ', Piece::to_char);
                write!(f, "{cell}|")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
