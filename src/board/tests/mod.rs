//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against published perft results
//! - `edge_cases.rs` - Special positions and special moves
//! - `proptest.rs` - Property-based tests over random playouts


use crate::board::{Board, Color, Piece, PieceKind, Square};

/// Builds a board from the piece-placement field of a FEN string.
///
/// Kings and rooks start unmoved so castling depends only on where they
/// stand. Pawns off their starting rank are marked as moved.
pub(super) fn position(placement: &str) -> Board {
    let mut board = Board::empty();
    for (i, rank) in placement.split('/').enumerate() {
        let row = 8 - i as i32;
        let mut column = 1;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                column += skip as i32;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = PieceKind::from_char(c).unwrap();
            let square = Square::new(row, column).unwrap();
            let mut piece = Piece::new(color, kind);
            if kind == PieceKind::Pawn && square.row() != color.pawn_start_rank() {
                piece.mark_moved();
            }
            board.place(square, piece);
            column += 1;
        }
    }
    board
}

/// Flags the pawn on `square` as having just made its double step.
pub(super) fn with_en_passant(mut board: Board, square: &str) -> Board {
    let square: Square = square.parse().unwrap();
    let mut pawn = board.remove(square).unwrap();
    pawn.set_en_passant_eligible(true);
    board.place(square, pawn);
    board
}

#[test]
fn test_position_matches_standard() {
    assert_eq!(
        position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        Board::standard()
    );
}
