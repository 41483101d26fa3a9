use super::super::{Board, Move, MoveList, Piece, PieceKind, Square};
use super::Generation;

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Column the king starts on (file e)
pub(crate) const KING_HOME_COLUMN: u8 = 5;

/// One castling direction, described by columns on the king's back rank.
struct CastlingSide {
    rook_column: u8,
    between: &'static [u8],
    passes: u8,
    lands: u8,
}

const KINGSIDE: CastlingSide = CastlingSide {
    rook_column: 8,
    between: &[6, 7],
    passes: 6,
    lands: 7,
};

const QUEENSIDE: CastlingSide = CastlingSide {
    rook_column: 1,
    between: &[2, 3, 4],
    passes: 4,
    lands: 3,
};

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        king: Piece,
        generation: Generation,
        moves: &mut MoveList,
    ) {
        self.generate_step_moves(from, king.color(), &KING_OFFSETS, moves);

        if generation == Generation::Moves {
            for side in [&KINGSIDE, &QUEENSIDE] {
                if self.can_castle(from, king, side) {
                    moves.push(Move::new(from, Square::at(from.row(), side.lands)));
                }
            }
        }
    }

    fn can_castle(&self, from: Square, king: Piece, side: &CastlingSide) -> bool {
        let color = king.color();
        let row = color.back_rank();
        if king.has_moved() || from != Square::at(row, KING_HOME_COLUMN) {
            return false;
        }

        let rook_ready = self
            .piece_at(Square::at(row, side.rook_column))
            .is_some_and(|rook| rook.is(color, PieceKind::Rook) && !rook.has_moved());
        if !rook_ready {
            return false;
        }

        if !side.between.iter().all(|&c| self.is_empty(Square::at(row, c))) {
            return false;
        }

        let opponent = color.opponent();
        [KING_HOME_COLUMN, side.passes, side.lands]
            .iter()
            .all(|&c| !self.is_attacked(Square::at(row, c), opponent))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Color, Move, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn castling_board() -> BoardBuilder {
        BoardBuilder::new()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("a1"), Color::White, PieceKind::Rook)
            .piece(sq("h1"), Color::White, PieceKind::Rook)
            .piece(sq("e8"), Color::Black, PieceKind::King)
    }

    #[test]
    fn test_king_steps() {
        let board = BoardBuilder::new()
            .piece(sq("d4"), Color::White, PieceKind::King)
            .build();
        assert_eq!(board.pseudo_legal_moves(sq("d4")).len(), 8);
    }

    #[test]
    fn test_both_castles_generated() {
        let board = castling_board().build();
        let moves = board.pseudo_legal_moves(sq("e1"));
        assert!(moves.contains(&Move::new(sq("e1"), sq("g1"))));
        assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));
    }

    #[test]
    fn test_no_castle_through_attacked_square() {
        let board = castling_board()
            .piece(sq("f8"), Color::Black, PieceKind::Rook)
            .build();
        let moves = board.pseudo_legal_moves(sq("e1"));
        assert!(!moves.contains(&Move::new(sq("e1"), sq("g1"))));
        assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));
    }

    #[test]
    fn test_no_castle_out_of_check() {
        let board = castling_board()
            .piece(sq("e5"), Color::Black, PieceKind::Rook)
            .build();
        let moves = board.pseudo_legal_moves(sq("e1"));
        assert!(!moves.reaches(sq("g1")));
        assert!(!moves.reaches(sq("c1")));
    }

    #[test]
    fn test_queenside_b_file_may_be_attacked() {
        let board = castling_board()
            .piece(sq("b8"), Color::Black, PieceKind::Rook)
            .build();
        let moves = board.pseudo_legal_moves(sq("e1"));
        assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));
    }

    #[test]
    fn test_no_castle_with_blocked_path() {
        let board = castling_board()
            .piece(sq("b1"), Color::White, PieceKind::Knight)
            .build();
        let moves = board.pseudo_legal_moves(sq("e1"));
        assert!(!moves.reaches(sq("c1")));
        assert!(moves.reaches(sq("g1")));
    }

    #[test]
    fn test_no_castle_with_moved_rook_or_king() {
        let board = castling_board()
            .moved_piece(sq("h1"), Color::White, PieceKind::Rook)
            .build();
        assert!(!board.pseudo_legal_moves(sq("e1")).reaches(sq("g1")));

        let board = castling_board()
            .moved_piece(sq("e1"), Color::White, PieceKind::King)
            .build();
        let moves = board.pseudo_legal_moves(sq("e1"));
        assert!(!moves.reaches(sq("g1")));
        assert!(!moves.reaches(sq("c1")));
    }

    #[test]
    fn test_no_castle_with_enemy_rook_in_corner() {
        let board = castling_board()
            .piece(sq("h1"), Color::Black, PieceKind::Rook)
            .build();
        assert!(!board.pseudo_legal_moves(sq("e1")).contains(&Move::new(sq("e1"), sq("g1"))));
    }

    #[test]
    fn test_mutual_castling_rights_do_not_recurse() {
        let board = castling_board()
            .piece(sq("a8"), Color::Black, PieceKind::Rook)
            .piece(sq("h8"), Color::Black, PieceKind::Rook)
            .build();
        assert!(board.pseudo_legal_moves(sq("e1")).reaches(sq("g1")));
        assert!(board.pseudo_legal_moves(sq("e8")).reaches(sq("c8")));
        assert!(!board.is_attacked(sq("g1"), Color::Black));
    }

    #[test]
    fn test_king_attacks_neighbours_only() {
        let board = castling_board().build();
        assert!(board.is_attacked(sq("f2"), Color::White));
        assert!(!board.is_attacked(sq("g1"), Color::Black));
        assert!(!Board::standard().is_attacked(sq("e3"), Color::Black));
    }
}
