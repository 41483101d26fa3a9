//! Performing a move on a board, special-move side effects included.

use super::{Board, Move, Piece, PieceKind, Square};

impl Board {
    /// Returns true if `mv` is a castle: the king moving two columns.
    #[must_use]
    pub fn is_castle(&self, mv: Move) -> bool {
        self.piece_at(mv.from)
            .is_some_and(|p| p.kind() == PieceKind::King && mv.column_distance() == 2)
    }

    /// Returns true if `mv` is an en passant capture: a pawn moving
    /// diagonally onto an empty square.
    #[must_use]
    pub fn is_en_passant(&self, mv: Move) -> bool {
        self.piece_at(mv.from).is_some_and(|p| {
            p.kind() == PieceKind::Pawn && mv.column_distance() != 0 && self.is_empty(mv.to)
        })
    }

    /// Performs `mv` without checking that it is legal.
    ///
    /// Clears every en passant flag, relocates the rook of a castle, removes
    /// the pawn taken en passant, puts the (possibly promoted) piece on the
    /// destination, marks it moved and flags a pawn's double step as
    /// capturable en passant. Returns the captured piece, if any. Does nothing
    /// when `mv.from` is empty.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let castle = self.is_castle(mv);
        let en_passant = self.is_en_passant(mv);
        let mut piece = self.remove(mv.from)?;

        self.clear_en_passant_flags();

        if castle {
            self.relocate_castling_rook(mv);
        }

        let mut captured = if en_passant {
            self.remove(Square::at(mv.from.row(), mv.to.column()))
        } else {
            None
        };

        if let Some(kind) = mv.promotion {
            piece = Piece::new(piece.color(), kind);
        }
        piece.mark_moved();
        piece.set_en_passant_eligible(piece.kind() == PieceKind::Pawn && mv.row_distance() == 2);

        if let Some(taken) = self.remove(mv.to) {
            captured = Some(taken);
        }
        self.place(mv.to, piece);
        captured
    }

    /// Moves the rook of a castle to the square the king passed over.
    fn relocate_castling_rook(&mut self, king_move: Move) {
        let row = king_move.from.row();
        let kingside = king_move.to.column() > king_move.from.column();
        let (rook_column, rook_target) = if kingside {
            (8, king_move.to.column() - 1)
        } else {
            (1, king_move.to.column() + 1)
        };

        if let Some(mut rook) = self.remove(Square::at(row, rook_column)) {
            rook.mark_moved();
            self.place(Square::at(row, rook_target), rook);
        }
    }
}
