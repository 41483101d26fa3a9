//! Pseudo-legal move generation.
//!
//! One generator per piece kind, all dispatched from a single `match` over
//! [`PieceKind`]. Generated moves obey the piece's movement pattern and board
//! occupancy but may leave the mover's own king attacked; filtering those out
//! is the job of [`Game::legal_moves`](crate::Game::legal_moves).

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveList, Piece, PieceKind, Square};
use sliders::SliderType;

/// What a generator is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Generation {
    /// Every pseudo-legal move, castling included.
    Moves,
    /// Squares the piece attacks: pawns contribute their capture diagonals
    /// instead of their pushes and kings never castle.
    Attacks,
}

impl Board {
    /// Pseudo-legal moves of the piece on `from`; empty if the square is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some(piece) = self.piece_at(from) {
            self.generate_piece_moves(from, piece, Generation::Moves, &mut moves);
        }
        moves
    }

    /// Returns true if any piece of `by` attacks `square`.
    ///
    /// Runs the same move shapes as [`Board::pseudo_legal_moves`] in attack
    /// mode, so it never depends on legality filtering.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.occupied()
            .filter(|(_, piece)| piece.color() == by)
            .any(|(from, piece)| {
                let mut attacks = MoveList::new();
                self.generate_piece_moves(from, piece, Generation::Attacks, &mut attacks);
                attacks.reaches(square)
            })
    }

    fn generate_piece_moves(
        &self,
        from: Square,
        piece: Piece,
        generation: Generation,
        moves: &mut MoveList,
    ) {
        let color = piece.color();
        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_moves(from, color, generation, moves),
            PieceKind::Knight => self.generate_knight_moves(from, color, moves),
            PieceKind::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop, moves),
            PieceKind::Rook => self.generate_slider_moves(from, color, SliderType::Rook, moves),
            PieceKind::Queen => self.generate_slider_moves(from, color, SliderType::Queen, moves),
            PieceKind::King => self.generate_king_moves(from, piece, generation, moves),
        }
    }

    /// True if `square` can be entered by a piece of `color`: empty or enemy-held.
    #[inline]
    fn is_enterable(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).map_or(true, |p| p.color() != color)
    }

    /// Steps to each of `offsets` from `from`, keeping enterable squares.
    fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[(i32, i32)],
        moves: &mut MoveList,
    ) {
        for &(d_row, d_column) in offsets {
            if let Some(to) = from.offset(d_row, d_column) {
                if self.is_enterable(to, color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}
