use super::super::{Board, Color, Move, MoveList, PieceKind, Square, PROMOTION_CHOICES};
use super::Generation;

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        generation: Generation,
        moves: &mut MoveList,
    ) {
        let dir = color.pawn_direction();

        if generation == Generation::Attacks {
            for df in [-1, 1] {
                if let Some(target) = from.offset(dir, df) {
                    if self.is_enterable(target, color) {
                        moves.push(Move::new(from, target));
                    }
                }
            }
            return;
        }

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                push_pawn_move(moves, from, forward, color);

                if from.row() == color.pawn_start_rank() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::new(from, double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some(victim) if victim.color() != color => {
                    push_pawn_move(moves, from, target, color);
                }
                Some(_) => {}
                None => {
                    if self.can_capture_en_passant(from, color, df) {
                        moves.push(Move::new(from, target));
                    }
                }
            }
        }
    }

    /// True if the enemy pawn beside `from` (column offset `df`) just made
    /// its double step and `from` stands on the capturing rank.
    fn can_capture_en_passant(&self, from: Square, color: Color, df: i32) -> bool {
        if from.row() != color.en_passant_rank() {
            return false;
        }
        from.offset(0, df)
            .and_then(|beside| self.piece_at(beside))
            .is_some_and(|victim| {
                victim.is(color.opponent(), PieceKind::Pawn) && victim.is_en_passant_eligible()
            })
    }
}

/// Pushes a pawn move, expanded into the four promotion choices on the far rank.
fn push_pawn_move(moves: &mut MoveList, from: Square, to: Square, color: Color) {
    if to.row() == color.pawn_promotion_rank() {
        for kind in PROMOTION_CHOICES {
            moves.push(Move::with_promotion(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
