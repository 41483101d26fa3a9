//! A game of chess: turn order, legality and terminal-state queries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, IllegalMove, Move, MoveList, Square};

/// Where the side to move stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Not in check, with at least one legal move
    Ongoing,
    /// In check, with at least one legal move
    Check(Color),
    /// In check with no legal move; the color is the side that lost
    Checkmate(Color),
    /// Not in check and no legal move
    Stalemate(Color),
}

impl GameStatus {
    /// Returns true for checkmate and stalemate
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }
}

/// A chess game.
///
/// Owns its [`Board`] and the side to move. The only way the position
/// changes is [`Game::apply_move`], which validates the move, performs it and
/// passes the turn.
///
/// The game reports checkmate and stalemate but never ends itself:
/// `apply_move` keeps accepting legal moves after a terminal position, and
/// [`Game::finish`] is the caller's signal that the game is over.
///
/// # Example
/// ```
/// use chess_rules::{Color, Game};
///
/// let mut game = Game::new();
/// for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
///     game.apply_move(mv.parse().unwrap()).unwrap();
/// }
/// assert!(game.is_in_checkmate(Color::White));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    board: Board,
    turn: Color,
    finished: bool,
    resigned: Option<Color>,
}

impl Game {
    /// A new game from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::standard(), Color::White)
    }

    /// A game from an externally supplied board.
    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            finished: false,
            resigned: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Marks the game as over. Set by whoever owns the game's lifecycle.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Ends the game on `color`'s resignation.
    pub fn resign(&mut self, color: Color) {
        self.resigned = Some(color);
        self.finished = true;
    }

    /// The side that resigned, if any
    #[must_use]
    pub fn resigned(&self) -> Option<Color> {
        self.resigned
    }

    /// The winner: the opponent of a side that resigned or is checkmated.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if let Some(loser) = self.resigned {
            return Some(loser.opponent());
        }
        self.is_in_checkmate(self.turn).then(|| self.turn.opponent())
    }

    /// Legal moves of the piece on `from`, whichever side it belongs to.
    ///
    /// Every pseudo-legal move is performed on a copy of the board and kept
    /// only if the mover's king is not attacked afterward. Empty when `from`
    /// holds no piece.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        let Some(piece) = self.board.piece_at(from) else {
            return MoveList::new();
        };
        let mut moves = self.board.pseudo_legal_moves(from);
        moves.retain(|&mv| !self.leaves_king_attacked(mv, piece.color()));
        moves
    }

    /// Legal moves of every piece of `color`.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> MoveList {
        let mut all = MoveList::new();
        for square in self.board.pieces_of(color) {
            all.extend(self.legal_moves(square));
        }
        all
    }

    /// Validates and plays `mv`, then passes the turn.
    ///
    /// On error the game is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        if let Err(err) = self.validate(mv) {
            log::trace!("rejected {mv}: {err}");
            return Err(err);
        }

        let captured = self.board.make_move(mv);
        log::debug!(
            "{} played {mv}{}",
            self.turn,
            captured.map_or(String::new(), |p| format!(" taking {}", p.kind()))
        );
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Checks, in order, that `mv.from` holds a piece, that the piece belongs
    /// to the side to move and that `mv` is one of its legal moves.
    fn validate(&self, mv: Move) -> Result<(), IllegalMove> {
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(IllegalMove::EmptySquare { square: mv.from })?;
        if piece.color() != self.turn {
            return Err(IllegalMove::WrongSide {
                square: mv.from,
                to_move: self.turn,
            });
        }
        if !self.legal_moves(mv.from).contains(&mv) {
            return Err(IllegalMove::NotLegal { mv });
        }
        Ok(())
    }

    /// Returns true if `color`'s king is attacked. A side without a king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        king_attacked(&self.board, color)
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check with no legal move.
    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Status of the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let color = self.turn;
        match (self.is_in_check(color), self.has_legal_move(color)) {
            (true, false) => GameStatus::Checkmate(color),
            (true, true) => GameStatus::Check(color),
            (false, false) => GameStatus::Stalemate(color),
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Counts the positions reachable from here in exactly `depth` plies.
    ///
    /// Standard move generator self-test; whether the game is finished is
    /// ignored.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.all_legal_moves(self.turn);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|&mv| {
                let mut child = self.clone();
                child.board.make_move(mv);
                child.turn = child.turn.opponent();
                child.perft(depth - 1)
            })
            .sum()
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .into_iter()
            .any(|square| !self.legal_moves(square).is_empty())
    }

    fn leaves_king_attacked(&self, mv: Move, color: Color) -> bool {
        let mut scratch = self.board.clone();
        scratch.make_move(mv);
        king_attacked(&scratch, color)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "{} to move", self.turn)
    }
}

fn king_attacked(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| board.is_attacked(king, color.opponent()))
}
