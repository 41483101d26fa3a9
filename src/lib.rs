//! Chess rules: legal move generation, special moves, check, checkmate and
//! stalemate detection, plus a thread-safe table of shared games.
//!
//! ```
//! use chess_rules::{Color, Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.apply_move("e2e4".parse().unwrap()).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! ```

pub mod board;
pub mod game;
pub mod session;

pub use board::{
    Board, BoardBuilder, Color, IllegalMove, Move, MoveList, MoveParseError, Piece, PieceKind,
    Square, SquareError,
};
pub use game::{Game, GameStatus};
pub use session::{GameId, GameTable, MoveObserver, MoveOutcome, SessionError, SharedGame};
