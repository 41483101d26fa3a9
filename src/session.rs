//! Shared games for a multi-session host.
//!
//! [`GameTable`] holds any number of games keyed by [`GameId`], each behind
//! its own `RwLock`: moves on one game are serialized while reads run
//! concurrently, and different games never contend. After every successful
//! move the registered [`MoveObserver`]s are told what was played and whether
//! the side now to move is in check, checkmated or stalemated, so a transport
//! layer can broadcast the new state. Notifications for one game arrive in
//! the order its moves were played.
//!
//! Unlike a bare [`Game`], a game in the table is finished automatically once
//! checkmate or stalemate is observed, and further moves are refused.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockWriteGuard};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, IllegalMove, Move, MoveList, Square};
use crate::game::Game;

/// Identifier of a game in a [`GameTable`].
pub type GameId = u64;

/// Check state of the side to move right after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub to_move: Color,
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl MoveOutcome {
    /// Evaluates the side to move of `game`.
    #[must_use]
    pub fn of(game: &Game) -> Self {
        let to_move = game.turn();
        MoveOutcome {
            to_move,
            check: game.is_in_check(to_move),
            checkmate: game.is_in_checkmate(to_move),
            stalemate: game.is_in_stalemate(to_move),
        }
    }

    /// Returns true if the game cannot continue
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.checkmate || self.stalemate
    }
}

/// Hook invoked after every successful move on a [`GameTable`].
///
/// Called while the game is held under a read lock downgraded from the
/// move's write lock, so the next move on that game waits until every
/// observer has returned. Reading the game back through
/// [`GameTable::snapshot`] or [`GameTable::legal_moves`] is fine; taking the
/// game's lock directly from an observer must use `read_recursive`, and
/// applying a move to the same game from inside an observer deadlocks.
pub trait MoveObserver: Send + Sync {
    fn move_applied(&self, id: GameId, mv: Move, outcome: MoveOutcome);
}

/// Error type for operations on a [`GameTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No game is registered under this id
    UnknownGame { id: GameId },
    /// The game is over and accepts no more moves
    Finished { id: GameId },
    /// The engine rejected the move
    Illegal(IllegalMove),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownGame { id } => write!(f, "Game {id} not found"),
            SessionError::Finished { id } => write!(f, "Game {id} is already over"),
            SessionError::Illegal(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Illegal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IllegalMove> for SessionError {
    fn from(err: IllegalMove) -> Self {
        SessionError::Illegal(err)
    }
}

/// A handle on one shared game. Take the write lock to play a move.
pub type SharedGame = Arc<RwLock<Game>>;

/// Games shared between connections, one lock per game.
#[derive(Default)]
pub struct GameTable {
    games: RwLock<HashMap<GameId, SharedGame>>,
    observers: RwLock<Vec<Arc<dyn MoveObserver>>>,
    next_id: AtomicU64,
}

impl GameTable {
    #[must_use]
    pub fn new() -> Self {
        GameTable::default()
    }

    /// Registers a new game from the standard position.
    pub fn create(&self) -> GameId {
        self.insert(Game::new())
    }

    /// Registers an existing game, such as one built from a custom board.
    pub fn insert(&self, game: Game) -> GameId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.games.write().insert(id, Arc::new(RwLock::new(game)));
        log::debug!("game {id} created");
        id
    }

    /// Drops a game from the table, returning its final state.
    pub fn remove(&self, id: GameId) -> Result<Game, SessionError> {
        let shared = self
            .games
            .write()
            .remove(&id)
            .ok_or(SessionError::UnknownGame { id })?;
        log::debug!("game {id} removed");
        let game = shared.read().clone();
        Ok(game)
    }

    /// Adds an observer notified after every successful move.
    pub fn subscribe(&self, observer: Arc<dyn MoveObserver>) {
        self.observers.write().push(observer);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    /// The lock-protected game registered under `id`.
    pub fn get(&self, id: GameId) -> Result<SharedGame, SessionError> {
        self.games
            .read()
            .get(&id)
            .cloned()
            .ok_or(SessionError::UnknownGame { id })
    }

    /// A copy of the game's current state. Safe to call from an observer.
    pub fn snapshot(&self, id: GameId) -> Result<Game, SessionError> {
        Ok(self.get(id)?.read_recursive().clone())
    }

    /// Legal moves of the piece on `from` in game `id`. Safe to call from an
    /// observer.
    pub fn legal_moves(&self, id: GameId, from: Square) -> Result<MoveList, SessionError> {
        Ok(self.get(id)?.read_recursive().legal_moves(from))
    }

    /// Plays `mv` in game `id` and notifies the observers.
    ///
    /// Moves on a finished game are refused. A move that checkmates or
    /// stalemates finishes the game. Observers run before the next move on
    /// the same game can start.
    pub fn apply_move(&self, id: GameId, mv: Move) -> Result<MoveOutcome, SessionError> {
        let shared = self.get(id)?;
        let mut game = shared.write();
        if game.is_finished() {
            return Err(SessionError::Finished { id });
        }
        game.apply_move(mv)?;
        let outcome = MoveOutcome::of(&game);
        if outcome.is_terminal() {
            game.finish();
            log::debug!("game {id} finished: {outcome:?}");
        }

        let _game = RwLockWriteGuard::downgrade(game);
        for observer in self.observers.read().iter() {
            observer.move_applied(id, mv, outcome);
        }
        Ok(outcome)
    }

    /// Ends game `id` on `color`'s resignation.
    pub fn resign(&self, id: GameId, color: Color) -> Result<(), SessionError> {
        let shared = self.get(id)?;
        let mut game = shared.write();
        if game.is_finished() {
            return Err(SessionError::Finished { id });
        }
        game.resign(color);
        log::debug!("game {id}: {color} resigned");
        Ok(())
    }
}

impl fmt::Debug for GameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameTable")
            .field("games", &self.len())
            .field("observers", &self.observers.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::AtomicBool;
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(GameId, Move, MoveOutcome)>>,
    }

    impl MoveObserver for Recorder {
        fn move_applied(&self, id: GameId, mv: Move, outcome: MoveOutcome) {
            self.seen.lock().push((id, mv, outcome));
        }
    }

    #[test]
    fn test_create_and_get() {
        let table = GameTable::new();
        assert!(table.is_empty());
        let a = table.create();
        let b = table.create();
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
        assert_eq!(table.snapshot(a).unwrap(), Game::new());
        assert_eq!(
            table.get(999).err(),
            Some(SessionError::UnknownGame { id: 999 })
        );
    }

    #[test]
    fn test_observer_sees_each_move() {
        let table = GameTable::new();
        let recorder = Arc::new(Recorder::default());
        table.subscribe(recorder.clone());

        let id = table.create();
        table.apply_move(id, mv("e2e4")).unwrap();
        table.apply_move(id, mv("e7e5")).unwrap();

        let seen = recorder.seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, id);
        assert_eq!(seen[0].1, mv("e2e4"));
        assert_eq!(seen[0].2.to_move, Color::Black);
        assert!(!seen[1].2.check);
    }

    #[test]
    fn test_rejected_move_is_not_broadcast() {
        let table = GameTable::new();
        let recorder = Arc::new(Recorder::default());
        table.subscribe(recorder.clone());

        let id = table.create();
        let err = table.apply_move(id, mv("e2e5")).unwrap_err();
        assert!(matches!(err, SessionError::Illegal(IllegalMove::NotLegal { .. })));
        assert!(recorder.seen.lock().is_empty());
        assert_eq!(table.snapshot(id).unwrap(), Game::new());
    }

    #[test]
    fn test_checkmate_finishes_game() {
        let table = GameTable::new();
        let id = table.create();
        let mut last = None;
        for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            last = Some(table.apply_move(id, mv(m)).unwrap());
        }
        let outcome = last.unwrap();
        assert!(outcome.check);
        assert!(outcome.checkmate);
        assert!(!outcome.stalemate);
        assert!(table.snapshot(id).unwrap().is_finished());
        assert_eq!(
            table.apply_move(id, mv("a2a3")),
            Err(SessionError::Finished { id })
        );
    }

    #[test]
    fn test_resign() {
        let table = GameTable::new();
        let id = table.create();
        table.resign(id, Color::White).unwrap();
        let game = table.snapshot(id).unwrap();
        assert_eq!(game.resigned(), Some(Color::White));
        assert_eq!(game.winner(), Some(Color::Black));
        assert_eq!(
            table.resign(id, Color::Black),
            Err(SessionError::Finished { id })
        );
        assert_eq!(
            table.apply_move(id, mv("e2e4")),
            Err(SessionError::Finished { id })
        );
    }

    /// Holds up the first notification until the test releases it.
    struct Gate {
        entered: Barrier,
        release: Barrier,
        first: AtomicBool,
        seen: Mutex<Vec<String>>,
    }

    impl MoveObserver for Gate {
        fn move_applied(&self, _id: GameId, mv: Move, _outcome: MoveOutcome) {
            if !self.first.swap(true, Ordering::SeqCst) {
                self.entered.wait();
                self.release.wait();
            }
            self.seen.lock().push(mv.to_string());
        }
    }

    #[test]
    fn test_notifications_follow_move_order() {
        let table = GameTable::new();
        let gate = Arc::new(Gate {
            entered: Barrier::new(2),
            release: Barrier::new(2),
            first: AtomicBool::new(false),
            seen: Mutex::new(Vec::new()),
        });
        table.subscribe(gate.clone());
        let id = table.create();

        thread::scope(|s| {
            let first = s.spawn(|| table.apply_move(id, mv("e2e4")));
            gate.entered.wait();

            let second = s.spawn(|| table.apply_move(id, mv("e7e5")));
            thread::sleep(Duration::from_millis(50));
            gate.release.wait();

            first.join().unwrap().unwrap();
            second.join().unwrap().unwrap();
        });

        assert_eq!(*gate.seen.lock(), ["e2e4", "e7e5"]);
    }

    struct ReadBack {
        table: Arc<GameTable>,
        turns: Mutex<Vec<Color>>,
    }

    impl MoveObserver for ReadBack {
        fn move_applied(&self, id: GameId, _mv: Move, outcome: MoveOutcome) {
            let game = self.table.snapshot(id).unwrap();
            assert_eq!(game.turn(), outcome.to_move);
            self.turns.lock().push(game.turn());
        }
    }

    #[test]
    fn test_observer_can_read_game_back() {
        let table = Arc::new(GameTable::new());
        let observer = Arc::new(ReadBack {
            table: Arc::clone(&table),
            turns: Mutex::new(Vec::new()),
        });
        table.subscribe(observer.clone());

        let id = table.create();
        table.apply_move(id, mv("d2d4")).unwrap();
        table.apply_move(id, mv("d7d5")).unwrap();
        assert_eq!(*observer.turns.lock(), [Color::Black, Color::White]);
    }

    #[test]
    fn test_remove() {
        let table = GameTable::new();
        let id = table.create();
        table.apply_move(id, mv("d2d4")).unwrap();
        let game = table.remove(id).unwrap();
        assert_eq!(game.turn(), Color::Black);
        assert!(table.is_empty());
        assert!(table.remove(id).is_err());
    }

    #[test]
    fn test_concurrent_games_do_not_interfere() {
        let table = GameTable::new();
        let ids: Vec<GameId> = (0..4).map(|_| table.create()).collect();

        thread::scope(|s| {
            for &id in &ids {
                let table = &table;
                s.spawn(move || {
                    for m in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                        table.apply_move(id, mv(m)).unwrap();
                    }
                });
                s.spawn(move || {
                    for _ in 0..10 {
                        let _ = table.legal_moves(id, "b1".parse().unwrap()).unwrap();
                    }
                });
            }
        });

        for id in ids {
            let game = table.snapshot(id).unwrap();
            assert_eq!(game.turn(), Color::White);
            assert!(game.board().piece_at("g1".parse().unwrap()).unwrap().has_moved());
        }
    }

    #[test]
    fn test_concurrent_moves_on_one_game_are_serialized() {
        let table = GameTable::new();
        let id = table.create();

        let successes: usize = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| table.apply_move(id, mv("e2e4")).is_ok()))
                .collect();
            handles
                .into_iter()
                .map(|h| usize::from(h.join().unwrap()))
                .sum()
        });

        assert_eq!(successes, 1);
        assert_eq!(table.snapshot(id).unwrap().turn(), Color::Black);
    }
}
