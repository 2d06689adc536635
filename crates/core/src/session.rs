//! Session module - one complete game
//!
//! A [`Session`] owns the grid, the score, the status and the RNG that feeds
//! the spawn generator. There is no other state: two sessions never affect
//! each other, and the same seed always replays the same game.
//!
//! Per direction input:
//! 1. ignored unless the status is `Running`
//! 2. resolve the move; an unchanged grid is a no-op (no spawn, no turn)
//! 3. commit grid and score
//! 4. a winning tile ends the game as `Won` (no spawn)
//! 5. otherwise spawn a tile, and end the game as `Lost` if no move is left

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

use crate::error::CoreError;
use crate::grid::Grid;
use crate::moves::resolve;
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn, SpawnedTile};
use crate::terminal::{check_loss, check_win};
use crate::types::{Direction, GameAction, GameStatus, BOARD_SIZE};

/// What applying a direction did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The game is over; the input was dropped.
    Ignored,
    /// Nothing could slide or merge; the input did not consume a turn.
    NoOp,
    Moved {
        score_delta: u32,
        merges: u8,
        spawned: Option<SpawnedTile>,
        status: GameStatus,
    },
}

impl MoveResult {
    /// Whether the session changed.
    pub fn changed(&self) -> bool {
        matches!(self, MoveResult::Moved { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    score: u32,
    status: GameStatus,
    rng: StdRng,
    seed: u64,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Turns consumed in the current episode; no-op moves do not count.
    moves: u32,
}

impl Session {
    /// Start a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut session = Self::empty(seed);
        session.seed_tile();
        info!(seed, "new game");
        session
    }

    /// Start a new game seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Build a session around an existing board.
    ///
    /// Every value must be 0 or a power of two >= 2. The status is derived
    /// from the board, with a win taking priority over a loss.
    pub fn from_grid(
        values: [[u32; BOARD_SIZE]; BOARD_SIZE],
        seed: u64,
    ) -> Result<Self, CoreError> {
        let mut session = Self::empty(seed);
        session.grid = Grid::from_values(values)?;
        session.status = if check_win(&session.grid) {
            GameStatus::Won
        } else if check_loss(&session.grid) {
            GameStatus::Lost
        } else {
            GameStatus::Running
        };
        Ok(session)
    }

    fn empty(seed: u64) -> Self {
        Self {
            grid: Grid::new(),
            score: 0,
            status: GameStatus::Running,
            rng: StdRng::seed_from_u64(seed),
            seed,
            episode_id: 0,
            moves: 0,
        }
    }

    fn seed_tile(&mut self) {
        let spawned = spawn(&mut self.grid, &mut self.rng);
        debug_assert!(spawned.is_some(), "an empty grid always has room");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Apply one direction input.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if !self.status.accepts_moves() {
            return MoveResult::Ignored;
        }

        let outcome = resolve(&self.grid, direction);
        if !outcome.moved {
            return MoveResult::NoOp;
        }

        self.grid = outcome.grid;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves += 1;

        let mut spawned = None;
        if check_win(&self.grid) {
            self.status = GameStatus::Won;
        } else {
            spawned = spawn(&mut self.grid, &mut self.rng);
            if spawned.is_none() || check_loss(&self.grid) {
                self.status = GameStatus::Lost;
            }
        }

        if self.status.is_terminal() {
            info!(
                status = self.status.as_str(),
                score = self.score,
                moves = self.moves,
                "game over"
            );
        }

        MoveResult::Moved {
            score_delta: outcome.score_delta,
            merges: outcome.merges,
            spawned,
            status: self.status,
        }
    }

    /// Discard the current game and start a fresh one.
    ///
    /// The RNG stream continues, so a reset never replays the previous board.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.score = 0;
        self.status = GameStatus::Running;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.seed_tile();
        info!(episode_id = self.episode_id, "game reset");
    }

    /// Apply a game action. Returns true if the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).changed(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.to_values();
        out.score = self.score;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.best_tile = self.grid.max_value();
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

/// Start a new game.
pub fn new_game(seed: u64) -> Session {
    Session::new(seed)
}

/// Apply one direction input to a session passed by value.
pub fn apply_move(mut session: Session, direction: Direction) -> Session {
    session.apply_move(direction);
    session
}

/// Replace a session with a fresh game.
pub fn reset(mut session: Session) -> Session {
    session.reset();
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_one_seed_tile() {
        let session = Session::new(12345);
        assert_eq!(session.grid().count_filled(), 1);
        assert!(matches!(session.grid().max_value(), 2 | 4));
        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.episode_id(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Session::new(7);
        let mut b = Session::new(7);
        for dir in [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ]
        .iter()
        .cycle()
        .take(40)
        {
            assert_eq!(a.apply_move(*dir), b.apply_move(*dir));
        }
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_noop_does_not_consume_turn() {
        let mut session =
            Session::from_grid([[0, 0, 4, 8], [0; 4], [0; 4], [0; 4]], 3).unwrap();
        let before = *session.grid();
        assert_eq!(session.apply_move(Direction::Right), MoveResult::NoOp);
        assert_eq!(session.apply_move(Direction::Up), MoveResult::NoOp);
        assert_eq!(*session.grid(), before);
        assert_eq!(session.moves(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_winning_move_does_not_spawn() {
        let mut session =
            Session::from_grid([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]], 3).unwrap();
        let result = session.apply_move(Direction::Left);
        assert_eq!(
            result,
            MoveResult::Moved {
                score_delta: 2048,
                merges: 1,
                spawned: None,
                status: GameStatus::Won,
            }
        );
        assert_eq!(session.grid().count_filled(), 1);
        assert_eq!(session.apply_move(Direction::Right), MoveResult::Ignored);
    }

    #[test]
    fn test_reset_keeps_rng_stream_and_bumps_episode() {
        let mut session = Session::new(5);
        let first = *session.grid();
        session.grid_mut().set(0, 0, crate::grid::Tile::from_value(64).unwrap());
        session.reset();
        assert_eq!(session.episode_id(), 1);
        assert_eq!(session.grid().count_filled(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.seed(), 5);
        assert_eq!(*Session::new(5).grid(), first);
    }

    #[test]
    fn test_apply_action_restart() {
        let mut session =
            Session::from_grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]], 1)
                .unwrap();
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(!session.apply_action(GameAction::Move(Direction::Left)));
        assert!(session.apply_action(GameAction::Restart));
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(session.grid().count_filled(), 1);
    }

    #[test]
    fn test_snapshot_matches_session() {
        let mut session = Session::new(99);
        session.apply_move(Direction::Left);
        session.apply_move(Direction::Down);
        let snap = session.snapshot();
        assert_eq!(snap.grid, session.grid().to_values());
        assert_eq!(snap.score, session.score());
        assert_eq!(snap.status, session.status());
        assert_eq!(snap.moves, session.moves());
        assert_eq!(snap.best_tile, session.grid().max_value());
        assert_eq!(snap.seed, 99);
        assert!(snap.playable());
    }

    #[test]
    fn test_by_value_api() {
        let session = new_game(11);
        let session = apply_move(session, Direction::Up);
        let session = reset(session);
        assert_eq!(session.score(), 0);
        assert_eq!(session.episode_id(), 1);
        assert_eq!(session.grid().count_filled(), 1);
    }
}
