use crate::types::{GameStatus, BOARD_SIZE};

/// Plain-value copy of a session for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Tile values, row-major, 0 for empty.
    pub grid: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub status: GameStatus,
    pub episode_id: u32,
    pub moves: u32,
    pub best_tile: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0; BOARD_SIZE]; BOARD_SIZE];
        self.score = 0;
        self.status = GameStatus::Running;
        self.episode_id = 0;
        self.moves = 0;
        self.best_tile = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        self.status.accepts_moves()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            status: GameStatus::Running,
            episode_id: 0,
            moves: 0,
            best_tile: 0,
            seed: 0,
        }
    }
}
