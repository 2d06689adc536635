//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 grid:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//!
//! # Tile Values
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_VALUE` | 2048 | Smallest tile value that wins the game |
//! | `SPAWN_VALUES` | [2, 4] | Values a freshly spawned tile can take (50/50) |
//! | `MAX_TILE_VALUE` | 131072 | Largest tile accepted when loading a board |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, BOARD_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Directions come in opposite pairs
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Parse a game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! // Only a running game accepts moves
//! assert!(GameStatus::Running.accepts_moves());
//! assert!(!GameStatus::Won.accepts_moves());
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Board side length in cells (4 rows, 4 columns)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Smallest tile value that wins the game
pub const WIN_VALUE: u32 = 2048;

/// Values a spawned tile may take, each with equal probability
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Largest tile exponent accepted from outside the engine.
///
/// 2^17 = 131072 is the biggest tile a 4x4 board can build, so anything above
/// it cannot come from a real game.
pub const MAX_EXPONENT: u8 = 17;

/// Largest tile value accepted from outside the engine.
pub const MAX_TILE_VALUE: u32 = 1 << MAX_EXPONENT;


/// The four directions a move can slide tiles in
///
/// - **Left**: every row is packed towards column 0
/// - **Right**: every row is packed towards column 3
/// - **Up**: every column is packed towards row 0
/// - **Down**: every column is packed towards row 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The direction pointing the other way along the same axis
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Lifecycle status of a game
///
/// `Running` is the initial state and the only one that accepts moves.
/// `Won` and `Lost` are terminal until the game is restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameStatus {
    /// Whether direction inputs are applied in this status
    pub fn accepts_moves(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    /// Whether this is one of the terminal statuses
    pub fn is_terminal(&self) -> bool {
        !self.accepts_moves()
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Running => "running",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Game actions that can be applied to a session
///
/// Produced by the input layer from key presses. Quitting is a property of
/// the terminal shell, not of the game, so it is not an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge every tile in the given direction
    Move(Direction),
    /// Discard the current game and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveDown"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}
