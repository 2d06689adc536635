//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and board
//! transitions. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable from plain values
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Every operation is a fixed 16-cell pass with no allocation
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 board of power-of-two tiles
//! - [`moves`]: Slide/merge resolution for all four directions
//! - [`spawn`]: Random 2/4 tile placement
//! - [`terminal`]: Win and loss detection
//! - [`session`]: Complete game state and its status transitions
//! - [`snapshot`]: Plain-value copy of a session for rendering
//!
//! # Game Rules
//!
//! - **Slide**: every tile moves as far as it can in the chosen direction
//! - **Merge**: two equal tiles meeting become one tile of double value; a
//!   tile created by a merge does not merge again in the same move
//! - **Score**: each merge adds the value of the new tile
//! - **Spawn**: after every move that changed the board, a 2 or 4 appears on
//!   a random empty cell
//! - **Win**: a 2048 tile ends the game, even if no move would be left
//! - **Loss**: a full board with no equal neighbours ends the game
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Session;
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let mut game = Session::new(12345);
//! assert_eq!(game.grid().count_filled(), 1);
//!
//! game.apply_move(Direction::Left);
//! game.apply_move(Direction::Up);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert!(game.grid().count_filled() >= 1);
//! ```

pub mod error;
pub mod grid;
pub mod moves;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod terminal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use grid::{Grid, Tile};
pub use moves::{can_move, resolve, MoveOutcome, Traversal};
pub use session::{apply_move, new_game, reset, MoveResult, Session};
pub use snapshot::GameSnapshot;
pub use spawn::{spawn, SpawnedTile};
pub use terminal::{check_loss, check_win, has_legal_move};
