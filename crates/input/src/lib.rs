//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Quitting is
//! handled by the shell, so it has its own predicate instead of an action.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
