//! Terminal rendering for the 2048 board.
//!
//! Frames are composed in a plain framebuffer by [`GameView`] (pure, testable)
//! and flushed to the terminal by [`TerminalRenderer`], which only rewrites
//! cells that changed since the previous frame.
//!
//! Tile colours are a presentation concern and live here, keyed by tile value
//! (see [`tile_style`]); the core never knows about them.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport, HINT_TEXT, KEYS_TEXT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
