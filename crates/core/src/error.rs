//! Errors raised where raw values enter the core.
//!
//! Gameplay itself is infallible: a blocked move or a spawn on a full board
//! is a no-op, not an error.

/// Invalid input handed to the core by a collaborator.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid tile value {value}: expected 0 or a power of two >= 2")]
    InvalidValue { value: u32 },
    #[error("invalid tile value {value} at row {row}, col {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },
}
