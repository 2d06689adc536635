//! Terminal condition checks (win/loss).

use crate::grid::Grid;
use crate::types::{BOARD_SIZE, WIN_VALUE};

/// True if any tile has reached [`WIN_VALUE`].
pub fn check_win(grid: &Grid) -> bool {
    grid.tiles().any(|t| t.value() >= WIN_VALUE)
}

/// True if the grid is full and no two orthogonally adjacent tiles are equal.
pub fn check_loss(grid: &Grid) -> bool {
    grid.count_empty() == 0 && !has_adjacent_pair(grid)
}

/// True if at least one direction would change the grid.
pub fn has_legal_move(grid: &Grid) -> bool {
    !check_loss(grid)
}

fn has_adjacent_pair(grid: &Grid) -> bool {
    let rows = grid.rows();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let tile = rows[row][col];
            if tile.is_empty() {
                continue;
            }
            if col + 1 < BOARD_SIZE && rows[row][col + 1] == tile {
                return true;
            }
            if row + 1 < BOARD_SIZE && rows[row + 1][col] == tile {
                return true;
            }
        }
    }
    false
}
