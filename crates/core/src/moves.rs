//! Move resolution - slide and merge every line of the grid in one direction
//!
//! All four directions share one algorithm. A [`Traversal`] maps
//! `(line, step)` to a grid coordinate, where `step` 0 is the edge the tiles
//! slide towards. Each line is read in that order, packed, and written back.
//!
//! Merging is greedy from the leading edge and a freshly merged tile never
//! merges again in the same move: `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`,
//! and `[2, 2, 4, 0]` becomes `[4, 4, 0, 0]`, not `[8, 0, 0, 0]`.

use tracing::debug;

use crate::grid::{Grid, Tile};
use crate::types::{Direction, BOARD_SIZE};

const LAST: usize = BOARD_SIZE - 1;

/// Coordinate mapping for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    /// Whether lines are columns (Up/Down) rather than rows.
    columns: bool,
    /// Whether steps run from index 3 down to 0 (Right/Down).
    reversed: bool,
}

impl Traversal {
    pub const fn of(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self {
                columns: false,
                reversed: false,
            },
            Direction::Right => Self {
                columns: false,
                reversed: true,
            },
            Direction::Up => Self {
                columns: true,
                reversed: false,
            },
            Direction::Down => Self {
                columns: true,
                reversed: true,
            },
        }
    }

    /// (row, col) of the `step`-th cell of `line`, counted from the leading edge.
    #[inline(always)]
    pub fn cell(&self, line: usize, step: usize) -> (usize, usize) {
        let along = if self.reversed { LAST - step } else { step };
        if self.columns {
            (along, line)
        } else {
            (line, along)
        }
    }
}

/// Result of resolving one direction, before any spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// Sum of the values of every tile created by a merge.
    pub score_delta: u32,
    pub merges: u8,
    /// False when the grid is unchanged cell-by-cell; such a move is a no-op.
    pub moved: bool,
}

/// Slide and merge `grid` in `direction`. Pure; no randomness.
///
/// ```
/// use tui_2048_core::{moves::resolve, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_values([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let out = resolve(&grid, Direction::Left);
/// assert_eq!(out.grid.to_values()[0], [4, 4, 0, 0]);
/// assert_eq!(out.score_delta, 8);
/// ```
pub fn resolve(grid: &Grid, direction: Direction) -> MoveOutcome {
    let traversal = Traversal::of(direction);
    let mut out = *grid;
    let mut score_delta = 0u32;
    let mut merges = 0u8;

    for line in 0..BOARD_SIZE {
        let mut tiles = [Tile::EMPTY; BOARD_SIZE];
        for (step, tile) in tiles.iter_mut().enumerate() {
            let (row, col) = traversal.cell(line, step);
            *tile = grid.rows()[row][col];
        }

        let packed = pack_line(tiles);
        score_delta += packed.score;
        merges += packed.merges;

        for (step, tile) in packed.tiles.into_iter().enumerate() {
            let (row, col) = traversal.cell(line, step);
            out.set(row, col, tile);
        }
    }

    let moved = out != *grid;
    debug!(
        direction = direction.as_str(),
        score_delta, merges, moved, "resolved move"
    );

    MoveOutcome {
        grid: out,
        score_delta,
        merges,
        moved,
    }
}

/// True if resolving `direction` would change the grid.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    resolve(grid, direction).moved
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PackedLine {
    tiles: [Tile; BOARD_SIZE],
    score: u32,
    merges: u8,
}

/// Pack one line towards index 0.
fn pack_line(line: [Tile; BOARD_SIZE]) -> PackedLine {
    let mut tiles = [Tile::EMPTY; BOARD_SIZE];
    let mut cursor = 0;
    let mut last_merged = false;
    let mut score = 0;
    let mut merges = 0;

    for tile in line.into_iter().filter(|t| !t.is_empty()) {
        if cursor > 0 && tiles[cursor - 1] == tile && !last_merged {
            let merged = tile.merged();
            tiles[cursor - 1] = merged;
            score += merged.value();
            merges += 1;
            last_merged = true;
            continue;
        }
        tiles[cursor] = tile;
        cursor += 1;
        last_merged = false;
    }

    PackedLine {
        tiles,
        score,
        merges,
    }
}
