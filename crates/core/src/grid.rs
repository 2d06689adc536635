//! Grid module - the 4x4 board of tiles
//!
//! Tiles are stored as base-2 exponents (0 = empty, k = 2^k), so a cell can
//! never hold a value that is not a power of two.
//! Coordinates: (row, col) where both range 0..3; row 0 is the top, col 0 the left.

use arrayvec::ArrayVec;

use crate::error::CoreError;
use crate::types::{BOARD_SIZE, CELL_COUNT, MAX_EXPONENT, MAX_TILE_VALUE, SPAWN_VALUES};

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Tile(u8);

impl Tile {
    pub const EMPTY: Tile = Tile(0);

    /// Tiles the spawn generator draws from, in the order of [`SPAWN_VALUES`].
    pub(crate) const SPAWNABLE: [Tile; SPAWN_VALUES.len()] = [Tile(1), Tile(2)];

    /// Build a tile from its displayed value (0 for empty).
    ///
    /// Accepts 0 and powers of two from 2 up to [`MAX_TILE_VALUE`].
    ///
    /// ```
    /// use tui_2048_core::Tile;
    ///
    /// assert_eq!(Tile::from_value(8).unwrap().value(), 8);
    /// assert!(Tile::from_value(0).unwrap().is_empty());
    /// assert!(Tile::from_value(6).is_err());
    /// assert!(Tile::from_value(1).is_err());
    /// assert!(Tile::from_value(1 << 18).is_err());
    /// ```
    pub fn from_value(value: u32) -> Result<Self, CoreError> {
        match value {
            0 => Ok(Tile::EMPTY),
            v if (2..=MAX_TILE_VALUE).contains(&v) && v.is_power_of_two() => {
                Ok(Tile(v.trailing_zeros() as u8))
            }
            _ => Err(CoreError::InvalidValue { value }),
        }
    }

    /// Build a tile from its exponent. Returns `None` above [`MAX_EXPONENT`].
    pub fn from_exponent(exponent: u8) -> Option<Self> {
        (exponent <= MAX_EXPONENT).then_some(Tile(exponent))
    }

    pub fn exponent(self) -> u8 {
        self.0
    }

    /// Displayed value, 0 when empty.
    pub fn value(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            1u32 << self.0
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The tile two copies of `self` merge into.
    ///
    /// Merges may climb past [`MAX_EXPONENT`] on hand-built grids, but never
    /// far enough to leave the `u32` value range.
    pub(crate) fn merged(self) -> Tile {
        debug_assert!(!self.is_empty() && u32::from(self.0) < u32::BITS - 1);
        Tile(self.0 + 1)
    }
}

/// The 4x4 board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from displayed values, validating every cell.
    pub fn from_values(values: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, CoreError> {
        let mut grid = Grid::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                grid.cells[row][col] = Tile::from_value(value)
                    .map_err(|_| CoreError::InvalidTile { row, col, value })?;
            }
        }
        Ok(grid)
    }

    /// Displayed values, 0 for empty cells.
    pub fn to_values(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|line| line.map(Tile::value))
    }

    /// Get the tile at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }

    /// Set the tile at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.cells.get_mut(row).and_then(|line| line.get_mut(col)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Value at (row, col), 0 for empty or out of bounds.
    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.get(row, col).map_or(0, Tile::value)
    }

    pub fn rows(&self) -> &[[Tile; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, tile) in line.iter().enumerate() {
                if tile.is_empty() {
                    out.push((row, col));
                }
            }
        }
        out
    }

    pub fn count_empty(&self) -> usize {
        self.tiles().filter(|t| t.is_empty()).count()
    }

    pub fn count_filled(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Highest tile value on the board, 0 for an empty board.
    pub fn max_value(&self) -> u32 {
        self.tiles().max().map_or(0, Tile::value)
    }

    /// Sum of all tile values.
    pub fn total_value(&self) -> u64 {
        self.tiles().map(|t| u64::from(t.value())).sum()
    }

    /// Mirror the grid over its main diagonal.
    pub fn transpose(&self) -> Self {
        let mut out = Grid::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                out.cells[col][row] = self.cells[row][col];
            }
        }
        out
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flat_map(|line| line.iter().copied())
    }
}
