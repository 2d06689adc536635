//! Tile spawning.
//!
//! A new tile lands on one empty cell chosen uniformly among all empty cells
//! (enumerated row-major) and is a 2 or a 4 with equal probability.

use rand::Rng;
use tracing::debug;

use crate::grid::{Grid, Tile};

/// Where a tile was spawned and what it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place a random tile on an empty cell.
///
/// Returns `None` and leaves the grid untouched if there is no empty cell.
pub fn spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<SpawnedTile> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        debug!("spawn skipped, grid is full");
        return None;
    }

    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let tile = Tile::SPAWNABLE[rng.gen_range(0..Tile::SPAWNABLE.len())];
    let value = tile.value();
    grid.set(row, col, tile);

    debug!(row, col, value, "spawned tile");
    Some(SpawnedTile { row, col, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SPAWN_VALUES;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let mut grid = Grid::from_values([[2; 4], [4; 4], [2; 4], [4; 4]]).unwrap();
        let before = grid;
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(spawn(&mut grid, &mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spawn_fills_only_empty_cell() {
        let mut grid =
            Grid::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let spawned = spawn(&mut grid, &mut rng).unwrap();
        assert_eq!((spawned.row, spawned.col), (2, 2));
        assert!(SPAWN_VALUES.contains(&spawned.value));
        assert_eq!(grid.value(2, 2), spawned.value);
        assert_eq!(grid.count_empty(), 0);
    }

    #[test]
    fn test_spawn_is_deterministic_for_seed() {
        let mut a = Grid::new();
        let mut b = Grid::new();
        let mut rng_a = StdRng::seed_from_u64(1234);
        let mut rng_b = StdRng::seed_from_u64(1234);
        for _ in 0..8 {
            assert_eq!(spawn(&mut a, &mut rng_a), spawn(&mut b, &mut rng_b));
        }
        assert_eq!(a, b);
        assert_eq!(a.count_filled(), 8);
    }

    #[test]
    fn test_spawn_values_split_evenly_and_cover_all_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut twos = 0;
        let mut fours = 0;
        let mut cell_hits = [[0u32; 4]; 4];
        for _ in 0..2000 {
            let mut grid = Grid::new();
            let s = spawn(&mut grid, &mut rng).unwrap();
            match s.value {
                2 => twos += 1,
                4 => fours += 1,
                other => panic!("unexpected spawn value {other}"),
            }
            cell_hits[s.row][s.col] += 1;
        }
        assert_eq!(twos + fours, 2000);
        assert!((850..=1150).contains(&twos), "twos = {twos}");
        // 125 expected per cell.
        for hits in cell_hits.iter().flatten() {
            assert!((60..=190).contains(hits), "cell hits = {hits}");
        }
    }
}
