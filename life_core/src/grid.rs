// grid.rs - Square toroidal grid for Conway's Game of Life

use crate::error::{LifeError, Result};

/// Relative positions of the 8 Moore neighbors as (row, col) offsets.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// N×N matrix of alive/dead cells whose edges wrap around.
///
/// Cells are addressed as `(x, y)` where `x` is the column and `y` the row.
/// Storage is row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. A zero size is rejected.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LifeError::InvalidConfiguration(
                "grid size must be positive".to_string(),
            ));
        }
        Ok(Self { size, cells: vec![false; size * size] })
    }

    /// Builds a grid from rows of 0/1 style booleans. Rows must form a square.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let mut grid = Self::new(rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != grid.size {
                return Err(LifeError::InvalidConfiguration(format!(
                    "row {y} has {} cells, expected {}",
                    row.len(),
                    grid.size
                )));
            }
            for (x, &alive) in row.iter().enumerate() {
                grid.cells[y * grid.size + x] = alive;
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell state at `(x, y)`. Coordinates outside the grid read as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Sets a cell, returning `false` when the coordinate is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flips a cell and returns its new state, or `None` when out of range.
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<bool> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];
        Some(self.cells[i])
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Every coordinate exactly once, row by row.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }

    /// Every cell as `(x, y, alive)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.coords().map(|(x, y)| (x, y, self.cells[y * self.size + x]))
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Live cells among the 8 neighbors of `(row, col)`, wrapping at the edges.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let n = self.size as isize;
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let r = (row as isize + dr).rem_euclid(n) as usize;
            let c = (col as isize + dc).rem_euclid(n) as usize;
            if self.cells[r * self.size + c] { count += 1; }
        }
        count
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead_and_square() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.coords().count(), 16);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(Grid::new(0), Err(LifeError::InvalidConfiguration(_))));
    }

    #[test]
    fn coords_are_row_major() {
        let grid = Grid::new(2).unwrap();
        let visited: Vec<_> = grid.coords().collect();
        assert_eq!(visited, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn corner_sees_opposite_corner_through_wraparound() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, 0, true);
        assert_eq!(grid.neighbor_count(2, 2), 1);
        assert_eq!(grid.neighbor_count(0, 0), 0);
    }

    #[test]
    fn full_neighborhood_counts_eight() {
        let mut grid = Grid::new(5).unwrap();
        for (x, y) in grid.coords().collect::<Vec<_>>() {
            grid.set(x, y, true);
        }
        assert_eq!(grid.neighbor_count(0, 4), 8);
        assert_eq!(grid.neighbor_count(2, 2), 8);
    }

    #[test]
    fn toggle_flips_and_ignores_out_of_range() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(grid.toggle(1, 2), Some(true));
        assert!(grid.get(1, 2));
        assert_eq!(grid.toggle(1, 2), Some(false));
        assert_eq!(grid.toggle(3, 0), None);
        assert!(!grid.set(0, 7, true));
        assert!(!grid.get(9, 9));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![true, false], vec![true]];
        assert!(Grid::from_rows(&rows).is_err());

        let rows = vec![vec![false, true], vec![true, false]];
        let grid = Grid::from_rows(&rows).unwrap();
        assert!(grid.get(1, 0));
        assert!(grid.get(0, 1));
        assert_eq!(grid.alive_count(), 2);
    }
}
