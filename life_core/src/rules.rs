// rules.rs - Conway's B3/S23 rule applied to a frozen grid

use crate::grid::Grid;

/// Next state of one cell given its current state and live neighbor count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the following generation. The input grid is only read.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for (x, y, alive) in grid.iter() {
        next.set(x, y, next_state(alive, grid.neighbor_count(y, x)));
    }
    next
}
