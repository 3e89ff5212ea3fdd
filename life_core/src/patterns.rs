// patterns.rs - Built-in starting patterns and seeded random fill

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// A named shape given as (row, col) offsets from its top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Height and width of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears the grid and stamps the pattern centered on it. Shapes larger than
/// the grid wrap around the edges.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();

    let size = grid.size();
    let (height, width) = pattern.extent();
    let top = size.saturating_sub(height) / 2;
    let left = size.saturating_sub(width) / 2;
    for &(row, col) in pattern.cells {
        grid.set((left + col) % size, (top + row) % size, true);
    }
}

/// Replaces the grid with roughly one live cell in three, fully determined
/// by `seed_value`.
pub fn apply_random_pattern(grid: &mut Grid, seed_value: u64) {
    grid.clear();

    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for (x, y) in grid.coords() {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        grid.set(x, y, (seed >> 16) % 3 == 0);
    }
}
