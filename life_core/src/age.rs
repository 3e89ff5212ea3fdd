// age.rs - Per-cell age counters and the colors derived from them

use crate::grid::Grid;

/// 8-bit RGBA color handed to the render sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub const ALIVE_COLOR: Rgba = Rgba::BLACK;
pub const DEAD_COLOR: Rgba = Rgba::WHITE;

/// Quarter-transparent tint for a cell that has been alive `age` times.
/// Age 0 stays plain white.
pub fn age_to_color(age: u32) -> Rgba {
    if age == 0 {
        return DEAD_COLOR;
    }
    let scaled = age.wrapping_mul(1000);
    Rgba {
        r: ((scaled & 0x00FF_0000) >> 16) as u8,
        g: ((scaled.wrapping_mul(1000) & 0xFF00) >> 8) as u8,
        b: (scaled & 0xFF) as u8,
        a: 64,
    }
}

/// Number of rendered generations each cell has spent alive. The count is
/// cumulative, so dead cells keep the tint of their past activity.
#[derive(Debug, Clone)]
pub struct CellAges {
    size: usize,
    ages: Vec<u32>,
}

impl CellAges {
    pub fn new(size: usize) -> Self {
        Self { size, ages: vec![0; size * size] }
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        if x < self.size && y < self.size { self.ages[y * self.size + x] } else { 0 }
    }

    /// Bumps the counter of every live cell in `grid`.
    pub fn record(&mut self, grid: &Grid) {
        for (x, y, alive) in grid.iter() {
            if alive {
                let age = &mut self.ages[y * self.size + x];
                *age = age.saturating_add(1);
            }
        }
    }

    pub fn reset(&mut self) {
        self.ages.fill(0);
    }
}

/// Color of one cell: live cells are black, dead ones white or age-tinted.
pub fn cell_color(alive: bool, age: u32, crazy_colors: bool) -> Rgba {
    match (alive, crazy_colors) {
        (true, _)      => ALIVE_COLOR,
        (false, true)  => age_to_color(age),
        (false, false) => DEAD_COLOR,
    }
}
