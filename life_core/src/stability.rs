// stability.rs - Termination detection over the last three generations

use std::collections::VecDeque;

use crate::grid::Grid;

const HISTORY_LEN: usize = 3;

/// Result of recording a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    /// The newest generation equals the one two generations back.
    Terminal,
}

/// Keeps the three most recent generations, newest first, and flags the
/// simulation as finished when generation `t` equals generation `t - 2`.
///
/// This catches still lifes (including the empty grid) and period-2
/// oscillators. Longer cycles, such as the period-3 pulsar or a glider
/// circling the torus, are not detected and run until stopped.
#[derive(Debug, Default)]
pub struct StabilityDetector {
    history: VecDeque<Grid>,
    terminal: bool,
}

impl StabilityDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `grid` as the newest generation and compares it with the
    /// generation two steps back.
    pub fn record(&mut self, grid: Grid) -> Verdict {
        self.history.push_front(grid);
        self.history.truncate(HISTORY_LEN);

        self.terminal = match (self.history.front(), self.history.get(2)) {
            (Some(newest), Some(oldest)) => newest == oldest,
            _ => false,
        };

        if self.terminal { Verdict::Terminal } else { Verdict::Continue }
    }

    /// Verdict of the last `record` call; `false` on an empty history.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.terminal = false;
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Recorded generations, newest first.
    pub fn history(&self) -> impl Iterator<Item = &Grid> {
        self.history.iter()
    }
}
