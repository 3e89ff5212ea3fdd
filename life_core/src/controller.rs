// controller.rs - Owns the simulation state and mediates between clock,
// rule engine, stability detector and the injected ports.

use std::time::Instant;

use log::{debug, info};

use crate::age::{cell_color, CellAges, ALIVE_COLOR, DEAD_COLOR};
use crate::clock::{FrameHandle, SimulationClock, Tick};
use crate::codec::PatternRecord;
use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::input::{DragGesture, PointerEvent};
use crate::patterns::{self, Pattern};
use crate::ports::{LifeObserver, RenderSink};
use crate::rules::next_generation;
use crate::stability::{StabilityDetector, Verdict};
use crate::store::PatternStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Stopped,
    Running,
}

/// Result of a single `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new generation was installed.
    Advanced { iteration: u64 },
    /// The new generation repeats one from two steps back; the simulation stopped.
    Terminal { iteration: u64 },
}

impl StepOutcome {
    pub fn iteration(self) -> u64 {
        match self {
            StepOutcome::Advanced { iteration } | StepOutcome::Terminal { iteration } => iteration,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, StepOutcome::Terminal { .. })
    }
}

/// Game of Life session: one grid, its history, a clock and the three ports.
pub struct SimulationController<R, S, O> {
    config: LifeConfig,
    grid: Grid,
    ages: CellAges,
    detector: StabilityDetector,
    clock: SimulationClock,
    gesture: DragGesture,
    state: SimulationState,
    iteration: u64,
    sink: R,
    store: S,
    observer: O,
}

impl<R, S, O> SimulationController<R, S, O>
where
    R: RenderSink,
    S: PatternStore,
    O: LifeObserver,
{
    /// Validates the configuration, paints a blank board and fires `on_init`.
    pub fn new(config: LifeConfig, sink: R, store: S, observer: O) -> Result<Self> {
        config.validate()?;
        let clock = SimulationClock::new(config.fps)?;
        let grid = Grid::new(config.size)?;

        let mut controller = Self {
            ages: CellAges::new(config.size),
            config,
            grid,
            detector: StabilityDetector::new(),
            clock,
            gesture: DragGesture::new(),
            state: SimulationState::Stopped,
            iteration: 0,
            sink,
            store,
            observer,
        };
        controller.paint_blank();
        controller.observer.on_init();
        info!("initialized {0}x{0} grid at {1} fps", controller.config.size, controller.config.fps);
        Ok(controller)
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Stopped -> Running. Does nothing if already running.
    pub fn start_at(&mut self, now: Instant) {
        if self.state == SimulationState::Running {
            return;
        }
        self.state = SimulationState::Running;
        self.observer.on_start();
        self.clock.start(now);
        info!("simulation started at iteration {}", self.iteration);
    }

    /// Running -> Stopped without ending the game; queued frames are dropped.
    pub fn stop(&mut self) {
        if self.state == SimulationState::Running {
            info!("simulation paused at iteration {}", self.iteration);
        }
        self.state = SimulationState::Stopped;
        self.clock.stop();
    }

    /// Handle the host must pass back with its next frame callback.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.clock.pending()
    }

    /// Host frame callback. Steps at most once, and only when a generation is due.
    pub fn on_frame(&mut self, handle: FrameHandle, now: Instant) -> Option<StepOutcome> {
        if self.state != SimulationState::Running {
            return None;
        }
        match self.clock.poll(handle, now) {
            Tick::Step => Some(self.step()),
            Tick::Idle | Tick::Cancelled => None,
        }
    }

    /// `on_frame` with whatever handle is currently pending.
    pub fn frame(&mut self, now: Instant) -> Option<StepOutcome> {
        let handle = self.pending_frame()?;
        self.on_frame(handle, now)
    }

    /// Renders the current generation, computes the next one and installs it.
    /// Halts when the new generation equals the one two steps earlier.
    pub fn step(&mut self) -> StepOutcome {
        if self.detector.is_empty() {
            self.detector.record(self.grid.clone());
        }

        self.observer.on_draw(self.iteration);
        self.ages.record(&self.grid);
        self.render_generation();

        let next = next_generation(&self.grid);
        let verdict = self.detector.record(next.clone());
        self.grid = next;
        self.iteration += 1;
        debug!("generation {} has {} live cells", self.iteration, self.grid.alive_count());

        match verdict {
            Verdict::Continue => StepOutcome::Advanced { iteration: self.iteration },
            Verdict::Terminal => {
                self.game_over();
                StepOutcome::Terminal { iteration: self.iteration }
            }
        }
    }

    pub fn restart(&mut self) {
        self.restart_at(Instant::now());
    }

    /// Resets the counter, history and ages, then starts again from the current grid.
    pub fn restart_at(&mut self, now: Instant) {
        self.iteration = 0;
        self.detector.reset();
        self.ages.reset();
        self.state = SimulationState::Stopped;
        self.clock.stop();
        self.start_at(now);
    }

    /// Stops the simulation and empties the board.
    pub fn clear(&mut self) {
        self.stop();
        self.iteration = 0;
        self.detector.reset();
        self.ages.reset();
        self.grid.clear();
        self.sink.clear();
        self.paint_blank();
    }

    /// Flips one cell and repaints it. Returns `false` for coordinates off the grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.grid.toggle(x, y) {
            Some(alive) => {
                self.sink.paint_cell(x, y, if alive { ALIVE_COLOR } else { DEAD_COLOR });
                true
            }
            None => {
                debug!("ignoring toggle outside the grid at ({x}, {y})");
                false
            }
        }
    }

    /// Applies a pointer event; drags only toggle cells not yet visited in the gesture.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match self.gesture.accept(event) {
            Some((x, y)) => self.toggle(x, y),
            None => false,
        }
    }

    /// Replaces the grid with a stored pattern and renders it.
    /// On any error the current state is left as it was.
    pub fn load_pattern(&mut self, id: u32) -> Result<PatternRecord> {
        let record = self.store.get(id)?;
        let grid = record.to_grid()?;
        if grid.size() != self.config.size {
            return Err(LifeError::PatternSizeMismatch {
                expected: self.config.size,
                found: grid.size(),
            });
        }

        self.grid = grid;
        self.detector.reset();
        self.ages.reset();
        self.render_generation();
        self.observer.on_load_pattern(&record);
        info!("loaded pattern {id}");
        Ok(record)
    }

    /// Appends the current grid to the store under the next sequential id.
    pub fn save_pattern(&mut self) -> Result<PatternRecord> {
        let id = self.store.list()?.len() as u32 + 1;
        let record = PatternRecord::from_grid(id, &self.grid);
        self.store.append(record.clone())?;
        self.observer.on_save_pattern(&record);
        info!("saved pattern {id}");
        Ok(record)
    }

    /// Stops and replaces the board with a built-in pattern.
    pub fn apply_preset(&mut self, pattern: &Pattern) {
        self.reset_board();
        patterns::apply_pattern(&mut self.grid, pattern);
        self.render_generation();
        info!("applied preset {}", pattern.name);
    }

    /// Stops and fills the board at random from `seed`.
    pub fn randomize(&mut self, seed: u64) {
        self.reset_board();
        patterns::apply_random_pattern(&mut self.grid, seed);
        self.render_generation();
        info!("random board from seed {seed}");
    }

    pub fn set_crazy_colors(&mut self, enabled: bool) {
        self.config.crazy_colors = enabled;
    }

    pub fn set_fps(&mut self, fps: f64) -> Result<()> {
        self.clock.set_fps(fps)?;
        self.config.fps = fps;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ages(&self) -> &CellAges {
        &self.ages
    }

    pub fn detector(&self) -> &StabilityDetector {
        &self.detector
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn game_over(&mut self) {
        self.state = SimulationState::Stopped;
        self.clock.stop();
        self.observer.on_over(self.iteration);
        info!("simulation over after {} iterations", self.iteration);
    }

    fn reset_board(&mut self) {
        self.stop();
        self.iteration = 0;
        self.detector.reset();
        self.ages.reset();
    }

    fn render_generation(&mut self) {
        self.sink.clear();
        let crazy = self.config.crazy_colors;
        for (x, y, alive) in self.grid.iter() {
            self.sink.paint_cell(x, y, cell_color(alive, self.ages.get(x, y), crazy));
        }
    }

    fn paint_blank(&mut self) {
        for (x, y) in self.grid.coords() {
            self.sink.paint_cell(x, y, DEAD_COLOR);
        }
    }
}
