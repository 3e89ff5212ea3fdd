//! Conway's Game of Life on a toroidal grid.
//!
//! The engine is headless: rendering, pointer input, pattern persistence and
//! lifecycle notifications are ports ([`RenderSink`], [`PointerEvent`],
//! [`PatternStore`], [`LifeObserver`]) supplied by the host.
//!
//! ```
//! use life_core::{LifeConfig, MemoryStore, NullObserver, NullSink, SimulationController};
//!
//! let mut life = SimulationController::new(
//!     LifeConfig::new(5, 30.0),
//!     NullSink,
//!     MemoryStore::new(),
//!     NullObserver,
//! )
//! .unwrap();
//! for y in 1..4 {
//!     life.toggle(2, y);
//! }
//! life.step();
//! assert!(life.grid().get(1, 2) && life.grid().get(3, 2));
//! ```

pub mod actor;
pub mod age;
pub mod clock;
pub mod codec;
pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod input;
pub mod patterns;
pub mod ports;
pub mod rules;
pub mod stability;
pub mod store;

pub use actor::{run_actor, ActorOptions, Command};
pub use age::{CellAges, Rgba};
pub use clock::{FrameHandle, SimulationClock, Tick};
pub use codec::PatternRecord;
pub use config::LifeConfig;
pub use controller::{SimulationController, SimulationState, StepOutcome};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use input::{DragGesture, PointerEvent};
pub use patterns::{Pattern, PATTERNS};
pub use ports::{LifeObserver, NullObserver, NullSink, RenderSink};
pub use rules::next_generation;
pub use stability::{StabilityDetector, Verdict};
pub use store::{JsonFileStore, MemoryStore, PatternStore};
