// ports.rs - Capabilities the controller drives but does not implement

use crate::age::Rgba;
use crate::codec::PatternRecord;

/// Surface cells are painted onto.
pub trait RenderSink {
    /// Called once before each fully rendered generation.
    fn clear(&mut self);

    fn paint_cell(&mut self, x: usize, y: usize, color: Rgba);
}

/// Lifecycle notifications. Every method defaults to doing nothing.
#[allow(unused_variables)]
pub trait LifeObserver {
    fn on_init(&mut self) {}

    fn on_start(&mut self) {}

    /// The simulation halted on a stable or period-2 configuration.
    fn on_over(&mut self, final_iteration: u64) {}

    /// A generation is about to be rendered.
    fn on_draw(&mut self, iteration: u64) {}

    fn on_save_pattern(&mut self, record: &PatternRecord) {}

    fn on_load_pattern(&mut self, record: &PatternRecord) {}
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn clear(&mut self) {}

    fn paint_cell(&mut self, _x: usize, _y: usize, _color: Rgba) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl LifeObserver for NullObserver {}
