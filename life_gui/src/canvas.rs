// canvas.rs - Render sink backed by a color buffer, and the status observer

use egui::Color32;

use life_core::{LifeError, LifeObserver, PatternRecord, RenderSink, Rgba};

/// One color per cell, repainted by the engine and drawn by egui every frame.
pub struct CellCanvas {
    size: usize,
    colors: Vec<Color32>,
}

impl CellCanvas {
    pub fn new(size: usize) -> Self {
        Self { size, colors: vec![Color32::WHITE; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn color(&self, x: usize, y: usize) -> Color32 {
        self.colors[y * self.size + x]
    }
}

impl RenderSink for CellCanvas {
    fn clear(&mut self) {
        self.colors.fill(Color32::TRANSPARENT);
    }

    fn paint_cell(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.size && y < self.size {
            self.colors[y * self.size + x] = Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a);
        }
    }
}

/// What the header shows: current iteration and the latest notice.
#[derive(Default)]
pub struct StatusBoard {
    pub iteration: u64,
    pub message: String,
}

impl StatusBoard {
    pub fn report_error(&mut self, error: &LifeError) {
        self.message = format!("Error: {error}");
    }
}

impl LifeObserver for StatusBoard {
    fn on_init(&mut self) {
        self.message = "Click or drag over cells, then press Start.".to_string();
    }

    fn on_start(&mut self) {
        self.message.clear();
    }

    fn on_over(&mut self, final_iteration: u64) {
        self.iteration = final_iteration;
        self.message = format!("Game over after {final_iteration} iterations");
    }

    fn on_draw(&mut self, iteration: u64) {
        self.iteration = iteration;
    }

    fn on_save_pattern(&mut self, record: &PatternRecord) {
        self.message = format!("Saved pattern #{}", record.id);
    }

    fn on_load_pattern(&mut self, record: &PatternRecord) {
        self.message = format!("Loaded pattern #{}", record.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_converts_engine_colors() {
        let mut canvas = CellCanvas::new(2);
        canvas.clear();
        canvas.paint_cell(1, 0, Rgba::BLACK);
        assert_eq!(canvas.color(1, 0), Color32::BLACK);
        assert_eq!(canvas.color(0, 1), Color32::TRANSPARENT);
        canvas.paint_cell(5, 5, Rgba::BLACK);
    }

    #[test]
    fn status_tracks_game_over() {
        let mut status = StatusBoard::default();
        status.on_draw(7);
        status.on_over(8);
        assert_eq!(status.iteration, 8);
        assert!(status.message.contains("8 iterations"));
    }
}
