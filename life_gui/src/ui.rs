// ui.rs - egui frame loop: drives the clock, draws the canvas, maps pointer input

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use life_core::{PointerEvent, PATTERNS};

use crate::LifeApp;

const BOARD_PIXELS: f32 = 780.0;
const SPACING: f32 = 1.0;
const GRID_LINE: Color32 = Color32::from_rgb(0, 0x33, 0);

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Each repaint is one frame callback; the engine's clock decides
        // whether a generation is due.
        if self.life.is_running() {
            self.life.frame(Instant::now());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.life.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if self.life.is_running() {
                        self.life.stop();
                    } else {
                        self.life.start();
                    }
                }

                if ui.button("⟲ Restart").clicked() {
                    self.life.restart();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.life.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.random_seed = self.random_seed.wrapping_add(1);
                    self.life.randomize(self.random_seed);
                }

                ui.separator();

                // Preset dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.life.apply_preset(&PATTERNS[self.selected_pattern]);
                }
            });

            ui.horizontal(|ui| {
                if ui.button("💾 Save").clicked() {
                    if let Err(e) = self.life.save_pattern() {
                        log::error!("save failed: {e}");
                        self.life.observer_mut().report_error(&e);
                    }
                    self.refresh_saved();
                }

                let selected_text = match self.selected_saved {
                    Some(id) => format!("#{id}"),
                    None => "none".to_string(),
                };
                egui::ComboBox::from_id_source("saved_selector")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for &id in &self.saved_ids {
                            ui.selectable_value(&mut self.selected_saved, Some(id), format!("#{id}"));
                        }
                    });

                if ui.add_enabled(self.selected_saved.is_some(), egui::Button::new("📂 Load")).clicked() {
                    if let Some(id) = self.selected_saved {
                        if let Err(e) = self.life.load_pattern(id) {
                            log::error!("load of pattern {id} failed: {e}");
                            self.life.observer_mut().report_error(&e);
                        }
                    }
                }

                ui.separator();

                let mut crazy = self.life.config().crazy_colors;
                if ui.checkbox(&mut crazy, "Crazy colors").changed() {
                    self.life.set_crazy_colors(crazy);
                }

                ui.separator();

                ui.label(format!("Iteration: {}", self.life.observer().iteration));
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = self.life.config().fps as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    if let Err(e) = self.life.set_fps(speed as f64) {
                        self.life.observer_mut().report_error(&e);
                    }
                }

                ui.separator();
                ui.label(self.life.observer().message.as_str());
            });

            ui.separator();

            let size = self.life.sink().size();
            let box_size = (BOARD_PIXELS / size as f32 - SPACING).max(2.0);
            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + SPACING) * size as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());

            // Fill background
            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, GRID_LINE);

            for y in 0..size {
                for x in 0..size {
                    let rect = Rect::from_min_size(
                        egui::pos2(
                            start_pos.x + x as f32 * (box_size + SPACING),
                            start_pos.y + y as f32 * (box_size + SPACING),
                        ),
                        Vec2::splat(box_size),
                    );
                    painter.rect_filled(rect, 1.0, self.life.sink().color(x, y));
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            // Pointer: press toggles, dragging toggles each newly entered cell once
            let cell_at = |pos: Pos2| -> Option<(usize, usize)> {
                let local = pos - start_pos;
                if local.x < 0.0 || local.y < 0.0 {
                    return None;
                }
                let x = (local.x / (box_size + SPACING)) as usize;
                let y = (local.y / (box_size + SPACING)) as usize;
                (x < size && y < size).then_some((x, y))
            };

            let hovered = response.interact_pointer_pos().and_then(cell_at);
            match (response.is_pointer_button_down_on(), self.pointer_down, hovered) {
                (true, false, Some((x, y))) => {
                    self.pointer_down = true;
                    self.life.handle_pointer(PointerEvent::Press { x, y });
                }
                (true, true, Some((x, y))) => {
                    self.life.handle_pointer(PointerEvent::Drag { x, y });
                }
                (false, true, _) => {
                    self.pointer_down = false;
                    self.life.handle_pointer(PointerEvent::Release);
                }
                _ => {}
            }

            ui.separator();

            // Statistics
            let live_cells = self.life.grid().alive_count();
            let total = size * size;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep frames coming while the simulation runs
        if self.life.is_running() {
            ctx.request_repaint();
        }
    }
}
