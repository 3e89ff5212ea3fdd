// main.rs - Desktop front end for the toroidal Game of Life engine

use std::error::Error;

use eframe::egui;
use log::{error, info};

use life_core::{JsonFileStore, LifeConfig, PatternStore, SimulationController};

mod canvas;    // Render sink and status observer
mod ui;        // egui frame loop

use canvas::{CellCanvas, StatusBoard};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => LifeConfig::from_json_file(&path)?,
        None => LifeConfig::default(),
    };
    info!("starting with {config:?}");

    let app = LifeApp::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life (toroidal)",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}

pub type Life = SimulationController<CellCanvas, JsonFileStore, StatusBoard>;

pub struct LifeApp {
    pub life: Life,
    pub selected_pattern: usize,
    pub saved_ids: Vec<u32>,
    pub selected_saved: Option<u32>,
    pub random_seed: u64,
    pointer_down: bool,
}

impl LifeApp {
    pub fn new(config: LifeConfig) -> life_core::Result<Self> {
        let canvas = CellCanvas::new(config.size);
        let store = JsonFileStore::new(config.patterns_path.clone());
        let life = SimulationController::new(config, canvas, store, StatusBoard::default())?;

        let mut app = Self {
            life,
            selected_pattern: 0,
            saved_ids: Vec::new(),
            selected_saved: None,
            random_seed: 0,
            pointer_down: false,
        };
        app.refresh_saved();
        Ok(app)
    }

    /// Re-reads the ids offered in the "Saved" selector.
    pub fn refresh_saved(&mut self) {
        match self.life.store().list() {
            Ok(records) => {
                self.saved_ids = records.iter().map(|r| r.id).collect();
                if self.selected_saved.is_none() {
                    self.selected_saved = self.saved_ids.last().copied();
                }
            }
            Err(e) => {
                error!("reading saved patterns failed: {e}");
                self.life.observer_mut().report_error(&e);
            }
        }
    }
}
