// main.rs - Terminal runner: the engine on a tokio actor, printed as text
//
// Usage: life_headless [config.json] [preset name | random seed] [seconds]

use std::error::Error;
use std::time::Duration;

use log::info;
use tokio::sync::mpsc;
use tokio::time;

use life_core::age::ALIVE_COLOR;
use life_core::{
    run_actor, ActorOptions, Command, LifeConfig, LifeObserver, MemoryStore, RenderSink, Rgba,
    SimulationController,
};

/// Buffers one generation as characters and prints it when the next begins.
struct TextSink {
    size: usize,
    cells: Vec<char>,
    dirty: bool,
}

impl TextSink {
    fn new(size: usize) -> Self {
        Self { size, cells: vec!['.'; size * size], dirty: false }
    }

    fn render(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn flush(&mut self) {
        if self.dirty {
            println!("{}\n", self.render());
            self.dirty = false;
        }
    }
}

impl RenderSink for TextSink {
    fn clear(&mut self) {
        self.flush();
        self.cells.fill(' ');
    }

    fn paint_cell(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.size && y < self.size {
            self.cells[y * self.size + x] = if color == ALIVE_COLOR { '#' } else { '.' };
            self.dirty = true;
        }
    }
}

/// Prints lifecycle notifications as they happen.
struct Narrator;

impl LifeObserver for Narrator {
    fn on_start(&mut self) {
        println!("-- started");
    }

    fn on_over(&mut self, final_iteration: u64) {
        println!("-- game over after {final_iteration} iterations");
    }

    fn on_draw(&mut self, iteration: u64) {
        println!("-- iteration {iteration}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => LifeConfig::from_json_file(&path)?,
        _ => LifeConfig::default(),
    };
    let seed_command = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => Command::Random(seed),
            Err(_) => Command::Preset(arg),
        },
        None => Command::Preset("Glider".to_string()),
    };
    let seconds: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 10,
    };

    info!("running {config:?} for at most {seconds}s");
    let sink = TextSink::new(config.size);
    let life = SimulationController::new(config, sink, MemoryStore::new(), Narrator)?;

    let (tx, rx) = mpsc::channel(8);
    tx.send(seed_command).await?;
    tx.send(Command::Start).await?;

    let options = ActorOptions { exit_on_over: true, ..ActorOptions::default() };
    let actor = run_actor(life, rx, options);
    tokio::pin!(actor);

    let mut life = tokio::select! {
        life = &mut actor => life,
        () = time::sleep(Duration::from_secs(seconds)) => {
            tx.send(Command::Shutdown).await?;
            actor.await
        }
    };
    life.sink_mut().flush();
    println!("-- stopped at iteration {}", life.iteration());
    Ok(())
}
