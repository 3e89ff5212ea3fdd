// actor.rs - Runs a controller on one tokio task, fed by a command channel
// and a fixed frame cadence.

use std::time::Duration;

use log::{info, warn};
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::controller::{SimulationController, StepOutcome};
use crate::input::PointerEvent;
use crate::patterns;
use crate::ports::{LifeObserver, RenderSink};
use crate::store::PatternStore;

/// Requests accepted by the actor. All of them are applied between frames.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Stop,
    Restart,
    Clear,
    Pointer(PointerEvent),
    Toggle { x: usize, y: usize },
    Save,
    Load(u32),
    Preset(String),
    Random(u64),
    Shutdown,
}

#[derive(Debug, Clone)]
pub struct ActorOptions {
    /// How often the host "repaints", i.e. offers the clock a frame.
    pub frame_period: Duration,
    /// Return as soon as the simulation reaches a terminal state.
    pub exit_on_over: bool,
}

impl Default for ActorOptions {
    fn default() -> Self {
        Self {
            frame_period: Duration::from_millis(16),
            exit_on_over: false,
        }
    }
}

/// Owns `controller` until shutdown, the channel closing, or (optionally) game
/// over, and hands it back. Input from other tasks is serialized through
/// `commands`, so the grid is only ever touched here.
pub async fn run_actor<R, S, O>(
    mut controller: SimulationController<R, S, O>,
    mut commands: mpsc::Receiver<Command>,
    options: ActorOptions,
) -> SimulationController<R, S, O>
where
    R: RenderSink,
    S: PatternStore,
    O: LifeObserver,
{
    let mut frames = time::interval(options.frame_period);
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            command = commands.recv() => {
                match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => apply(&mut controller, command),
                }
            }
            _ = frames.tick() => {
                let outcome = controller.frame(Instant::now().into_std());
                if let Some(StepOutcome::Terminal { iteration }) = outcome {
                    info!("actor saw game over at iteration {iteration}");
                    if options.exit_on_over {
                        break;
                    }
                }
            }
        }
    }
    controller
}

fn apply<R, S, O>(controller: &mut SimulationController<R, S, O>, command: Command)
where
    R: RenderSink,
    S: PatternStore,
    O: LifeObserver,
{
    match command {
        Command::Start => controller.start_at(Instant::now().into_std()),
        Command::Stop => controller.stop(),
        Command::Restart => controller.restart_at(Instant::now().into_std()),
        Command::Clear => controller.clear(),
        Command::Pointer(event) => {
            controller.handle_pointer(event);
        }
        Command::Toggle { x, y } => {
            controller.toggle(x, y);
        }
        Command::Save => {
            if let Err(e) = controller.save_pattern() {
                warn!("saving pattern failed: {e}");
            }
        }
        Command::Load(id) => {
            if let Err(e) = controller.load_pattern(id) {
                warn!("loading pattern {id} failed: {e}");
            }
        }
        Command::Preset(name) => match patterns::find(&name) {
            Some(pattern) => controller.apply_preset(pattern),
            None => warn!("unknown preset {name:?}"),
        },
        Command::Random(seed) => controller.randomize(seed),
        // Handled by the run loop before dispatch.
        Command::Shutdown => {}
    }
}
