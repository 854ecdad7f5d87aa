//! Headless scripted host.
//!
//! Drives the game core through a full session without a window: loads
//! assets, walks the menus, enters a seed, dismisses the intro, then flies
//! the probe and lets it scan until the session ends. Useful for smoke
//! testing the simulation and for profiling chunk generation.
//!
//! Usage: `openprobe [--seed SEED] [--max-ticks N]`

use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use engine_core::Time;
use input::FrameInput;
use log::info;

use game::assets::LogSounds;
use game::{Game, GameConfig, GameSignal, Screen, ViewState};

/// Tick period of the scripted loop.
const TICK: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "openprobe", version, about = "Headless scripted session host", long_about = None)]
struct Args {
    /// Seed to type into the creation menu (lowercase alphanumerics, up to
    /// 8 characters); accepts the rolled random seed when omitted
    #[arg(long)]
    seed: Option<String>,

    /// Stop the scripted loop after this many ticks
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,
}

/// Script state: the seed is typed exactly once per creation screen visit.
struct Script {
    seed: Option<String>,
    seed_cleared: bool,
    seed_typed: bool,
}

impl Script {
    fn fill(&mut self, game: &Game, input: &mut FrameInput) {
        match game.screen() {
            Screen::Loading => {}
            Screen::LoadFailed => {
                input.confirm = true;
            }
            Screen::Menu => {
                // "New game" is the initial selection.
                input.confirm = true;
            }
            Screen::CreatingGame => self.fill_creation(game, input),
            Screen::InGame => self.fill_session(game, input),
            Screen::Won | Screen::Lost | Screen::Settings | Screen::Credits => {
                input.confirm = true;
            }
        }
    }

    /// Replace the randomized seed with the requested one, or accept it as is.
    fn fill_creation(&mut self, game: &Game, input: &mut FrameInput) {
        let Some(seed) = &self.seed else {
            input.confirm = true;
            return;
        };
        if !self.seed_cleared {
            if game.creation().seed().is_empty() {
                self.seed_cleared = true;
            } else {
                input.backspace = true;
                return;
            }
        }
        if !self.seed_typed {
            input.typed = seed.chars().collect();
            self.seed_typed = true;
            return;
        }
        input.confirm = true;
    }

    /// Dismiss the intro, then fly east whenever no scan is running.
    fn fill_session(&mut self, game: &Game, input: &mut FrameInput) {
        let Some(world) = game.world() else {
            return;
        };
        if world.intro_text(std::time::Instant::now()).is_some() {
            input.confirm = true;
            return;
        }
        let scanning = world.ships().iter().any(|ship| ship.scanning());
        input.right = !scanning;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig::load();
    let mut game = Game::new(config, Box::new(LogSounds));
    let mut view = ViewState::new();
    let mut time = Time::new();
    let mut script = Script {
        seed: args.seed,
        seed_cleared: false,
        seed_typed: false,
    };

    let mut final_screen = Screen::Loading;
    for tick in 0..args.max_ticks {
        let now = time.update();
        let mut input = FrameInput::new();
        script.fill(&game, &mut input);

        if game.update(now, &input, &mut view) == GameSignal::Exit {
            break;
        }

        if time.frame_count() % 600 == 0 {
            log::debug!(
                "tick {}: {:.1} ms frame, {:.0} fps",
                time.frame_count(),
                time.delta_seconds() * 1e3,
                time.fps(),
            );
        }

        final_screen = game.screen();
        if matches!(final_screen, Screen::Won | Screen::Lost) {
            info!("session over after {tick} ticks ({:.1} s)", time.elapsed_seconds());
            break;
        }
        thread::sleep(TICK);
    }

    if let Some(world) = game.world() {
        info!(
            "final screen {:?}: score {}/{}, {} planets streamed in {} chunks, clock at {}",
            final_screen,
            world.score(),
            world.win_score(),
            world.planets().len(),
            world.chunks_generated(),
            world.doomsday_clock(),
        );
    } else if let Some(error) = game.load_error() {
        bail!("assets failed to load: {error}");
    }

    Ok(())
}
