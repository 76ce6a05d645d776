//! Skyline Runner entry point
//!
//! Native headless runner: drives the simulation with the autopilot and
//! reports how far each run got.
//!
//! Usage: `skyline-runner [seed] [ticks] [--realtime]`

use clap::Parser;
use serde::Serialize;

use skyline_runner::Tuning;
use skyline_runner::platform::{Autopilot, FixedRateClock, FrameClock, InputTracker, Unpaced};
use skyline_runner::renderer::HeadlessPresenter;
use skyline_runner::sim::{GameEvent, GameState, tick};

/// One minute of play at 60 Hz
const DEFAULT_TICKS: u64 = 3600;

#[derive(Parser)]
#[command(name = "skyline-runner")]
#[command(about = "Run the rooftop runner headless under the autopilot")]
struct Args {
    /// World seed (defaults to the system clock)
    seed: Option<u64>,

    /// Number of 60 Hz ticks to simulate
    #[arg(default_value_t = DEFAULT_TICKS)]
    ticks: u64,

    /// Pace ticks at 60 Hz instead of running flat out
    #[arg(long)]
    realtime: bool,
}

/// End-of-session report, printed as JSON
#[derive(Debug, Default, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    deaths: u32,
    best_distance: u32,
    final_distance: u32,
    buildings_passed: u32,
    crates_hit: u32,
}

/// Game instance holding all state
struct Game {
    state: GameState,
    presenter: HeadlessPresenter,
    tracker: InputTracker,
    pilot: Autopilot,
    summary: RunSummary,
}

impl Game {
    fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            presenter: HeadlessPresenter::new(),
            tracker: InputTracker::new(),
            pilot: Autopilot::default(),
            summary: RunSummary {
                seed,
                ..Default::default()
            },
        }
    }

    /// Run one simulation tick
    fn update(&mut self) {
        let buttons = self.pilot.buttons(&self.state);
        let input = self.tracker.sample(buttons);
        self.presenter.clear_frame();
        tick(&mut self.state, &input, &mut self.presenter);
        self.summary.ticks += 1;

        for event in &self.state.events {
            match *event {
                GameEvent::Died { distance } => {
                    self.summary.deaths += 1;
                    self.summary.best_distance = self.summary.best_distance.max(distance);
                }
                GameEvent::BuildingEntered { .. } => self.summary.buildings_passed += 1,
                GameEvent::CrateHit { .. } => self.summary.crates_hit += 1,
                _ => {}
            }
        }
    }

    fn finish(mut self) -> RunSummary {
        self.summary.final_distance = self.state.score();
        self.summary.best_distance = self.summary.best_distance.max(self.summary.final_distance);
        self.summary
    }
}

fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    let args = Args::parse();
    env_logger::init();
    log::info!("Skyline Runner (headless) starting...");

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    let tuning = Tuning::from_env();
    log::info!("Game initialized with seed: {}", seed);

    let mut clock: Box<dyn FrameClock> = if args.realtime {
        Box::new(FixedRateClock::default())
    } else {
        Box::new(Unpaced)
    };

    let mut game = Game::new(seed, tuning);
    for _ in 0..args.ticks {
        clock.wait_for_next_tick();
        game.update();
    }

    let summary = game.finish();
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode summary: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_positional_and_flag() {
        let args = Args::try_parse_from(["skyline-runner", "7", "100", "--realtime"]).unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.ticks, 100);
        assert!(args.realtime);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["skyline-runner"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.ticks, DEFAULT_TICKS);
        assert!(!args.realtime);
    }

    #[test]
    fn test_args_reject_bad_seed() {
        assert!(Args::try_parse_from(["skyline-runner", "not-a-seed"]).is_err());
    }
}
