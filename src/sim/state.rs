//! Game state and core simulation types
//!
//! Everything a tick mutates lives in `GameState`. There are no statics, so
//! two states built from the same seed and fed the same inputs stay identical.

use super::camera::Camera;
use super::obstacle::ObstaclePool;
use super::player::Player;
use super::track::BuildingTrack;
use super::world::WorldGenerator;
use crate::consts::{SCREEN_WIDTH, TILE_SHIFT};
use crate::pixel;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting on the title screen for the jump button
    Title,
    /// Active run
    Playing,
    /// Run frozen until pause is pressed again
    Paused,
}

/// Things that happened during a tick, for presentation and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    /// The track advanced; `start` is the first column of the new current building
    BuildingEntered { start: u32 },
    CrateSpawned { slot: usize, x: i32, height: i32 },
    CrateHit { slot: usize },
    CrateRetired { slot: usize },
    Jumped,
    Landed { hard: bool },
    /// Run over; `distance` is the score reached
    Died { distance: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the world generator was created with
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Building RNG; keeps running across resets so each run differs
    pub generator: WorldGenerator,
    pub track: BuildingTrack,
    pub crates: ObstaclePool,
    pub player: Player,
    pub camera: Camera,
    /// Ticks since the run started
    pub frame_count: u64,
    /// Rightmost world column handed to the presenter
    pub horizon: u32,
    /// Events raised by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut generator = WorldGenerator::new(seed, &tuning);
        let track = BuildingTrack::new(&mut generator);
        let player = Player::new(pixel(track.current().height));
        let camera = Camera::new(tuning.camera_speed);
        Self {
            seed,
            tuning,
            phase: GamePhase::Title,
            generator,
            track,
            crates: ObstaclePool::new(),
            player,
            camera,
            frame_count: 0,
            horizon: Self::initial_horizon(),
            events: Vec::new(),
        }
    }

    /// Last column drawn when a run starts
    pub const fn initial_horizon() -> u32 {
        (SCREEN_WIDTH >> TILE_SHIFT) as u32
    }

    /// Throw away the run and go back to the title screen
    ///
    /// Track, crates, player, camera and counters are rebuilt together; the
    /// generator carries on so the next skyline is new.
    pub fn reset(&mut self) {
        self.track = BuildingTrack::new(&mut self.generator);
        self.crates = ObstaclePool::new();
        self.player = Player::new(pixel(self.track.current().height));
        self.camera = Camera::new(self.tuning.camera_speed);
        self.frame_count = 0;
        self.horizon = Self::initial_horizon();
        self.phase = GamePhase::Title;
    }

    /// Distance run, in tiles
    pub fn score(&self) -> u32 {
        (self.camera.x.max(0) >> TILE_SHIFT) as u32
    }
}
