//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Integer and fixed-point arithmetic only
//! - No rendering or platform dependencies (presentation goes through a trait)

pub mod camera;
pub mod collision;
pub mod obstacle;
pub mod player;
pub mod sprite;
pub mod state;
pub mod tick;
pub mod track;
pub mod world;

pub use camera::Camera;
pub use collision::{crate_hit, entered_next, ground_under, over_gap, strike_crates};
pub use obstacle::{Obstacle, ObstaclePool, SlotSet};
pub use player::{Animation, Effect, Player, PlayerSense, PlayerState, Transition, transition};
pub use sprite::{SpriteGeometry, SpriteShape, SpriteSize};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use track::BuildingTrack;
pub use world::{BuildingSegment, BuildingStyle, WorldGenerator};
