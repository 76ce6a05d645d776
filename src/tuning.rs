//! Data-driven game balance
//!
//! All gameplay numbers live here so a run can be retuned from a JSON file
//! without touching the simulation. Velocities and accelerations are
//! fixed-point (`FIX_ONE` = 1 pixel per tick), distances are pixels unless a
//! field says tiles.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_SPEED_X, FIX_ONE, WORLD_HEIGHT};

/// Widest building or gap a spread may produce, in tiles
pub const MAX_SPREAD_TILES: u32 = 1 << 16;

/// Tallest rooftop, in tiles; leaves room for the player above it
pub const MAX_BUILDING_HEIGHT: u32 = WORLD_HEIGHT as u32 - 2;

/// Baseline plus a symmetric random offset, in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    pub base: u32,
    pub range: u32,
}

impl Spread {
    pub const fn new(base: u32, range: u32) -> Self {
        Self { base, range }
    }

    /// Smallest value this spread can produce
    pub fn min(&self) -> u32 {
        self.base.saturating_sub(self.range)
    }

    /// Largest value this spread can produce (offsets are drawn from `[-range, range)`)
    pub fn max(&self) -> u32 {
        if self.range == 0 {
            self.base
        } else {
            self.base.saturating_add(self.range - 1)
        }
    }

    /// Clamp the spread so every value it produces lies in `floor..=ceiling`
    fn bounded(self, floor: u32, ceiling: u32) -> Self {
        let base = self.base.clamp(floor, ceiling);
        let range = self.range.min(base - floor).min(ceiling - base + 1);
        Self { base, range }
    }
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World generation (tiles) ===
    pub building_height: Spread,
    pub building_width: Spread,
    pub building_gap: Spread,

    // === Player (fixed-point) ===
    /// Downward acceleration while airborne
    pub gravity: i32,
    /// Vertical velocity at take-off
    pub jump_start_vel: i32,
    /// Ascent ceiling once the jump button is released
    pub jump_end_vel: i32,
    /// Landing faster than this (more negative) ends in a roll
    pub roll_thresh: i32,
    /// Foot-to-roof distance (pixels) within which a fall snaps to the roof
    pub ground_thresh: i32,

    // === Crates (fixed-point) ===
    pub crate_hit_vx: i32,
    pub crate_hit_vy: i32,
    pub crate_gravity: i32,

    // === Camera (pixels per tick) ===
    pub camera_speed: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            building_height: Spread::new(14, 5),
            building_width: Spread::new(50, 5),
            building_gap: Spread::new(15, 4),

            gravity: -FIX_ONE / 4,
            jump_start_vel: 5 * FIX_ONE,
            jump_end_vel: 2 * FIX_ONE,
            roll_thresh: -6 * FIX_ONE,
            ground_thresh: 8,

            crate_hit_vx: 7 * FIX_ONE,
            crate_hit_vy: 3 * FIX_ONE,
            crate_gravity: -3 * FIX_ONE / 16,

            camera_speed: CAMERA_SPEED_X,
        }
    }
}

impl Tuning {
    /// Environment variable naming an optional tuning JSON file
    pub const ENV_VAR: &'static str = "SKYLINE_TUNING";

    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from the file named by `SKYLINE_TUNING`, or defaults if unset
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => Self::default(),
        }
    }

    /// Correct values that would break world or physics invariants
    ///
    /// Buildings need at least one tile of width and gap, and at least one
    /// tile of height so a rooftop always sits above the floor. Heights stay
    /// below the top of the world. Gravity must pull downward and the camera
    /// must scroll forward.
    pub fn sanitized(mut self) -> Self {
        for (name, spread, ceiling) in [
            ("building_height", &mut self.building_height, MAX_BUILDING_HEIGHT),
            ("building_width", &mut self.building_width, MAX_SPREAD_TILES),
            ("building_gap", &mut self.building_gap, MAX_SPREAD_TILES),
        ] {
            let fixed = spread.bounded(1, ceiling);
            if fixed != *spread {
                log::warn!("Tuning {} {:?} corrected to {:?}", name, spread, fixed);
                *spread = fixed;
            }
        }
        if self.gravity >= 0 {
            log::warn!("Tuning gravity {} must be negative, using default", self.gravity);
            self.gravity = Self::default().gravity;
        }
        if self.crate_gravity >= 0 {
            log::warn!("Tuning crate_gravity {} must be negative, using default", self.crate_gravity);
            self.crate_gravity = Self::default().crate_gravity;
        }
        if self.camera_speed <= 0 {
            log::warn!("Tuning camera_speed {} must be positive, using default", self.camera_speed);
            self.camera_speed = CAMERA_SPEED_X;
        }
        self.ground_thresh = self.ground_thresh.max(0);
        self
    }
}
