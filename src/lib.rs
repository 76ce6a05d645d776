//! Skyline Runner - simulation core of a rooftop endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (world generation, player, crates, camera)
//! - `renderer`: Presentation seam (column strips, sprite placement, score)
//! - `platform`: Input edge detection and frame pacing
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Pixels per tile edge
    pub const TILE_SIZE: i32 = 8;
    /// log2 of `TILE_SIZE`, for pixel <-> tile conversion
    pub const TILE_SHIFT: u32 = 3;

    /// Visible screen in pixels
    pub const SCREEN_WIDTH: i32 = 240;
    pub const SCREEN_HEIGHT: i32 = 160;

    /// World height in tiles (rows of a drawn column)
    pub const WORLD_HEIGHT: usize = 32;
    pub const WORLD_HEIGHT_PX: i32 = WORLD_HEIGHT as i32 * TILE_SIZE;

    /// Number of building segments kept generated ahead of the player
    pub const BUILDS_AHEAD: usize = 4;
    /// Crate pool capacity
    pub const MAX_CRATES: usize = 8;

    /// Fixed-point scale for velocities and accelerations (8 fractional bits)
    pub const FIX_ONE: i32 = 256;

    /// Ground height reported while the player is over a gap (below the floor)
    pub const NO_GROUND: i32 = -100;

    /// Camera start (pixels) and per-tick scroll speed
    pub const CAMERA_START_Y: i32 = 96;
    pub const CAMERA_SPEED_X: i32 = 5;

    /// Player spawn, relative to the first rooftop
    pub const PLAYER_START_X: i32 = 30;
    pub const PLAYER_DROP_HEIGHT: i32 = 30;

    /// Crates spawn this many pixels past the start of a new building
    pub const CRATE_SPAWN_OFFSET: i32 = 100;

    /// Screen-space band where the camera does not follow the player
    pub const UPPER_SLACK: i32 = 40;
    pub const LOWER_SLACK: i32 = 112;

    /// Sprite tile indices
    pub const TILE_ZERO: u16 = 24;
    pub const TILE_METER_MARK: u16 = 44;
    pub const TILE_CRATE: u16 = TILE_METER_MARK + 1;

    /// Digits shown on the distance counter
    pub const SCORE_DIGITS: usize = 7;
}

/// Convert a tile count to pixels
#[inline]
pub fn pixel(tiles: u32) -> i32 {
    (tiles as i32) << consts::TILE_SHIFT
}

/// Convert a pixel coordinate to the tile column containing it
#[inline]
pub fn tile_of(px: i32) -> i32 {
    px >> consts::TILE_SHIFT
}

/// Whole-pixel displacement of a fixed-point velocity (truncates toward zero)
#[inline]
pub fn whole_pixels(fixed: i32) -> i32 {
    fixed / consts::FIX_ONE
}
