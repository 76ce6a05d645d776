//! Presentation seam
//!
//! The simulation never touches tiles or sprites directly. Each tick it hands
//! newly exposed world columns, sprite placements and the distance counter to
//! a `Presenter`.

pub mod headless;
pub mod tiles;

pub use headless::HeadlessPresenter;
pub use tiles::{ColumnStrip, TILE_TRANSPARENT, compose_column};

use crate::consts::{SCORE_DIGITS, TILE_ZERO};
use crate::sim::{Camera, SpriteGeometry};

/// Display collaborator driven by the tick
pub trait Presenter {
    /// Render one world column; `strip.column` is the absolute column index
    fn draw_column(&mut self, strip: &ColumnStrip);

    /// Show `sprite` relative to `camera`; returns false (and hides it) if
    /// it is off-screen
    fn place_sprite(&mut self, sprite: &SpriteGeometry, camera: &Camera) -> bool;

    /// Distance travelled, in tiles
    fn update_score_display(&mut self, distance: u32);
}

/// Decimal digits of the distance counter, least significant first
pub fn score_digits(mut distance: u32) -> [u8; SCORE_DIGITS] {
    let mut digits = [0u8; SCORE_DIGITS];
    for digit in digits.iter_mut() {
        *digit = (distance % 10) as u8;
        distance /= 10;
    }
    digits
}

/// Sprite tile for a digit (digits are two tiles tall)
#[inline]
pub fn digit_tile(digit: u8) -> u16 {
    TILE_ZERO + 2 * digit as u16
}
