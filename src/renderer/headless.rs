//! Presenter without a display
//!
//! Keeps a 64-column wrapping tile map like a hardware background layer, the
//! last placement of every sprite, and the distance counter. Used by the
//! native runner and by tests.

use glam::IVec2;

use super::{ColumnStrip, Presenter, TILE_TRANSPARENT, digit_tile, score_digits};
use crate::consts::{SCORE_DIGITS, WORLD_HEIGHT};
use crate::sim::{Camera, SpriteGeometry};

/// Width of the wrapping background map, in columns
pub const MAP_COLUMNS: usize = 64;

#[derive(Debug, Clone)]
pub struct HeadlessPresenter {
    /// Background map indexed `[column % MAP_COLUMNS][row]`
    pub map: [[u16; WORLD_HEIGHT]; MAP_COLUMNS],
    /// Most recent absolute column drawn
    pub last_column: Option<u32>,
    pub columns_drawn: u64,
    /// Screen position of every visible placement since the last `clear_frame`
    pub placed: Vec<(SpriteGeometry, IVec2)>,
    /// Distance counter digit tiles, least significant first
    pub score_tiles: [u16; SCORE_DIGITS],
    pub distance: u32,
}

impl Default for HeadlessPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self {
            map: [[TILE_TRANSPARENT; WORLD_HEIGHT]; MAP_COLUMNS],
            last_column: None,
            columns_drawn: 0,
            placed: Vec::new(),
            score_tiles: [digit_tile(0); SCORE_DIGITS],
            distance: 0,
        }
    }

    /// Forget the sprites placed during the previous frame
    pub fn clear_frame(&mut self) {
        self.placed.clear();
    }

    /// Tiles currently held for an absolute column
    pub fn column(&self, column: u32) -> &[u16; WORLD_HEIGHT] {
        &self.map[column as usize % MAP_COLUMNS]
    }
}

impl Presenter for HeadlessPresenter {
    fn draw_column(&mut self, strip: &ColumnStrip) {
        self.map[strip.column as usize % MAP_COLUMNS] = strip.tiles;
        self.last_column = Some(strip.column);
        self.columns_drawn += 1;
    }

    fn place_sprite(&mut self, sprite: &SpriteGeometry, camera: &Camera) -> bool {
        match camera.project(sprite) {
            Some(pos) => {
                self.placed.push((*sprite, pos));
                true
            }
            None => false,
        }
    }

    fn update_score_display(&mut self, distance: u32) {
        self.distance = distance;
        for (tile, digit) in self.score_tiles.iter_mut().zip(score_digits(distance)) {
            *tile = digit_tile(digit);
        }
    }
}
