//! Sprite geometry shared by the player and crates
//!
//! Shapes and sizes follow the usual 8/16/32/64 hardware sprite table. The
//! `height` of a sprite is its top edge measured up from the world floor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteShape {
    Square,
    Wide,
    Tall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteSize {
    S8,
    S16,
    S32,
    S64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteGeometry {
    /// Left edge, world pixels
    pub x: i32,
    /// Top edge above the world floor, pixels
    pub height: i32,
    pub shape: SpriteShape,
    pub size: SpriteSize,
    pub tile: u16,
}

impl SpriteGeometry {
    pub fn new(x: i32, height: i32, shape: SpriteShape, size: SpriteSize, tile: u16) -> Self {
        Self {
            x,
            height,
            shape,
            size,
            tile,
        }
    }

    /// (width, height) in pixels
    pub fn dimensions(&self) -> (i32, i32) {
        use SpriteShape::*;
        use SpriteSize::*;
        match (self.shape, self.size) {
            (Square, S8) => (8, 8),
            (Square, S16) => (16, 16),
            (Square, S32) => (32, 32),
            (Square, S64) => (64, 64),
            (Wide, S8) => (16, 8),
            (Wide, S16) => (32, 8),
            (Wide, S32) => (32, 16),
            (Wide, S64) => (64, 32),
            (Tall, S8) => (8, 16),
            (Tall, S16) => (8, 32),
            (Tall, S32) => (16, 32),
            (Tall, S64) => (32, 64),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.dimensions().0
    }

    #[inline]
    pub fn sprite_height(&self) -> i32 {
        self.dimensions().1
    }

    /// Bottom edge above the world floor
    #[inline]
    pub fn foot(&self) -> i32 {
        self.height - self.sprite_height()
    }
}
