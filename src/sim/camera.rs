//! Scrolling camera
//!
//! Scrolls right at a constant speed and follows the player vertically only
//! once they leave the slack band.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::sprite::SpriteGeometry;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    /// Left edge of the view, world pixels
    pub x: i32,
    /// Top edge of the view, pixels down from the top of the world
    pub y: i32,
    /// Horizontal scroll per tick
    pub vx: i32,
}

impl Camera {
    pub fn new(speed: i32) -> Self {
        Self {
            x: 0,
            y: CAMERA_START_Y,
            vx: speed,
        }
    }

    /// Scroll forward one tick, returning the horizontal delta
    pub fn advance(&mut self) -> i32 {
        self.x += self.vx;
        self.vx
    }

    /// Highest valid `y`
    pub const fn max_y() -> i32 {
        WORLD_HEIGHT_PX - SCREEN_HEIGHT
    }

    /// Screen-space top-left of a sprite
    pub fn screen_pos(&self, sprite: &SpriteGeometry) -> IVec2 {
        IVec2::new(sprite.x - self.x, WORLD_HEIGHT_PX - sprite.height - self.y)
    }

    #[inline]
    pub fn screen_y(&self, sprite: &SpriteGeometry) -> i32 {
        self.screen_pos(sprite).y
    }

    /// Screen position if any part of the sprite is visible
    pub fn project(&self, sprite: &SpriteGeometry) -> Option<IVec2> {
        let pos = self.screen_pos(sprite);
        let size = IVec2::from(sprite.dimensions());
        let screen = IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let visible = (pos + size).cmpgt(IVec2::ZERO).all() && pos.cmplt(screen).all();
        visible.then_some(pos)
    }

    /// Follow the player vertically when they leave the slack band
    ///
    /// `dy` is the player's whole-pixel vertical displacement this tick
    /// (positive = up).
    pub fn follow(&mut self, player: &SpriteGeometry, dy: i32) {
        if dy == 0 {
            return;
        }
        let sy = self.screen_y(player);
        if sy > LOWER_SLACK || sy < UPPER_SLACK {
            self.y = (self.y - dy).clamp(0, Self::max_y());
        }
    }
}
