//! Player kinematics and state machine
//!
//! Each tick is split in two: `transition` looks at what the player senses
//! (state, foot, ground, velocity, jump edges) and decides the next state plus
//! a single effect, then `Player::apply` and `Player::animate` carry it out.
//! Keeping the decision pure lets every rule be tested in isolation.

use serde::{Deserialize, Serialize};

use super::sprite::{SpriteGeometry, SpriteShape, SpriteSize};
use crate::consts::{PLAYER_DROP_HEIGHT, PLAYER_START_X};
use crate::tuning::Tuning;
use crate::whole_pixels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Run,
    Jump,
    Fall,
    Roll,
    Dead,
}

/// Sprite animation: `len` frames starting at tile `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub start: u16,
    pub len: u16,
    pub frame: u16,
}

pub const ANIM_RUN: Animation = Animation {
    start: 0,
    len: 6,
    frame: 0,
};
pub const ANIM_FALL: Animation = Animation {
    start: 12,
    len: 2,
    frame: 0,
};
pub const ANIM_ROLL: Animation = Animation {
    start: 16,
    len: 4,
    frame: 0,
};

impl Animation {
    /// Animation played in `state`, from frame zero
    pub fn for_state(state: PlayerState) -> Self {
        match state {
            PlayerState::Run | PlayerState::Jump => ANIM_RUN,
            PlayerState::Fall | PlayerState::Dead => ANIM_FALL,
            PlayerState::Roll => ANIM_ROLL,
        }
    }

    /// Frames are two tiles tall
    #[inline]
    pub fn tile(&self) -> u16 {
        self.start + 2 * self.frame
    }
}

/// Everything the state machine looks at for one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSense {
    pub state: PlayerState,
    /// Bottom of the sprite above the floor
    pub foot: i32,
    /// Rooftop height under the player, or `NO_GROUND` over a gap
    pub ground: i32,
    pub vy: i32,
    pub jump_pressed: bool,
    pub jump_released: bool,
}

/// Side effect that accompanies a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Touch down on the roof at `ground`
    Land { ground: i32, hard: bool },
    /// Walked off an edge
    StartFall,
    /// Take-off
    Launch,
    /// Jump released early: cap the ascent
    ClampAscent,
    /// Fell below the floor
    Die,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: PlayerState,
    pub effect: Effect,
}

impl Transition {
    fn stay(state: PlayerState) -> Self {
        Self {
            state,
            effect: Effect::None,
        }
    }

    fn to(state: PlayerState, effect: Effect) -> Self {
        Self { state, effect }
    }
}

/// Decide the next state. Total over every state and input combination.
pub fn transition(sense: &PlayerSense, tuning: &Tuning) -> Transition {
    use PlayerState::*;

    match sense.state {
        Fall => {
            if (sense.foot - sense.ground).abs() <= tuning.ground_thresh {
                let hard = sense.vy < tuning.roll_thresh;
                let state = if hard { Roll } else { Run };
                Transition::to(
                    state,
                    Effect::Land {
                        ground: sense.ground,
                        hard,
                    },
                )
            } else if sense.foot < 0 {
                Transition::to(Dead, Effect::Die)
            } else {
                Transition::stay(Fall)
            }
        }
        Run | Roll => {
            if sense.foot > sense.ground {
                Transition::to(Fall, Effect::StartFall)
            } else if sense.jump_pressed {
                Transition::to(Jump, Effect::Launch)
            } else {
                Transition::stay(sense.state)
            }
        }
        Jump => {
            if sense.vy <= 0 {
                Transition::stay(Fall)
            } else if sense.jump_released {
                Transition::to(Jump, Effect::ClampAscent)
            } else {
                Transition::stay(Jump)
            }
        }
        Dead => Transition::stay(Dead),
    }
}

/// The runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub sprite: SpriteGeometry,
    /// Horizontal motion follows the camera; `vx`/`ax` are not integrated yet
    pub vx: i32,
    pub vy: i32,
    pub ax: i32,
    pub ay: i32,
    pub state: PlayerState,
    pub anim: Animation,
}

impl Player {
    /// Spawn above the first rooftop (`roof` in pixels), dropping onto it
    pub fn new(roof: i32) -> Self {
        let anim = ANIM_RUN;
        Self {
            sprite: SpriteGeometry::new(
                PLAYER_START_X,
                roof + PLAYER_DROP_HEIGHT,
                SpriteShape::Tall,
                SpriteSize::S8,
                anim.tile(),
            ),
            vx: 0,
            vy: 0,
            ax: 0,
            ay: 0,
            state: PlayerState::Run,
            anim,
        }
    }

    #[inline]
    pub fn foot(&self) -> i32 {
        self.sprite.foot()
    }

    pub fn sense(&self, ground: i32, jump_pressed: bool, jump_released: bool) -> PlayerSense {
        PlayerSense {
            state: self.state,
            foot: self.foot(),
            ground,
            vy: self.vy,
            jump_pressed,
            jump_released,
        }
    }

    /// Carry out the effect of a transition (the state itself changes in `animate`)
    pub fn apply(&mut self, effect: Effect, tuning: &Tuning) {
        match effect {
            Effect::None => {}
            Effect::Land { ground, .. } => {
                self.vy = 0;
                self.ay = 0;
                self.sprite.height = ground + self.sprite.sprite_height();
                log::debug!("snapping to ground: {}", ground);
            }
            Effect::StartFall => {
                self.ay = tuning.gravity;
            }
            Effect::Launch => {
                self.vy = tuning.jump_start_vel;
                self.ay = tuning.gravity;
            }
            Effect::ClampAscent => {
                self.vy = self.vy.min(tuning.jump_end_vel);
            }
            Effect::Die => {
                self.vy = 0;
                self.ay = 0;
            }
        }
    }

    /// Switch to `new_state`, or step the current animation
    ///
    /// Frames advance on even ticks only. A roll ends by itself once its
    /// animation wraps back to frame zero.
    pub fn animate(&mut self, new_state: PlayerState, frame_count: u64) {
        if new_state != self.state {
            self.state = new_state;
            self.anim = Animation::for_state(new_state);
        } else if frame_count % 2 == 0 {
            self.anim.frame = (self.anim.frame + 1) % self.anim.len;
            if self.state == PlayerState::Roll && self.anim.frame == 0 {
                self.state = PlayerState::Run;
                self.anim = ANIM_RUN;
            }
        }
        self.sprite.tile = self.anim.tile();
    }

    /// Vertical step; returns the whole-pixel displacement (positive = up)
    pub fn integrate(&mut self) -> i32 {
        self.vy += self.ay;
        let dy = whole_pixels(self.vy);
        self.sprite.height += dy;
        dy
    }
}
