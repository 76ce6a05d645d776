//! Button sampling
//!
//! The input primitive only reports which buttons are down right now. Edges
//! are derived here by comparing against the previous tick's sample.

use crate::sim::TickInput;

/// Raw button levels for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSample {
    pub jump: bool,
    pub pause: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    prev: ButtonSample,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take this tick's sample and produce the tick input
    pub fn sample(&mut self, now: ButtonSample) -> TickInput {
        let input = TickInput {
            jump_pressed: now.jump && !self.prev.jump,
            jump_released: !now.jump && self.prev.jump,
            pause_pressed: now.pause && !self.prev.pause,
        };
        self.prev = now;
        input
    }
}
