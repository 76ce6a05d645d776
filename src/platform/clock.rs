//! Frame pacing
//!
//! One simulation tick per display refresh. The loop blocks on
//! `wait_for_next_tick` and nothing else.

use std::time::{Duration, Instant};

/// Display refresh rate the simulation is tuned for
pub const TICK_RATE_HZ: u32 = 60;

pub trait FrameClock {
    /// Block until the next tick boundary
    fn wait_for_next_tick(&mut self);
}

/// Sleeps so ticks land on a fixed rate
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    period: Duration,
    next: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate_hz.max(1),
            next: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for FixedRateClock {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ)
    }
}

impl FrameClock for FixedRateClock {
    fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        let target = self.next.unwrap_or(now);
        if target > now {
            std::thread::sleep(target - now);
        }
        // Fell behind: restart the schedule instead of bursting to catch up
        let base = if target + self.period < now { now } else { target };
        self.next = Some(base + self.period);
    }
}

/// Never waits; ticks run as fast as the loop can go
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

impl FrameClock for Unpaced {
    fn wait_for_next_tick(&mut self) {}
}
