//! Platform abstraction layer
//!
//! Handles the pieces the simulation needs from the outside world:
//! - Input sampling with press/release edge detection
//! - Frame pacing (wait for the next tick)
//! - A scripted input source for headless runs

pub mod autopilot;
pub mod clock;
pub mod input;

pub use autopilot::Autopilot;
pub use clock::{FixedRateClock, FrameClock, Unpaced};
pub use input::{ButtonSample, InputTracker};
