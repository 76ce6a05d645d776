//! Scripted input for headless runs
//!
//! Taps jump to leave the title screen, jumps a few columns before each
//! rooftop edge and holds the button for a full-height jump.

use super::input::ButtonSample;
use crate::sim::collision::player_column;
use crate::sim::{GamePhase, GameState, PlayerState};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Jump when this many columns (or fewer) of roof remain
    pub lead_columns: i32,
    holding: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Autopilot {
    pub fn new(lead_columns: i32) -> Self {
        Self {
            lead_columns,
            holding: false,
        }
    }

    /// Button levels to report for this tick
    pub fn buttons(&mut self, state: &GameState) -> ButtonSample {
        let jump = match state.phase {
            GamePhase::Title => !self.holding,
            GamePhase::Paused => false,
            GamePhase::Playing => match state.player.state {
                PlayerState::Run | PlayerState::Roll => !self.holding && self.near_edge(state),
                PlayerState::Jump => true,
                PlayerState::Fall | PlayerState::Dead => false,
            },
        };
        self.holding = jump;
        ButtonSample { jump, pause: false }
    }

    fn near_edge(&self, state: &GameState) -> bool {
        let remaining = state.track.edge_column() as i32 - player_column(&state.player.sprite);
        (0..=self.lead_columns).contains(&remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel;
    use crate::tuning::Tuning;

    #[test]
    fn test_taps_through_title() {
        let state = GameState::new(1, Tuning::default());
        let mut pilot = Autopilot::default();
        assert!(pilot.buttons(&state).jump);
        assert!(!pilot.buttons(&state).jump);
        assert!(pilot.buttons(&state).jump);
    }

    #[test]
    fn test_jumps_near_edge_only() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::Playing;
        let mut pilot = Autopilot::default();
        assert!(!pilot.buttons(&state).jump);

        state.player.sprite.x = pixel(state.track.edge_column() - 2);
        assert!(pilot.buttons(&state).jump);

        state.player.state = PlayerState::Jump;
        assert!(pilot.buttons(&state).jump);
        state.player.state = PlayerState::Fall;
        assert!(!pilot.buttons(&state).jump);
    }
}
