//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically, one display
//! refresh per call.

use super::collision::{entered_next, ground_under, strike_crates};
use super::player::{Effect, PlayerState, transition};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{CRATE_SPAWN_OFFSET, SCREEN_WIDTH, TILE_SHIFT};
use crate::pixel;
use crate::renderer::{Presenter, compose_column};

/// Input for a single tick (edges already computed against the previous tick)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump went down this tick
    pub jump_pressed: bool,
    /// Jump went up this tick
    pub jump_released: bool,
    /// Pause went down this tick
    pub pause_pressed: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, presenter: &mut impl Presenter) {
    state.events.clear();

    match state.phase {
        GamePhase::Title => {
            if input.jump_pressed {
                start_run(state, presenter);
            }
            return;
        }
        GamePhase::Paused => {
            if !input.pause_pressed {
                return;
            }
            // The resuming tick is simulated too
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Resumed);
            log::info!("Resumed at distance {}", state.score());
        }
        GamePhase::Playing => {
            if input.pause_pressed {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Paused);
                log::info!("Paused at distance {}", state.score());
                return;
            }
        }
    }

    play(state, input, presenter);
}

/// Leave the title screen: paint the first screen of buildings
fn start_run(state: &mut GameState, presenter: &mut impl Presenter) {
    for column in 0..=state.horizon {
        if let Some(strip) = compose_column(&state.track, column) {
            presenter.draw_column(&strip);
        }
    }
    presenter.update_score_display(0);
    state.phase = GamePhase::Playing;
    state.events.push(GameEvent::Started);
    log::info!("Run started (seed {})", state.seed);
}

fn play(state: &mut GameState, input: &TickInput, presenter: &mut impl Presenter) {
    // Auto-run: camera and player move together
    let cam_delta = state.camera.advance();
    state.player.sprite.x += cam_delta;

    if cam_delta > 0 {
        let struck = strike_crates(&state.player.sprite, &mut state.crates, &state.tuning);
        for slot in struck.iter() {
            state.events.push(GameEvent::CrateHit { slot });
        }

        if entered_next(&state.player.sprite, &state.track) {
            enter_next_building(state);
        }

        draw_horizon(state, presenter);
    }

    // Player state machine against the (possibly new) ground
    let ground = ground_under(&state.player.sprite, &state.track);
    let sense = state
        .player
        .sense(ground, input.jump_pressed, input.jump_released);
    let next = transition(&sense, &state.tuning);
    state.player.apply(next.effect, &state.tuning);

    match next.effect {
        Effect::Launch => state.events.push(GameEvent::Jumped),
        Effect::Land { hard, .. } => state.events.push(GameEvent::Landed { hard }),
        _ => {}
    }

    if next.state == PlayerState::Dead {
        let distance = state.score();
        log::info!("died at distance {}! resetting", distance);
        state.reset();
        state.events.push(GameEvent::Died { distance });
        return;
    }

    state.frame_count += 1;
    state.player.animate(next.state, state.frame_count);

    let dy = state.player.integrate();
    state.camera.follow(&state.player.sprite, dy);

    presenter.place_sprite(&state.player.sprite, &state.camera);

    let camera = state.camera;
    let retired = state.crates.tick(|sprite| presenter.place_sprite(sprite, &camera));
    for slot in retired.iter() {
        state.events.push(GameEvent::CrateRetired { slot });
    }

    presenter.update_score_display(state.score());
}

/// Recycle the building just passed into the far end of the window and put a
/// crate on it
fn enter_next_building(state: &mut GameState) {
    let slot = state.track.advance(&mut state.generator);
    let building = *state.track.slot(slot);
    let x = pixel(state.track.start_of(slot)) + CRATE_SPAWN_OFFSET;
    let height = pixel(building.height) + pixel(1);
    let crate_slot = state.crates.spawn(x, height);

    state.events.push(GameEvent::BuildingEntered {
        start: state.track.current_start(),
    });
    state.events.push(GameEvent::CrateSpawned {
        slot: crate_slot,
        x,
        height,
    });
}

/// Draw every column the right edge of the view has uncovered
fn draw_horizon(state: &mut GameState, presenter: &mut impl Presenter) {
    let new_col = (((state.camera.x + SCREEN_WIDTH) >> TILE_SHIFT) + 1).max(0) as u32;
    if new_col <= state.horizon {
        return;
    }
    for column in state.horizon + 1..=new_col {
        if let Some(strip) = compose_column(&state.track, column) {
            presenter.draw_column(&strip);
        }
    }
    state.horizon = new_col;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIX_ONE, MAX_CRATES, NO_GROUND, WORLD_HEIGHT_PX};
    use crate::renderer::HeadlessPresenter;
    use crate::sim::player::{ANIM_RUN, Player};
    use crate::tuning::Tuning;

    fn press() -> TickInput {
        TickInput {
            jump_pressed: true,
            ..Default::default()
        }
    }

    fn pause() -> TickInput {
        TickInput {
            pause_pressed: true,
            ..Default::default()
        }
    }

    /// A run in progress with the player standing on the first roof
    fn running(seed: u64) -> (GameState, HeadlessPresenter) {
        let mut state = GameState::new(seed, Tuning::default());
        let mut presenter = HeadlessPresenter::new();
        tick(&mut state, &press(), &mut presenter);
        assert_eq!(state.phase, GamePhase::Playing);
        let roof = pixel(state.track.current().height);
        state.player.sprite.height = roof + state.player.sprite.sprite_height();
        (state, presenter)
    }

    fn roof(state: &GameState) -> i32 {
        pixel(state.track.current().height)
    }

    #[test]
    fn test_title_waits_for_jump() {
        let mut state = GameState::new(1, Tuning::default());
        let mut presenter = HeadlessPresenter::new();
        tick(&mut state, &TickInput::default(), &mut presenter);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.camera.x, 0);

        tick(&mut state, &press(), &mut presenter);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events, vec![GameEvent::Started]);
        assert_eq!(presenter.last_column, Some(GameState::initial_horizon()));
    }

    #[test]
    fn test_pause_freezes_and_resumes() {
        let (mut state, mut presenter) = running(2);
        tick(&mut state, &pause(), &mut presenter);
        assert_eq!(state.phase, GamePhase::Paused);
        let cam_x = state.camera.x;
        tick(&mut state, &press(), &mut presenter);
        tick(&mut state, &TickInput::default(), &mut presenter);
        assert_eq!(state.camera.x, cam_x);

        tick(&mut state, &pause(), &mut presenter);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events.first(), Some(&GameEvent::Resumed));
        // Resuming tick already scrolls
        assert_eq!(state.camera.x, cam_x + state.camera.vx);
        tick(&mut state, &TickInput::default(), &mut presenter);
        assert_eq!(state.camera.x, cam_x + 2 * state.camera.vx);
    }

    #[test]
    fn test_standing_on_roof_keeps_running() {
        let (mut state, mut presenter) = running(3);
        assert_eq!(state.player.foot(), roof(&state));
        tick(&mut state, &TickInput::default(), &mut presenter);
        assert_eq!(state.player.state, PlayerState::Run);
        assert_eq!(state.player.foot(), roof(&state));
        assert_eq!(state.player.vy, 0);
    }

    #[test]
    fn test_jump_request_launches() {
        let (mut state, mut presenter) = running(4);
        let tuning = state.tuning.clone();
        tick(&mut state, &press(), &mut presenter);
        assert_eq!(state.player.state, PlayerState::Jump);
        assert!(state.events.contains(&GameEvent::Jumped));
        // Launch velocity, then one step of gravity
        assert_eq!(state.player.vy, tuning.jump_start_vel + tuning.gravity);
        assert!(state.player.foot() > roof(&state));
    }

    #[test]
    fn test_early_release_gives_short_hop() {
        let (mut state, mut presenter) = running(5);
        let tuning = state.tuning.clone();
        tick(&mut state, &press(), &mut presenter);
        let release = TickInput {
            jump_released: true,
            ..Default::default()
        };
        tick(&mut state, &release, &mut presenter);
        assert_eq!(state.player.vy, tuning.jump_end_vel + tuning.gravity);
    }

    #[test]
    fn test_player_moves_with_camera() {
        let (mut state, mut presenter) = running(6);
        let offset = state.player.sprite.x - state.camera.x;
        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), &mut presenter);
            assert_eq!(state.player.sprite.x - state.camera.x, offset);
        }
    }

    #[test]
    fn test_entering_next_building_spawns_one_crate() {
        let (mut state, mut presenter) = running(7);
        let end = state.track.end_column();
        // Next tick's advance puts the leading column on the next building
        state.player.sprite.x = pixel(end - 1) - state.camera.vx;
        let old_slot = state.track.current_slot();

        tick(&mut state, &TickInput::default(), &mut presenter);

        assert_eq!(state.track.current_start(), end);
        assert_eq!(state.crates.count(), 1);
        let spawned: Vec<_> = state
            .events
            .iter()
            .filter_map(|e| match e {
                GameEvent::CrateSpawned { slot, x, height } => Some((*slot, *x, *height)),
                _ => None,
            })
            .collect();
        assert_eq!(spawned.len(), 1);
        let (slot, x, height) = spawned[0];
        let building = state.track.slot(old_slot);
        assert_eq!(x, pixel(state.track.start_of(old_slot)) + CRATE_SPAWN_OFFSET);
        assert_eq!(height, pixel(building.height) + pixel(1));
        let crate_ = state.crates.get(slot);
        assert!(crate_.valid && !crate_.hit);
        assert_eq!((crate_.sprite.x, crate_.sprite.height), (x, height));
    }

    #[test]
    fn test_running_into_crate_launches_it() {
        let (mut state, mut presenter) = running(8);
        let roof = roof(&state);
        let x = state.player.sprite.x + 2;
        let slot = state.crates.spawn(x, roof + pixel(1));

        tick(&mut state, &TickInput::default(), &mut presenter);

        assert!(state.events.contains(&GameEvent::CrateHit { slot }));
        let crate_ = state.crates.get(slot);
        assert!(crate_.hit);
        // Integrated once in the same tick
        assert!(crate_.sprite.height > roof + pixel(1));
        assert!(crate_.sprite.x > x);
    }

    #[test]
    fn test_walking_off_edge_falls() {
        let (mut state, mut presenter) = running(9);
        let edge = state.track.edge_column();
        state.player.sprite.x = pixel(edge + 1);
        assert_eq!(ground_under(&state.player.sprite, &state.track), NO_GROUND);
        tick(&mut state, &TickInput::default(), &mut presenter);
        assert_eq!(state.player.state, PlayerState::Fall);
        assert_eq!(state.player.ay, state.tuning.gravity);
    }

    #[test]
    fn test_falling_below_floor_resets_everything() {
        let (mut state, mut presenter) = running(10);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), &mut presenter);
        }
        state.crates.spawn(5000, 100);
        state.player.state = PlayerState::Fall;
        state.player.vy = -4 * FIX_ONE;
        state.player.sprite.height = -1 + state.player.sprite.sprite_height();
        // Score as it will be after this tick's scroll
        let distance = ((state.camera.x + state.camera.vx) >> TILE_SHIFT) as u32;
        assert!(distance > 0);

        tick(&mut state, &TickInput::default(), &mut presenter);

        assert_eq!(state.events, vec![GameEvent::Died { distance }]);
        assert_eq!(state.phase, GamePhase::Title);
        assert_eq!(state.score(), 0);
        assert_eq!(state.camera.x, 0);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.crates.count(), 0);
        assert_eq!(state.track.current_start(), 0);
        assert_eq!(state.player, Player::new(roof(&state)));
        assert_eq!(state.player.state, PlayerState::Run);
        assert_eq!(state.player.anim, ANIM_RUN);
    }

    #[test]
    fn test_idle_run_eventually_dies_and_returns_to_title() {
        let (mut state, mut presenter) = running(11);
        let mut died = false;
        for _ in 0..2000 {
            tick(&mut state, &TickInput::default(), &mut presenter);
            if state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Died { .. }))
            {
                died = true;
                break;
            }
        }
        assert!(died);
        assert_eq!(state.phase, GamePhase::Title);
    }

    #[test]
    fn test_horizon_draws_each_new_column() {
        let (mut state, mut presenter) = running(12);
        let drawn_at_start = presenter.columns_drawn;
        for _ in 0..16 {
            tick(&mut state, &TickInput::default(), &mut presenter);
        }
        // Right edge moves from 240 to 320 px: columns 31..=41
        assert_eq!(presenter.columns_drawn, drawn_at_start + 11);
        assert_eq!(presenter.last_column, Some(state.horizon));
        assert_eq!(presenter.distance, state.score());
    }

    #[test]
    fn test_pool_never_exceeds_capacity_over_long_run() {
        let (mut state, mut presenter) = running(13);
        for _ in 0..(MAX_CRATES * 3) {
            let end = state.track.end_column();
            state.player.sprite.x = pixel(end - 1) - state.camera.vx;
            // Keep the player airborne and well above the floor
            state.player.sprite.height = WORLD_HEIGHT_PX;
            tick(&mut state, &TickInput::default(), &mut presenter);
            assert_eq!(state.phase, GamePhase::Playing);
            assert!(state.crates.count() <= MAX_CRATES);
        }
        // Every crate is still ahead of the camera, so the ring is full
        assert_eq!(state.crates.count(), MAX_CRATES);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let (mut a, mut pa) = running(99999);
        let (mut b, mut pb) = running(99999);
        let inputs = [TickInput::default(), press(), TickInput::default(), pause(), pause()];
        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, &mut pa);
            tick(&mut b, input, &mut pb);
            assert_eq!(a.player, b.player);
            assert_eq!(a.camera, b.camera);
            assert_eq!(a.events, b.events);
        }
    }
}
