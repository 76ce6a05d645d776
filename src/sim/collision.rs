//! Collision checks
//!
//! Two kinds: the player kicking a crate (axis-aligned overlap), and the
//! player against the rooftops (pure column arithmetic on the track).

use super::obstacle::{ObstaclePool, SlotSet};
use super::sprite::SpriteGeometry;
use super::track::BuildingTrack;
use crate::consts::NO_GROUND;
use crate::tuning::Tuning;
use crate::{pixel, tile_of};

/// Does the player's x fall strictly inside the crate and do their vertical
/// spans intersect?
pub fn crate_hit(player: &SpriteGeometry, crate_: &SpriteGeometry) -> bool {
    player.x > crate_.x
        && player.x < crate_.x + crate_.width()
        && player.foot() < crate_.height
        && player.height > crate_.foot()
}

/// Launch every resting crate the player overlaps; returns the struck slots
pub fn strike_crates(
    player: &SpriteGeometry,
    pool: &mut ObstaclePool,
    tuning: &Tuning,
) -> SlotSet {
    let mut struck = SlotSet::default();
    for (slot, crate_) in pool.iter_mut() {
        if !crate_.hit && crate_hit(player, &crate_.sprite) {
            crate_.strike(tuning.crate_hit_vx, tuning.crate_hit_vy, tuning.crate_gravity);
            struck.insert(slot);
        }
    }
    struck
}

/// Tile column under the player's left edge
#[inline]
pub fn player_column(player: &SpriteGeometry) -> i32 {
    tile_of(player.x)
}

/// Has the player run past the last rooftop column of the current building?
pub fn over_gap(player: &SpriteGeometry, track: &BuildingTrack) -> bool {
    player_column(player) > track.edge_column() as i32
}

/// Has the player's leading column reached the next building?
pub fn entered_next(player: &SpriteGeometry, track: &BuildingTrack) -> bool {
    player_column(player) + 1 >= track.end_column() as i32
}

/// Rooftop height in pixels, or `NO_GROUND` while over the gap
pub fn ground_under(player: &SpriteGeometry, track: &BuildingTrack) -> i32 {
    if over_gap(player, track) {
        NO_GROUND
    } else {
        pixel(track.current().height)
    }
}
