//! Column strip composition
//!
//! Turns the building window into one vertical strip of background tiles.
//! Row 0 is the top of the world; a building of height `h` has its roof on
//! row `WORLD_HEIGHT - h` and its body below that.

use crate::consts::WORLD_HEIGHT;
use crate::sim::BuildingTrack;

pub const TILE_TRANSPARENT: u16 = 0;

/// One column of background tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStrip {
    pub column: u32,
    pub tiles: [u16; WORLD_HEIGHT],
}

/// Strip for an absolute column, or `None` when the column lies outside the
/// building window (behind the current building or beyond the last one)
pub fn compose_column(track: &BuildingTrack, column: u32) -> Option<ColumnStrip> {
    if column < track.current_start() {
        return None;
    }
    let (start, building) = track.segment_at(column)?;
    let style = building.style.tiles();
    let roof_row = WORLD_HEIGHT as i32 - building.height as i32;

    let (top, body) = if column == start {
        (style.top_left, style.body_left)
    } else if column < start + building.width {
        (style.top_middle, style.body_middle)
    } else if column == start + building.width {
        (style.top_right, style.body_right)
    } else {
        (TILE_TRANSPARENT, TILE_TRANSPARENT)
    };

    let mut tiles = [TILE_TRANSPARENT; WORLD_HEIGHT];
    for (row, tile) in tiles.iter_mut().enumerate() {
        let row = row as i32;
        *tile = match row.cmp(&roof_row) {
            std::cmp::Ordering::Less => TILE_TRANSPARENT,
            std::cmp::Ordering::Equal => top,
            std::cmp::Ordering::Greater => body,
        };
    }
    Some(ColumnStrip { column, tiles })
}
