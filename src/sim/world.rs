//! Procedural building generation
//!
//! Every building is a baseline plus a uniform random offset for each of
//! height, width and gap. The generator owns its seeded RNG so a given seed
//! always produces the same skyline.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::{Spread, Tuning};

/// Visual variant of a building (selects corner/edge tiles)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuildingStyle {
    #[default]
    Plain,
}

/// Background tile ids for one building style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTiles {
    pub top_left: u16,
    pub top_middle: u16,
    pub top_right: u16,
    pub body_left: u16,
    pub body_middle: u16,
    pub body_right: u16,
}

impl BuildingStyle {
    pub fn tiles(&self) -> StyleTiles {
        match self {
            BuildingStyle::Plain => StyleTiles {
                top_left: 1,
                top_middle: 2,
                top_right: 3,
                body_left: 4,
                body_middle: 5,
                body_right: 6,
            },
        }
    }
}

/// One rooftop and the gap that follows it (all in tiles)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingSegment {
    pub height: u32,
    pub width: u32,
    pub gap: u32,
    pub style: BuildingStyle,
}

impl BuildingSegment {
    /// Columns from this building's start to the start of the next one
    #[inline]
    pub fn span(&self) -> u32 {
        self.width + self.gap
    }
}

/// Seeded building generator
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    rng: Pcg32,
    height: Spread,
    width: Spread,
    gap: Spread,
}

impl WorldGenerator {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        // Sanitizing again keeps width/gap positive even for hand-built tunings
        let tuning = tuning.clone().sanitized();
        Self {
            rng: Pcg32::seed_from_u64(seed),
            height: tuning.building_height,
            width: tuning.building_width,
            gap: tuning.building_gap,
        }
    }

    /// Produce the next building
    pub fn generate(&mut self) -> BuildingSegment {
        let height = self.sample(self.height);
        let width = self.sample(self.width);
        let gap = self.sample(self.gap);
        BuildingSegment {
            height,
            width,
            gap,
            style: BuildingStyle::Plain,
        }
    }

    fn sample(&mut self, spread: Spread) -> u32 {
        if spread.range == 0 {
            return spread.base;
        }
        let range = spread.range as i32;
        let offset = self.rng.random_range(-range..range);
        (spread.base as i32 + offset) as u32
    }
}
