//! Rolling window of upcoming buildings
//!
//! A fixed ring of `BUILDS_AHEAD` segments with their absolute start columns.
//! `current` is the building under (or just ahead of) the player. Advancing
//! overwrites the building the player just left with a fresh one at the far
//! end of the window, so memory stays bounded for an infinite world.

use super::world::{BuildingSegment, WorldGenerator};
use crate::consts::BUILDS_AHEAD;

#[derive(Debug, Clone)]
pub struct BuildingTrack {
    builds: [BuildingSegment; BUILDS_AHEAD],
    starts: [u32; BUILDS_AHEAD],
    current: usize,
}

impl BuildingTrack {
    /// Fill the whole window, first building starting at column 0
    pub fn new(generator: &mut WorldGenerator) -> Self {
        let builds: [BuildingSegment; BUILDS_AHEAD] = std::array::from_fn(|_| generator.generate());
        let mut starts = [0u32; BUILDS_AHEAD];
        for i in 1..BUILDS_AHEAD {
            starts[i] = starts[i - 1] + builds[i - 1].span();
        }
        Self {
            builds,
            starts,
            current: 0,
        }
    }

    /// Replace the building just passed with a new one at the end of the window
    ///
    /// Returns the slot that was regenerated (now the last slot of the window).
    pub fn advance(&mut self, generator: &mut WorldGenerator) -> usize {
        let slot = self.current;
        let prev = self.previous_slot();
        self.starts[slot] = self.starts[prev] + self.builds[prev].span();
        self.builds[slot] = generator.generate();
        self.current = (self.current + 1) % BUILDS_AHEAD;
        slot
    }

    #[inline]
    fn previous_slot(&self) -> usize {
        (self.current + BUILDS_AHEAD - 1) % BUILDS_AHEAD
    }

    /// Index of the current slot in the ring
    pub fn current_slot(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &BuildingSegment {
        &self.builds[self.current]
    }

    pub fn next(&self) -> &BuildingSegment {
        &self.builds[(self.current + 1) % BUILDS_AHEAD]
    }

    /// Ring predecessor of the current slot: the far end of the window
    pub fn previous(&self) -> &BuildingSegment {
        &self.builds[self.previous_slot()]
    }

    pub fn slot(&self, slot: usize) -> &BuildingSegment {
        &self.builds[slot % BUILDS_AHEAD]
    }

    pub fn start_of(&self, slot: usize) -> u32 {
        self.starts[slot % BUILDS_AHEAD]
    }

    pub fn current_start(&self) -> u32 {
        self.starts[self.current]
    }

    /// Last rooftop column of the current building
    pub fn edge_column(&self) -> u32 {
        self.current_start() + self.current().width
    }

    /// First column of the next building
    pub fn end_column(&self) -> u32 {
        self.current_start() + self.current().span()
    }

    /// Segments in window order, starting at the current one
    pub fn iter(&self) -> impl Iterator<Item = (u32, &BuildingSegment)> + '_ {
        (0..BUILDS_AHEAD).map(move |i| {
            let slot = (self.current + i) % BUILDS_AHEAD;
            (self.starts[slot], &self.builds[slot])
        })
    }

    /// Building whose span (rooftop plus gap) covers `column`, if any
    pub fn segment_at(&self, column: u32) -> Option<(u32, &BuildingSegment)> {
        self.iter()
            .find(|(start, b)| *start <= column && column < start + b.span())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn assert_contiguous(track: &BuildingTrack) {
        let window: Vec<_> = track.iter().collect();
        for pair in window.windows(2) {
            let (start, b) = pair[0];
            let (next_start, _) = pair[1];
            assert_eq!(next_start, start + b.width + b.gap);
        }
    }

    #[test]
    fn test_initial_window_is_contiguous() {
        let mut generator = WorldGenerator::new(3, &Tuning::default());
        let track = BuildingTrack::new(&mut generator);
        assert_eq!(track.current_start(), 0);
        assert_eq!(track.current_slot(), 0);
        assert_contiguous(&track);
    }

    #[test]
    fn test_advance_moves_window() {
        let mut generator = WorldGenerator::new(3, &Tuning::default());
        let mut track = BuildingTrack::new(&mut generator);
        let old_next = *track.next();
        let old_end = track.end_column();
        let old_far_end = {
            let (start, b) = track.iter().last().unwrap();
            start + b.span()
        };

        let slot = track.advance(&mut generator);
        assert_eq!(slot, 0);
        assert_eq!(track.current_slot(), 1);
        assert_eq!(*track.current(), old_next);
        assert_eq!(track.current_start(), old_end);
        // The regenerated slot is now the far end of the window
        assert_eq!(track.start_of(slot), old_far_end);
        assert_eq!(track.previous(), track.slot(slot));
        assert_contiguous(&track);
    }

    #[test]
    fn test_segment_at() {
        let mut generator = WorldGenerator::new(9, &Tuning::default());
        let track = BuildingTrack::new(&mut generator);
        let (start, b) = track.segment_at(0).unwrap();
        assert_eq!(start, 0);
        assert_eq!(b, track.current());
        let (start, _) = track.segment_at(track.end_column()).unwrap();
        assert_eq!(start, track.end_column());
        let beyond = track.iter().map(|(s, b)| s + b.span()).max().unwrap();
        assert!(track.segment_at(beyond).is_none());
    }

    proptest! {
        #[test]
        fn prop_window_stays_contiguous(seed in any::<u64>(), advances in 0usize..40) {
            let mut generator = WorldGenerator::new(seed, &Tuning::default());
            let mut track = BuildingTrack::new(&mut generator);
            let mut last_start = track.current_start();
            for _ in 0..advances {
                track.advance(&mut generator);
                prop_assert!(track.current_start() > last_start);
                last_start = track.current_start();
                assert_contiguous(&track);
            }
        }
    }
}
