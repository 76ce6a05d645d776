//! Crate pool
//!
//! Crates live in a fixed ring of `MAX_CRATES` slots. Spawning always writes
//! at `tail`; when the ring is full the oldest crate is overwritten. Retiring a
//! crate only clears its `valid` flag, the slot is reused on a later lap.

use serde::{Deserialize, Serialize};

use super::sprite::{SpriteGeometry, SpriteShape, SpriteSize};
use crate::consts::{MAX_CRATES, TILE_CRATE};
use crate::whole_pixels;

/// A crate sitting on a rooftop, or flying once the player kicks it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub sprite: SpriteGeometry,
    /// Fixed-point velocity and vertical acceleration
    pub vx: i32,
    pub vy: i32,
    pub ay: i32,
    /// Struck by the player
    pub hit: bool,
    /// Slot in use
    pub valid: bool,
    /// Presentation reported the crate visible last tick
    pub on_screen: bool,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self {
            sprite: SpriteGeometry::new(0, 0, SpriteShape::Square, SpriteSize::S8, TILE_CRATE),
            vx: 0,
            vy: 0,
            ay: 0,
            hit: false,
            valid: false,
            on_screen: false,
        }
    }
}

impl Obstacle {
    /// Launch the crate as a projectile
    pub fn strike(&mut self, vx: i32, vy: i32, ay: i32) {
        self.hit = true;
        self.vx = vx;
        self.vy = vy;
        self.ay = ay;
    }

    /// Ballistic step; resting crates do not move
    fn integrate(&mut self) {
        if self.ay != 0 {
            self.vy += self.ay;
            self.sprite.height += whole_pixels(self.vy);
            self.sprite.x += whole_pixels(self.vx);
        }
    }
}

/// Set of pool slots, one bit per slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotSet(u32);

const _: () = assert!(MAX_CRATES <= u32::BITS as usize);

impl SlotSet {
    pub fn insert(&mut self, slot: usize) {
        self.0 |= 1 << slot;
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.0 & (1 << slot) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Slots in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..MAX_CRATES).filter(|&slot| self.contains(slot))
    }
}

#[derive(Debug, Clone)]
pub struct ObstaclePool {
    slots: [Obstacle; MAX_CRATES],
    head: usize,
    tail: usize,
    count: usize,
}

impl Default for ObstaclePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self {
            slots: [Obstacle::default(); MAX_CRATES],
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub const fn capacity() -> usize {
        MAX_CRATES
    }

    /// Number of valid crates
    pub fn count(&self) -> usize {
        self.count
    }

    /// Slot that the next spawn will write
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Oldest slot still in spawn order
    pub fn head(&self) -> usize {
        self.head
    }

    pub fn get(&self, slot: usize) -> &Obstacle {
        &self.slots[slot % MAX_CRATES]
    }

    /// Place a resting crate with its top at `height`
    ///
    /// Returns the slot written. If that slot still held a valid crate, it is
    /// overwritten without notice: the capacity is sized above what can be on
    /// screen at once.
    pub fn spawn(&mut self, x: i32, height: i32) -> usize {
        let slot = self.tail;
        let overwritten = self.slots[slot].valid;
        self.slots[slot] = Obstacle {
            sprite: SpriteGeometry::new(x, height, SpriteShape::Square, SpriteSize::S8, TILE_CRATE),
            valid: true,
            ..Obstacle::default()
        };

        if overwritten {
            log::debug!("crate pool full, overwriting slot {}", slot);
            if slot == self.head {
                self.advance_head();
            }
        } else {
            if self.count == 0 {
                self.head = slot;
            }
            self.count += 1;
        }
        self.tail = (self.tail + 1) % MAX_CRATES;
        log::debug!("creating a crate at {}, {}", x, height);
        slot
    }

    /// Valid crates with their slot index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Obstacle)> + '_ {
        self.slots.iter().enumerate().filter(|(_, c)| c.valid)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Obstacle)> + '_ {
        self.slots.iter_mut().enumerate().filter(|(_, c)| c.valid)
    }

    /// Step every valid crate and hand it to `place`
    ///
    /// `place` reports whether the crate is visible. A crate that was visible
    /// and no longer is gets retired.
    pub fn tick(&mut self, mut place: impl FnMut(&SpriteGeometry) -> bool) -> SlotSet {
        let mut retired = SlotSet::default();
        for (slot, crate_) in self.slots.iter_mut().enumerate() {
            if !crate_.valid {
                continue;
            }
            crate_.integrate();
            let present_before = crate_.on_screen;
            crate_.on_screen = place(&crate_.sprite);
            if present_before && !crate_.on_screen {
                log::debug!("destructing a crate");
                crate_.valid = false;
                retired.insert(slot);
            }
        }
        for slot in retired.iter() {
            self.release(slot);
        }
        retired
    }

    fn release(&mut self, slot: usize) {
        self.count -= 1;
        if slot == self.head {
            self.advance_head();
        }
    }

    /// Move `head` to the oldest remaining valid crate in spawn order
    fn advance_head(&mut self) {
        if self.count == 0 {
            self.head = self.tail;
            return;
        }
        for _ in 0..MAX_CRATES {
            self.head = (self.head + 1) % MAX_CRATES;
            if self.slots[self.head].valid {
                return;
            }
        }
    }
}
