use crate::BOX_CAPACITY;
use crate::entities::Crop;

/// Seeds of a single [`Crop`] planted in a [`PlanterBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxEntry {
    pub crop: Crop,
    pub seeds: u64,
    pub slots: u64,
}

/// A fixed-capacity container in which seeds are planted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanterBox {
    /// 1-based, in order of creation
    pub id: usize,
    pub capacity: u64,
    pub remaining: u64,
    /// At most one entry per crop, in order of first planting
    pub contents: Vec<BoxEntry>,
}

impl PlanterBox {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            capacity: BOX_CAPACITY,
            remaining: BOX_CAPACITY,
            contents: vec![],
        }
    }

    /// Maximum number of seeds with `slots_per_seed` that still fit in the box
    pub fn seed_room(&self, slots_per_seed: u64) -> u64 {
        self.remaining / slots_per_seed
    }

    /// Plants `seeds` seeds of `crop`, merging with an existing entry of the same crop.
    pub fn plant(&mut self, crop: Crop, seeds: u64, slots_per_seed: u64) -> u64 {
        let slots = seeds * slots_per_seed;
        assert!(
            slots <= self.remaining,
            "box {} cannot hold {slots} more slots ({} remaining)",
            self.id,
            self.remaining
        );
        match self.contents.iter_mut().find(|e| e.crop == crop) {
            Some(entry) => {
                entry.seeds += seeds;
                entry.slots += slots;
            }
            None => self.contents.push(BoxEntry { crop, seeds, slots }),
        }
        self.remaining -= slots;
        slots
    }

    pub fn used(&self) -> u64 {
        self.capacity - self.remaining
    }

    pub fn entry(&self, crop: Crop) -> Option<&BoxEntry> {
        self.contents.iter().find(|e| e.crop == crop)
    }
}
