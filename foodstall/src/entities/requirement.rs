use crate::entities::{Crop, CropSpec, Ratio};

/// Raw crop, seeds and box slots needed of a single [`Crop`] to reach a target output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRequirement {
    pub crop: Crop,
    pub slots_per_seed: u64,
    pub yield_per_seed: u64,
    /// Raw units needed, rounded up. For display only, seeds are derived from the exact value.
    pub raw_needed: u64,
    pub seeds_needed: u64,
    pub slots_needed: u64,
}

impl CropRequirement {
    /// Derives the requirement for `target` units of output, consuming `ratio` raw crop per unit.
    pub fn new(crop: Crop, spec: CropSpec, ratio: Ratio, target: u64) -> Self {
        let seeds_needed = ratio.mul_div_ceil(target, spec.yield_per_seed);
        Self {
            crop,
            slots_per_seed: spec.slots_per_seed,
            yield_per_seed: spec.yield_per_seed,
            raw_needed: ratio.mul_ceil(target),
            seeds_needed,
            slots_needed: seeds_needed * spec.slots_per_seed,
        }
    }

    /// Raw units harvested once all seeds are grown
    pub fn harvest(&self) -> u64 {
        self.seeds_needed * self.yield_per_seed
    }
}
