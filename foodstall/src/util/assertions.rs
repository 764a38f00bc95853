//Various checks to verify correctness of the state of the planner
//Used in debug_assert!() blocks and tests

use itertools::Itertools;
use log::error;

use crate::BOX_CAPACITY;
use crate::entities::{Crop, CropRequirement, PlanterBox};

pub fn requirement_is_consistent(req: &CropRequirement) -> bool {
    let minimal = match req.seeds_needed {
        0 => true,
        n => (n - 1) * req.yield_per_seed < req.raw_needed,
    };
    req.slots_needed == req.seeds_needed * req.slots_per_seed
        && req.harvest() >= req.raw_needed
        && minimal
}

/// Checks the bookkeeping of every box and that ids follow creation order.
pub fn boxes_are_consistent(boxes: &[PlanterBox]) -> bool {
    boxes.iter().enumerate().all(|(i, b)| {
        let planted = b.contents.iter().map(|e| e.slots).sum::<u64>();
        let consistent = b.id == i + 1
            && b.capacity == BOX_CAPACITY
            && b.remaining <= b.capacity
            && planted + b.remaining == b.capacity
            && b.contents.iter().map(|e| e.crop).all_unique();
        if !consistent {
            error!("box {} is inconsistent: {b:?}", b.id);
        }
        consistent
    })
}

/// No seeds or slots are created or lost while allocating the requirements to boxes.
pub fn allocation_conserves(reqs: &[CropRequirement], boxes: &[PlanterBox]) -> bool {
    Crop::ALL.iter().all(|&crop| {
        let (seeds_needed, slots_needed) = reqs
            .iter()
            .filter(|r| r.crop == crop)
            .fold((0, 0), |(se, sl), r| (se + r.seeds_needed, sl + r.slots_needed));
        let (seeds_placed, slots_placed) = boxes
            .iter()
            .filter_map(|b| b.entry(crop))
            .fold((0, 0), |(se, sl), e| (se + e.seeds, sl + e.slots));

        let conserved = seeds_needed == seeds_placed && slots_needed == slots_placed;
        if !conserved {
            error!(
                "{crop}: needed {seeds_needed} seeds/{slots_needed} slots, placed {seeds_placed}/{slots_placed}"
            );
        }
        conserved
    })
}
