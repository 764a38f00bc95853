use itertools::Itertools;
use log::debug;

use crate::entities::{CropRequirement, CropTable, Recipe};

/// Derives the [`CropRequirement`] of every crop in the recipe, in recipe order, to produce `target` units.
/// Returns `None` if `target` is not positive.
pub fn derive_requirements(
    target: i64,
    table: &CropTable,
    recipe: &Recipe,
) -> Option<Vec<CropRequirement>> {
    if target <= 0 {
        return None;
    }
    let target = target as u64;

    let requirements = recipe
        .crop_ratios
        .iter()
        .map(|&(crop, ratio)| {
            let req = CropRequirement::new(crop, table.spec(crop), ratio, target);
            debug!(
                "[DERIVE] {crop}: {ratio} x {target} = {} raw, {} seeds, {} slots",
                req.raw_needed, req.seeds_needed, req.slots_needed
            );
            req
        })
        .collect_vec();

    Some(requirements)
}
