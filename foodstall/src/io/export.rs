use itertools::Itertools;

use crate::compute::ComputationResult;
use crate::entities::{CropRequirement, CropTable, PlanterBox};
use crate::io::ext_repr::{
    ExtBoxEntry, ExtComputationResult, ExtCropRequirement, ExtCropSpec, ExtCropTable,
    ExtPlanterBox, ExtQuantity,
};

/// Exports a computation result out of the library
pub fn export(result: &ComputationResult) -> ExtComputationResult {
    let capacity = result.boxes.iter().map(|b| b.capacity).sum::<u64>();
    let used = result.boxes.iter().map(|b| b.used()).sum::<u64>();
    let density = match capacity {
        0 => 0.0,
        _ => used as f32 / capacity as f32,
    };

    ExtComputationResult {
        target: result.target,
        crops: result.crops.iter().map(export_requirement).collect(),
        purchase_items: result
            .purchases
            .iter()
            .map(|p| ExtQuantity {
                name: p.name.clone(),
                quantity: p.quantity,
            })
            .collect(),
        planter_boxes: result.boxes.iter().map(export_planter_box).collect(),
        total_boxes_needed: result.total_boxes,
        available_boxes: result.available_boxes,
        can_produce_with_boxes: result.feasible,
        density,
        brine_barrels: result
            .brine_inputs
            .iter()
            .map(|bi| ExtQuantity {
                name: bi.label(),
                quantity: bi.quantity,
            })
            .collect(),
        kimchi_produced: result.kimchi_produced(),
        pickles_produced: result.pickles_produced(),
    }
}

pub fn export_requirement(req: &CropRequirement) -> ExtCropRequirement {
    ExtCropRequirement {
        name: req.crop.name().to_string(),
        slots_per_seed: req.slots_per_seed,
        yield_per_seed: req.yield_per_seed,
        needed: req.raw_needed,
        seeds_needed: req.seeds_needed,
        slots_needed: req.slots_needed,
    }
}

pub fn export_planter_box(pb: &PlanterBox) -> ExtPlanterBox {
    ExtPlanterBox {
        box_number: pb.id,
        crops: pb
            .contents
            .iter()
            .map(|e| ExtBoxEntry {
                name: e.crop.name().to_string(),
                seeds: e.seeds,
                slots: e.slots,
            })
            .collect_vec(),
        total_slots: pb.capacity,
        remaining_slots: pb.remaining,
    }
}

/// Exports the full crop table, every crop and field included
pub fn export_crop_table(table: &CropTable) -> ExtCropTable {
    ExtCropTable(
        table
            .iter()
            .map(|(crop, spec)| {
                let ext_spec = ExtCropSpec {
                    slots_per_seed: Some(spec.slots_per_seed),
                    yield_per_seed: Some(spec.yield_per_seed),
                };
                (crop.name().to_string(), ext_spec)
            })
            .collect(),
    )
}
