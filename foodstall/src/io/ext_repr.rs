use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// External representation of a [`CropTable`](crate::entities::CropTable), keyed by crop name.
/// Crops which are left out keep their default [`CropSpec`](crate::entities::CropSpec).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ExtCropTable(pub BTreeMap<String, ExtCropSpec>);

/// External representation of a [`CropSpec`](crate::entities::CropSpec).
/// Fields which are left out keep their default value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtCropSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots_per_seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_per_seed: Option<u64>,
}

/// External representation of a [`CropRequirement`](crate::entities::CropRequirement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtCropRequirement {
    pub name: String,
    pub slots_per_seed: u64,
    pub yield_per_seed: u64,
    /// Raw units needed, rounded up
    pub needed: u64,
    pub seeds_needed: u64,
    pub slots_needed: u64,
}

/// Seeds of a single crop in an [`ExtPlanterBox`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtBoxEntry {
    pub name: String,
    pub seeds: u64,
    pub slots: u64,
}

/// External representation of a [`PlanterBox`](crate::entities::PlanterBox).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtPlanterBox {
    /// 1-based, in order of creation
    pub box_number: usize,
    pub crops: Vec<ExtBoxEntry>,
    pub total_slots: u64,
    pub remaining_slots: u64,
}

/// A named quantity
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtQuantity {
    pub name: String,
    pub quantity: u64,
}

/// External representation of a [`ComputationResult`](crate::ComputationResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtComputationResult {
    pub target: u64,
    pub crops: Vec<ExtCropRequirement>,
    pub purchase_items: Vec<ExtQuantity>,
    pub planter_boxes: Vec<ExtPlanterBox>,
    pub total_boxes_needed: usize,
    pub available_boxes: usize,
    pub can_produce_with_boxes: bool,
    /// Planted slots divided by the total capacity of all boxes
    pub density: f32,
    pub brine_barrels: Vec<ExtQuantity>,
    pub kimchi_produced: u64,
    pub pickles_produced: u64,
}
