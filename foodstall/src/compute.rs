use itertools::Itertools;
use log::info;

use crate::derive::derive_requirements;
use crate::entities::{Brine, Crop, CropRequirement, CropTable, PlanterBox, Recipe};
use crate::planting::allocate;

/// A good bought in rather than grown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseItem {
    pub name: String,
    pub quantity: u64,
}

/// Raw crop going into the brine barrels for a [`Brine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrineInput {
    pub brine: Brine,
    pub crop: Crop,
    pub quantity: u64,
}

impl BrineInput {
    /// e.g. "Radish (for kimchi)"
    pub fn label(&self) -> String {
        format!("{} (for {})", self.crop, self.brine.name())
    }
}

/// Batches of a [`Brine`] and the units they produce.
/// Batch rounding means `produced` can exceed the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrineOutput {
    pub brine: Brine,
    pub batches: u64,
    pub produced: u64,
}

/// Everything needed to produce a target output: crops, purchases, boxes and brine batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputationResult {
    pub target: u64,
    /// In recipe order, including crops which need no seeds
    pub crops: Vec<CropRequirement>,
    pub purchases: Vec<PurchaseItem>,
    /// In order of creation
    pub boxes: Vec<PlanterBox>,
    pub total_boxes: usize,
    pub available_boxes: usize,
    /// Whether `total_boxes` fits in `available_boxes`
    pub feasible: bool,
    pub brine_inputs: Vec<BrineInput>,
    pub brine_outputs: Vec<BrineOutput>,
}

impl ComputationResult {
    pub fn brine_output(&self, brine: Brine) -> Option<&BrineOutput> {
        self.brine_outputs.iter().find(|o| o.brine == brine)
    }

    pub fn kimchi_produced(&self) -> u64 {
        self.brine_output(Brine::Kimchi).map_or(0, |o| o.produced)
    }

    pub fn pickles_produced(&self) -> u64 {
        self.brine_output(Brine::Pickles).map_or(0, |o| o.produced)
    }

    pub fn requirement(&self, crop: Crop) -> Option<&CropRequirement> {
        self.crops.iter().find(|r| r.crop == crop)
    }
}

/// Computes what is needed to produce `target` hotdogs with `available_boxes` planter boxes.
/// Returns `None` if `target` is not positive.
pub fn compute(target: i64, available_boxes: usize, table: &CropTable) -> Option<ComputationResult> {
    compute_with_recipe(target, available_boxes, table, &Recipe::hotdog())
}

/// Same as [`compute`], for an arbitrary [`Recipe`].
pub fn compute_with_recipe(
    target: i64,
    available_boxes: usize,
    table: &CropTable,
    recipe: &Recipe,
) -> Option<ComputationResult> {
    let crops = derive_requirements(target, table, recipe)?;
    let target = target as u64;

    let boxes = allocate(&crops).boxes;
    let total_boxes = boxes.len();
    let feasible = total_boxes <= available_boxes;

    let purchases = recipe
        .purchases
        .iter()
        .map(|name| PurchaseItem {
            name: name.to_string(),
            quantity: target,
        })
        .collect_vec();

    let (brine_inputs, brine_outputs) = brine_batches(recipe, target);

    info!(
        "[COMPUTE] {target} units need {total_boxes} boxes ({available_boxes} available, {})",
        if feasible { "feasible" } else { "infeasible" }
    );

    Some(ComputationResult {
        target,
        crops,
        purchases,
        boxes,
        total_boxes,
        available_boxes,
        feasible,
        brine_inputs,
        brine_outputs,
    })
}

/// Scales the brine batch recipes to the target. Not bin packed.
fn brine_batches(recipe: &Recipe, target: u64) -> (Vec<BrineInput>, Vec<BrineOutput>) {
    let mut inputs = vec![];
    let mut outputs = vec![];
    for br in &recipe.brines {
        let batches = br.batches_for(target);
        inputs.extend(br.inputs.iter().map(|&(crop, per_batch)| BrineInput {
            brine: br.brine,
            crop,
            quantity: batches * per_batch,
        }));
        outputs.push(BrineOutput {
            brine: br.brine,
            batches,
            produced: batches * br.batch_size,
        });
    }
    (inputs, outputs)
}
