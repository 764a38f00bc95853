use itertools::Itertools;

use crate::entities::PlanterBox;
use crate::planting::{PlantingInstance, PlantingSolution};
use crate::util::assertions::boxes_are_consistent;

/// Dynamic counterpart of [`PlantingInstance`]: the boxes opened so far and the demand still left to plant.
#[derive(Debug, Clone)]
pub struct PlantingProblem {
    pub instance: PlantingInstance,
    /// Boxes in order of creation
    pub boxes: Vec<PlanterBox>,
    /// Seeds still to be planted, per requirement
    pub seed_demand: Vec<u64>,
    /// Slots still to be planted, per requirement
    pub slot_demand: Vec<u64>,
}

impl PlantingProblem {
    pub fn new(instance: PlantingInstance) -> Self {
        let seed_demand = instance
            .requirements
            .iter()
            .map(|r| r.seeds_needed)
            .collect_vec();
        let slot_demand = instance
            .requirements
            .iter()
            .map(|r| r.slots_needed)
            .collect_vec();

        Self {
            instance,
            boxes: vec![],
            seed_demand,
            slot_demand,
        }
    }

    /// Plants seeds according to the [`PlantingPlacement`], opening a new box if required.
    /// Returns the index of the box the seeds ended up in.
    pub fn place(&mut self, p: PlantingPlacement) -> usize {
        let req = *self.instance.requirement(p.req_id);
        assert!(
            p.seeds <= self.seed_demand[p.req_id],
            "placing {} seeds of {} while only {} are demanded",
            p.seeds,
            req.crop,
            self.seed_demand[p.req_id]
        );

        let box_idx = match p.target {
            BoxTarget::Open(idx) => idx,
            BoxTarget::New => self.open_box(),
        };
        let slots = self.boxes[box_idx].plant(req.crop, p.seeds, req.slots_per_seed);

        self.seed_demand[p.req_id] -= p.seeds;
        self.slot_demand[p.req_id] -= slots;

        box_idx
    }

    /// Demand of a requirement, expressed in slots
    pub fn slot_demand(&self, req_id: usize) -> u64 {
        let req = self.instance.requirement(req_id);
        u64::min(
            self.slot_demand[req_id],
            self.seed_demand[req_id] * req.slots_per_seed,
        )
    }

    pub fn is_complete(&self) -> bool {
        self.seed_demand.iter().all(|&d| d == 0)
    }

    pub fn used_slots(&self) -> u64 {
        self.boxes.iter().map(|b| b.used()).sum()
    }

    /// Creates a snapshot of the current state of the problem as a [`PlantingSolution`].
    pub fn save(&self) -> PlantingSolution {
        let solution = PlantingSolution {
            boxes: self.boxes.clone(),
        };

        debug_assert!(boxes_are_consistent(&solution.boxes));

        solution
    }

    fn open_box(&mut self) -> usize {
        let idx = self.boxes.len();
        self.boxes.push(PlanterBox::new(idx + 1));
        idx
    }
}

/// Encapsulates all information required to plant seeds of a requirement in a [`PlantingProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantingPlacement {
    /// Index of the requirement in the [`PlantingInstance`]
    pub req_id: usize,
    pub target: BoxTarget,
    pub seeds: u64,
}

/// Distinguishes between boxes which are already open and a box still to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxTarget {
    /// An existing box, identified by its index in creation order
    Open(usize),
    /// A box that does not yet exist
    New,
}
