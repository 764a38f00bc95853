use std::time::Instant;

use log::{debug, info};
use thousands::Separable;

use crate::BOX_CAPACITY;
use crate::entities::CropRequirement;
use crate::planting::{
    BoxTarget, PlantingInstance, PlantingPlacement, PlantingProblem, PlantingSolution,
};
use crate::util::assertions::allocation_conserves;

/// Greedy first-fit allocator of seeds to planter boxes.
///
/// Requirements are handled one at a time, in instance order, and a requirement is planted
/// completely before the next one is started.
/// Every step plants as many seeds as possible in the first box (in creation order) which can hold
/// the entire remaining demand, or in a new box if no such box exists.
pub struct FirstFitAllocator {
    pub instance: PlantingInstance,
    pub problem: PlantingProblem,
}

impl FirstFitAllocator {
    pub fn new(instance: PlantingInstance) -> Self {
        let problem = PlantingProblem::new(instance.clone());
        Self { instance, problem }
    }

    pub fn solve(&mut self) -> PlantingSolution {
        let start = Instant::now();

        for req_id in 0..self.instance.requirements.len() {
            while self.problem.seed_demand[req_id] > 0 {
                let placement = search_boxes(&self.problem, req_id);
                let box_idx = self.problem.place(placement);
                debug!(
                    "[FF] planted {} seeds of {} in box {} ({} slots left, {} seeds to go)",
                    placement.seeds,
                    self.instance.requirement(req_id).crop,
                    self.problem.boxes[box_idx].id,
                    self.problem.boxes[box_idx].remaining,
                    self.problem.seed_demand[req_id]
                );
            }
        }

        let solution = self.problem.save();

        debug_assert!(allocation_conserves(
            &self.instance.requirements,
            &solution.boxes
        ));

        info!(
            "[FF] planted {} seeds over {} slots in {} boxes ({:.1}% dense) in {:.3}ms",
            self.instance.total_seeds().separate_with_commas(),
            self.instance.total_slots().separate_with_commas(),
            solution.n_boxes(),
            solution.density() * 100.0,
            start.elapsed().as_secs_f64() * 1000.0
        );

        solution
    }
}

/// Finds where the next seeds of a requirement go: the first open box with room for
/// the whole remaining demand, otherwise a new one.
fn search_boxes(problem: &PlantingProblem, req_id: usize) -> PlantingPlacement {
    let req = problem.instance.requirement(req_id);
    let demand = problem.slot_demand(req_id);

    let target = problem
        .boxes
        .iter()
        .position(|b| b.remaining >= demand)
        .map_or(BoxTarget::New, BoxTarget::Open);

    let room = match target {
        BoxTarget::Open(idx) => problem.boxes[idx].seed_room(req.slots_per_seed),
        BoxTarget::New => BOX_CAPACITY / req.slots_per_seed,
    };

    PlantingPlacement {
        req_id,
        target,
        seeds: u64::min(problem.seed_demand[req_id], room),
    }
}

/// Allocates the requirements (in the given order) to planter boxes using [`FirstFitAllocator`].
/// Requirements without any seeds needed are skipped.
pub fn allocate(requirements: &[CropRequirement]) -> PlantingSolution {
    FirstFitAllocator::new(PlantingInstance::new(requirements)).solve()
}
