use itertools::Itertools;

use crate::BOX_CAPACITY;
use crate::entities::CropRequirement;
use crate::util::assertions::requirement_is_consistent;

/// Static input of the allocation: the requirements which still need seeds planted, in allocation order.
#[derive(Debug, Clone)]
pub struct PlantingInstance {
    pub requirements: Vec<CropRequirement>,
}

impl PlantingInstance {
    /// Requirements without any seeds needed are left out.
    pub fn new(requirements: &[CropRequirement]) -> Self {
        let requirements = requirements
            .iter()
            .filter(|r| r.seeds_needed > 0)
            .copied()
            .collect_vec();

        assert!(requirements.iter().all(requirement_is_consistent));
        assert!(
            requirements.iter().all(|r| r.slots_per_seed <= BOX_CAPACITY),
            "every seed must fit in an empty box"
        );

        Self { requirements }
    }

    pub fn requirement(&self, id: usize) -> &CropRequirement {
        &self.requirements[id]
    }

    pub fn total_seeds(&self) -> u64 {
        self.requirements.iter().map(|r| r.seeds_needed).sum()
    }

    pub fn total_slots(&self) -> u64 {
        self.requirements.iter().map(|r| r.slots_needed).sum()
    }
}
