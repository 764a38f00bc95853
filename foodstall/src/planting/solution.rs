use crate::entities::{Crop, PlanterBox};

/// Snapshot of a [`PlantingProblem`](crate::planting::PlantingProblem): the boxes in order of creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantingSolution {
    pub boxes: Vec<PlanterBox>,
}

impl PlantingSolution {
    pub fn n_boxes(&self) -> usize {
        self.boxes.len()
    }

    /// Fraction of the total box capacity which is planted
    pub fn density(&self) -> f32 {
        let capacity = self.boxes.iter().map(|b| b.capacity).sum::<u64>();
        if capacity == 0 {
            return 0.0;
        }
        let used = self.boxes.iter().map(|b| b.used()).sum::<u64>();
        used as f32 / capacity as f32
    }

    pub fn placed_seeds(&self, crop: Crop) -> u64 {
        self.boxes
            .iter()
            .filter_map(|b| b.entry(crop))
            .map(|e| e.seeds)
            .sum()
    }

    pub fn placed_slots(&self, crop: Crop) -> u64 {
        self.boxes
            .iter()
            .filter_map(|b| b.entry(crop))
            .map(|e| e.slots)
            .sum()
    }
}
