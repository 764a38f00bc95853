use anyhow::Result;
use serde::{Deserialize, Serialize};

use foodstall::entities::CropTable;
use foodstall::io::ext_repr::ExtCropTable;
use foodstall::io::import_crop_table;

/// Configuration for the food stall calculator
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FscConfig {
    /// Number of planter boxes at hand. Only used to report feasibility, more boxes are planned if needed.
    pub available_boxes: usize,
    /// Overrides of the default crop table, per crop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_table: Option<ExtCropTable>,
}

impl FscConfig {
    /// The crop table to use, default table with any overrides applied
    pub fn crop_table(&self) -> Result<CropTable> {
        match &self.crop_table {
            None => Ok(CropTable::default()),
            Some(ext_table) => import_crop_table(ext_table),
        }
    }
}

impl Default for FscConfig {
    fn default() -> Self {
        Self {
            available_boxes: 10,
            crop_table: None,
        }
    }
}
