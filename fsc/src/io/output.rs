use serde::{Deserialize, Serialize};

use crate::config::FscConfig;
use foodstall::io::ext_repr::{ExtComputationResult, ExtCropTable};

/// Everything written to the solution file
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FscOutput {
    pub config: FscConfig,
    /// The crop table which was effectively used
    pub crop_table: ExtCropTable,
    pub result: ExtComputationResult,
}
