//! Crop requirement derivation and planter box allocation for a food stall.
//!
//! Given a target number of hotdogs, [`compute`] derives how much of every crop is needed,
//! turns that into seeds and box slots, and packs the seeds into planter boxes of
//! [`BOX_CAPACITY`] slots using a deterministic first-fit heuristic.

/// Entities to model the crops, recipes and planter boxes.
pub mod entities;

/// Importing and exporting of crop tables and results.
pub mod io;

/// Allocation of seeds to planter boxes.
pub mod planting;

/// Helper functions which do not belong to any specific module.
pub mod util;

mod compute;
mod derive;

#[doc(inline)]
pub use compute::{
    BrineInput, BrineOutput, ComputationResult, PurchaseItem, compute, compute_with_recipe,
};

#[doc(inline)]
pub use derive::derive_requirements;

/// Number of slots in every planter box
pub const BOX_CAPACITY: u64 = 64;
