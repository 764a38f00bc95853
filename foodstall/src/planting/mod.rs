mod first_fit;
mod instance;
mod problem;
mod solution;

#[doc(inline)]
pub use first_fit::FirstFitAllocator;

#[doc(inline)]
pub use first_fit::allocate;

#[doc(inline)]
pub use instance::PlantingInstance;

#[doc(inline)]
pub use problem::BoxTarget;

#[doc(inline)]
pub use problem::PlantingPlacement;

#[doc(inline)]
pub use problem::PlantingProblem;

#[doc(inline)]
pub use solution::PlantingSolution;
