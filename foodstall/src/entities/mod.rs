mod crop;
mod planter_box;
mod recipe;
mod requirement;

#[doc(inline)]
pub use crop::Crop;

#[doc(inline)]
pub use crop::CropSpec;

#[doc(inline)]
pub use crop::CropTable;

#[doc(inline)]
pub use crop::N_CROPS;

#[doc(inline)]
pub use recipe::Brine;

#[doc(inline)]
pub use recipe::BrineRecipe;

#[doc(inline)]
pub use recipe::Ratio;

#[doc(inline)]
pub use recipe::Recipe;

#[doc(inline)]
pub use requirement::CropRequirement;

#[doc(inline)]
pub use planter_box::BoxEntry;

#[doc(inline)]
pub use planter_box::PlanterBox;
