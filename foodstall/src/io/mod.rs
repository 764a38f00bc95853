mod export;
mod import;

/// External (serializable) representations of the crop table and computation results.
pub mod ext_repr;

/// Exports a computation result out of the library.
pub use export::export;

#[doc(inline)]
pub use export::{export_crop_table, export_planter_box, export_requirement};

/// Imports a crop table into the library.
pub use import::import_crop_table;
