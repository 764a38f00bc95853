use anyhow::{Result, anyhow, ensure};

use crate::BOX_CAPACITY;
use crate::entities::{Crop, CropSpec, CropTable};
use crate::io::ext_repr::ExtCropTable;

/// Imports a crop table into the library, on top of the default [`CropTable`].
pub fn import_crop_table(ext_table: &ExtCropTable) -> Result<CropTable> {
    let mut table = CropTable::default();

    for (name, ext_spec) in ext_table.0.iter() {
        let crop = Crop::from_name(name).ok_or_else(|| {
            anyhow!(
                "unknown crop {name:?}, expected one of: {}",
                Crop::ALL.map(|c| c.name()).join(", ")
            )
        })?;
        let default = table.spec(crop);
        let slots_per_seed = ext_spec.slots_per_seed.unwrap_or(default.slots_per_seed);
        let yield_per_seed = ext_spec.yield_per_seed.unwrap_or(default.yield_per_seed);

        ensure!(slots_per_seed > 0, "{crop}: slots_per_seed must be positive");
        ensure!(yield_per_seed > 0, "{crop}: yield_per_seed must be positive");
        ensure!(
            slots_per_seed <= BOX_CAPACITY,
            "{crop}: a seed occupying {slots_per_seed} slots does not fit in a box of {BOX_CAPACITY}"
        );

        table.set_spec(crop, CropSpec::new(slots_per_seed, yield_per_seed));
    }

    Ok(table)
}
