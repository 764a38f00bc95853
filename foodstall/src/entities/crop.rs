use std::fmt::{Display, Formatter};

/// Number of distinct [`Crop`]s known to the planner
pub const N_CROPS: usize = 7;

/// The closed set of crops which can be planted in a [`PlanterBox`](crate::entities::PlanterBox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Crop {
    Carrot,
    Radish,
    Onion,
    Garlic,
    Cabbage,
    Tomato,
    Cucumber,
}

impl Crop {
    pub const ALL: [Crop; N_CROPS] = [
        Crop::Carrot,
        Crop::Radish,
        Crop::Onion,
        Crop::Garlic,
        Crop::Cabbage,
        Crop::Tomato,
        Crop::Cucumber,
    ];

    /// Display name, as used in external representations
    pub fn name(&self) -> &'static str {
        match self {
            Crop::Carrot => "Carrot",
            Crop::Radish => "Radish",
            Crop::Onion => "Onion",
            Crop::Garlic => "Garlic",
            Crop::Cabbage => "Cabbage",
            Crop::Tomato => "Tomato",
            Crop::Cucumber => "Cucumber",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Crop> {
        Crop::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn idx(&self) -> usize {
        *self as usize
    }
}

impl Display for Crop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a single seed of a crop behaves once planted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSpec {
    /// Number of box slots a single seed occupies
    pub slots_per_seed: u64,
    /// Raw units harvested from a single seed
    pub yield_per_seed: u64,
}

impl CropSpec {
    pub const fn new(slots_per_seed: u64, yield_per_seed: u64) -> Self {
        assert!(slots_per_seed > 0, "a seed must occupy at least one slot");
        assert!(yield_per_seed > 0, "a seed must yield at least one unit");
        Self {
            slots_per_seed,
            yield_per_seed,
        }
    }
}

/// Strongly typed crop configuration: exactly one [`CropSpec`] per [`Crop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropTable {
    specs: [CropSpec; N_CROPS],
}

impl CropTable {
    pub fn new(specs: [CropSpec; N_CROPS]) -> Self {
        Self { specs }
    }

    pub fn spec(&self, crop: Crop) -> CropSpec {
        self.specs[crop.idx()]
    }

    pub fn set_spec(&mut self, crop: Crop, spec: CropSpec) {
        self.specs[crop.idx()] = spec;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Crop, CropSpec)> + '_ {
        Crop::ALL.into_iter().map(|c| (c, self.spec(c)))
    }
}

impl Default for CropTable {
    fn default() -> Self {
        let mut specs = [CropSpec::new(1, 1); N_CROPS];
        specs[Crop::Carrot.idx()] = CropSpec::new(1, 38);
        specs[Crop::Radish.idx()] = CropSpec::new(1, 25);
        specs[Crop::Onion.idx()] = CropSpec::new(1, 12);
        specs[Crop::Garlic.idx()] = CropSpec::new(1, 12);
        specs[Crop::Cabbage.idx()] = CropSpec::new(4, 6);
        specs[Crop::Tomato.idx()] = CropSpec::new(4, 25);
        specs[Crop::Cucumber.idx()] = CropSpec::new(4, 25);
        Self { specs }
    }
}
