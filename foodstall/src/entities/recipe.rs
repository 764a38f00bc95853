use std::fmt::{Display, Formatter};

use crate::entities::Crop;

/// Exact, non-negative rational coefficient.
/// Keeps the recipe graph free of floating point drift: `1/18` stays `1/18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub num: u64,
    pub den: u64,
}

impl Ratio {
    /// Creates a ratio in lowest terms
    pub const fn of(num: u64, den: u64) -> Self {
        assert!(den > 0, "ratio denominator must be positive");
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// `ceil(qty * self)`
    pub fn mul_ceil(&self, qty: u64) -> u64 {
        self.mul_div_ceil(qty, 1)
    }

    /// `ceil(qty * self / divisor)`, rounding only once
    pub fn mul_div_ceil(&self, qty: u64, divisor: u64) -> u64 {
        debug_assert!(divisor > 0);
        let numerator = qty as u128 * self.num as u128;
        let denominator = self.den as u128 * divisor as u128;
        numerator.div_ceil(denominator) as u64
    }

    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl std::ops::Add for Ratio {
    type Output = Ratio;

    fn add(self, rhs: Ratio) -> Ratio {
        Ratio::of(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Processed goods which are brined in fixed-size batches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brine {
    Kimchi,
    Pickles,
}

impl Brine {
    pub fn name(&self) -> &'static str {
        match self {
            Brine::Kimchi => "kimchi",
            Brine::Pickles => "pickles",
        }
    }
}

/// A batch recipe for a [`Brine`]: every batch yields `batch_size` units and consumes `inputs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrineRecipe {
    pub brine: Brine,
    pub batch_size: u64,
    /// Raw crop consumed per batch
    pub inputs: Vec<(Crop, u64)>,
}

impl BrineRecipe {
    pub fn batches_for(&self, target: u64) -> u64 {
        target.div_ceil(self.batch_size)
    }
}

/// Recipe graph of the good being sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Raw crop consumed per unit of output.
    /// The order of this list is the order in which crops are allocated to boxes.
    pub crop_ratios: Vec<(Crop, Ratio)>,
    /// Goods bought in, one per unit of output
    pub purchases: Vec<&'static str>,
    pub brines: Vec<BrineRecipe>,
}

impl Recipe {
    /// A hotdog topped with sliced radish and tomato, kimchi and pickles.
    pub fn hotdog() -> Self {
        let sliced_radish = Ratio::of(1, 2);
        let kimchi_radish = Ratio::of(1, 4);
        Self {
            crop_ratios: vec![
                (Crop::Radish, sliced_radish + kimchi_radish),
                (Crop::Tomato, Ratio::of(1, 4)),
                (Crop::Carrot, Ratio::of(1, 4)),
                (Crop::Cabbage, Ratio::of(1, 24)),
                (Crop::Cucumber, Ratio::of(6, 18)),
                (Crop::Onion, Ratio::of(1, 18)),
                (Crop::Garlic, Ratio::of(1, 18)),
            ],
            purchases: vec!["Cheese", "Sausage"],
            brines: vec![
                BrineRecipe {
                    brine: Brine::Kimchi,
                    batch_size: 24,
                    inputs: vec![(Crop::Radish, 6), (Crop::Carrot, 6), (Crop::Cabbage, 1)],
                },
                BrineRecipe {
                    brine: Brine::Pickles,
                    batch_size: 18,
                    inputs: vec![(Crop::Cucumber, 6), (Crop::Onion, 1), (Crop::Garlic, 1)],
                },
            ],
        }
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe::hotdog()
    }
}
