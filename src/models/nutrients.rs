use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Energy plus the three macros, in kcal and grams.
///
/// Used for targets, running residuals, plan totals and gaps alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Daily targets. Derived once per request and never changed afterwards.
pub type NutrientTargets = Nutrients;

impl Nutrients {
    pub fn new(kcal: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            kcal,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Round every field to `decimals` places for display.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            kcal: round_to(self.kcal, decimals),
            protein_g: round_to(self.protein_g, decimals),
            carbs_g: round_to(self.carbs_g, decimals),
            fat_g: round_to(self.fat_g, decimals),
        }
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, rhs: Nutrients) -> Nutrients {
        Nutrients {
            kcal: self.kcal + rhs.kcal,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Nutrients) {
        *self = *self + rhs;
    }
}

impl Sub for Nutrients {
    type Output = Nutrients;

    fn sub(self, rhs: Nutrients) -> Nutrients {
        Nutrients {
            kcal: self.kcal - rhs.kcal,
            protein_g: self.protein_g - rhs.protein_g,
            carbs_g: self.carbs_g - rhs.carbs_g,
            fat_g: self.fat_g - rhs.fat_g,
        }
    }
}

impl SubAssign for Nutrients {
    fn sub_assign(&mut self, rhs: Nutrients) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for Nutrients {
    fn sum<I: Iterator<Item = Nutrients>>(iter: I) -> Self {
        iter.fold(Nutrients::default(), Add::add)
    }
}

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
