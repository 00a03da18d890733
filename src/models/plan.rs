use serde::Serialize;

use crate::models::nutrients::Nutrients;

/// One food and its gram amount in a plan, with the nutrition it delivers.
#[derive(Debug, Clone, Serialize)]
pub struct Pick {
    /// Name of the chosen food.
    pub food_name: String,

    /// Grams of the food, rounded to the nearest gram.
    pub grams: f64,

    /// Nutrition delivered at `grams`.
    pub nutrients: Nutrients,
}

impl Pick {
    pub fn new(food_name: String, grams: f64, nutrients: Nutrients) -> Self {
        Self {
            food_name,
            grams,
            nutrients,
        }
    }
}

/// Outcome of a single planning request.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    pub picks: Vec<Pick>,
    pub totals: Nutrients,
    /// Target minus totals. Negative values are overshoot.
    pub gaps: Nutrients,
    /// Picks drawn from degenerate catalog rows.
    pub warnings: Vec<String>,
}

impl PlanResult {
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
