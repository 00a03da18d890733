use serde::{Deserialize, Serialize};

use crate::models::nutrients::Nutrients;

/// A row in the food catalog. All nutrition values are per 100 g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "food_name")]
    pub name: String,

    #[serde(rename = "kcal_per_100g")]
    pub kcal: f64,

    #[serde(rename = "protein_per_100g")]
    pub protein: f64,

    #[serde(rename = "carbs_per_100g")]
    pub carbs: f64,

    #[serde(rename = "fat_per_100g")]
    pub fat: f64,
}

impl FoodItem {
    pub fn new(name: &str, kcal: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.to_string(),
            kcal,
            protein,
            carbs,
            fat,
        }
    }

    /// Nutrition delivered by `grams` of this food.
    #[inline]
    pub fn yield_at(&self, grams: f64) -> Nutrients {
        let scale = grams / 100.0;
        Nutrients {
            kcal: self.kcal * scale,
            protein_g: self.protein * scale,
            carbs_g: self.carbs * scale,
            fat_g: self.fat * scale,
        }
    }

    /// Negative values or a zero-calorie row. Still plannable, but worth flagging.
    pub fn is_degenerate(&self) -> bool {
        self.kcal <= 0.0 || self.protein < 0.0 || self.carbs < 0.0 || self.fat < 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} F:{} per 100g",
            self.name, self.kcal, self.protein, self.carbs, self.fat
        )
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
