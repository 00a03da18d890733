use crate::models::{DietType, FoodItem};

/// Name fragments that mark meat, fish or egg dishes.
pub const MEAT_KEYWORDS: [&str; 10] = [
    "chicken", "fish", "meat", "egg", "beef", "pork", "mutton", "tuna", "salmon", "shrimp",
];

/// Name fragments that mark dairy products.
pub const DAIRY_KEYWORDS: [&str; 7] = ["milk", "paneer", "curd", "yogurt", "cheese", "ghee", "butter"];

const EGG_KEYWORD: &str = "egg";

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

/// Whether a food name is compatible with a diet type.
pub fn is_allowed(name: &str, diet: DietType) -> bool {
    let name = name.to_lowercase();
    match diet {
        DietType::Veg => !contains_any(&name, &MEAT_KEYWORDS),
        DietType::VegEgg => {
            // Egg dishes pass even when another meat keyword also matches.
            if name.contains(EGG_KEYWORD) {
                return true;
            }
            !MEAT_KEYWORDS
                .iter()
                .filter(|k| **k != EGG_KEYWORD)
                .any(|k| name.contains(k))
        }
        DietType::Vegan => {
            !contains_any(&name, &MEAT_KEYWORDS) && !contains_any(&name, &DAIRY_KEYWORDS)
        }
        DietType::NonVeg => true,
    }
}

/// Restrict foods to those compatible with `diet`.
///
/// Returns a new list of references in catalog order; the input is never modified.
/// The result may be empty.
pub fn filter_foods<'a, I>(foods: I, diet: DietType) -> Vec<&'a FoodItem>
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    foods
        .into_iter()
        .filter(|food| is_allowed(&food.name, diet))
        .collect()
}
