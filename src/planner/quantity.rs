use crate::models::FoodItem;
use crate::planner::constants::DENSITY_EPSILON;

/// Nutrient amounts one food should deliver. `None` means "not a target".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuantityTargets {
    pub kcal: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
}

impl QuantityTargets {
    pub fn protein(grams: f64) -> Self {
        Self {
            protein_g: Some(grams),
            ..Default::default()
        }
    }

    pub fn carbs(grams: f64) -> Self {
        Self {
            carbs_g: Some(grams),
            ..Default::default()
        }
    }

    pub fn fat(grams: f64) -> Self {
        Self {
            fat_g: Some(grams),
            ..Default::default()
        }
    }
}

/// Grams of `per_100g` content needed to reach `target`.
fn grams_for(target: f64, per_100g: f64) -> f64 {
    target * 100.0 / per_100g.max(DENSITY_EPSILON)
}

fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Grams of `food` that best meet `targets`.
///
/// Each supplied target yields its own gram estimate; the median of those is
/// returned. With no targets the result is 0. The result is not clamped.
pub fn solve_grams(food: &FoodItem, targets: &QuantityTargets) -> f64 {
    let mut estimates: Vec<f64> = [
        targets.protein_g.map(|t| grams_for(t, food.protein)),
        targets.carbs_g.map(|t| grams_for(t, food.carbs)),
        targets.fat_g.map(|t| grams_for(t, food.fat)),
        targets.kcal.map(|t| grams_for(t, food.kcal)),
    ]
    .into_iter()
    .flatten()
    .collect();

    median(&mut estimates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lentils() -> FoodItem {
        FoodItem::new("Lentils", 116.0, 9.0, 20.0, 0.4)
    }

    #[test]
    fn test_no_targets_is_zero() {
        assert_eq!(solve_grams(&lentils(), &QuantityTargets::default()), 0.0);
    }

    #[test]
    fn test_single_target_is_exact() {
        let grams = solve_grams(&lentils(), &QuantityTargets::protein(18.0));
        assert!((grams - 200.0).abs() < 1e-9);

        let grams = solve_grams(&lentils(), &QuantityTargets::carbs(10.0));
        assert!((grams - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_median_of_three() {
        // protein -> 100 g, carbs -> 50 g, kcal -> 300 g
        let targets = QuantityTargets {
            kcal: Some(348.0),
            protein_g: Some(9.0),
            carbs_g: Some(10.0),
            fat_g: None,
        };
        assert!((solve_grams(&lentils(), &targets) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_median_of_two_is_mean() {
        let targets = QuantityTargets {
            protein_g: Some(9.0),
            carbs_g: Some(10.0),
            ..Default::default()
        };
        assert!((solve_grams(&lentils(), &targets) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_nutrient_uses_epsilon_floor() {
        let oil = FoodItem::new("Oil", 884.0, 0.0, 0.0, 100.0);
        let grams = solve_grams(&oil, &QuantityTargets::protein(10.0));
        assert!(grams.is_finite());
        assert!(grams > 1e9);
    }

    #[test]
    fn test_overshot_target_still_votes_in_median() {
        // protein -> 100 g, carbs -> 50 g, fat (already overshot) -> -100 g
        let targets = QuantityTargets {
            protein_g: Some(9.0),
            carbs_g: Some(10.0),
            fat_g: Some(-0.4),
            kcal: None,
        };
        assert!((solve_grams(&lentils(), &targets) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_target_gives_negative_grams() {
        let grams = solve_grams(&lentils(), &QuantityTargets::fat(-2.0));
        assert!(grams < 0.0);
    }
}
