use std::cmp::Ordering;

use crate::models::FoodItem;
use crate::planner::constants::DENSITY_EPSILON;

/// Macro axis a food can be ranked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroAxis {
    Protein,
    Carbs,
    Fat,
}

/// Grams of each macro per 100 kcal of a food.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroDensity {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroDensity {
    pub fn of(food: &FoodItem) -> Self {
        let per_100kcal = food.kcal / 100.0 + DENSITY_EPSILON;
        Self {
            protein: food.protein / per_100kcal,
            carbs: food.carbs / per_100kcal,
            fat: food.fat / per_100kcal,
        }
    }

    pub fn on(&self, axis: MacroAxis) -> f64 {
        match axis {
            MacroAxis::Protein => self.protein,
            MacroAxis::Carbs => self.carbs,
            MacroAxis::Fat => self.fat,
        }
    }
}

/// Top candidates per macro axis, as indices into the ranked food slice.
///
/// Each list is sorted by descending density; ties keep catalog order.
#[derive(Debug, Clone, Default)]
pub struct RankedPools {
    pub protein: Vec<usize>,
    pub carbs: Vec<usize>,
    pub fat: Vec<usize>,
}

fn rank_axis(densities: &[MacroDensity], axis: MacroAxis, pool_size: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..densities.len()).collect();
    // sort_by is stable, so equal densities stay in catalog order.
    order.sort_by(|&a, &b| {
        densities[b]
            .on(axis)
            .partial_cmp(&densities[a].on(axis))
            .unwrap_or(Ordering::Equal)
    });
    order.truncate(pool_size);
    order
}

/// Rank foods on all three axes, keeping the top `pool_size` of each.
pub fn rank_foods(foods: &[&FoodItem], pool_size: usize) -> RankedPools {
    let densities: Vec<MacroDensity> = foods.iter().map(|f| MacroDensity::of(f)).collect();

    RankedPools {
        protein: rank_axis(&densities, MacroAxis::Protein, pool_size),
        carbs: rank_axis(&densities, MacroAxis::Carbs, pool_size),
        fat: rank_axis(&densities, MacroAxis::Fat, pool_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_foods() -> Vec<FoodItem> {
        vec![
            FoodItem::new("Tofu", 76.0, 8.0, 1.9, 4.8),
            FoodItem::new("Oats", 389.0, 16.9, 66.3, 6.9),
            FoodItem::new("Almonds", 579.0, 21.0, 22.0, 50.0),
            FoodItem::new("Banana", 89.0, 1.1, 23.0, 0.3),
        ]
    }

    #[test]
    fn test_density_per_100kcal() {
        let tofu = FoodItem::new("Tofu", 200.0, 20.0, 10.0, 4.0);
        let d = MacroDensity::of(&tofu);
        assert!((d.protein - 10.0).abs() < 1e-6);
        assert!((d.carbs - 5.0).abs() < 1e-6);
        assert!((d.fat - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_kcal_row_is_finite() {
        let salt = FoodItem::new("Salt", 0.0, 0.0, 0.0, 0.0);
        let d = MacroDensity::of(&salt);
        assert_eq!(d.protein, 0.0);

        let odd = FoodItem::new("Odd", 0.0, 1.0, 0.0, 0.0);
        assert!(MacroDensity::of(&odd).protein.is_finite());
    }

    #[test]
    fn test_rank_foods_orders_each_axis() {
        let foods = sample_foods();
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let pools = rank_foods(&refs, 50);

        assert_eq!(pools.protein[0], 0); // Tofu
        assert_eq!(pools.carbs[0], 3); // Banana
        assert_eq!(pools.fat[0], 2); // Almonds
        assert_eq!(pools.protein.len(), 4);
    }

    #[test]
    fn test_rank_foods_truncates() {
        let foods = sample_foods();
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let pools = rank_foods(&refs, 2);
        assert_eq!(pools.protein.len(), 2);
        assert_eq!(pools.fat.len(), 2);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let foods = vec![
            FoodItem::new("A", 100.0, 10.0, 0.0, 0.0),
            FoodItem::new("B", 100.0, 5.0, 0.0, 0.0),
            FoodItem::new("C", 100.0, 10.0, 0.0, 0.0),
        ];
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let pools = rank_foods(&refs, 50);
        assert_eq!(pools.protein, vec![0, 2, 1]);
    }

    #[test]
    fn test_empty_catalog() {
        let pools = rank_foods(&[], 50);
        assert!(pools.protein.is_empty());
        assert!(pools.fat.is_empty());
    }
}
