use std::io::Write;
use std::path::PathBuf;

use assert_float_eq::*;
use tempfile::NamedTempFile;

use vita_plan_rs::catalog::{Catalog, load_catalog};
use vita_plan_rs::error::PlanError;
use vita_plan_rs::models::{DietType, FoodItem, Nutrients};
use vita_plan_rs::planner::{
    FAT_MAX_GRAMS, FAT_MIN_GRAMS, PlannerSettings, filter_foods, plan,
    plan_with_settings, rank_foods,
};

fn targets() -> Nutrients {
    Nutrients::new(2200.0, 140.0, 250.0, 70.0)
}

fn shipped_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/food_table.csv");
    Catalog::load(path).unwrap()
}

fn catalog_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "food_name,kcal_per_100g,protein_per_100g,carbs_per_100g,fat_per_100g").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

#[test]
fn test_plan_shape_for_every_diet() {
    let catalog = shipped_catalog();

    for diet in DietType::ALL {
        let result = plan(catalog.foods(), &targets(), diet).unwrap();
        assert!(!result.is_empty() && result.len() <= 6, "diet {}", diet);

        for pick in &result.picks {
            assert_eq!(pick.grams, pick.grams.round());
            assert!(pick.grams >= 10.0 && pick.grams <= 250.0);
        }

        // Last pick is always the single fat top-up.
        let eligible = filter_foods(catalog.foods(), diet);
        let pools = rank_foods(&eligible, 50);
        let top_fat = eligible[pools.fat[0]];
        let last = result.picks.last().unwrap();
        assert_eq!(last.food_name, top_fat.name);
        assert!(last.grams >= FAT_MIN_GRAMS && last.grams <= FAT_MAX_GRAMS);
    }
}

#[test]
fn test_totals_and_gaps_are_consistent() {
    let catalog = shipped_catalog();
    let result = plan(catalog.foods(), &targets(), DietType::Veg).unwrap();

    let summed: Nutrients = result.picks.iter().map(|p| p.nutrients).sum();
    assert_float_absolute_eq!(summed.kcal, result.totals.kcal, 1e-9);
    assert_float_absolute_eq!(result.gaps.kcal, 2200.0 - result.totals.kcal, 1e-9);
    assert_float_absolute_eq!(result.gaps.protein_g, 140.0 - result.totals.protein_g, 1e-9);
    assert_float_absolute_eq!(result.gaps.carbs_g, 250.0 - result.totals.carbs_g, 1e-9);
    assert_float_absolute_eq!(result.gaps.fat_g, 70.0 - result.totals.fat_g, 1e-9);
}

#[test]
fn test_plan_is_deterministic() {
    let catalog = shipped_catalog();
    let a = plan(catalog.foods(), &targets(), DietType::VegEgg).unwrap();
    let b = plan(catalog.foods(), &targets(), DietType::VegEgg).unwrap();

    let picks = |r: &vita_plan_rs::PlanResult| {
        r.picks
            .iter()
            .map(|p| (p.food_name.clone(), p.grams))
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(&a), picks(&b));
    assert_eq!(a.totals, b.totals);
}

#[test]
fn test_single_food_catalog() {
    let file = catalog_file(&["Tofu,76,8,1.9,4.8"]);
    let foods = load_catalog(file.path()).unwrap();
    let targets = Nutrients::new(0.0, 100.0, 0.0, 0.0);

    let result = plan(&foods, &targets, DietType::Vegan).unwrap();

    // 625 g wanted, clamped to 250; carbs already overshot; fat clamps up to 10.
    assert_eq!(result.len(), 2);
    assert_eq!(result.picks[0].grams, 250.0);
    assert_eq!(result.picks[1].grams, 10.0);
    assert_float_absolute_eq!(result.totals.protein_g, 20.8, 1e-9);
    assert_float_absolute_eq!(result.gaps.protein_g, 79.2, 1e-9);
}

#[test]
fn test_diet_without_foods_fails() {
    let file = catalog_file(&["Beef Jerky,410,33,11,26", "Chicken Breast,165,31,0,3.6"]);
    let foods = load_catalog(file.path()).unwrap();

    let err = plan(&foods, &targets(), DietType::Veg).unwrap_err();
    assert!(matches!(err, PlanError::EmptyCandidatePool { .. }));
    assert!(err.to_string().contains("veg"));

    assert!(plan(&foods, &targets(), DietType::NonVeg).is_ok());
}

#[test]
fn test_empty_catalog_fails() {
    let foods: Vec<FoodItem> = Vec::new();
    let err = plan(&foods, &targets(), DietType::NonVeg).unwrap_err();
    assert!(matches!(err, PlanError::EmptyCandidatePool { .. }));
}

#[test]
fn test_custom_settings_limit_picks() {
    let catalog = shipped_catalog();
    let settings = PlannerSettings {
        protein_anchor_count: 1,
        carb_count: 0,
        ..Default::default()
    };

    let result = plan_with_settings(catalog.foods(), &targets(), DietType::NonVeg, &settings).unwrap();
    assert_eq!(result.len(), 2);
}
