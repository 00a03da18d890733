use std::fmt;

use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{DietType, FoodItem, NutrientTargets, Nutrients, Pick, PlanResult};
use crate::planner::quantity::{QuantityTargets, solve_grams};
use crate::planner::ranking::RankedPools;
use crate::planner::settings::{GramRange, PlannerSettings};

/// Allocation phases, run strictly in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Up to N protein-dense anchors, each aiming at a share of remaining protein.
    ProteinAnchor,
    /// Up to N carb-dense picks; stops once carbs are covered.
    Carb,
    /// Exactly one fat-dense pick, always.
    FatTopUp,
    Done,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::ProteinAnchor => Phase::Carb,
            Phase::Carb => Phase::FatTopUp,
            Phase::FatTopUp | Phase::Done => Phase::Done,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::ProteinAnchor => "protein anchor",
            Phase::Carb => "carb",
            Phase::FatTopUp => "fat top-up",
            Phase::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Greedy three-phase allocator for one planning request.
///
/// Owns the residual for the duration of the request. Foods are borrowed
/// read-only; `pools` index into `foods`.
pub struct Allocator<'a> {
    foods: &'a [&'a FoodItem],
    pools: &'a RankedPools,
    settings: &'a PlannerSettings,
    diet: DietType,
    targets: NutrientTargets,
    residual: Nutrients,
    picks: Vec<Pick>,
    warnings: Vec<String>,
    phase: Phase,
}

impl<'a> Allocator<'a> {
    pub fn new(
        foods: &'a [&'a FoodItem],
        pools: &'a RankedPools,
        settings: &'a PlannerSettings,
        diet: DietType,
        targets: NutrientTargets,
    ) -> Self {
        Self {
            foods,
            pools,
            settings,
            diet,
            targets,
            residual: targets,
            picks: Vec::with_capacity(settings.max_picks()),
            warnings: Vec::new(),
            phase: Phase::ProteinAnchor,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Nutrition still to be covered. Negative fields mean overshoot.
    pub fn residual(&self) -> Nutrients {
        self.residual
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    /// Run the current phase and advance to the next one.
    pub fn step(&mut self) -> Result<Phase> {
        match self.phase {
            Phase::ProteinAnchor => self.run_protein_anchors(),
            Phase::Carb => self.run_carbs(),
            Phase::FatTopUp => self.run_fat_top_up()?,
            Phase::Done => {}
        }
        self.phase = self.phase.next();
        Ok(self.phase)
    }

    /// Run all remaining phases and build the result.
    pub fn run(mut self) -> Result<PlanResult> {
        while self.phase != Phase::Done {
            self.step()?;
        }
        Ok(self.finish())
    }

    fn run_protein_anchors(&mut self) {
        let (foods, pools) = (self.foods, self.pools);
        for &idx in pools.protein.iter().take(self.settings.protein_anchor_count) {
            let food = foods[idx];
            // Literal halving of whatever protein is left, anchor after anchor.
            let wanted = self.residual.protein_g * self.settings.protein_anchor_fraction;
            let need = solve_grams(food, &QuantityTargets::protein(wanted));
            if need <= 0.0 {
                debug!(food = %food.name, need, "skipping protein anchor");
                continue;
            }
            self.commit(food, need, self.settings.protein_grams);
        }
    }

    fn run_carbs(&mut self) {
        let (foods, pools) = (self.foods, self.pools);
        for &idx in pools.carbs.iter().take(self.settings.carb_count) {
            if self.residual.carbs_g <= 0.0 {
                debug!(residual = self.residual.carbs_g, "carbs covered, ending carb phase");
                break;
            }
            let food = foods[idx];
            let wanted = self.residual.carbs_g * self.settings.carb_fraction;
            let need = solve_grams(food, &QuantityTargets::carbs(wanted));
            self.commit(food, need, self.settings.carb_grams);
        }
    }

    fn run_fat_top_up(&mut self) -> Result<()> {
        let foods = self.foods;
        let idx = *self
            .pools
            .fat
            .first()
            .ok_or_else(|| PlanError::EmptyCandidatePool {
                diet: self.diet.label().to_string(),
                phase: Phase::FatTopUp,
            })?;
        let food = foods[idx];
        let need = solve_grams(food, &QuantityTargets::fat(self.residual.fat_g));
        self.commit(food, need, self.settings.fat_grams);
        Ok(())
    }

    /// Clamp and round the gram amount, record the pick, and charge its
    /// realized nutrition against the residual.
    fn commit(&mut self, food: &FoodItem, need: f64, range: GramRange) {
        let grams = range.clamp(need).round();
        let delivered = food.yield_at(grams);

        debug!(
            phase = %self.phase,
            food = %food.name,
            need,
            grams,
            kcal = delivered.kcal,
            "pick"
        );

        if food.is_degenerate() {
            let warning = format!("{} has zero calories or negative nutrient values", food.name);
            if !self.warnings.contains(&warning) {
                self.warnings.push(warning);
            }
        }

        self.residual -= delivered;
        self.picks.push(Pick::new(food.name.clone(), grams, delivered));
    }

    fn finish(self) -> PlanResult {
        let totals: Nutrients = self.picks.iter().map(|p| p.nutrients).sum();
        PlanResult {
            gaps: self.targets - totals,
            totals,
            picks: self.picks,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::ranking::rank_foods;

    fn sample_foods() -> Vec<FoodItem> {
        vec![
            FoodItem::new("Tofu", 76.0, 8.0, 1.9, 4.8),
            FoodItem::new("Lentils", 116.0, 9.0, 20.0, 0.4),
            FoodItem::new("Seitan", 370.0, 75.0, 14.0, 1.9),
            FoodItem::new("Banana", 89.0, 1.1, 23.0, 0.3),
            FoodItem::new("Brown Rice", 111.0, 2.6, 23.0, 0.9),
            FoodItem::new("Olive Oil", 884.0, 0.0, 0.0, 100.0),
        ]
    }

    fn targets() -> NutrientTargets {
        NutrientTargets::new(2000.0, 150.0, 225.0, 55.0)
    }

    #[test]
    fn test_phase_order() {
        assert_eq!(Phase::ProteinAnchor.next(), Phase::Carb);
        assert_eq!(Phase::Carb.next(), Phase::FatTopUp);
        assert_eq!(Phase::FatTopUp.next(), Phase::Done);
        assert_eq!(Phase::Done.next(), Phase::Done);
    }

    #[test]
    fn test_full_run_shape() {
        let foods = sample_foods();
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        let plan = Allocator::new(&refs, &pools, &settings, DietType::Vegan, targets())
            .run()
            .unwrap();

        assert!(!plan.is_empty());
        assert!(plan.len() <= 6);
        assert_eq!(plan.picks.last().unwrap().food_name, "Olive Oil");

        let totals: Nutrients = plan.picks.iter().map(|p| p.nutrients).sum();
        assert_eq!(plan.totals, totals);
        assert!((plan.gaps.kcal - (2000.0 - totals.kcal)).abs() < 1e-9);
    }

    #[test]
    fn test_protein_phase_halves_current_residual() {
        let foods = vec![
            FoodItem::new("Whey Isolate", 100.0, 50.0, 0.0, 0.0),
            FoodItem::new("Seitan", 100.0, 40.0, 0.0, 0.0),
        ];
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        let mut allocator = Allocator::new(
            &refs,
            &pools,
            &settings,
            DietType::NonVeg,
            NutrientTargets::new(2000.0, 200.0, 0.0, 0.0),
        );
        allocator.step().unwrap();

        let picks = allocator.picks();
        assert_eq!(picks.len(), 2);
        // 100 g protein wanted -> 200 g whey
        assert_eq!(picks[0].grams, 200.0);
        // 100 g left, 50 g wanted -> 125 g seitan
        assert_eq!(picks[1].grams, 125.0);
        assert!((allocator.residual().protein_g - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_protein_phase_takes_at_most_three_anchors() {
        let foods = vec![
            FoodItem::new("Whey Isolate", 370.0, 90.0, 2.0, 1.0),
            FoodItem::new("Seitan", 370.0, 75.0, 14.0, 1.9),
            FoodItem::new("Tuna", 116.0, 26.0, 0.0, 0.8),
            FoodItem::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
            FoodItem::new("Tofu", 76.0, 8.0, 1.9, 4.8),
        ];
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        let mut allocator = Allocator::new(
            &refs,
            &pools,
            &settings,
            DietType::NonVeg,
            NutrientTargets::new(3000.0, 400.0, 300.0, 80.0),
        );
        assert_eq!(allocator.step().unwrap(), Phase::Carb);

        let names: Vec<&str> = allocator.picks().iter().map(|p| p.food_name.as_str()).collect();
        assert_eq!(names, ["Whey Isolate", "Tuna", "Seitan"]);
    }

    #[test]
    fn test_protein_phase_skips_when_need_not_positive() {
        let foods = sample_foods();
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        let mut allocator = Allocator::new(
            &refs,
            &pools,
            &settings,
            DietType::NonVeg,
            NutrientTargets::new(2000.0, 0.0, 225.0, 55.0),
        );
        assert_eq!(allocator.step().unwrap(), Phase::Carb);
        assert!(allocator.picks().is_empty());
    }

    #[test]
    fn test_carb_phase_breaks_once_carbs_covered() {
        let foods = sample_foods();
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        let mut allocator =
            Allocator::new(&refs, &pools, &settings, DietType::NonVeg, targets());
        allocator.phase = Phase::Carb;
        allocator.residual.carbs_g = -1.0;

        assert_eq!(allocator.step().unwrap(), Phase::FatTopUp);
        assert!(allocator.picks().is_empty());
    }

    #[test]
    fn test_carb_phase_stops_after_first_pick_covers_carbs() {
        let foods = vec![
            FoodItem::new("Sugar", 400.0, 0.0, 100.0, 0.0),
            FoodItem::new("Rice", 130.0, 2.7, 28.0, 0.3),
            FoodItem::new("Oil", 884.0, 0.0, 0.0, 100.0),
        ];
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        // 20 g carbs left: 14 g wanted -> 14 g sugar, clamped to 40 g -> 40 g carbs.
        let mut allocator = Allocator::new(
            &refs,
            &pools,
            &settings,
            DietType::NonVeg,
            NutrientTargets::new(500.0, 0.0, 20.0, 10.0),
        );
        allocator.phase = Phase::Carb;
        allocator.step().unwrap();

        assert_eq!(allocator.picks().len(), 1);
        assert_eq!(allocator.picks()[0].grams, 40.0);
        assert!(allocator.residual().carbs_g < 0.0);
    }

    #[test]
    fn test_fat_top_up_fires_with_negative_fat_residual() {
        let foods = sample_foods();
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        let mut allocator =
            Allocator::new(&refs, &pools, &settings, DietType::NonVeg, targets());
        allocator.phase = Phase::FatTopUp;
        allocator.residual.fat_g = -30.0;

        assert_eq!(allocator.step().unwrap(), Phase::Done);
        assert_eq!(allocator.picks().len(), 1);
        assert_eq!(allocator.picks()[0].grams, 10.0);
    }

    #[test]
    fn test_empty_fat_pool_is_an_error() {
        let refs: Vec<&FoodItem> = Vec::new();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        let err = Allocator::new(&refs, &pools, &settings, DietType::Vegan, targets())
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            PlanError::EmptyCandidatePool {
                phase: Phase::FatTopUp,
                ..
            }
        ));
    }

    #[test]
    fn test_degenerate_pick_is_flagged() {
        let foods = vec![FoodItem::new("Mystery Paste", 0.0, 0.0, 0.0, 5.0)];
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let settings = PlannerSettings::default();
        let pools = rank_foods(&refs, settings.pool_size);

        let plan = Allocator::new(&refs, &pools, &settings, DietType::NonVeg, targets())
            .run()
            .unwrap();

        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].contains("Mystery Paste"));
    }
}
