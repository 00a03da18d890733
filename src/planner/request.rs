use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{DietType, FoodItem, NutrientTargets, PlanResult, UserProfile};
use crate::planner::allocator::Allocator;
use crate::planner::diet::filter_foods;
use crate::planner::projection::project_weight_change;
use crate::planner::ranking::rank_foods;
use crate::planner::settings::PlannerSettings;
use crate::planner::targets::{TargetReport, compute_targets};

/// Everything a caller gets back for a profile-driven request.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub diet: DietType,
    pub targets: TargetReport,
    pub plan: PlanResult,
    /// Weekly weight change if the plan's calories were eaten every day.
    pub projected_weekly_change_kg: f64,
}

/// Build a plan for `targets` from the foods allowed by `diet`, using default settings.
pub fn plan(foods: &[FoodItem], targets: &NutrientTargets, diet: DietType) -> Result<PlanResult> {
    plan_with_settings(foods, targets, diet, &PlannerSettings::default())
}

/// Build a plan with explicit allocator settings.
///
/// Deterministic for a given catalog and inputs. Fails when `settings` are
/// invalid or the diet leaves no food for the mandatory fat top-up.
pub fn plan_with_settings(
    foods: &[FoodItem],
    targets: &NutrientTargets,
    diet: DietType,
    settings: &PlannerSettings,
) -> Result<PlanResult> {
    settings.validate()?;

    let eligible = filter_foods(foods, diet);
    if eligible.is_empty() {
        warn!(diet = %diet, catalog = foods.len(), "diet filter left no foods");
    }

    let pools = rank_foods(&eligible, settings.pool_size);
    let result = Allocator::new(&eligible, &pools, settings, diet, *targets).run()?;

    info!(
        diet = %diet,
        eligible = eligible.len(),
        picks = result.len(),
        kcal_gap = result.gaps.kcal,
        "plan built"
    );
    Ok(result)
}

/// Derive targets from a profile, plan them, and project the weight effect.
pub fn plan_for_profile(
    foods: &[FoodItem],
    profile: &UserProfile,
    diet: DietType,
    settings: &PlannerSettings,
) -> Result<PlanReport> {
    let targets = compute_targets(profile);
    let plan = plan_with_settings(foods, &targets.nutrient_targets(), diet, settings)?;
    let projected_weekly_change_kg = project_weight_change(plan.totals.kcal, targets.tdee);

    Ok(PlanReport {
        diet,
        targets,
        plan,
        projected_weekly_change_kg,
    })
}
