use serde::Serialize;

use crate::models::{ActivityLevel, Goal, NutrientTargets, Sex, UserProfile, round_to};
use crate::planner::constants::*;

/// Fraction of target calories assigned to each macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

/// Derived energy figures for a profile.
///
/// Fields are unrounded; use [`TargetReport::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetReport {
    pub tdee: f64,
    pub target_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl TargetReport {
    /// Targets in the form the allocator consumes.
    pub fn nutrient_targets(&self) -> NutrientTargets {
        NutrientTargets::new(self.target_kcal, self.protein_g, self.carbs_g, self.fat_g)
    }

    /// One-decimal copy for reporting.
    pub fn rounded(&self) -> Self {
        Self {
            tdee: round_to(self.tdee, 1),
            target_kcal: round_to(self.target_kcal, 1),
            protein_g: round_to(self.protein_g, 1),
            carbs_g: round_to(self.carbs_g, 1),
            fat_g: round_to(self.fat_g, 1),
        }
    }
}

/// Basal metabolic rate via Mifflin–St Jeor.
pub fn basal_metabolic_rate(sex: Sex, age: u32, height_cm: f64, weight_kg: f64) -> f64 {
    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64 + offset
}

pub fn activity_factor(activity: ActivityLevel) -> f64 {
    match activity {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => DEFAULT_ACTIVITY_FACTOR,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Total daily energy expenditure.
pub fn total_daily_energy(profile: &UserProfile) -> f64 {
    basal_metabolic_rate(
        profile.sex,
        profile.age,
        profile.height_cm,
        profile.weight_kg,
    ) * activity_factor(profile.activity)
}

/// Calorie target for a goal. Loss targets never drop below 1200 kcal.
pub fn target_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Loss => (tdee - GOAL_KCAL_ADJUSTMENT).max(MIN_LOSS_KCAL),
        Goal::Gain => tdee + GOAL_KCAL_ADJUSTMENT,
        Goal::Maintain => tdee,
    }
}

pub fn macro_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::Loss => MacroSplit {
            protein: 0.30,
            carbs: 0.40,
            fat: 0.30,
        },
        Goal::Gain => MacroSplit {
            protein: 0.25,
            carbs: 0.50,
            fat: 0.25,
        },
        Goal::Maintain => MacroSplit {
            protein: 0.30,
            carbs: 0.45,
            fat: 0.25,
        },
    }
}

/// Compute TDEE, calorie target and macro grams for a profile.
pub fn compute_targets(profile: &UserProfile) -> TargetReport {
    let tdee = total_daily_energy(profile);
    let target_kcal = target_calories(tdee, profile.goal);
    let split = macro_split(profile.goal);

    TargetReport {
        tdee,
        target_kcal,
        protein_g: target_kcal * split.protein / KCAL_PER_G_PROTEIN,
        carbs_g: target_kcal * split.carbs / KCAL_PER_G_CARBS,
        fat_g: target_kcal * split.fat / KCAL_PER_G_FAT,
    }
}
