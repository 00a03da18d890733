use rand::Rng;

use crate::models::{ActivityLevel, Goal, Sex, UserProfile};

/// Ranges random profiles are drawn from.
#[derive(Debug, Clone)]
pub struct ProfileRanges {
    /// (min, max) age in years
    pub age: (u32, u32),
    /// (min, max) height in cm
    pub height_cm: (f64, f64),
    /// (min, max) weight in kg
    pub weight_kg: (f64, f64),
}

impl Default for ProfileRanges {
    fn default() -> Self {
        Self {
            age: (18, 75),
            height_cm: (150.0, 200.0),
            weight_kg: (45.0, 130.0),
        }
    }
}

/// Draw one adult profile uniformly from the ranges.
pub fn random_profile(rng: &mut impl Rng, ranges: &ProfileRanges) -> UserProfile {
    let sex = if rng.gen_bool(0.5) { Sex::Male } else { Sex::Female };
    let activity = ActivityLevel::ALL[rng.gen_range(0..ActivityLevel::ALL.len())];
    let goal = Goal::ALL[rng.gen_range(0..Goal::ALL.len())];

    UserProfile {
        sex,
        age: rng.gen_range(ranges.age.0..=ranges.age.1),
        height_cm: rng.gen_range(ranges.height_cm.0..=ranges.height_cm.1),
        weight_kg: rng.gen_range(ranges.weight_kg.0..=ranges.weight_kg.1),
        activity,
        goal,
    }
}
