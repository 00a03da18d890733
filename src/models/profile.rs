use std::fmt;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::warn;

/// Biological sex as used by the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Anything other than "male" uses the female constant.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("male") {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Unknown labels fall back to `Moderate`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match Self::ALL.iter().find(|a| a.label() == normalized) {
            Some(level) => *level,
            None => {
                let labels = Self::ALL.map(|a| a.label());
                warn_unrecognized("activity", &normalized, &labels, "moderate");
                ActivityLevel::Moderate
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Loss,
    Maintain,
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Loss, Goal::Maintain, Goal::Gain];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Loss => "loss",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    /// Unknown labels behave as `Maintain`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match Self::ALL.iter().find(|g| g.label() == normalized) {
            Some(goal) => *goal,
            None => {
                let labels = Self::ALL.map(|g| g.label());
                warn_unrecognized("goal", &normalized, &labels, "maintain");
                Goal::Maintain
            }
        }
    }
}

/// Diet constraint applied to the catalog before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Veg,
    VegEgg,
    Vegan,
    NonVeg,
}

impl DietType {
    pub const ALL: [DietType; 4] = [
        DietType::Veg,
        DietType::VegEgg,
        DietType::Vegan,
        DietType::NonVeg,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::VegEgg => "vegegg",
            DietType::Vegan => "vegan",
            DietType::NonVeg => "nonveg",
        }
    }

    /// Unknown tags mean no filtering, which is what `NonVeg` does.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match Self::ALL.iter().find(|d| d.label() == normalized) {
            Some(diet) => *diet,
            None => {
                let labels = Self::ALL.map(|d| d.label());
                warn_unrecognized("diet type", &normalized, &labels, "nonveg (unfiltered)");
                DietType::NonVeg
            }
        }
    }
}

impl Default for DietType {
    fn default() -> Self {
        DietType::Veg
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User attributes needed to derive daily targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

/// Best fuzzy match for `input` among `labels`, if reasonably close.
pub fn closest_label<'a>(input: &str, labels: &[&'a str]) -> Option<&'a str> {
    labels
        .iter()
        .map(|l| (*l, jaro_winkler(l, input)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(l, _)| l)
}

fn warn_unrecognized(kind: &str, input: &str, labels: &[&str], fallback: &str) {
    match closest_label(input, labels) {
        Some(suggestion) => warn!(
            "unrecognized {} '{}' (did you mean '{}'?), using {}",
            kind, input, suggestion, fallback
        ),
        None => warn!("unrecognized {} '{}', using {}", kind, input, fallback),
    }
}
