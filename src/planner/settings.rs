use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::*;

/// Inclusive gram range a pick is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GramRange {
    pub min: f64,
    pub max: f64,
}

impl GramRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `grams` into the range. NaN clamps to `min`.
    pub fn clamp(&self, grams: f64) -> f64 {
        if grams.is_nan() {
            return self.min;
        }
        grams.clamp(self.min, self.max)
    }
}

/// Runtime-configurable allocator knobs.
///
/// Defaults reproduce the fixed planner behaviour; a JSON file only needs the
/// fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Candidates kept per density axis.
    pub pool_size: usize,
    pub protein_anchor_count: usize,
    /// Share of the current protein residual each anchor aims for.
    pub protein_anchor_fraction: f64,
    pub protein_grams: GramRange,
    pub carb_count: usize,
    /// Share of the current carb residual each carb pick aims for.
    pub carb_fraction: f64,
    pub carb_grams: GramRange,
    pub fat_grams: GramRange,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            protein_anchor_count: PROTEIN_ANCHOR_COUNT,
            protein_anchor_fraction: PROTEIN_ANCHOR_FRACTION,
            protein_grams: GramRange::new(PROTEIN_MIN_GRAMS, PROTEIN_MAX_GRAMS),
            carb_count: CARB_PICK_COUNT,
            carb_fraction: CARB_PICK_FRACTION,
            carb_grams: GramRange::new(CARB_MIN_GRAMS, CARB_MAX_GRAMS),
            fat_grams: GramRange::new(FAT_MIN_GRAMS, FAT_MAX_GRAMS),
        }
    }
}

impl PlannerSettings {
    /// Load settings from a JSON file and validate them.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: PlannerSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 {
            return Err(PlanError::InvalidInput(
                "pool_size must be at least 1".to_string(),
            ));
        }

        for (name, fraction) in [
            ("protein_anchor_fraction", self.protein_anchor_fraction),
            ("carb_fraction", self.carb_fraction),
        ] {
            if !fraction.is_finite() || fraction < 0.0 {
                return Err(PlanError::InvalidInput(format!(
                    "{} must be a non-negative number, got {}",
                    name, fraction
                )));
            }
        }

        for (name, range) in [
            ("protein_grams", self.protein_grams),
            ("carb_grams", self.carb_grams),
            ("fat_grams", self.fat_grams),
        ] {
            if !(range.min >= 0.0 && range.min <= range.max) {
                return Err(PlanError::InvalidInput(format!(
                    "{} must satisfy 0 <= min <= max, got {}..{}",
                    name, range.min, range.max
                )));
            }
        }

        Ok(())
    }

    /// Upper bound on picks one plan can contain.
    pub fn max_picks(&self) -> usize {
        self.protein_anchor_count + self.carb_count + 1
    }
}
