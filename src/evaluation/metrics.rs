use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::PlanError;
use crate::evaluation::profiles::{ProfileRanges, random_profile};
use crate::models::{DietType, FoodItem, Nutrients};
use crate::planner::{PlannerSettings, plan_for_profile};

/// Configuration for an evaluation run.
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    pub samples: usize,
    pub seed: u64,
    pub diets: Vec<DietType>,
    pub ranges: ProfileRanges,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            seed: 123,
            diets: DietType::ALL.to_vec(),
            ranges: ProfileRanges::default(),
        }
    }
}

/// Outcome of planning one sampled profile under one diet.
#[derive(Debug, Clone)]
pub struct SampleResult {
    pub sample: usize,
    pub diet: DietType,
    pub target_kcal: f64,
    pub picks: usize,
    /// Target minus realized totals; `None` if the diet had no eligible foods.
    pub gaps: Option<Nutrients>,
}

impl SampleResult {
    /// Absolute kcal gap as a fraction of the target.
    pub fn relative_kcal_error(&self) -> Option<f64> {
        let gaps = self.gaps?;
        if self.target_kcal > 0.0 {
            Some(gaps.kcal.abs() / self.target_kcal)
        } else {
            None
        }
    }
}

/// Aggregated metrics for one diet type.
#[derive(Debug, Clone)]
pub struct DietSummary {
    pub diet: DietType,
    pub runs: usize,
    pub failures: usize,
    pub avg_picks: f64,
    pub mean_abs_gap: Nutrients,
    pub mean_relative_kcal_error: f64,
}

/// Everything an evaluation run produced.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub samples: Vec<SampleResult>,
    pub summaries: Vec<DietSummary>,
}

fn abs_gap(n: &Nutrients) -> Nutrients {
    Nutrients::new(n.kcal.abs(), n.protein_g.abs(), n.carbs_g.abs(), n.fat_g.abs())
}

/// Aggregate the samples for one diet.
pub fn summarize(diet: DietType, samples: &[SampleResult]) -> DietSummary {
    let runs: Vec<&SampleResult> = samples.iter().filter(|s| s.diet == diet).collect();
    let ok: Vec<&SampleResult> = runs.iter().copied().filter(|s| s.gaps.is_some()).collect();
    let failures = runs.len() - ok.len();

    if ok.is_empty() {
        return DietSummary {
            diet,
            runs: runs.len(),
            failures,
            avg_picks: 0.0,
            mean_abs_gap: Nutrients::default(),
            mean_relative_kcal_error: 0.0,
        };
    }

    let n = ok.len() as f64;
    let total_gap: Nutrients = ok.iter().filter_map(|s| s.gaps).map(|g| abs_gap(&g)).sum();
    let mean_abs_gap = Nutrients::new(
        total_gap.kcal / n,
        total_gap.protein_g / n,
        total_gap.carbs_g / n,
        total_gap.fat_g / n,
    );
    let avg_picks = ok.iter().map(|s| s.picks as f64).sum::<f64>() / n;
    let mean_relative_kcal_error = ok
        .iter()
        .filter_map(|s| s.relative_kcal_error())
        .sum::<f64>()
        / n;

    DietSummary {
        diet,
        runs: runs.len(),
        failures,
        avg_picks,
        mean_abs_gap,
        mean_relative_kcal_error,
    }
}

/// Plan every sampled profile under every configured diet.
///
/// Empty-pool failures are counted, not propagated.
pub fn evaluate(
    foods: &[FoodItem],
    settings: &PlannerSettings,
    config: &EvaluationConfig,
) -> EvaluationReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.samples * config.diets.len());

    for sample in 0..config.samples {
        let profile = random_profile(&mut rng, &config.ranges);

        for &diet in &config.diets {
            let result = match plan_for_profile(foods, &profile, diet, settings) {
                Ok(report) => SampleResult {
                    sample,
                    diet,
                    target_kcal: report.targets.target_kcal,
                    picks: report.plan.len(),
                    gaps: Some(report.plan.gaps),
                },
                Err(PlanError::EmptyCandidatePool { .. }) => SampleResult {
                    sample,
                    diet,
                    target_kcal: 0.0,
                    picks: 0,
                    gaps: None,
                },
                Err(e) => {
                    tracing::error!(error = %e, "unexpected planning error");
                    continue;
                }
            };
            samples.push(result);
        }
    }

    let summaries = config
        .diets
        .iter()
        .map(|&diet| summarize(diet, &samples))
        .collect();

    EvaluationReport { samples, summaries }
}
