use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::evaluation::metrics::{DietSummary, SampleResult};
use crate::models::{Nutrients, round_to};

/// Write every sample to a CSV file.
pub fn write_csv(samples: &[SampleResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "sample",
        "diet",
        "target_kcal",
        "picks",
        "kcal_gap",
        "protein_gap",
        "carbs_gap",
        "fat_gap",
    ])?;

    for s in samples {
        let gap = |f: fn(&Nutrients) -> f64| {
            s.gaps.map(|g| format!("{:.1}", f(&g))).unwrap_or_default()
        };
        wtr.write_record([
            s.sample.to_string(),
            s.diet.label().to_string(),
            format!("{:.1}", s.target_kcal),
            s.picks.to_string(),
            gap(|g| g.kcal),
            gap(|g| g.protein_g),
            gap(|g| g.carbs_g),
            gap(|g| g.fat_g),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write per-diet summaries to a JSON file.
pub fn write_summary_json(summaries: &[DietSummary], path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "diets": summaries.iter().map(|s| {
            serde_json::json!({
                "diet": s.diet.label(),
                "runs": s.runs,
                "failures": s.failures,
                "avg_picks": round_to(s.avg_picks, 2),
                "mean_abs_gap": {
                    "kcal": round_to(s.mean_abs_gap.kcal, 1),
                    "protein": round_to(s.mean_abs_gap.protein_g, 1),
                    "carbs": round_to(s.mean_abs_gap.carbs_g, 1),
                    "fat": round_to(s.mean_abs_gap.fat_g, 1),
                },
                "mean_relative_kcal_error": round_to(s.mean_relative_kcal_error, 4),
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print per-diet summaries to stdout.
pub fn print_summary(summaries: &[DietSummary]) {
    println!("\n=== Plan Quality by Diet ===\n");

    for s in summaries {
        println!(
            "{:<7} runs={} failures={} picks={:.2} kcal_err={:.1}%",
            s.diet.label(),
            s.runs,
            s.failures,
            s.avg_picks,
            s.mean_relative_kcal_error * 100.0
        );
        println!(
            "        |gap| kcal={:.1} P={:.1} C={:.1} F={:.1}",
            s.mean_abs_gap.kcal, s.mean_abs_gap.protein_g, s.mean_abs_gap.carbs_g, s.mean_abs_gap.fat_g
        );
        println!();
    }
}
