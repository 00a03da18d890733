use serde_json::{Value, json};

use crate::models::{FoodItem, Nutrients, PlanResult, round_to};
use crate::planner::{PlanReport, TargetReport};

/// Display derived targets.
pub fn display_targets(targets: &TargetReport) {
    let t = targets.rounded();
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("TDEE:          {:>7.1} kcal", t.tdee);
    println!("Target:        {:>7.1} kcal", t.target_kcal);
    println!("Protein:       {:>7.1} g", t.protein_g);
    println!("Carbohydrate:  {:>7.1} g", t.carbs_g);
    println!("Fat:           {:>7.1} g", t.fat_g);
    println!();
}

fn format_signed(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.1}", sign, value)
}

/// Display a plan in a formatted table.
pub fn display_plan(plan: &PlanResult) {
    println!("=== Food Plan ===");
    println!();

    let max_name_len = plan
        .picks
        .iter()
        .map(|p| p.food_name.len())
        .max()
        .unwrap_or(10);

    for (i, pick) in plan.picks.iter().enumerate() {
        let n = pick.nutrients;
        println!(
            "{:>3}. {:<width$} {:>5.0} g | {:>6.1} kcal  P {:>5.1}  C {:>5.1}  F {:>5.1}",
            i + 1,
            pick.food_name,
            pick.grams,
            n.kcal,
            n.protein_g,
            n.carbs_g,
            n.fat_g,
            width = max_name_len
        );
    }

    let totals = plan.totals;
    let gaps = plan.gaps;
    println!();
    println!("--- Summary ---");
    println!(
        "Totals: {:.1} kcal, P {:.1} g, C {:.1} g, F {:.1} g",
        totals.kcal, totals.protein_g, totals.carbs_g, totals.fat_g
    );
    println!(
        "Gaps:   {} kcal, P {} g, C {} g, F {} g  (negative = over target)",
        format_signed(gaps.kcal),
        format_signed(gaps.protein_g),
        format_signed(gaps.carbs_g),
        format_signed(gaps.fat_g)
    );

    for warning in &plan.warnings {
        println!("Warning: {}", warning);
    }
    println!();
}

/// Display targets, plan and weight projection.
pub fn display_plan_report(report: &PlanReport) {
    display_targets(&report.targets);
    println!("Diet: {}", report.diet);
    println!();
    display_plan(&report.plan);
    println!(
        "Projected weight change: {:+.3} kg/week",
        report.projected_weekly_change_kg
    );
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {} kcal, P:{} C:{} F:{} per 100g",
            food.name, food.kcal, food.protein, food.carbs, food.fat
        );
    }

    println!();
}

fn macros_json(n: &Nutrients) -> Value {
    let r = n.rounded(1);
    json!({
        "kcal": r.kcal,
        "protein": r.protein_g,
        "carbs": r.carbs_g,
        "fat": r.fat_g,
    })
}

/// Targets as JSON, rounded to one decimal.
pub fn targets_json(targets: &TargetReport) -> Value {
    let t = targets.rounded();
    json!({
        "tdee": t.tdee,
        "target_kcal": t.target_kcal,
        "macros_g": {
            "protein": t.protein_g,
            "carbs": t.carbs_g,
            "fat": t.fat_g,
        },
    })
}

/// Plan as JSON: picks, totals and gaps, rounded to one decimal.
pub fn plan_json(plan: &PlanResult) -> Value {
    let picks: Vec<Value> = plan
        .picks
        .iter()
        .map(|p| {
            let n = p.nutrients.rounded(1);
            json!({
                "food": p.food_name,
                "grams": p.grams,
                "kcal": n.kcal,
                "protein": n.protein_g,
                "carbs": n.carbs_g,
                "fat": n.fat_g,
            })
        })
        .collect();

    let gaps = plan.gaps.rounded(1);
    json!({
        "plan": picks,
        "totals": macros_json(&plan.totals),
        "gaps": {
            "kcal_gap": gaps.kcal,
            "protein_gap": gaps.protein_g,
            "carbs_gap": gaps.carbs_g,
            "fat_gap": gaps.fat_g,
        },
        "warnings": plan.warnings,
    })
}

/// Full report as one JSON object.
pub fn plan_report_json(report: &PlanReport) -> Value {
    let mut value = targets_json(&report.targets);
    if let (Value::Object(out), Value::Object(plan)) = (&mut value, plan_json(&report.plan)) {
        out.insert("diet_type".to_string(), json!(report.diet.label()));
        out.extend(plan);
        out.insert(
            "delta_kg_per_week".to_string(),
            json!(round_to(report.projected_weekly_change_kg, 3)),
        );
    }
    value
}
