use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vita_plan_rs::catalog::Catalog;
use vita_plan_rs::evaluation::{
    EvaluationConfig, print_summary, write_csv, write_summary_json,
};
use vita_plan_rs::models::DietType;
use vita_plan_rs::planner::PlannerSettings;

#[derive(Parser, Debug)]
#[command(name = "evaluate")]
#[command(about = "Measure plan quality over randomly sampled user profiles")]
struct Args {
    /// Number of random profiles
    #[arg(long, default_value = "200")]
    samples: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Diet types to evaluate (comma-separated)
    #[arg(long, default_value = "veg,vegegg,vegan,nonveg")]
    diets: String,

    /// Path to the food catalog CSV
    #[arg(long, default_value = "data/food_table.csv")]
    catalog: PathBuf,

    /// Optional planner settings JSON
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output CSV file for every sample
    #[arg(long, default_value = "evaluation_samples.csv")]
    csv: PathBuf,

    /// Output JSON file for per-diet summaries
    #[arg(long, default_value = "evaluation_summary.json")]
    json: PathBuf,
}

fn parse_diets(s: &str) -> Vec<DietType> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(DietType::from_label)
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match Catalog::load(&args.catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Loaded {} foods from {:?}", catalog.len(), args.catalog);

    let settings = match &args.settings {
        Some(path) => match PlannerSettings::load(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => PlannerSettings::default(),
    };

    let diets = parse_diets(&args.diets);
    if diets.is_empty() {
        eprintln!("Error: no diet types provided");
        std::process::exit(1);
    }
    println!("Evaluating diets: {:?}", diets);

    let config = EvaluationConfig {
        samples: args.samples,
        seed: args.seed,
        diets,
        ..Default::default()
    };

    let report = vita_plan_rs::evaluation::evaluate(catalog.foods(), &settings, &config);
    print_summary(&report.summaries);

    if let Err(e) = write_csv(&report.samples, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all samples to {:?}", args.csv);
    }

    if let Err(e) = write_summary_json(&report.summaries, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote summaries to {:?}", args.json);
    }
}
