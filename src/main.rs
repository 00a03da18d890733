use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vita_plan_rs::catalog;
use vita_plan_rs::cli::{Cli, Command, ProfileArgs};
use vita_plan_rs::error::{PlanError, Result};
use vita_plan_rs::interface::{
    collect_profile, display_food_list, display_plan_report, display_targets, plan_report_json,
    profile_from_args, targets_json,
};
use vita_plan_rs::models::{DietType, FoodItem, UserProfile};
use vita_plan_rs::planner::{
    PlannerSettings, compute_targets, filter_foods, plan_for_profile, project_weight_change,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so JSON output on stdout stays clean. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "vita_plan_rs=debug"
    } else {
        "vita_plan_rs=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            profile,
            diet,
            json,
        } => cmd_plan(&cli.catalog, cli.settings.as_deref(), &profile, &diet, json),
        Command::Targets { profile, json } => cmd_targets(&profile, json),
        Command::Project { plan_kcal, tdee } => cmd_project(plan_kcal, tdee),
        Command::Foods { diet, find } => cmd_foods(&cli.catalog, diet.as_deref(), find.as_deref()),
    }
}

/// Non-interactive runs (JSON output) must get every field on the command line.
fn resolve_profile(args: &ProfileArgs, json: bool) -> Result<UserProfile> {
    if json {
        profile_from_args(args)?.ok_or_else(|| {
            PlanError::InvalidInput(
                "--json needs --sex, --age, --height, --weight, --activity and --goal".to_string(),
            )
        })
    } else {
        collect_profile(args)
    }
}

/// Compute targets and build a plan for the given profile and diet.
fn cmd_plan(
    catalog_path: &Path,
    settings_path: Option<&Path>,
    args: &ProfileArgs,
    diet: &str,
    json: bool,
) -> Result<()> {
    let store = catalog::init_global(catalog_path)?;
    let settings = match settings_path {
        Some(path) => PlannerSettings::load(path)?,
        None => PlannerSettings::default(),
    };

    let snapshot = store.snapshot();
    if !json {
        println!("Loaded {} foods", snapshot.len());
    }

    let profile = resolve_profile(args, json)?;
    let diet = DietType::from_label(diet);
    let report = plan_for_profile(snapshot.foods(), &profile, diet, &settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan_report_json(&report))?);
    } else {
        display_plan_report(&report);
    }

    Ok(())
}

/// Show targets without planning.
fn cmd_targets(args: &ProfileArgs, json: bool) -> Result<()> {
    let profile = resolve_profile(args, json)?;
    let targets = compute_targets(&profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&targets_json(&targets))?);
    } else {
        display_targets(&targets);
    }

    Ok(())
}

/// Project weekly weight change.
fn cmd_project(plan_kcal: f64, tdee: f64) -> Result<()> {
    let delta = project_weight_change(plan_kcal, tdee);
    println!("{:+.3} kg/week", delta);
    Ok(())
}

/// List or look up catalog foods.
fn cmd_foods(catalog_path: &Path, diet: Option<&str>, find: Option<&str>) -> Result<()> {
    let store = catalog::init_global(catalog_path)?;
    let snapshot = store.snapshot();

    if let Some(name) = find {
        match snapshot.find_closest(name) {
            Some(food) => display_food_list(&[food], "Match"),
            None => println!("No food matching '{}'", name),
        }
        return Ok(());
    }

    let (foods, title): (Vec<&FoodItem>, String) = match diet {
        Some(label) => {
            let diet = DietType::from_label(label);
            (
                filter_foods(snapshot.foods(), diet),
                format!("Foods allowed for {}", diet),
            )
        }
        None => (snapshot.foods().iter().collect(), "All foods".to_string()),
    };
    display_food_list(&foods, &title);

    let degenerate = snapshot.degenerate_rows();
    if !degenerate.is_empty() {
        display_food_list(&degenerate, "Degenerate rows (zero kcal or negative values)");
    }

    Ok(())
}
