use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// VitaPlan — builds a daily food plan that approximates your calorie and macro targets.
#[derive(Parser, Debug)]
#[command(name = "vita_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV.
    #[arg(short, long, default_value = "data/food_table.csv")]
    pub catalog: PathBuf,

    /// Optional planner settings JSON (fields not given keep their defaults).
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Log planner decisions (debug level).
    #[arg(short, long)]
    pub verbose: bool,
}

/// User attributes. Anything left out is asked for interactively.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// male | female
    #[arg(long)]
    pub sex: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Height in centimetres.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// sedentary | light | moderate | active | very_active
    #[arg(long)]
    pub activity: Option<String>,

    /// loss | maintain | gain
    #[arg(long)]
    pub goal: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute targets and build a food plan.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// veg | vegegg | vegan | nonveg
        #[arg(long, default_value = "veg")]
        diet: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show TDEE, calorie target and macro grams only.
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Project weekly weight change for a daily intake.
    Project {
        /// Planned daily intake in kcal.
        #[arg(long)]
        plan_kcal: f64,

        /// Total daily energy expenditure in kcal.
        #[arg(long)]
        tdee: f64,
    },

    /// List catalog foods, optionally filtered by diet or looked up by name.
    Foods {
        /// Only show foods allowed by this diet type.
        #[arg(long)]
        diet: Option<String>,

        /// Look up a single food (fuzzy match).
        #[arg(long)]
        find: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: ProfileArgs::default(),
            diet: "veg".to_string(),
            json: false,
        }
    }
}
