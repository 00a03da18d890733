use dialoguer::{Input, Select};

use crate::cli::ProfileArgs;
use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Goal, Sex, UserProfile};

/// Prompt for biological sex.
pub fn prompt_sex() -> Result<Sex> {
    let options = ["male", "female"];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;
    Ok(Sex::from_label(options[selection]))
}

/// Prompt for a positive number with a default.
pub fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", input)))?;

    require_positive(prompt, value)
}

/// Reject zero, negative and non-finite body measurements.
fn require_positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(value)
}

/// Prompt for age in whole years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a valid age", input)))
}

/// Prompt for activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let options = ActivityLevel::ALL.map(|a| a.label());
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(2) // moderate
        .interact()?;
    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for goal.
pub fn prompt_goal() -> Result<Goal> {
    let options = Goal::ALL.map(|g| g.label());
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(1) // maintain
        .interact()?;
    Ok(Goal::ALL[selection])
}

/// Build a profile from command-line values, prompting for whatever is missing.
pub fn collect_profile(args: &ProfileArgs) -> Result<UserProfile> {
    let sex = match &args.sex {
        Some(label) => Sex::from_label(label),
        None => prompt_sex()?,
    };
    let age = match args.age {
        Some(age) => age,
        None => prompt_age()?,
    };
    let height_cm = match args.height {
        Some(h) => require_positive("--height", h)?,
        None => prompt_number("Height (cm)", "170")?,
    };
    let weight_kg = match args.weight {
        Some(w) => require_positive("--weight", w)?,
        None => prompt_number("Weight (kg)", "70")?,
    };
    let activity = match &args.activity {
        Some(label) => ActivityLevel::from_label(label),
        None => prompt_activity()?,
    };
    let goal = match &args.goal {
        Some(label) => Goal::from_label(label),
        None => prompt_goal()?,
    };

    Ok(UserProfile {
        sex,
        age,
        height_cm,
        weight_kg,
        activity,
        goal,
    })
}

/// Profile from command-line values alone.
///
/// `Ok(None)` if any field is missing; an error if a measurement is not positive.
pub fn profile_from_args(args: &ProfileArgs) -> Result<Option<UserProfile>> {
    let (Some(sex), Some(age), Some(height), Some(weight), Some(activity), Some(goal)) = (
        args.sex.as_deref(),
        args.age,
        args.height,
        args.weight,
        args.activity.as_deref(),
        args.goal.as_deref(),
    ) else {
        return Ok(None);
    };

    Ok(Some(UserProfile {
        sex: Sex::from_label(sex),
        age,
        height_cm: require_positive("--height", height)?,
        weight_kg: require_positive("--weight", weight)?,
        activity: ActivityLevel::from_label(activity),
        goal: Goal::from_label(goal),
    }))
}
