pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, profile_from_args, prompt_activity, prompt_age, prompt_goal, prompt_number,
    prompt_sex,
};
pub use render::{
    display_food_list, display_plan, display_plan_report, display_targets, plan_json,
    plan_report_json, targets_json,
};
