pub mod allocator;
pub mod constants;
pub mod diet;
pub mod projection;
pub mod quantity;
pub mod ranking;
pub mod request;
pub mod settings;
pub mod targets;

pub use allocator::{Allocator, Phase};
pub use constants::*;
pub use diet::{filter_foods, is_allowed};
pub use projection::project_weight_change;
pub use quantity::{QuantityTargets, solve_grams};
pub use ranking::{MacroAxis, MacroDensity, RankedPools, rank_foods};
pub use request::{PlanReport, plan, plan_for_profile, plan_with_settings};
pub use settings::{GramRange, PlannerSettings};
pub use targets::{TargetReport, compute_targets, macro_split, target_calories};
