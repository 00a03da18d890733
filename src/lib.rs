pub mod catalog;
pub mod cli;
pub mod error;
pub mod evaluation;
pub mod interface;
pub mod models;
pub mod planner;

pub use catalog::{Catalog, CatalogStore};
pub use error::{PlanError, Result};
pub use models::{DietType, FoodItem, NutrientTargets, Nutrients, Pick, PlanResult, UserProfile};
pub use planner::{PlanReport, PlannerSettings, plan, plan_for_profile};
