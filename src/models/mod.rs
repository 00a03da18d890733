pub mod food;
pub mod nutrients;
pub mod plan;
pub mod profile;

pub use food::FoodItem;
pub use nutrients::{NutrientTargets, Nutrients, round_to};
pub use plan::{Pick, PlanResult};
pub use profile::{ActivityLevel, DietType, Goal, Sex, UserProfile};
