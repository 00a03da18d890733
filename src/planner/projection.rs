use crate::models::round_to;
use crate::planner::constants::KCAL_PER_KG_BODY_WEIGHT;

/// Projected body-weight change in kg over one week of eating `plan_kcal` a day.
///
/// Positive is gain. Rounded to grams.
pub fn project_weight_change(plan_kcal: f64, tdee: f64) -> f64 {
    let weekly_surplus = (plan_kcal - tdee) * 7.0;
    round_to(weekly_surplus / KCAL_PER_KG_BODY_WEIGHT, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficit_loses_weight() {
        // 550 kcal/day deficit -> 3850 kcal/week -> 0.5 kg
        assert_eq!(project_weight_change(1950.0, 2500.0), -0.5);
    }

    #[test]
    fn test_balance_is_zero() {
        assert_eq!(project_weight_change(2200.0, 2200.0), 0.0);
    }

    #[test]
    fn test_rounds_to_three_decimals() {
        // 100 * 7 / 7700 = 0.090909...
        assert_eq!(project_weight_change(2100.0, 2000.0), 0.091);
    }
}
