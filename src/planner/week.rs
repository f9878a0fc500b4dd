use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use crate::models::{DayPlan, MacroTargets, PantryItem, Weekday, WeeklyPlan};
use crate::planner::allocator::allocate_day;
use crate::planner::config::PlannerConfig;
use crate::state::VirtualPantry;

/// Whether the day at `day_index` (Monday = 0) is a workout day.
///
/// The first `workout_frequency` days of the week train; frequencies of 7 or
/// more make every day a workout day.
pub fn is_workout_day(day_index: usize, workout_frequency: u32) -> bool {
    day_index < workout_frequency as usize
}

/// Plan seven days from one shared, progressively depleted pantry copy.
///
/// `pantry_items` is cloned once; the real pantry is never modified.
pub fn generate_weekly_plan(
    pantry_items: &[PantryItem],
    daily_targets: &MacroTargets,
    workout_frequency: u32,
    config: &PlannerConfig,
) -> WeeklyPlan {
    plan_week_with_remaining(pantry_items, daily_targets, workout_frequency, config).0
}

/// Like [`generate_weekly_plan`], also returning the stock left at week end.
pub fn plan_week_with_remaining(
    pantry_items: &[PantryItem],
    daily_targets: &MacroTargets,
    workout_frequency: u32,
    config: &PlannerConfig,
) -> (WeeklyPlan, Vec<PantryItem>) {
    let mut pantry = VirtualPantry::new(pantry_items);
    let mut plan = WeeklyPlan::default();

    for day in Weekday::ALL {
        let workout = is_workout_day(day.index(), workout_frequency);
        let result = allocate_day(&mut pantry, daily_targets, workout, config);

        info!(
            day = %day,
            workout,
            meals = result.meals.len(),
            kcal = result.total_nutrition.calories,
            gap = result.calorie_gap,
            "day planned"
        );

        plan.meals.insert(day, result.meals);
        plan.total_nutrition.insert(day, result.total_nutrition);
        plan.calorie_gaps.insert(day, result.calorie_gap);
    }

    plan.warnings = shortfall_warnings(&plan.calorie_gaps, config);

    (plan, pantry.into_items())
}

/// Aggregate warning first (if any), then one per short day in weekday order.
pub fn shortfall_warnings(gaps: &BTreeMap<Weekday, f64>, config: &PlannerConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    let total_gap: f64 = gaps.values().sum();
    if total_gap > config.weekly_gap_warning_kcal {
        warnings.push(format!(
            "Not enough stock for the week: about {} kcal missing in total.",
            total_gap.round()
        ));
    }

    for (day, gap) in gaps {
        if *gap > config.daily_gap_warning_kcal {
            warnings.push(format!(
                "{}: missing {} kcal - add more foods to the pantry",
                day,
                gap.round()
            ));
        }
    }

    warnings
}

/// Plan a single day from a fresh pantry copy.
pub fn generate_day_plan(
    pantry_items: &[PantryItem],
    daily_targets: &MacroTargets,
    is_workout_day: bool,
    config: &PlannerConfig,
) -> DayPlan {
    let mut pantry = VirtualPantry::new(pantry_items);
    let result = allocate_day(&mut pantry, daily_targets, is_workout_day, config);

    let mut warnings = Vec::new();
    if result.calorie_gap > config.single_day_gap_warning_kcal {
        warnings.push(format!(
            "Missing {} kcal - add more foods to the pantry",
            result.calorie_gap.round()
        ));
    }

    DayPlan {
        meals: result.meals,
        total_nutrition: result.total_nutrition,
        warnings,
    }
}

/// Plan the day `date` falls on, using the weekly workout-day rule.
pub fn generate_day_plan_for_date(
    pantry_items: &[PantryItem],
    daily_targets: &MacroTargets,
    date: NaiveDate,
    workout_frequency: u32,
    config: &PlannerConfig,
) -> DayPlan {
    let day = Weekday::from_date(date);
    let workout = is_workout_day(day.index(), workout_frequency);
    info!(%date, day = %day, workout, "planning single day");
    generate_day_plan(pantry_items, daily_targets, workout, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_n_days_are_workout_days() {
        let flags: Vec<bool> = (0..7).map(|i| is_workout_day(i, 3)).collect();
        assert_eq!(flags, vec![true, true, true, false, false, false, false]);

        assert!((0..7).all(|i| !is_workout_day(i, 0)));
        assert!((0..7).all(|i| is_workout_day(i, 14)));
    }

    #[test]
    fn test_warning_order_and_thresholds() {
        let config = PlannerConfig::default();
        let mut gaps = BTreeMap::new();
        for day in Weekday::ALL {
            gaps.insert(day, 0.0);
        }
        gaps.insert(Weekday::Wed, 350.4);
        gaps.insert(Weekday::Mon, 301.0);
        gaps.insert(Weekday::Sun, 300.0);

        let warnings = shortfall_warnings(&gaps, &config);
        assert_eq!(
            warnings,
            vec![
                "Not enough stock for the week: about 951 kcal missing in total.".to_string(),
                "Mon: missing 301 kcal - add more foods to the pantry".to_string(),
                "Wed: missing 350 kcal - add more foods to the pantry".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_warnings_below_thresholds() {
        let config = PlannerConfig::default();
        let gaps: BTreeMap<Weekday, f64> = Weekday::ALL.iter().map(|d| (*d, 70.0)).collect();
        // 490 kcal in total, no day above 300
        assert!(shortfall_warnings(&gaps, &config).is_empty());
    }

    #[test]
    fn test_date_maps_to_workout_rule() {
        use crate::models::{MealCategory, NutritionPer100g, Unit};

        let tofu = PantryItem {
            id: "t".to_string(),
            name: "Tofu".to_string(),
            categories: vec![MealCategory::PostWorkout],
            unit: Unit::G,
            quantity: 1000.0,
            nutrition_per_100g: NutritionPer100g {
                calories: 120.0,
                protein: 12.0,
                ..Default::default()
            },
            nutri_score: None,
            piece_weight: None,
        };
        let targets = MacroTargets::new(2000.0, 150.0, 200.0, 60.0);
        let config = PlannerConfig::default();
        let items = [tofu];

        // 2024-01-01 is a Monday, 2024-01-07 a Sunday
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

        let plan = generate_day_plan_for_date(&items, &targets, monday, 1, &config);
        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.meals[0].category, MealCategory::PostWorkout);

        let plan = generate_day_plan_for_date(&items, &targets, sunday, 6, &config);
        assert!(plan.meals.is_empty());
        assert_eq!(
            plan.warnings,
            vec!["Missing 2000 kcal - add more foods to the pantry".to_string()]
        );
    }
}
