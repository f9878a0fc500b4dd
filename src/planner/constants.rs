use crate::models::MealCategory;

// ─────────────────────────────────────────────────────────────────────────────
// Daily calorie split across meal slots
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_SHARE: f64 = 0.22;
pub const MORNING_SNACK_SHARE: f64 = 0.08;
pub const LUNCH_SHARE: f64 = 0.30;
pub const AFTERNOON_SNACK_SHARE: f64 = 0.08;
pub const DINNER_SHARE: f64 = 0.27;

/// Only applies on workout days; the shares then sum to 1.0.
pub const POST_WORKOUT_SHARE: f64 = 0.05;

/// Fraction of a day's targets assigned to `category`.
pub fn slot_share(category: MealCategory, is_workout_day: bool) -> f64 {
    match category {
        MealCategory::Breakfast => BREAKFAST_SHARE,
        MealCategory::MorningSnack => MORNING_SNACK_SHARE,
        MealCategory::Lunch => LUNCH_SHARE,
        MealCategory::AfternoonSnack => AFTERNOON_SNACK_SHARE,
        MealCategory::Dinner => DINNER_SHARE,
        MealCategory::PostWorkout if is_workout_day => POST_WORKOUT_SHARE,
        MealCategory::PostWorkout => 0.0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Allocation
// ─────────────────────────────────────────────────────────────────────────────

/// A slot stops taking items once this fraction of its calories is met.
pub const DEFAULT_EARLY_EXIT_RATIO: f64 = 0.85;

/// Smallest mass/volume line the allocator emits (g or ml).
pub const MIN_MASS_PORTION: f64 = 5.0;

/// Mass/volume portions are rounded to multiples of this step.
pub const MASS_ROUNDING_STEP: f64 = 5.0;

/// Smallest count line the allocator emits.
pub const MIN_PIECES: f64 = 1.0;

/// Sizing assumes this many kcal/100 g for items labelled 0 kcal.
pub const ZERO_CALORIE_SIZING_FALLBACK: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Shortfall warnings
// ─────────────────────────────────────────────────────────────────────────────

/// Weekly gap above which the aggregate warning is raised.
pub const WEEKLY_GAP_WARNING_KCAL: f64 = 500.0;

/// Per-day gap above which a day is named in the warnings.
pub const DAILY_GAP_WARNING_KCAL: f64 = 300.0;

/// Gap threshold for the single-day helper.
pub const SINGLE_DAY_GAP_WARNING_KCAL: f64 = 200.0;
