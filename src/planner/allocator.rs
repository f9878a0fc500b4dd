use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::models::{DayResult, MacroTargets, Meal, MealCategory, MealItem, PantryItem};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::{
    MIN_MASS_PORTION, MIN_PIECES, ZERO_CALORIE_SIZING_FALLBACK, slot_share,
};
use crate::planner::narrator::describe;
use crate::planner::nutrition::{item_nutrition, round_macros, sum_rounded};
use crate::planner::portions::{max_portion, round_quantity};
use crate::state::VirtualPantry;

/// Targets for one meal slot: each daily macro times the slot share, rounded.
pub fn slot_targets(
    daily: &MacroTargets,
    category: MealCategory,
    is_workout_day: bool,
) -> MacroTargets {
    let share = daily.scaled(slot_share(category, is_workout_day));
    MacroTargets {
        calories: share.calories.round(),
        protein: share.protein.round(),
        carbs: share.carbs.round(),
        fat: share.fat.round(),
    }
}

/// Eligible items for `category`, best protein density first.
///
/// Ties keep pantry order.
pub fn rank_candidates(pantry: &VirtualPantry, category: MealCategory) -> Vec<usize> {
    let mut candidates = pantry.eligible(category);
    candidates.sort_by(|&a, &b| {
        let density_a = pantry.item(a).nutrition_per_100g.protein_density();
        let density_b = pantry.item(b).nutrition_per_100g.protein_density();
        density_b.partial_cmp(&density_a).unwrap_or(Ordering::Equal)
    });
    candidates
}

/// How much of `item` to serve toward `calories_needed`.
///
/// Capped by the realistic portion and by `available`; never more than
/// `available`, never zero while stock remains.
pub fn portion_for(item: &PantryItem, calories_needed: f64, available: f64) -> f64 {
    let calories_per_100 = if item.nutrition_per_100g.calories > 0.0 {
        item.nutrition_per_100g.calories
    } else {
        ZERO_CALORIE_SIZING_FALLBACK
    };
    let cap = max_portion(&item.name, item.unit);

    let quantity = if item.unit.is_count() {
        let calories_per_piece = calories_per_100 * item.piece_weight_or_default() / 100.0;
        let desired = (calories_needed / calories_per_piece).ceil();
        desired.min(cap).min(available).max(MIN_PIECES)
    } else {
        let desired = calories_needed / calories_per_100 * 100.0;
        round_quantity(desired.min(cap).min(available), item.unit).max(MIN_MASS_PORTION)
    };

    // Rounding and minimum portions may exceed a small remainder.
    quantity.min(available)
}

/// Fill one meal slot from the pantry, depleting it as items are taken.
///
/// Returns `None` when nothing could be served.
fn fill_slot(
    pantry: &mut VirtualPantry,
    category: MealCategory,
    target: &MacroTargets,
    config: &PlannerConfig,
) -> Option<Meal> {
    let candidates = rank_candidates(pantry, category);
    if candidates.is_empty() {
        debug!(slot = %category, "no eligible items, slot skipped");
        return None;
    }

    let stop_at = target.calories * config.early_exit_ratio;
    let mut items: Vec<MealItem> = Vec::new();
    let mut accumulated = MacroTargets::default();

    for pos in candidates {
        if accumulated.calories >= stop_at {
            break;
        }

        // An earlier slot or day may have used it up
        let available = pantry.item(pos).quantity;
        if available <= 0.0 {
            continue;
        }

        let item = pantry.item(pos);
        let calories_needed = target.calories - accumulated.calories;
        let quantity = portion_for(item, calories_needed, available);
        if quantity <= 0.0 {
            continue;
        }

        let actual_nutrition = item_nutrition(item, quantity);
        let uses_fallback = item.unit.is_count() && !item.has_piece_weight();
        debug!(
            slot = %category,
            item = %item.name,
            quantity,
            unit = %item.unit,
            kcal = actual_nutrition.calories,
            "item allocated"
        );

        let line = MealItem {
            pantry_item_id: item.id.clone(),
            name: item.name.clone(),
            quantity,
            unit: item.unit,
            nutrition: item.nutrition_per_100g,
            actual_nutrition,
        };

        // Validation already warned on load; repeat at most once per run
        if uses_fallback && pantry.first_fallback_use(pos) {
            warn!(
                item = %line.name,
                "no piece weight recorded, nutrition assumes 100 g per piece"
            );
        }

        items.push(line);
        accumulated += actual_nutrition;

        pantry.consume(pos, quantity);
    }

    if items.is_empty() {
        return None;
    }

    Some(Meal {
        category,
        method: describe(&items, category),
        total_nutrition: round_macros(&accumulated),
        items,
        consumed: false,
    })
}

/// Allocate one day of meals from `pantry`.
///
/// Slots are filled in fixed order and each one depletes the pantry before
/// the next is considered, so the caller must pass the pantry state left by
/// the previous day.
pub fn allocate_day(
    pantry: &mut VirtualPantry,
    daily_targets: &MacroTargets,
    is_workout_day: bool,
    config: &PlannerConfig,
) -> DayResult {
    let mut meals = Vec::new();

    for category in MealCategory::ALL {
        if slot_share(category, is_workout_day) == 0.0 {
            continue;
        }

        let target = slot_targets(daily_targets, category, is_workout_day);
        if let Some(meal) = fill_slot(pantry, category, &target, config) {
            meals.push(meal);
        }
    }

    let total_nutrition = sum_rounded(meals.iter().map(|m| &m.total_nutrition));
    let calorie_gap = (daily_targets.calories - total_nutrition.calories).max(0.0);

    DayResult {
        meals,
        total_nutrition,
        calorie_gap,
    }
}
