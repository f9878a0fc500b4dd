//! Unit conversion and nutrition scaling.
//!
//! All nutrition shown to the user goes through [`round_macros`] so that meal
//! and day totals stay consistent with their line items.

use crate::models::{MacroTargets, NutritionPer100g, PantryItem};

/// Grams represented by `quantity` of `item`.
///
/// Mass and volume pass through 1:1; pieces use the item's piece weight
/// (or the logged 100 g fallback).
pub fn convert_to_grams(item: &PantryItem, quantity: f64) -> f64 {
    if item.unit.is_count() {
        quantity * item.piece_weight_or_default()
    } else {
        quantity
    }
}

/// Nutrition for `grams` of a food, rounded for display.
pub fn scale_nutrition(per_100g: &NutritionPer100g, grams: f64) -> MacroTargets {
    let multiplier = grams / 100.0;
    round_macros(&MacroTargets {
        calories: per_100g.calories * multiplier,
        protein: per_100g.protein * multiplier,
        carbs: per_100g.carbs * multiplier,
        fat: per_100g.fat * multiplier,
    })
}

/// Nutrition for `quantity` (in the item's unit) of `item`.
pub fn item_nutrition(item: &PantryItem, quantity: f64) -> MacroTargets {
    scale_nutrition(&item.nutrition_per_100g, convert_to_grams(item, quantity))
}

/// Round to one decimal place.
#[inline]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calories to whole kcal, macros to one decimal.
pub fn round_macros(m: &MacroTargets) -> MacroTargets {
    MacroTargets {
        calories: m.calories.round(),
        protein: round_one_decimal(m.protein),
        carbs: round_one_decimal(m.carbs),
        fat: round_one_decimal(m.fat),
    }
}

/// Rounded sum of several nutrition values.
pub fn sum_rounded<'a, I>(values: I) -> MacroTargets
where
    I: IntoIterator<Item = &'a MacroTargets>,
{
    let total = values
        .into_iter()
        .fold(MacroTargets::default(), |acc, m| acc + *m);
    round_macros(&total)
}
