//! Simplified Nutri-Score grading from per-100 g label values.
//!
//! Each nutrient scores one point per threshold it exceeds. Saturated fat is
//! not on the label we store, so it is estimated as 40% of total fat.

use crate::models::{NutriScore, NutritionPer100g};

/// Energy thresholds in kcal (1 point each, max 10).
const ENERGY_KCAL: [f64; 10] = [
    80.0, 160.0, 240.0, 320.0, 400.0, 480.0, 560.0, 640.0, 720.0, 800.0,
];

/// Sugar thresholds in grams (max 10).
const SUGAR_G: [f64; 10] = [4.5, 9.0, 13.5, 18.0, 22.5, 27.0, 31.0, 36.0, 40.0, 45.0];

/// Saturated fat thresholds in grams (max 10).
const SATURATED_FAT_G: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// Salt thresholds in grams (max 10).
const SALT_G: [f64; 10] = [0.24, 0.48, 0.72, 0.96, 1.2, 1.44, 1.68, 1.92, 2.16, 2.4];

/// Protein thresholds in grams; these points count in the food's favour (max 5).
const PROTEIN_G: [f64; 5] = [1.6, 3.2, 4.8, 6.4, 8.0];

const SATURATED_FAT_SHARE: f64 = 0.4;

fn points(value: f64, thresholds: &[f64]) -> i32 {
    thresholds.iter().filter(|&&t| value > t).count() as i32
}

/// Negative points minus positive points; lower is healthier.
pub fn score(nutrition: &NutritionPer100g) -> i32 {
    let negative = points(nutrition.calories, &ENERGY_KCAL)
        + points(nutrition.sugar, &SUGAR_G)
        + points(nutrition.fat * SATURATED_FAT_SHARE, &SATURATED_FAT_G)
        + points(nutrition.salt, &SALT_G);
    let positive = points(nutrition.protein, &PROTEIN_G);
    negative - positive
}

/// Letter grade for a food's label values.
pub fn calculate(nutrition: &NutritionPer100g) -> NutriScore {
    match score(nutrition) {
        s if s <= -1 => NutriScore::A,
        s if s <= 2 => NutriScore::B,
        s if s <= 10 => NutriScore::C,
        s if s <= 18 => NutriScore::D,
        _ => NutriScore::E,
    }
}

/// Grade for an item being stored, or `None` when the label has no energy
/// value to grade.
pub fn grade_if_known(nutrition: &NutritionPer100g) -> Option<NutriScore> {
    if nutrition.calories > 0.0 {
        Some(calculate(nutrition))
    } else {
        None
    }
}
