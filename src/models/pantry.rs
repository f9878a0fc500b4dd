use std::fmt;

use serde::{Deserialize, Serialize};

/// Grams assumed per piece when a count-based item has no piece weight.
pub const FALLBACK_PIECE_WEIGHT: f64 = 100.0;

/// Unit an item's quantity is measured in.
///
/// Mass and volume are treated as gram-equivalent (1 ml = 1 g).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    G,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "pz")]
    Pz,
}

impl Unit {
    /// True for piece-counted units.
    #[inline]
    pub fn is_count(self) -> bool {
        matches!(self, Unit::Pz)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Ml => "ml",
            Unit::Pz => "pz",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// The six meal slots of a day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    #[serde(rename = "Breakfast", alias = "Colazione")]
    Breakfast,
    #[serde(rename = "Morning Snack", alias = "Spuntino Mattina")]
    MorningSnack,
    #[serde(rename = "Lunch", alias = "Pranzo")]
    Lunch,
    #[serde(rename = "Afternoon Snack", alias = "Spuntino Pomeriggio")]
    AfternoonSnack,
    #[serde(rename = "Dinner", alias = "Cena")]
    Dinner,
    #[serde(rename = "Post-Workout")]
    PostWorkout,
}

impl MealCategory {
    /// Slot processing order. Load-bearing: earlier slots deplete stock first.
    pub const ALL: [MealCategory; 6] = [
        MealCategory::Breakfast,
        MealCategory::MorningSnack,
        MealCategory::Lunch,
        MealCategory::AfternoonSnack,
        MealCategory::Dinner,
        MealCategory::PostWorkout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Breakfast",
            MealCategory::MorningSnack => "Morning Snack",
            MealCategory::Lunch => "Lunch",
            MealCategory::AfternoonSnack => "Afternoon Snack",
            MealCategory::Dinner => "Dinner",
            MealCategory::PostWorkout => "Post-Workout",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Nutrition label values, per 100 g (or 100 ml).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPer100g {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub salt: f64,
}

impl NutritionPer100g {
    /// Protein grams per kcal, guarded against zero-calorie items.
    #[inline]
    pub fn protein_density(&self) -> f64 {
        self.protein / self.calories.max(1.0)
    }
}

/// Nutri-Score letter as printed on the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutriScore {
    A,
    B,
    C,
    D,
    E,
}

impl fmt::Display for NutriScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            NutriScore::A => "A",
            NutriScore::B => "B",
            NutriScore::C => "C",
            NutriScore::D => "D",
            NutriScore::E => "E",
        };
        f.pad(letter)
    }
}

/// A food item the user owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub id: String,
    pub name: String,

    /// Meal slots this item may be served in.
    #[serde(default)]
    pub categories: Vec<MealCategory>,

    pub unit: Unit,

    /// On-hand amount, in `unit`.
    pub quantity: f64,

    pub nutrition_per_100g: NutritionPer100g,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutri_score: Option<NutriScore>,

    /// Grams per piece; only meaningful for count units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_weight: Option<f64>,
}

impl PantryItem {
    /// Whether this item may be served in `category` right now.
    pub fn is_eligible_for(&self, category: MealCategory) -> bool {
        self.quantity > 0.0 && self.categories.contains(&category)
    }

    /// Whether a usable piece weight is recorded.
    pub fn has_piece_weight(&self) -> bool {
        matches!(self.piece_weight, Some(w) if w > 0.0)
    }

    /// Grams per piece, falling back to [`FALLBACK_PIECE_WEIGHT`].
    ///
    /// The fallback can skew nutrition badly for small pieces (an almond is
    /// about 1.2 g); callers that rely on it should say so in the logs.
    pub fn piece_weight_or_default(&self) -> f64 {
        match self.piece_weight {
            Some(w) if w > 0.0 => w,
            _ => FALLBACK_PIECE_WEIGHT,
        }
    }

    /// Basic sanity check: non-negative amounts and label values.
    pub fn is_valid(&self) -> bool {
        let n = &self.nutrition_per_100g;
        !self.id.trim().is_empty()
            && self.quantity >= 0.0
            && n.calories >= 0.0
            && n.protein >= 0.0
            && n.carbs >= 0.0
            && n.fat >= 0.0
            && n.sugar >= 0.0
            && n.salt >= 0.0
    }
}
