pub mod pantry;
pub mod plan;
pub mod profile;

pub use pantry::{MealCategory, NutriScore, NutritionPer100g, PantryItem, Unit};
pub use plan::{DayPlan, DayResult, MacroTargets, Meal, MealItem, Weekday, WeeklyPlan};
pub use profile::Profile;
