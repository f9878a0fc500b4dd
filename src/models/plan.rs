use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::pantry::{MealCategory, NutritionPer100g, Unit};

/// Calories and macros, used both as a target and as an accumulated amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroTargets {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Every field multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    pub fn is_non_negative(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }
}

impl Add for MacroTargets {
    type Output = MacroTargets;

    fn add(self, rhs: MacroTargets) -> MacroTargets {
        MacroTargets {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for MacroTargets {
    fn add_assign(&mut self, rhs: MacroTargets) {
        *self = *self + rhs;
    }
}

/// One line of a meal: how much of a pantry item to eat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub pantry_item_id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub nutrition: NutritionPer100g,
    pub actual_nutrition: MacroTargets,
}

/// The allocation for one meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub category: MealCategory,
    pub items: Vec<MealItem>,
    pub method: String,
    pub total_nutrition: MacroTargets,
    /// Set by consumption tracking, never by the planner.
    pub consumed: bool,
}

/// Output of one Day Allocator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResult {
    pub meals: Vec<Meal>,
    pub total_nutrition: MacroTargets,
    pub calorie_gap: f64,
}

/// Single-day plan for callers that do not need the whole week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub meals: Vec<Meal>,
    pub total_nutrition: MacroTargets,
    pub warnings: Vec<String>,
}

/// Day of the planning week. Ordering is Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Zero-based position in the week (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Weekday of a calendar date. The caller decides what "today" is.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::ALL[date.weekday().num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A 7-day plan keyed by weekday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub meals: BTreeMap<Weekday, Vec<Meal>>,
    pub total_nutrition: BTreeMap<Weekday, MacroTargets>,
    pub calorie_gaps: BTreeMap<Weekday, f64>,
    pub warnings: Vec<String>,
}

impl WeeklyPlan {
    /// Sum of all daily calorie gaps.
    pub fn total_gap(&self) -> f64 {
        self.calorie_gaps.values().sum()
    }

    pub fn meals_for(&self, day: Weekday) -> &[Meal] {
        self.meals.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories that have a meal on `day`, in slot order.
    pub fn categories_for(&self, day: Weekday) -> Vec<MealCategory> {
        self.meals_for(day).iter().map(|m| m.category).collect()
    }
}
