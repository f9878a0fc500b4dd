use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{PlannerError, Result};
use crate::models::{MealCategory, NutritionPer100g, PantryItem, Unit};
use crate::planner::nutri_score;
use crate::planner::portions::{default_piece_weight, suggested_piece_weights};

fn prompt_number(prompt: &str, default: Option<f64>) -> Result<f64> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    let text = input.interact_text()?;

    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", text)))?;
    if value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be non-negative",
            prompt.trim()
        )));
    }
    Ok(value)
}

/// Prompt for the grams per piece, pre-filled from known foods.
pub fn prompt_piece_weight(name: &str) -> Result<f64> {
    let suggestions = suggested_piece_weights(name);
    if !suggestions.is_empty() {
        println!("Known piece weights:");
        for (key, grams) in &suggestions {
            println!("  {} - {} g", key, grams);
        }
    }

    let weight = prompt_number("Grams per piece", default_piece_weight(name))?;
    if weight <= 0.0 {
        return Err(PlannerError::InvalidInput(
            "piece weight must be positive".to_string(),
        ));
    }
    Ok(weight)
}

fn prompt_nutrition() -> Result<NutritionPer100g> {
    println!("Nutrition per 100 g / 100 ml:");
    Ok(NutritionPer100g {
        calories: prompt_number("  kcal", None)?,
        protein: prompt_number("  protein (g)", None)?,
        carbs: prompt_number("  carbs (g)", None)?,
        fat: prompt_number("  fat (g)", None)?,
        sugar: prompt_number("  sugar (g)", Some(0.0))?,
        salt: prompt_number("  salt (g)", Some(0.0))?,
    })
}

/// Collect a new pantry item from the user.
///
/// `next_id` becomes the item's id.
pub fn prompt_pantry_item(next_id: String) -> Result<PantryItem> {
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(PlannerError::InvalidInput("name cannot be empty".to_string()));
    }

    let units = [Unit::G, Unit::Ml, Unit::Pz];
    let unit_idx = Select::new()
        .with_prompt("Unit")
        .items(&["grams (g)", "millilitres (ml)", "pieces (pz)"])
        .default(0)
        .interact()?;
    let unit = units[unit_idx];

    let piece_weight = if unit.is_count() {
        Some(prompt_piece_weight(&name)?)
    } else {
        None
    };

    let quantity = prompt_number(&format!("Quantity on hand ({})", unit), None)?;

    let labels: Vec<&str> = MealCategory::ALL.iter().map(|c| c.label()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Meals it fits (space to toggle)")
        .items(&labels)
        .interact()?;
    let categories: Vec<MealCategory> = picked.into_iter().map(|i| MealCategory::ALL[i]).collect();

    let nutrition_per_100g = prompt_nutrition()?;
    let nutri_score = nutri_score::grade_if_known(&nutrition_per_100g);

    Ok(PantryItem {
        id: next_id,
        name,
        categories,
        unit,
        quantity,
        nutrition_per_100g,
        nutri_score,
        piece_weight,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
