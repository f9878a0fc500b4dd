use crate::models::{MealCategory, MealItem};

const EGG_KEYWORDS: &[&str] = &["uovo", "uova"];
const YOGURT_KEYWORDS: &[&str] = &["yogurt"];
/// Checked before proteins: a pasta dish with chicken is narrated as pasta.
const CARB_KEYWORDS: &[&str] = &["pasta", "riso"];
const PROTEIN_KEYWORDS: &[&str] = &["pollo", "carne", "pesce"];

fn matches_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}

/// Names of the items that do not match `keywords`.
fn others(names: &[String], keywords: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter(|n| !matches_any(n, keywords))
        .cloned()
        .collect()
}

fn with_sides(lead: String, sides: &[String], joiner: &str) -> String {
    if sides.is_empty() {
        format!("{}.", lead)
    } else {
        format!("{} {} {}.", lead, joiner, sides.join(", "))
    }
}

/// Write a short preparation note for a meal.
///
/// Returns an empty string when there are no items.
pub fn describe(items: &[MealItem], category: MealCategory) -> String {
    if items.is_empty() {
        return String::new();
    }

    let names: Vec<String> = items.iter().map(|i| i.name.to_lowercase()).collect();

    match category {
        MealCategory::Breakfast => {
            if names.iter().any(|n| matches_any(n, EGG_KEYWORDS)) {
                with_sides(
                    "Cook the eggs to taste".to_string(),
                    &others(&names, EGG_KEYWORDS),
                    "and serve with",
                )
            } else if names.iter().any(|n| matches_any(n, YOGURT_KEYWORDS)) {
                with_sides(
                    "Pour the yogurt into a bowl".to_string(),
                    &others(&names, YOGURT_KEYWORDS),
                    "and top with",
                )
            } else {
                format!("Prepare breakfast with: {}.", names.join(", "))
            }
        }
        MealCategory::Lunch | MealCategory::Dinner => {
            if let Some(carb) = names.iter().find(|n| matches_any(n, CARB_KEYWORDS)) {
                let sides: Vec<String> = names.iter().filter(|n| *n != carb).cloned().collect();
                with_sides(format!("Boil the {} in salted water", carb), &sides, "and dress with")
            } else if let Some(protein) = names.iter().find(|n| matches_any(n, PROTEIN_KEYWORDS)) {
                let sides: Vec<String> =
                    names.iter().filter(|n| *n != protein).cloned().collect();
                with_sides(format!("Pan-cook the {}", protein), &sides, "and serve with")
            } else {
                format!("Put the meal together with: {}.", names.join(", "))
            }
        }
        MealCategory::MorningSnack | MealCategory::AfternoonSnack | MealCategory::PostWorkout => {
            format!("Quick snack: {}.", names.join(" + "))
        }
    }
}
