use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{PantryItem, Profile};
use crate::planner::nutri_score;
use crate::state::validation::{validate_pantry_item, validate_profile};

/// Collapse duplicate ids: the last record wins but keeps the position of
/// the first, since pantry order breaks ranking ties.
fn dedupe_by_id(items: Vec<PantryItem>) -> Vec<PantryItem> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<PantryItem> = Vec::with_capacity(items.len());

    for item in items {
        match positions.get(&item.id) {
            Some(&pos) => out[pos] = item,
            None => {
                positions.insert(item.id.clone(), out.len());
                out.push(item);
            }
        }
    }

    out
}

/// Load and validate pantry items from a JSON file.
///
/// Records saved without a Nutri-Score get one computed from their label.
pub fn load_pantry<P: AsRef<Path>>(path: P) -> Result<Vec<PantryItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<PantryItem> = serde_json::from_str(&content)?;

    let mut items = dedupe_by_id(items);
    for item in &mut items {
        validate_pantry_item(item)?;
        if item.nutri_score.is_none() {
            item.nutri_score = nutri_score::grade_if_known(&item.nutrition_per_100g);
        }
    }

    Ok(items)
}

/// Save pantry items to a JSON file.
pub fn save_pantry<P: AsRef<Path>>(path: P, items: &[PantryItem]) -> Result<()> {
    let deduped = dedupe_by_id(items.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load and validate a profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&content)?;
    validate_profile(&profile)?;
    Ok(profile)
}
