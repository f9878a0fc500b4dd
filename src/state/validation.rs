use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::models::{PantryItem, Profile};

/// Reject pantry records the planner must never see.
///
/// A count-based item without a piece weight is accepted (the planner falls
/// back to 100 g per piece) but reported.
pub fn validate_pantry_item(item: &PantryItem) -> Result<()> {
    let invalid = |reason: &str| PlannerError::InvalidPantryItem {
        id: item.id.clone(),
        reason: reason.to_string(),
    };

    if item.id.trim().is_empty() {
        return Err(invalid("empty id"));
    }
    if item.name.trim().is_empty() {
        return Err(invalid("empty name"));
    }
    if !item.quantity.is_finite() || item.quantity < 0.0 {
        return Err(invalid("quantity must be a non-negative number"));
    }
    if !item.is_valid() {
        return Err(invalid("nutrition values must be non-negative"));
    }

    if item.unit.is_count() && !item.has_piece_weight() {
        warn!(
            item = %item.name,
            "count-based item has no piece weight; 100 g per piece will be assumed"
        );
    }

    Ok(())
}

pub fn validate_profile(profile: &Profile) -> Result<()> {
    if !profile.is_valid() {
        return Err(PlannerError::InvalidConfig(
            "targets must be non-negative and workout frequency at most 14".to_string(),
        ));
    }
    profile.planner.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealCategory, NutritionPer100g, Unit};

    fn item() -> PantryItem {
        PantryItem {
            id: "1".to_string(),
            name: "Mandorle".to_string(),
            categories: vec![MealCategory::AfternoonSnack],
            unit: Unit::G,
            quantity: 200.0,
            nutrition_per_100g: NutritionPer100g {
                calories: 579.0,
                protein: 21.0,
                carbs: 22.0,
                fat: 50.0,
                ..Default::default()
            },
            nutri_score: None,
            piece_weight: None,
        }
    }

    #[test]
    fn test_valid_item_passes() {
        assert!(validate_pantry_item(&item()).is_ok());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut bad = item();
        bad.quantity = -5.0;
        let err = validate_pantry_item(&bad).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidPantryItem { .. }));
    }

    #[test]
    fn test_negative_nutrition_rejected() {
        let mut bad = item();
        bad.nutrition_per_100g.fat = -1.0;
        assert!(validate_pantry_item(&bad).is_err());
    }

    #[test]
    fn test_missing_piece_weight_is_not_an_error() {
        let mut pieces = item();
        pieces.unit = Unit::Pz;
        assert!(validate_pantry_item(&pieces).is_ok());
    }
}
