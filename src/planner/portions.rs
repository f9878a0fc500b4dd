//! Realistic portion caps and piece-weight defaults.
//!
//! Both tables are priority lists: the first keyword contained in the food
//! name wins, so entry order matters.

use std::cmp::Ordering;

use strsim::jaro_winkler;

use crate::models::Unit;
use crate::planner::constants::{MASS_ROUNDING_STEP, MIN_MASS_PORTION, MIN_PIECES};

/// Largest serving per meal, in grams (or pieces for count-based foods).
pub const MAX_PORTIONS: &[(&str, f64)] = &[
    // Dairy
    ("yogurt", 200.0),
    ("latte", 250.0),
    ("formaggio", 50.0),
    ("mozzarella", 125.0),
    ("ricotta", 100.0),
    // Proteins
    ("pollo", 200.0),
    ("tacchino", 200.0),
    ("manzo", 180.0),
    ("maiale", 180.0),
    ("vitello", 180.0),
    ("pesce", 200.0),
    ("salmone", 180.0),
    ("tonno", 150.0),
    ("uova", 3.0),
    ("uovo", 2.0),
    // Carbs, dry weight
    ("pasta", 120.0),
    ("riso", 100.0),
    ("pane", 80.0),
    ("farro", 100.0),
    ("orzo", 100.0),
    ("quinoa", 80.0),
    ("avena", 60.0),
    ("cereali", 50.0),
    // Vegetables and starches
    ("patate", 250.0),
    ("patata", 250.0),
    ("verdura", 300.0),
    ("insalata", 150.0),
    ("pomodori", 200.0),
    ("zucchine", 250.0),
    ("broccoli", 200.0),
    ("spinaci", 150.0),
    // Fruit
    ("frutta", 200.0),
    ("mela", 1.0),
    ("banana", 1.0),
    ("arancia", 1.0),
    ("pera", 1.0),
    ("kiwi", 2.0),
    // Nuts and seeds
    ("noci", 30.0),
    ("mandorle", 30.0),
    ("nocciole", 30.0),
    ("arachidi", 40.0),
    // Fats
    ("olio", 15.0),
    ("burro", 15.0),
];

/// Cap for mass/volume foods not in [`MAX_PORTIONS`].
pub const DEFAULT_MAX_GRAMS: f64 = 300.0;

/// Cap for count-based foods not in [`MAX_PORTIONS`].
pub const DEFAULT_MAX_PIECES: f64 = 3.0;

/// Typical grams per piece, used to pre-fill new pantry items.
pub const DEFAULT_PIECE_WEIGHTS: &[(&str, f64)] = &[
    // Eggs
    ("uovo", 55.0),
    ("uova", 55.0),
    ("albume", 33.0),
    ("tuorlo", 17.0),
    // Fruit
    ("mela", 150.0),
    ("banana", 120.0),
    ("arancia", 180.0),
    ("pera", 160.0),
    ("pesca", 150.0),
    ("kiwi", 80.0),
    ("mandarino", 70.0),
    ("limone", 60.0),
    ("fragola", 15.0),
    ("ciliegia", 8.0),
    ("albicocca", 40.0),
    ("prugna", 50.0),
    ("fico", 40.0),
    ("melograno", 250.0),
    ("avocado", 200.0),
    // Vegetables
    ("pomodoro", 120.0),
    ("cetriolo", 200.0),
    ("carota", 80.0),
    ("zucchina", 200.0),
    ("peperone", 150.0),
    ("melanzana", 300.0),
    ("patata", 150.0),
    ("cipolla", 100.0),
    ("aglio", 5.0),
    ("fungo", 20.0),
    // Bread and bakery
    ("fetta pane", 30.0),
    ("fetta di pane", 30.0),
    ("pane", 50.0),
    ("panino", 80.0),
    ("grissino", 10.0),
    ("cracker", 8.0),
    ("fetta biscottata", 10.0),
    ("fetta wasa", 12.0),
    ("wasa", 12.0),
    ("galletta", 10.0),
    ("galletta di riso", 10.0),
    // Proteins
    ("fetta prosciutto", 20.0),
    ("fetta di prosciutto", 20.0),
    ("fetta bresaola", 15.0),
    ("fetta di bresaola", 15.0),
    ("fetta salame", 10.0),
    ("würstel", 50.0),
    ("hamburger", 100.0),
    ("polpetta", 30.0),
    // Dairy
    ("sottiletta", 20.0),
    ("formaggino", 25.0),
    ("mozzarella", 125.0),
    ("yogurt", 125.0),
    // Snacks and sweets
    ("biscotto", 10.0),
    ("barretta", 30.0),
    ("barretta proteica", 60.0),
    ("cioccolatino", 10.0),
    ("quadretto cioccolato", 5.0),
    // Other
    ("cucchiaio olio", 10.0),
    ("cucchiaio", 15.0),
    ("cucchiaino", 5.0),
    ("noce", 5.0),
    ("mandorla", 1.2),
    ("arachide", 1.0),
];

/// Maximum realistic quantity of `name` for one meal, in `unit`.
pub fn max_portion(name: &str, unit: Unit) -> f64 {
    let name = name.to_lowercase();

    MAX_PORTIONS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, max)| *max)
        .unwrap_or(if unit.is_count() {
            DEFAULT_MAX_PIECES
        } else {
            DEFAULT_MAX_GRAMS
        })
}

/// Round a portion to a servable amount.
///
/// Pieces round to the nearest whole piece (at least one); mass and volume
/// round to the nearest 5 (at least 5). Non-positive input yields 0.
pub fn round_quantity(quantity: f64, unit: Unit) -> f64 {
    if quantity <= 0.0 || quantity.is_nan() {
        return 0.0;
    }

    if unit.is_count() {
        quantity.round().max(MIN_PIECES)
    } else {
        ((quantity / MASS_ROUNDING_STEP).round() * MASS_ROUNDING_STEP).max(MIN_MASS_PORTION)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Typical weight of one piece of `name`, if known.
///
/// Exact match first, then the first table entry where either string contains
/// the other.
pub fn default_piece_weight(name: &str) -> Option<f64> {
    let name = normalize(name);
    if name.is_empty() {
        return None;
    }

    if let Some((_, weight)) = DEFAULT_PIECE_WEIGHTS.iter().find(|(key, _)| *key == name) {
        return Some(*weight);
    }

    DEFAULT_PIECE_WEIGHTS
        .iter()
        .find(|(key, _)| name.contains(key) || key.contains(name.as_str()))
        .map(|(_, weight)| *weight)
}

/// Up to five piece-weight suggestions for `name`, most similar first.
pub fn suggested_piece_weights(name: &str) -> Vec<(&'static str, f64)> {
    let name = normalize(name);
    if name.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(&'static str, f64, f64)> = DEFAULT_PIECE_WEIGHTS
        .iter()
        .filter(|(key, _)| key.contains(name.as_str()) || name.contains(key))
        .map(|(key, weight)| (*key, *weight, jaro_winkler(key, &name)))
        .collect();

    // Stable sort keeps table order among equally similar keys
    matches.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    matches
        .into_iter()
        .take(5)
        .map(|(key, weight, _)| (key, weight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_portion_first_keyword_wins() {
        assert_eq!(max_portion("Petto di Pollo", Unit::G), 200.0);
        assert_eq!(max_portion("Uovo", Unit::Pz), 2.0);
        assert_eq!(max_portion("Uova bio", Unit::Pz), 3.0);
        // "yogurt" precedes "latte" in the table
        assert_eq!(max_portion("Yogurt al latte", Unit::G), 200.0);
    }

    #[test]
    fn test_max_portion_unit_defaults() {
        assert_eq!(max_portion("Tofu", Unit::G), DEFAULT_MAX_GRAMS);
        assert_eq!(max_portion("Tofu", Unit::Ml), DEFAULT_MAX_GRAMS);
        assert_eq!(max_portion("Tofu", Unit::Pz), DEFAULT_MAX_PIECES);
    }

    #[test]
    fn test_round_quantity_pieces() {
        assert_eq!(round_quantity(2.4, Unit::Pz), 2.0);
        assert_eq!(round_quantity(2.5, Unit::Pz), 3.0);
        assert_eq!(round_quantity(0.2, Unit::Pz), 1.0);
    }

    #[test]
    fn test_round_quantity_mass() {
        assert_eq!(round_quantity(363.6, Unit::G), 365.0);
        assert_eq!(round_quantity(362.4, Unit::G), 360.0);
        assert_eq!(round_quantity(1.0, Unit::G), 5.0);
        assert_eq!(round_quantity(0.0, Unit::G), 0.0);
        assert_eq!(round_quantity(-3.0, Unit::Ml), 0.0);
    }

    #[test]
    fn test_default_piece_weight() {
        assert_eq!(default_piece_weight("  Uovo "), Some(55.0));
        assert_eq!(default_piece_weight("Mandorla tostata"), Some(1.2));
        // Partial match in the other direction
        assert_eq!(default_piece_weight("mandar"), Some(70.0));
        assert_eq!(default_piece_weight("tofu"), None);
        assert_eq!(default_piece_weight(""), None);
    }

    #[test]
    fn test_suggested_piece_weights() {
        let suggestions = suggested_piece_weights("fetta");
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);
        assert!(suggestions.iter().all(|(key, _)| key.contains("fetta")));

        assert!(suggested_piece_weights("tofu").is_empty());
    }
}
