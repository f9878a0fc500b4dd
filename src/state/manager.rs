use std::collections::{HashMap, HashSet};

use crate::models::{MealCategory, PantryItem};

/// Working copy of the pantry whose quantities are depleted during planning.
///
/// Items keep their original order, which is the ranking tie-breaker. The
/// real pantry is never touched.
#[derive(Debug, Clone)]
pub struct VirtualPantry {
    items: Vec<PantryItem>,
    /// Item id to position in `items`.
    index: HashMap<String, usize>,
    /// Positions already reported as using the default piece weight.
    fallback_reported: HashSet<usize>,
}

impl VirtualPantry {
    /// Clone `items` into a fresh working copy.
    pub fn new(items: &[PantryItem]) -> Self {
        let items = items.to_vec();
        let mut index = HashMap::new();
        for (pos, item) in items.iter().enumerate() {
            index.entry(item.id.clone()).or_insert(pos);
        }
        Self {
            items,
            index,
            fallback_reported: HashSet::new(),
        }
    }

    /// Item at `pos`.
    pub fn item(&self, pos: usize) -> &PantryItem {
        &self.items[pos]
    }

    /// Get an item by id.
    pub fn get(&self, id: &str) -> Option<&PantryItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Live quantity of an item by id (0 if unknown).
    pub fn quantity_of(&self, id: &str) -> f64 {
        self.get(id).map(|item| item.quantity).unwrap_or(0.0)
    }

    /// Positions of items that may be served in `category`, in pantry order.
    pub fn eligible(&self, category: MealCategory) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_eligible_for(category))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Take up to `quantity` of the item at `pos`.
    ///
    /// Returns the amount actually taken; stock never goes below zero.
    pub fn consume(&mut self, pos: usize, quantity: f64) -> f64 {
        let item = &mut self.items[pos];
        let taken = quantity.clamp(0.0, item.quantity);
        item.quantity -= taken;
        taken
    }

    /// Hand back the depleted items as plain values.
    pub fn into_items(self) -> Vec<PantryItem> {
        self.items
    }

    /// True the first time the item at `pos` is served on the default piece
    /// weight during this run.
    pub fn first_fallback_use(&mut self, pos: usize) -> bool {
        self.fallback_reported.insert(pos)
    }
}
