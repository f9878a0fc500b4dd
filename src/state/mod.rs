mod manager;
mod persistence;
mod validation;

pub use manager::VirtualPantry;
pub use persistence::{load_pantry, load_profile, save_pantry};
pub use validation::{validate_pantry_item, validate_profile};
