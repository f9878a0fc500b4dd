pub mod allocator;
pub mod config;
pub mod constants;
pub mod narrator;
pub mod nutri_score;
pub mod nutrition;
pub mod portions;
pub mod week;

pub use allocator::{allocate_day, portion_for, rank_candidates, slot_targets};
pub use config::PlannerConfig;
pub use constants::*;
pub use narrator::describe;
pub use nutrition::{convert_to_grams, item_nutrition, round_macros, scale_nutrition};
pub use portions::{default_piece_weight, max_portion, round_quantity, suggested_piece_weights};
pub use week::{
    generate_day_plan, generate_day_plan_for_date, generate_weekly_plan, is_workout_day,
    plan_week_with_remaining, shortfall_warnings,
};
