pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan_csv, write_plan_csv_file};
pub use prompts::{prompt_pantry_item, prompt_piece_weight, prompt_yes_no};
pub use render::{display_day_plan, display_remaining, display_weekly_plan};
