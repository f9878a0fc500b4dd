use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SmartFit planner: turns the food you own into a week of meals.
#[derive(Parser, Debug)]
#[command(name = "smartfit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the pantry JSON file.
    #[arg(short, long, default_value = "pantry.json")]
    pub pantry: PathBuf,

    /// Path to the profile JSON file (daily targets, workout frequency).
    #[arg(long, default_value = "profile.json")]
    pub profile: PathBuf,

    /// Log planner decisions to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan seven days from the current pantry.
    Week {
        /// Workouts per week (overrides the profile).
        #[arg(long)]
        workouts: Option<u32>,

        /// Fraction of a slot's calories at which it stops taking items.
        #[arg(long)]
        early_exit: Option<f64>,

        /// Also write every meal line to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the plan as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Plan a single day.
    Day {
        /// Date to plan for (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// Fraction of a slot's calories at which it stops taking items.
        #[arg(long)]
        early_exit: Option<f64>,

        /// Print the plan as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Add an item to the pantry interactively.
    AddItem,

    /// Show the default piece weight for a food name.
    PieceWeight {
        /// Food name, e.g. "uovo" or "fetta di pane".
        name: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Week {
            workouts: None,
            early_exit: None,
            csv: None,
            json: false,
        }
    }
}
