use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;

use smartfit_planner_rs::cli::{Cli, Command};
use smartfit_planner_rs::error::{PlannerError, Result};
use smartfit_planner_rs::interface::{
    display_day_plan, display_remaining, display_weekly_plan, prompt_pantry_item, prompt_yes_no,
    write_plan_csv_file,
};
use smartfit_planner_rs::logging;
use smartfit_planner_rs::models::{PantryItem, Profile};
use smartfit_planner_rs::models::profile::MAX_WORKOUT_FREQUENCY;
use smartfit_planner_rs::planner::{
    PlannerConfig, default_piece_weight, generate_day_plan_for_date, plan_week_with_remaining,
    suggested_piece_weights,
};
use smartfit_planner_rs::state::{load_pantry, load_profile, save_pantry, validate_pantry_item};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Week {
            workouts,
            early_exit,
            csv,
            json,
        } => cmd_week(&cli.pantry, &cli.profile, workouts, early_exit, csv, json),
        Command::Day {
            date,
            early_exit,
            json,
        } => cmd_day(&cli.pantry, &cli.profile, date, early_exit, json),
        Command::AddItem => cmd_add_item(&cli.pantry),
        Command::PieceWeight { name } => {
            cmd_piece_weight(&name);
            Ok(())
        }
    }
}

/// Load pantry and profile, reporting missing files instead of failing.
fn load_inputs(
    pantry_path: &Path,
    profile_path: &Path,
) -> Result<Option<(Vec<PantryItem>, Profile)>> {
    if !pantry_path.exists() {
        eprintln!("Pantry file not found: {}", pantry_path.display());
        eprintln!("Use 'add-item' to start a pantry.");
        return Ok(None);
    }
    if !profile_path.exists() {
        eprintln!("Profile file not found: {}", profile_path.display());
        eprintln!("It needs daily \"targets\" and a \"workoutFrequency\".");
        return Ok(None);
    }

    let items = load_pantry(pantry_path)?;
    let profile = load_profile(profile_path)?;
    Ok(Some((items, profile)))
}

fn planner_config(profile: &Profile, early_exit: Option<f64>) -> Result<PlannerConfig> {
    let config = match early_exit {
        Some(ratio) => profile.planner.clone().with_early_exit(ratio),
        None => profile.planner.clone(),
    };
    config.validate()?;
    Ok(config)
}

/// Plan the week from the current pantry.
fn cmd_week(
    pantry_path: &Path,
    profile_path: &Path,
    workouts: Option<u32>,
    early_exit: Option<f64>,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let Some((items, profile)) = load_inputs(pantry_path, profile_path)? else {
        return Ok(());
    };

    let config = planner_config(&profile, early_exit)?;
    let workout_frequency = workouts.unwrap_or(profile.workout_frequency);
    if workout_frequency > MAX_WORKOUT_FREQUENCY {
        return Err(PlannerError::InvalidInput(format!(
            "workouts per week must be at most {}",
            MAX_WORKOUT_FREQUENCY
        )));
    }

    let (plan, remaining) =
        plan_week_with_remaining(&items, &profile.targets, workout_frequency, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_weekly_plan(&plan, &profile.targets);
        display_remaining(&remaining);
    }

    if let Some(path) = csv {
        write_plan_csv_file(&plan, &path)?;
        eprintln!("Wrote meal lines to {}", path.display());
    }

    Ok(())
}

/// Plan a single day.
fn cmd_day(
    pantry_path: &Path,
    profile_path: &Path,
    date: Option<String>,
    early_exit: Option<f64>,
    json: bool,
) -> Result<()> {
    let Some((items, profile)) = load_inputs(pantry_path, profile_path)? else {
        return Ok(());
    };

    let config = planner_config(&profile, early_exit)?;
    let date = match date {
        Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")?,
        None => Local::now().date_naive(),
    };

    let plan = generate_day_plan_for_date(
        &items,
        &profile.targets,
        date,
        profile.workout_frequency,
        &config,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("Plan for {}", date);
        display_day_plan(&plan, &profile.targets);
    }

    Ok(())
}

/// First numeric id not already used.
fn next_item_id(items: &[PantryItem]) -> String {
    let mut n = items.len() + 1;
    while items.iter().any(|i| i.id == n.to_string()) {
        n += 1;
    }
    n.to_string()
}

/// Add one item to the pantry interactively.
fn cmd_add_item(pantry_path: &Path) -> Result<()> {
    let mut items = if pantry_path.exists() {
        load_pantry(pantry_path)?
    } else {
        Vec::new()
    };

    let item = prompt_pantry_item(next_item_id(&items))?;
    validate_pantry_item(&item)?;

    println!(
        "{}: {} {}, {} kcal/100g",
        item.name, item.quantity, item.unit, item.nutrition_per_100g.calories
    );
    if let Some(score) = item.nutri_score {
        println!("Nutri-Score: {}", score);
    }

    if prompt_yes_no("Add to pantry?", true)? {
        items.push(item);
        save_pantry(pantry_path, &items)?;
        println!("Pantry saved ({} items).", items.len());
    }

    Ok(())
}

/// Show default and suggested piece weights.
fn cmd_piece_weight(name: &str) {
    match default_piece_weight(name) {
        Some(grams) => println!("{}: {} g per piece", name, grams),
        None => println!("{}: no default piece weight", name),
    }

    let suggestions = suggested_piece_weights(name);
    if !suggestions.is_empty() {
        println!("Similar:");
        for (key, grams) in suggestions {
            println!("  {} - {} g", key, grams);
        }
    }
}
