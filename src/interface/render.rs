use crate::models::{DayPlan, MacroTargets, Meal, PantryItem, WeeklyPlan};

fn format_macros(m: &MacroTargets) -> String {
    format!(
        "{:.0} kcal | P {:.1}g C {:.1}g F {:.1}g",
        m.calories, m.protein, m.carbs, m.fat
    )
}

fn display_meal(meal: &Meal) {
    println!(
        "  {} - {}",
        meal.category,
        format_macros(&meal.total_nutrition)
    );

    let max_name_len = meal.items.iter().map(|i| i.name.len()).max().unwrap_or(10);
    for item in &meal.items {
        println!(
            "    {:<width$}  {:>6} {:<2}  {:>4.0} kcal, {:.1}g pro",
            item.name,
            item.quantity,
            item.unit,
            item.actual_nutrition.calories,
            item.actual_nutrition.protein,
            width = max_name_len
        );
    }

    if !meal.method.is_empty() {
        println!("    > {}", meal.method);
    }
}

fn display_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!("--- Warnings ---");
    for w in warnings {
        println!("! {}", w);
    }
    println!();
}

/// Display a weekly plan day by day.
pub fn display_weekly_plan(plan: &WeeklyPlan, targets: &MacroTargets) {
    println!();
    println!("=== Weekly Plan ===");
    println!("Daily target: {}", format_macros(targets));
    println!();

    for (day, meals) in &plan.meals {
        let total = plan.total_nutrition.get(day).copied().unwrap_or_default();
        let gap = plan.calorie_gaps.get(day).copied().unwrap_or(0.0);

        println!("[{}] {} (gap {:.0} kcal)", day, format_macros(&total), gap);
        if meals.is_empty() {
            println!("  (nothing available)");
        }
        for meal in meals {
            display_meal(meal);
        }
        println!();
    }

    println!("--- Summary ---");
    println!("Total calorie gap: {:.0} kcal", plan.total_gap());
    println!();
    display_warnings(&plan.warnings);
}

/// Display a single-day plan.
pub fn display_day_plan(plan: &DayPlan, targets: &MacroTargets) {
    println!();
    println!("=== Daily Plan ===");
    println!("Target: {}", format_macros(targets));
    println!("Planned: {}", format_macros(&plan.total_nutrition));
    println!();

    if plan.meals.is_empty() {
        println!("No meals could be planned. Add more variety to the pantry.");
        println!();
    }
    for meal in &plan.meals {
        display_meal(meal);
        println!();
    }

    display_warnings(&plan.warnings);
}

/// Display stock left after planning.
pub fn display_remaining(items: &[PantryItem]) {
    let left: Vec<&PantryItem> = items.iter().filter(|i| i.quantity > 0.0).collect();
    if left.is_empty() {
        println!("Pantry fully used.");
        return;
    }

    println!("=== Left at week end ({} items) ===", left.len());
    for item in left {
        println!("  {} - {} {}", item.name, item.quantity, item.unit);
    }
    println!();
}
