use smartfit_planner_rs::models::{
    MacroTargets, MealCategory, NutritionPer100g, PantryItem, Unit, Weekday,
};
use smartfit_planner_rs::planner::{
    PlannerConfig, allocate_day, generate_day_plan, generate_weekly_plan, max_portion,
};
use smartfit_planner_rs::state::VirtualPantry;

fn make_item(
    id: &str,
    name: &str,
    categories: &[MealCategory],
    unit: Unit,
    quantity: f64,
    calories: f64,
    protein: f64,
) -> PantryItem {
    PantryItem {
        id: id.to_string(),
        name: name.to_string(),
        categories: categories.to_vec(),
        unit,
        quantity,
        nutrition_per_100g: NutritionPer100g {
            calories,
            protein,
            carbs: 5.0,
            fat: 5.0,
            ..Default::default()
        },
        nutri_score: None,
        piece_weight: None,
    }
}

fn targets() -> MacroTargets {
    MacroTargets::new(2000.0, 150.0, 200.0, 60.0)
}

#[test]
fn test_single_lunch_item_only_fills_lunch() {
    let pollo = make_item("pollo", "Pollo", &[MealCategory::Lunch], Unit::G, 500.0, 165.0, 31.0);
    let mut pantry = VirtualPantry::new(&[pollo]);

    let day = allocate_day(&mut pantry, &targets(), false, &PlannerConfig::default());

    assert_eq!(day.meals.len(), 1);
    let lunch = &day.meals[0];
    assert_eq!(lunch.category, MealCategory::Lunch);
    assert_eq!(lunch.items.len(), 1);

    let used = lunch.items[0].quantity;
    assert!(used <= max_portion("pollo", Unit::G));
    assert_eq!(used, 200.0);
    assert_eq!(lunch.total_nutrition.calories, 330.0);
    assert_eq!(pantry.quantity_of("pollo"), 300.0);

    assert!(day.calorie_gap > 0.0);
    assert_eq!(day.calorie_gap, 1670.0);
}

#[test]
fn test_eggs_clamped_to_two_pieces() {
    let mut uovo = make_item("uovo", "Uovo", &[MealCategory::Breakfast], Unit::Pz, 6.0, 155.0, 13.0);
    uovo.piece_weight = Some(55.0);
    let mut pantry = VirtualPantry::new(&[uovo]);

    let day = allocate_day(&mut pantry, &targets(), false, &PlannerConfig::default());

    assert_eq!(day.meals.len(), 1);
    let breakfast = &day.meals[0];
    assert_eq!(breakfast.category, MealCategory::Breakfast);
    assert_eq!(breakfast.items[0].quantity, 2.0);
    assert_eq!(breakfast.items[0].unit, Unit::Pz);
    // 2 x 55 g at 155 kcal/100g
    assert_eq!(breakfast.total_nutrition.calories, 171.0);
    assert!(breakfast.method.starts_with("Cook the eggs"));
    assert_eq!(pantry.quantity_of("uovo"), 4.0);
    assert!(day.calorie_gap > 0.0);
}

#[test]
fn test_post_workout_only_on_first_n_days() {
    let shake = make_item(
        "shake",
        "Shake proteico",
        &[MealCategory::PostWorkout],
        Unit::Ml,
        100_000.0,
        40.0,
        8.0,
    );

    let plan = generate_weekly_plan(&[shake], &targets(), 3, &PlannerConfig::default());

    for day in Weekday::ALL {
        let has_post_workout = plan
            .categories_for(day)
            .contains(&MealCategory::PostWorkout);
        assert_eq!(has_post_workout, day.index() < 3, "day {}", day);
    }
}

#[test]
fn test_uncategorized_item_never_selected() {
    let orphan = make_item("orphan", "Tonno", &[], Unit::G, 1000.0, 100.0, 25.0);
    let pane = make_item("pane", "Pane", &MealCategory::ALL, Unit::G, 1000.0, 250.0, 8.0);

    let plan = generate_weekly_plan(&[orphan, pane], &targets(), 7, &PlannerConfig::default());

    for meals in plan.meals.values() {
        for meal in meals {
            assert!(meal.items.iter().all(|i| i.pantry_item_id != "orphan"));
        }
    }
}

#[test]
fn test_depletion_carries_across_days() {
    let pollo = make_item("pollo", "Pollo", &[MealCategory::Lunch], Unit::G, 500.0, 165.0, 31.0);

    let plan = generate_weekly_plan(&[pollo], &targets(), 0, &PlannerConfig::default());

    let lunch_grams = |day: Weekday| -> f64 {
        plan.meals_for(day)
            .iter()
            .flat_map(|m| m.items.iter())
            .map(|i| i.quantity)
            .sum()
    };
    assert_eq!(lunch_grams(Weekday::Mon), 200.0);
    assert_eq!(lunch_grams(Weekday::Tue), 200.0);
    assert_eq!(lunch_grams(Weekday::Wed), 100.0);
    assert!(plan.meals_for(Weekday::Thu).is_empty());
    assert_eq!(plan.calorie_gaps[&Weekday::Thu], 2000.0);

    // Aggregate warning first, then every day in order
    assert!(plan.warnings[0].starts_with("Not enough stock for the week"));
    assert_eq!(plan.warnings.len(), 8);
    assert!(plan.warnings[1].starts_with("Mon:"));
    assert!(plan.warnings[7].starts_with("Sun:"));
}

#[test]
fn test_original_pantry_untouched_and_regenerate_is_fresh() {
    let items = vec![make_item(
        "riso",
        "Riso",
        &[MealCategory::Lunch, MealCategory::Dinner],
        Unit::G,
        300.0,
        350.0,
        7.0,
    )];

    let first = generate_weekly_plan(&items, &targets(), 2, &PlannerConfig::default());
    let second = generate_weekly_plan(&items, &targets(), 2, &PlannerConfig::default());

    assert_eq!(items[0].quantity, 300.0);
    assert_eq!(first, second);
}

#[test]
fn test_single_day_helper_warns_above_threshold() {
    let pollo = make_item("pollo", "Pollo", &[MealCategory::Lunch], Unit::G, 500.0, 165.0, 31.0);

    let plan = generate_day_plan(&[pollo], &targets(), false, &PlannerConfig::default());
    assert_eq!(plan.meals.len(), 1);
    assert_eq!(
        plan.warnings,
        vec!["Missing 1670 kcal - add more foods to the pantry".to_string()]
    );
}

#[test]
fn test_higher_early_exit_ratio_fills_more() {
    let items = vec![
        make_item("a", "Tonno", &[MealCategory::Lunch], Unit::G, 1000.0, 100.0, 25.0),
        make_item("b", "Olio", &[MealCategory::Lunch], Unit::Ml, 1000.0, 900.0, 0.0),
    ];

    // Tuna alone gives 150 kcal of a 600 kcal lunch
    let low = PlannerConfig::default().with_early_exit(0.2);
    let day = generate_day_plan(&items, &targets(), false, &low);
    assert_eq!(day.meals[0].items.len(), 1);

    let high = PlannerConfig::default();
    let day = generate_day_plan(&items, &targets(), false, &high);
    assert_eq!(day.meals[0].items.len(), 2);
}
