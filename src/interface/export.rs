use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::WeeklyPlan;

/// Write one CSV row per meal line of the week.
pub fn write_plan_csv<W: Write>(plan: &WeeklyPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "day", "meal", "item", "quantity", "unit", "kcal", "protein", "carbs", "fat",
    ])?;

    for (day, meals) in &plan.meals {
        for meal in meals {
            for item in &meal.items {
                let n = &item.actual_nutrition;
                wtr.write_record([
                    day.label().to_string(),
                    meal.category.label().to_string(),
                    item.name.clone(),
                    format!("{}", item.quantity),
                    item.unit.symbol().to_string(),
                    format!("{:.0}", n.calories),
                    format!("{:.1}", n.protein),
                    format!("{:.1}", n.carbs),
                    format!("{:.1}", n.fat),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write the week's meal lines to a CSV file.
pub fn write_plan_csv_file(plan: &WeeklyPlan, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan_csv(plan, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MacroTargets, Meal, MealCategory, MealItem, NutritionPer100g, Unit, Weekday};

    #[test]
    fn test_csv_rows_per_item() {
        let mut plan = WeeklyPlan::default();
        plan.meals.insert(
            Weekday::Tue,
            vec![Meal {
                category: MealCategory::Lunch,
                items: vec![MealItem {
                    pantry_item_id: "1".to_string(),
                    name: "Pollo".to_string(),
                    quantity: 200.0,
                    unit: Unit::G,
                    nutrition: NutritionPer100g::default(),
                    actual_nutrition: MacroTargets::new(330.0, 62.0, 0.0, 7.2),
                }],
                method: String::new(),
                total_nutrition: MacroTargets::new(330.0, 62.0, 0.0, 7.2),
                consumed: false,
            }],
        );

        let mut out = Vec::new();
        write_plan_csv(&plan, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "day,meal,item,quantity,unit,kcal,protein,carbs,fat");
        assert_eq!(lines[1], "Tue,Lunch,Pollo,200,g,330,62.0,0.0,7.2");
    }
}
