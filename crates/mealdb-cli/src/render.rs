//! Plain-text rendering of recipes for the terminal

use std::fmt::{self, Write};

use mealdb_core::MealRecord;

/// One line per recipe: id, then name
pub fn recipe_list(meals: &[MealRecord]) -> String {
    let width = meals.iter().map(|m| m.id.len()).max().unwrap_or(0);
    meals
        .iter()
        .map(|meal| format!("{:<width$}  {}", meal.id, meal.name, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full recipe view: title, category and area, ingredients, instructions, video
pub fn recipe_details(meal: &MealRecord) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_details(&mut out, meal);
    out.trim_end().to_string()
}

fn write_details(out: &mut String, meal: &MealRecord) -> fmt::Result {
    writeln!(out, "{}", meal.name)?;
    writeln!(out, "Category: {}  Area: {}", meal.category_label(), meal.area_label())?;
    if !meal.thumbnail.is_empty() {
        writeln!(out, "Image: {}", meal.thumbnail)?;
    }

    writeln!(out, "\nIngredients")?;
    for item in meal.ingredients() {
        if item.measure.is_empty() {
            writeln!(out, "  - {}", item.ingredient)?;
        } else {
            writeln!(out, "  - {} - {}", item.ingredient, item.measure)?;
        }
    }

    writeln!(out, "\nInstructions")?;
    writeln!(out, "{}", meal.instructions.as_deref().unwrap_or_default().trim())?;

    if let Some(video) = meal.video_url() {
        writeln!(out, "\nVideo Tutorial: {}", video)?;
    }

    Ok(())
}
