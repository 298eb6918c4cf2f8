//! Ingredient extraction for recipe records
//!
//! TheMealDB stores ingredients as numbered field pairs
//! (`strIngredient1`..`strIngredient20`, `strMeasure1`..`strMeasure20`).

use crate::types::{Ingredient, MealRecord};

/// Number of ingredient/measure slots the service provides per recipe
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Collects the ingredient list of a recipe
///
/// Walks slots 1 through 20 in order. A slot is kept only when its
/// ingredient is present and not blank; the measure is trimmed and
/// defaults to an empty string.
///
/// # Arguments
/// * `meal` - Recipe record from the lookup endpoint
///
/// # Returns
/// Ingredients in slot order, empty if the record carries none
pub fn extract_ingredients(meal: &MealRecord) -> Vec<Ingredient> {
    (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = meal.field(&format!("strIngredient{}", slot))?.trim();
            if ingredient.is_empty() {
                return None;
            }

            let measure = meal
                .field(&format!("strMeasure{}", slot))
                .map(str::trim)
                .unwrap_or_default();

            Some(Ingredient {
                ingredient: ingredient.to_string(),
                measure: measure.to_string(),
            })
        })
        .collect()
}
