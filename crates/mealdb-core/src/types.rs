//! Core data types for the MealDB lookup client
//!
//! Contains the recipe record returned by the service, the ingredient pair
//! derived from it, and the response envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::parser::extract_ingredients;

/// Label used when a record has no category or area
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A recipe record as returned by TheMealDB
///
/// Only the fields the client reads are typed. Everything else the service
/// sends (ingredient and measure slots, tags, source, dates) is kept in
/// [`MealRecord::extra`] so the record serializes back without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Service identifier (e.g., "52772"); numeric ids are read as their decimal text
    #[serde(rename = "idMeal", default, deserialize_with = "id_as_string")]
    pub id: String,

    /// Display name (e.g., "Teriyaki Chicken Casserole")
    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Thumbnail image URL
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,

    /// Category (e.g., "Chicken")
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,

    /// Area or regional cuisine (e.g., "Japanese")
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,

    /// Free-text cooking instructions
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,

    /// External video URL
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,

    /// Remaining upstream fields, including `strIngredient1..20` and `strMeasure1..20`
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl MealRecord {
    /// Non-blank ingredients paired with their measures, in slot order
    pub fn ingredients(&self) -> Vec<Ingredient> {
        extract_ingredients(self)
    }

    /// String value of an untyped upstream field, if present and a string
    pub fn field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    /// Category, or "Unknown" when missing or blank
    pub fn category_label(&self) -> &str {
        non_blank(self.category.as_deref()).unwrap_or(UNKNOWN_LABEL)
    }

    /// Area, or "Unknown" when missing or blank
    pub fn area_label(&self) -> &str {
        non_blank(self.area.as_deref()).unwrap_or(UNKNOWN_LABEL)
    }

    /// Video URL, only when the service actually provided one
    pub fn video_url(&self) -> Option<&str> {
        non_blank(self.youtube.as_deref())
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, trimmed (e.g., "soy sauce")
    pub ingredient: String,

    /// Quantity, trimmed; empty when the service gave none
    pub measure: String,
}

/// Response envelope shared by the search and lookup endpoints
///
/// The service sends `{"meals": null}` when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsResponse {
    /// Records in the response, empty when the service reported no matches
    pub fn into_meals(self) -> Vec<MealRecord> {
        self.meals.unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, got {}",
            other
        ))),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350F.",
            "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
            "strTags": "Meat,Casserole",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "",
            "strMeasure2": "",
            "strIngredient3": null,
            "strMeasure3": null
        }"#
    }

    #[test]
    fn test_meal_record_deserialization() {
        let meal: MealRecord = serde_json::from_str(sample_json()).expect("Should deserialize");

        assert_eq!(meal.id, "52772");
        assert_eq!(meal.name, "Teriyaki Chicken Casserole");
        assert_eq!(meal.category.as_deref(), Some("Chicken"));
        assert_eq!(meal.area.as_deref(), Some("Japanese"));
        assert_eq!(meal.field("strTags"), Some("Meat,Casserole"));
        assert_eq!(meal.field("strIngredient1"), Some("soy sauce"));
        assert_eq!(meal.field("strIngredient3"), None);
    }

    #[test]
    fn test_meal_record_serialization_keeps_extra_fields() {
        let meal: MealRecord = serde_json::from_str(sample_json()).expect("Should deserialize");

        let json = serde_json::to_string(&meal).expect("Serialization should succeed");
        let deserialized: MealRecord =
            serde_json::from_str(&json).expect("Deserialization should succeed");

        assert_eq!(meal, deserialized);
        assert!(json.contains("\"strMeasure1\":\"3/4 cup\""));
    }

    #[test]
    fn test_meal_record_with_missing_and_null_fields() {
        let meal: MealRecord =
            serde_json::from_str(r#"{"idMeal": "1", "strMeal": null}"#).expect("Should deserialize");

        assert_eq!(meal.id, "1");
        assert_eq!(meal.name, "");
        assert_eq!(meal.thumbnail, "");
        assert_eq!(meal.category, None);
        assert_eq!(meal.instructions, None);
        assert!(meal.ingredients().is_empty());
    }

    #[test]
    fn test_numeric_id_is_read_as_text() {
        let meal: MealRecord =
            serde_json::from_str(r#"{"idMeal": 52772, "strMeal": "Teriyaki Chicken Casserole"}"#)
                .expect("Should deserialize");
        assert_eq!(meal.id, "52772");
    }

    #[test]
    fn test_meals_response_with_mixed_id_types() {
        let response: MealsResponse = serde_json::from_str(
            r#"{"meals": [{"idMeal": "1", "strMeal": "Toast"}, {"idMeal": 2, "strMeal": "Tea"}]}"#,
        )
        .expect("Should deserialize");

        let ids: Vec<String> = response.into_meals().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_object_id_is_rejected() {
        let result = serde_json::from_str::<MealRecord>(r#"{"idMeal": {"n": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_labels_fall_back_to_unknown() {
        let meal: MealRecord = serde_json::from_str(
            r#"{"idMeal": "1", "strMeal": "Toast", "strCategory": "", "strArea": null}"#,
        )
        .expect("Should deserialize");

        assert_eq!(meal.category_label(), UNKNOWN_LABEL);
        assert_eq!(meal.area_label(), UNKNOWN_LABEL);
    }

    #[test]
    fn test_video_url_ignores_blank() {
        let meal: MealRecord =
            serde_json::from_str(r#"{"idMeal": "1", "strMeal": "Toast", "strYoutube": " "}"#)
                .expect("Should deserialize");
        assert_eq!(meal.video_url(), None);

        let meal: MealRecord = serde_json::from_str(sample_json()).expect("Should deserialize");
        assert_eq!(
            meal.video_url(),
            Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")
        );
    }

    #[test]
    fn test_meals_response_null() {
        let response: MealsResponse =
            serde_json::from_str(r#"{"meals": null}"#).expect("Should deserialize");
        assert!(response.into_meals().is_empty());
    }

    #[test]
    fn test_meals_response_missing_field() {
        let response: MealsResponse = serde_json::from_str("{}").expect("Should deserialize");
        assert!(response.into_meals().is_empty());
    }
}
