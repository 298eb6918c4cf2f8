//! Response body parser for TheMealDB search and lookup endpoints
//!
//! Decodes the `{"meals": ...}` envelope and applies client-side filtering.

use crate::error::Result;
use crate::types::{MealRecord, MealsResponse};

/// Parses a response body and returns the records it contains
///
/// # Arguments
/// * `body` - Raw JSON body from `search.php` or `lookup.php`
///
/// # Returns
/// Vector of `MealRecord`s, empty if the service reported no matches
/// (`"meals": null` or a missing field)
///
/// # Errors
/// Returns `Parse` if the body is not valid JSON of the expected shape
pub fn parse_meals_response(body: &str) -> Result<Vec<MealRecord>> {
    let response: MealsResponse = serde_json::from_str(body)?;
    Ok(response.into_meals())
}

/// Keeps only records whose name contains `query`, ignoring case
///
/// The service's name search sometimes matches more loosely than the
/// name itself, so results are narrowed to a plain substring match.
/// Records without a name never match a non-empty query.
///
/// # Arguments
/// * `records` - Records returned by the service
/// * `query` - Already-trimmed search text
pub fn filter_by_name(records: Vec<MealRecord>, query: &str) -> Vec<MealRecord> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|meal| meal.name.to_lowercase().contains(&needle))
        .collect()
}
