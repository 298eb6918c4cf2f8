//! Response parsers for TheMealDB
//!
//! Contains modules for decoding response bodies and deriving
//! presentation data from recipe records.

pub mod ingredients;
pub mod response;

pub use ingredients::{extract_ingredients, MAX_INGREDIENT_SLOTS};
pub use response::{filter_by_name, parse_meals_response};
