//! TheMealDB Lookup Core Library
//!
//! Provides an async API for searching recipes and fetching recipe details
//! from [TheMealDB](https://www.themealdb.com).
//!
//! # Overview
//!
//! This crate wraps three read endpoints of the service:
//! - name search (`search.php?s=`), narrowed client-side to names that
//!   contain the query
//! - first-letter listing (`search.php?f=`), used for featured recipes
//! - lookup by id (`lookup.php?i=`)
//!
//! "No matches" is never an error: searches return an empty `Vec` and
//! lookups return `None`. Transport, status and parse failures all come
//! back as a [`FetchError`] whose message can be shown to the user as-is.
//!
//! # Example
//!
//! ```no_run
//! use mealdb_core::{RecipeLookupClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = RecipeLookupClient::new()?;
//!
//!     // Search for recipes
//!     let results = client.search_by_name("chicken").await?;
//!
//!     for meal in &results {
//!         println!("{}: {}", meal.id, meal.name);
//!     }
//!
//!     // Load full details for the first hit
//!     if let Some(meal) = results.first() {
//!         if let Some(details) = client.get_by_id(&meal.id).await? {
//!             for item in details.ingredients() {
//!                 println!("{} - {}", item.ingredient, item.measure);
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod lookup;
pub mod parser;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, MealDbClient, BASE_URL_ENV, TIMEOUT_ENV};

// Re-export error types
pub use error::{
    FetchError, Result, DETAILS_FAILED_MESSAGE, GENERIC_FETCH_MESSAGE, SEARCH_FAILED_MESSAGE,
};

// Re-export parser functions
pub use parser::{extract_ingredients, filter_by_name, parse_meals_response};

// Re-export main lookup API
pub use lookup::{RecipeLookupClient, FEATURED_LETTER};

// Re-export data types
pub use types::{Ingredient, MealRecord, MealsResponse, UNKNOWN_LABEL};
