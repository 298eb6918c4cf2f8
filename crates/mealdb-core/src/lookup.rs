//! Recipe lookup API for TheMealDB
//!
//! Provides the high-level API combining the HTTP client and the
//! response parsers.

use crate::client::{ClientConfig, MealDbClient};
use crate::error::{Result, DETAILS_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE};
use crate::parser::{filter_by_name, parse_meals_response};
use crate::types::MealRecord;
use crate::url::{build_lookup_url, build_search_by_letter_url, build_search_by_name_url};

/// Letter used for the featured listing on first load
pub const FEATURED_LETTER: &str = "a";

/// Main lookup API for TheMealDB
///
/// Each operation issues at most one GET request. Empty input is a valid
/// "nothing to look up" state and returns an empty result without touching
/// the network. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct RecipeLookupClient {
    client: MealDbClient,
}

impl RecipeLookupClient {
    /// Create a new lookup client with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        let client = MealDbClient::new()?;
        Ok(Self { client })
    }

    /// Create a new lookup client with custom configuration
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or HTTP client
    /// initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = MealDbClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Search recipes by name
    ///
    /// The query is trimmed; results are narrowed to recipes whose name
    /// contains the query, ignoring case.
    ///
    /// # Arguments
    /// * `query` - Search text as typed by the user
    ///
    /// # Returns
    /// Matching recipes, empty if the query is blank or nothing matched
    ///
    /// # Errors
    /// - `Status` if the service answers with a non-success status
    /// - `Http` if the network request fails
    /// - `Parse` if the response is not valid JSON
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> mealdb_core::Result<()> {
    /// use mealdb_core::RecipeLookupClient;
    /// let client = RecipeLookupClient::new()?;
    /// for meal in client.search_by_name("curry").await? {
    ///     println!("{}: {}", meal.id, meal.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<MealRecord>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            tracing::debug!("empty name query, skipping request");
            return Ok(Vec::new());
        }

        let body = self
            .client
            .fetch(&build_search_by_name_url(trimmed), SEARCH_FAILED_MESSAGE)
            .await?;
        let meals = parse_meals_response(&body)?;
        let received = meals.len();

        let matches = filter_by_name(meals, trimmed);
        tracing::debug!(query = trimmed, received, kept = matches.len(), "name search finished");
        Ok(matches)
    }

    /// List recipes whose name starts with a letter
    ///
    /// Only the first character of the trimmed, lower-cased input is used,
    /// so `"Az"` and `"a"` send the same request. No client-side filtering
    /// is applied.
    ///
    /// # Arguments
    /// * `letter` - Text whose first character selects the listing
    ///
    /// # Returns
    /// Recipes from the service, empty if the input is blank or nothing matched
    ///
    /// # Errors
    /// - `Status` if the service answers with a non-success status
    /// - `Http` if the network request fails
    /// - `Parse` if the response is not valid JSON
    pub async fn search_by_first_letter(&self, letter: &str) -> Result<Vec<MealRecord>> {
        let Some(first) = letter.trim().to_lowercase().chars().next() else {
            tracing::debug!("empty letter query, skipping request");
            return Ok(Vec::new());
        };

        let body = self
            .client
            .fetch(&build_search_by_letter_url(first), SEARCH_FAILED_MESSAGE)
            .await?;
        let meals = parse_meals_response(&body)?;

        tracing::debug!(letter = %first, received = meals.len(), "letter search finished");
        Ok(meals)
    }

    /// Featured recipes shown before the user searches
    ///
    /// Same as `search_by_first_letter("a")`.
    pub async fn featured(&self) -> Result<Vec<MealRecord>> {
        self.search_by_first_letter(FEATURED_LETTER).await
    }

    /// Fetch a single recipe by id
    ///
    /// The id is sent as given (URL encoded) without validation.
    ///
    /// # Arguments
    /// * `id` - Recipe identifier (e.g., "52772")
    ///
    /// # Returns
    /// The recipe, or `None` if the service has no recipe with that id
    ///
    /// # Errors
    /// - `Status` if the service answers with a non-success status
    /// - `Http` if the network request fails
    /// - `Parse` if the response is not valid JSON
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> mealdb_core::Result<()> {
    /// use mealdb_core::RecipeLookupClient;
    /// let client = RecipeLookupClient::new()?;
    /// match client.get_by_id("52772").await? {
    ///     Some(meal) => println!("{} ({})", meal.name, meal.category_label()),
    ///     None => println!("Recipe not found."),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_by_id(&self, id: &str) -> Result<Option<MealRecord>> {
        let body = self
            .client
            .fetch(&build_lookup_url(id), DETAILS_FAILED_MESSAGE)
            .await?;
        let meal = parse_meals_response(&body)?.into_iter().next();

        tracing::debug!(id, found = meal.is_some(), "lookup finished");
        Ok(meal)
    }
}
