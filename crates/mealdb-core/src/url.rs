//! URL helper functions for TheMealDB
//!
//! Builds the request paths for the three endpoints the client uses.
//! Paths are relative to the configured base URL.

/// Public TheMealDB v1 endpoint (test API key "1")
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Builds the name search path for a query
///
/// URL encodes the query as the `s` parameter.
///
/// # Example
/// ```
/// use mealdb_core::url::build_search_by_name_url;
/// let path = build_search_by_name_url("chicken curry");
/// assert_eq!(path, "/search.php?s=chicken%20curry");
/// ```
pub fn build_search_by_name_url(query: &str) -> String {
    format!("/search.php?s={}", urlencoding::encode(query))
}

/// Builds the first-letter search path
///
/// # Example
/// ```
/// use mealdb_core::url::build_search_by_letter_url;
/// let path = build_search_by_letter_url('a');
/// assert_eq!(path, "/search.php?f=a");
/// ```
pub fn build_search_by_letter_url(letter: char) -> String {
    let mut buf = [0u8; 4];
    format!("/search.php?f={}", urlencoding::encode(letter.encode_utf8(&mut buf)))
}

/// Builds the lookup path for a recipe id
///
/// The id is passed through as given, only URL encoded.
///
/// # Example
/// ```
/// use mealdb_core::url::build_lookup_url;
/// let path = build_lookup_url("52772");
/// assert_eq!(path, "/lookup.php?i=52772");
/// ```
pub fn build_lookup_url(id: &str) -> String {
    format!("/lookup.php?i={}", urlencoding::encode(id))
}

/// Joins a base URL and a request path
///
/// Trailing slashes on the base are dropped so `base/` and `base` behave
/// the same.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
