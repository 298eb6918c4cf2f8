//! Error types for the MealDB lookup client
//!
//! Every failure surfaces as a [`FetchError`] whose `Display` output is a
//! message a front end can show to the user as-is. "No matches" and
//! "no such recipe" are not errors; they come back as empty results.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Fallback shown when an error renders to an empty string
pub const GENERIC_FETCH_MESSAGE: &str = "Something went wrong while fetching recipes.";

/// Message for non-success statuses on the search endpoints
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again.";

/// Message for non-success statuses on the lookup endpoint
pub const DETAILS_FAILED_MESSAGE: &str = "Failed to fetch recipe details. Please try again.";

/// Error type for all recipe lookup operations
///
/// Implements Display for human-readable messages and Serialize
/// so front ends can forward the message without inspecting the variant.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Upstream answered with a non-success HTTP status
    #[error("{message}")]
    Status {
        /// HTTP status code returned by the service
        status: u16,
        /// Consumer-facing context message for the failed operation
        message: String,
    },

    /// Network or transport level failure
    #[error("Network request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Invalid response from recipe service: {0}")]
    Parse(#[from] serde_json::Error),

    /// Client could not be built from the given configuration
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl FetchError {
    /// Consumer-displayable message, never empty
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FETCH_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// HTTP status code, if the failure came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl Serialize for FetchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.message())
    }
}

/// Result type alias for recipe lookup operations
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = FetchError::Status {
            status: 500,
            message: SEARCH_FAILED_MESSAGE.to_string(),
        };
        assert_eq!(error.to_string(), "Failed to fetch recipes. Please try again.");
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_error_display_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = FetchError::from(json_err);
        assert!(error
            .to_string()
            .starts_with("Invalid response from recipe service: "));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_display_invalid_config() {
        let error = FetchError::InvalidConfig("bad base url".to_string());
        assert_eq!(error.to_string(), "Invalid client configuration: bad base url");
    }

    #[test]
    fn test_message_falls_back_when_empty() {
        let error = FetchError::Status {
            status: 502,
            message: String::new(),
        };
        assert_eq!(error.message(), GENERIC_FETCH_MESSAGE);
    }

    #[test]
    fn test_error_serialize() {
        let error = FetchError::Status {
            status: 404,
            message: DETAILS_FAILED_MESSAGE.to_string(),
        };
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Failed to fetch recipe details. Please try again.\"");
    }

    #[test]
    fn test_error_serialize_empty_message_uses_fallback() {
        let error = FetchError::Status {
            status: 500,
            message: "  ".to_string(),
        };
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, format!("\"{}\"", GENERIC_FETCH_MESSAGE));
    }
}
