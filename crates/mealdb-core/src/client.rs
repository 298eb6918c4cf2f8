//! HTTP client for TheMealDB
//!
//! Thin wrapper over `reqwest` that issues one GET per call, turns
//! non-success statuses into [`FetchError::Status`] and hands back the body.

use std::time::Duration;

use crate::error::{FetchError, Result};
use crate::url::{join_url, DEFAULT_BASE_URL};

/// Environment variable overriding the service base URL
pub const BASE_URL_ENV: &str = "MEALDB_BASE_URL";

/// Environment variable setting a request timeout in seconds
pub const TIMEOUT_ENV: &str = "MEALDB_TIMEOUT_SECS";

const USER_AGENT: &str = concat!("mealdb-core/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL (default: TheMealDB v1 public endpoint)
    pub base_url: String,
    /// Request timeout in seconds (default: none, transport default applies)
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a configuration from `MEALDB_BASE_URL` and `MEALDB_TIMEOUT_SECS`
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the timeout is not a positive whole number of seconds
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    FetchError::InvalidConfig(format!(
                        "{} must be a positive number of seconds, got {:?}",
                        TIMEOUT_ENV, raw
                    ))
                })?;
            config.timeout_secs = Some(secs);
        }

        Ok(config)
    }
}

/// HTTP client wrapper for TheMealDB
///
/// Holds no per-request state; overlapping calls from the same client are
/// independent of each other.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidConfig` - base URL is not an absolute http(s) URL, or the timeout is zero
    /// - `Http` - the underlying client could not be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got {:?}",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        match config.timeout_secs {
            // A zero timeout would fail every request before it is sent
            Some(0) => {
                return Err(FetchError::InvalidConfig(
                    "timeout must be at least one second".to_string(),
                ));
            }
            Some(secs) => builder = builder.timeout(Duration::from_secs(secs)),
            None => {}
        }
        let client = builder.build().map_err(FetchError::Http)?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the body of a path on the service
    ///
    /// # Arguments
    /// * `path` - Path and query (e.g., "/search.php?s=curry")
    /// * `failure_message` - Message carried by the error on a non-success status
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// - `Status` - the service answered with a non-2xx status
    /// - `Http` - network errors or an unreadable body
    pub async fn fetch(&self, path: &str, failure_message: &str) -> Result<String> {
        let url = join_url(&self.base_url, path);
        tracing::debug!(%url, "sending request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Http)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "recipe service returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: failure_message.to_string(),
            });
        }

        response.text().await.map_err(FetchError::Http)
    }
}
