//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional - the defaults suit local development:
//! - `HARLOW_DATA_DIR` - Catalog data directory (default: crates/storefront/data)
//! - `HARLOW_STATE_DIR` - State directory for persisted store snapshots
//!   (default: .harlow/state)
//! - `HARLOW_PAGE_SIZE` - Products per browse page (default: 12, min 1)
//! - `HARLOW_REVIEWS_URL` - Base URL of the reviews API; the reviews client
//!   is only constructed when this is set
//! - `HARLOW_REVIEWS_TIMEOUT_SECS` - Per-request timeout (default: 10)
//! - `HARLOW_REVIEWS_CACHE_TTL_SECS` - Review fetch cache TTL (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default browse page size.
const DEFAULT_PAGE_SIZE: u32 = 12;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding `products.json`
    pub data_dir: PathBuf,
    /// Directory for persisted cart/wishlist snapshots
    pub state_dir: PathBuf,
    /// Products per browse page
    pub page_size: u32,
    /// Reviews API configuration, when a reviews backend is configured
    pub reviews: Option<ReviewsConfig>,
}

/// Reviews API configuration.
#[derive(Debug, Clone)]
pub struct ReviewsConfig {
    /// Base URL of the reviews API (e.g., <https://reviews.example.com/api>)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// How long fetched reviews stay cached
    pub cache_ttl: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but does not parse (bad
    /// page size, malformed reviews URL).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir =
            PathBuf::from(get_env_or_default("HARLOW_DATA_DIR", "crates/storefront/data"));
        let state_dir = PathBuf::from(get_env_or_default("HARLOW_STATE_DIR", ".harlow/state"));

        let page_size = get_env_or_default("HARLOW_PAGE_SIZE", "12")
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar("HARLOW_PAGE_SIZE".to_string(), e.to_string()))?;
        if page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "HARLOW_PAGE_SIZE".to_string(),
                "page size must be at least 1".to_string(),
            ));
        }

        let reviews = ReviewsConfig::from_env()?;

        Ok(Self {
            data_dir,
            state_dir,
            page_size,
            reviews,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/storefront/data"),
            state_dir: PathBuf::from(".harlow/state"),
            page_size: DEFAULT_PAGE_SIZE,
            reviews: None,
        }
    }
}

impl ReviewsConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(base_url) = get_optional_env("HARLOW_REVIEWS_URL") else {
            return Ok(None);
        };

        // Parse once to reject malformed URLs early; the client keeps the
        // string form
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("HARLOW_REVIEWS_URL".to_string(), e.to_string())
        })?;

        let timeout_secs = get_env_or_default("HARLOW_REVIEWS_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("HARLOW_REVIEWS_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
        let cache_ttl_secs = get_env_or_default("HARLOW_REVIEWS_CACHE_TTL_SECS", "300")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "HARLOW_REVIEWS_CACHE_TTL_SECS".to_string(),
                    e.to_string(),
                )
            })?;

        Ok(Some(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.page_size, 12);
        assert!(config.reviews.is_none());
        assert!(config.data_dir.ends_with("data"));
    }
}
