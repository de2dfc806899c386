//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PRIME_BEEF_DATA_DIR` - Directory holding persisted slots (default: `.prime-beef`)
//! - `PRIME_BEEF_PAGE_URL` - Page URL product links are resolved against
//!   (default: `http://localhost:3000/`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::storage::FileStorage;

const DEFAULT_DATA_DIR: &str = ".prime-beef";
const DEFAULT_PAGE_URL: &str = "http://localhost:3000/";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront cart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory for file-backed storage
    pub data_dir: PathBuf,
    /// Page the product links are relative to
    pub page_url: Url,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("PRIME_BEEF_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let raw_url = lookup("PRIME_BEEF_PAGE_URL").unwrap_or_else(|| DEFAULT_PAGE_URL.to_string());
        let page_url = Url::parse(&raw_url).map_err(|e| {
            ConfigError::InvalidEnvVar("PRIME_BEEF_PAGE_URL".to_string(), e.to_string())
        })?;
        if page_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEnvVar(
                "PRIME_BEEF_PAGE_URL".to_string(),
                "must be a hierarchical URL".to_string(),
            ));
        }

        Ok(Self { data_dir, page_url })
    }

    /// File storage rooted at the configured data directory.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}
