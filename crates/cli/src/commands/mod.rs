//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;

use prime_beef_storefront::CartError;
use prime_beef_storefront::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A cart operation failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Writing output or reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid YAML for a product list.
    #[error("Invalid catalog: {0}")]
    CatalogFormat(#[from] serde_yaml::Error),

    /// Catalog parsed but failed validation.
    #[error("{0} catalog validation errors found")]
    CatalogInvalid(usize),

    /// Product not present in the catalog.
    #[error("Unknown product in catalog: {0}")]
    UnknownProduct(String),

    /// Command-line arguments do not describe a product.
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// Product page URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
