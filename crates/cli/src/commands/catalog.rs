//! YAML product catalogs.
//!
//! A catalog lists the products a page offers, so `pb-cli add <id>
//! --catalog <file>` can add them without spelling out name and price:
//!
//! ```yaml
//! products:
//!   - id: ribeye
//!     name: Ribeye 12oz
//!     price: 9.99
//!     image: img/ribeye.jpg
//! ```

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use prime_beef_core::{Product, ProductId};
use serde::Deserialize;
use tracing::{error, info};

use super::CommandError;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Read and validate a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a product list, or
/// fails validation.
pub fn load(path: &Path) -> Result<Vec<Product>, CommandError> {
    info!(path = %path.display(), "Loading catalog");

    let content = std::fs::read_to_string(path)?;
    let catalog: CatalogFile = serde_yaml::from_str(&content)?;

    let errors = validate(&catalog.products);
    if !errors.is_empty() {
        error!("Catalog validation failed:");
        for err in &errors {
            error!("  - {err}");
        }
        return Err(CommandError::CatalogInvalid(errors.len()));
    }

    Ok(catalog.products)
}

/// Check a product list for duplicate ids and blank names.
#[must_use]
pub fn validate(products: &[Product]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for product in products {
        if product.id.as_str().is_empty() {
            errors.push("product with empty id".to_string());
        }
        if !seen.insert(&product.id) {
            errors.push(format!("duplicate product id '{}'", product.id));
        }
        if product.name.trim().is_empty() {
            errors.push(format!("product '{}' has no name", product.id));
        }
    }

    errors
}

/// Look up a product by id.
#[must_use]
pub fn find<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|product| &product.id == id)
}

/// `pb-cli catalog check`.
///
/// # Errors
///
/// Returns an error if the catalog is unreadable or invalid.
pub fn check(path: &Path, out: &mut impl Write) -> Result<(), CommandError> {
    let products = load(path)?;
    writeln!(out, "{}: {} products OK", path.display(), products.len())?;
    Ok(())
}
