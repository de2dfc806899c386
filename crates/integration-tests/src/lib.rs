//! Integration tests for the Prime Beef cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p prime-beef-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Mutation semantics and totals
//! - `persistence` - Round trips through memory and file storage
//! - `checkout` - Order summary and messaging link
//!
//! Shared fixtures live here so every test file builds the same catalog.

#![cfg_attr(not(test), forbid(unsafe_code))]

use prime_beef_core::{Price, Product};

/// Ribeye, id `A`, $9.99.
#[must_use]
pub fn ribeye() -> Product {
    Product::new("A", "Ribeye", Price::from_cents(999))
}

/// Brisket, id `B`, $22.50.
#[must_use]
pub fn brisket() -> Product {
    Product::new("B", "Brisket", Price::from_cents(2250))
}

/// Tenderloin, id `T`, $15.00.
#[must_use]
pub fn tenderloin() -> Product {
    Product::new("T", "Tenderloin", Price::from_cents(1500))
}

/// A product with an arbitrary id and a price in cents.
#[must_use]
pub fn product(id: &str, cents: i64) -> Product {
    Product::new(id, format!("Cut {id}"), Price::from_cents(cents))
}
