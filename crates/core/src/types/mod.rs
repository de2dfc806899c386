//! Core types for Prime Beef.
//!
//! This module provides type-safe wrappers for the cart's domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::ProductId;
pub use price::{Price, PriceError, format_amount};
pub use product::{LineItem, Product};
