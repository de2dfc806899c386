//! Prime Beef Storefront library.
//!
//! Page-lifetime cart state for the storefront: the [`cart::CartStore`]
//! owns the line items and persists them after every mutation, the
//! [`checkout`] module turns a cart into a messaging link, and [`ui`] holds
//! the transient per-view flags rendered next to it.
//!
//! # Architecture
//!
//! - Views read the cart and issue mutation calls; they never edit the item
//!   list directly.
//! - Persistence goes through the [`storage::KeyValueStore`] trait, backed by
//!   memory or one JSON file per key.
//! - Change notification is pull-based (re-query totals on render) plus an
//!   optional [`cart::CartObserver`] hook.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod navigation;
pub mod storage;
pub mod ui;

pub use cart::{CART_STORAGE_KEY, CartEvent, CartObserver, CartStore, Hydration};
pub use checkout::{CheckoutLink, CheckoutMessage};
pub use error::{CartError, Result};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use ui::UiState;
