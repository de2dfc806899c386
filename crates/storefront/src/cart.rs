//! Page-lifetime cart store.
//!
//! The store exclusively owns the ordered line-item list. Views read it
//! through the query methods and change it only through the mutation
//! methods, each of which rewrites the whole persisted blob before
//! notifying subscribers.

use std::fmt;

use prime_beef_core::{LineItem, Product, ProductId, format_amount};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::checkout::{CheckoutLink, CheckoutMessage};
use crate::error::{CartError, Result};
use crate::storage::KeyValueStore;

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "primeBeefCart";

/// Quantity used by [`CartStore::add_item`] when the caller passes `None`.
pub const DEFAULT_QUANTITY: i64 = 1;

/// A change that was applied to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// `quantity` units of `id` were added (new line or merged).
    ItemAdded { id: ProductId, quantity: i64 },
    /// The line for `id` was removed.
    ItemRemoved { id: ProductId },
    /// The line for `id` now holds `quantity` units.
    QuantityChanged { id: ProductId, quantity: i64 },
    /// Every line was removed.
    Cleared,
}

/// Receives cart change notifications.
///
/// Implemented for any `FnMut(&CartEvent, &[LineItem])`, so a view can
/// subscribe with a closure that drives its own "added to cart" toast.
pub trait CartObserver {
    /// Called after the change has been applied and persisted.
    fn cart_changed(&mut self, event: &CartEvent, items: &[LineItem]);
}

impl<F> CartObserver for F
where
    F: FnMut(&CartEvent, &[LineItem]),
{
    fn cart_changed(&mut self, event: &CartEvent, items: &[LineItem]) {
        self(event, items);
    }
}

/// Outcome of [`CartStore::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// The persisted blob was decoded; the cart now holds this many lines.
    Restored(usize),
    /// Nothing was persisted yet; the cart was left as it was.
    Missing,
    /// The blob could not be read or decoded; the cart was left as it was.
    Discarded,
}

/// The cart and its persistence.
pub struct CartStore<S> {
    items: Vec<LineItem>,
    storage: S,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create an empty cart over `storage`. Nothing is read yet.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self {
            items: Vec::new(),
            storage,
            observers: Vec::new(),
        }
    }

    /// Create a cart and hydrate it from `storage`.
    #[must_use]
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.initialize();
        store
    }

    /// Read and decode the persisted item list.
    ///
    /// Returns `Ok(None)` when nothing has been persisted.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the slot cannot be read and
    /// `CartError::Decode` if its contents are not an item list.
    pub fn load(&self) -> Result<Option<Vec<LineItem>>> {
        let Some(raw) = self.storage.get(CART_STORAGE_KEY)? else {
            return Ok(None);
        };
        let items = serde_json::from_str(&raw).map_err(CartError::Decode)?;
        Ok(Some(items))
    }

    /// Replace the current items with the persisted ones, if any.
    ///
    /// A missing or unreadable blob leaves the cart untouched; the failure is
    /// logged and reported only through the returned [`Hydration`].
    pub fn initialize(&mut self) -> Hydration {
        match self.load() {
            Ok(Some(items)) => {
                self.items = items;
                tracing::debug!(lines = self.items.len(), "Cart restored");
                Hydration::Restored(self.items.len())
            }
            Ok(None) => Hydration::Missing,
            Err(e) => {
                tracing::warn!("Ignoring persisted cart: {e}");
                Hydration::Discarded
            }
        }
    }

    /// Register a change subscriber.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Add `quantity` units of `product`, defaulting to one.
    ///
    /// An existing line for the same id keeps its position and has its
    /// quantity increased; otherwise a new line is appended. The quantity is
    /// not validated.
    ///
    /// # Errors
    ///
    /// Returns `CartError::QuantityOverflow` if the merged quantity does not
    /// fit, leaving the line unchanged, and `CartError` if the cart cannot be
    /// persisted.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn add_item(&mut self, product: &Product, quantity: Option<i64>) -> Result<()> {
        let quantity = quantity.unwrap_or(DEFAULT_QUANTITY);

        match self.position(&product.id) {
            Some(index) => {
                if let Some(line) = self.items.get_mut(index) {
                    line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
                        CartError::QuantityOverflow {
                            id: product.id.clone(),
                        }
                    })?;
                }
            }
            None => self.items.push(LineItem::from_product(product, quantity)),
        }

        self.save()?;
        self.notify_cart_changed(&CartEvent::ItemAdded {
            id: product.id.clone(),
            quantity,
        });
        Ok(())
    }

    /// Remove the line for `id`. Absent ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: &ProductId) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|line| &line.id != id);
        self.save()?;

        if self.items.len() != before {
            self.notify_cart_changed(&CartEvent::ItemRemoved { id: id.clone() });
        }
        Ok(())
    }

    /// Add one unit to the line for `id`. Absent ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns `CartError::QuantityOverflow` if the line is already at the
    /// maximum quantity and `CartError` if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn increase_quantity(&mut self, id: &ProductId) -> Result<()> {
        let Some(line) = self.items.iter_mut().find(|line| &line.id == id) else {
            return Ok(());
        };
        line.quantity = line
            .quantity
            .checked_add(1)
            .ok_or_else(|| CartError::QuantityOverflow { id: id.clone() })?;
        let quantity = line.quantity;

        self.save()?;
        self.notify_cart_changed(&CartEvent::QuantityChanged {
            id: id.clone(),
            quantity,
        });
        Ok(())
    }

    /// Take one unit from the line for `id`.
    ///
    /// A line holding a single unit (or fewer) is removed instead, so no
    /// line is ever left at zero.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn decrease_quantity(&mut self, id: &ProductId) -> Result<()> {
        let remaining = self.get(id).map(|line| line.quantity.saturating_sub(1));
        match remaining {
            Some(quantity) if quantity > 0 => {
                if let Some(line) = self.items.iter_mut().find(|line| &line.id == id) {
                    line.quantity = quantity;
                }
                self.save()?;
                self.notify_cart_changed(&CartEvent::QuantityChanged {
                    id: id.clone(),
                    quantity,
                });
                Ok(())
            }
            _ => self.remove_item(id),
        }
    }

    /// Remove every line.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) -> Result<()> {
        self.items.clear();
        self.save()?;
        self.notify_cart_changed(&CartEvent::Cleared);
        Ok(())
    }

    /// Outbound change hook.
    ///
    /// Without subscribers this only logs; otherwise each subscriber is
    /// called with the event and the current items.
    pub fn notify_cart_changed(&mut self, event: &CartEvent) {
        if self.observers.is_empty() {
            tracing::debug!(?event, "Cart updated");
            return;
        }
        for observer in &mut self.observers {
            observer.cart_changed(event, &self.items);
        }
    }

    /// Build the checkout link.
    ///
    /// `explicit_items`, when given and non-empty, are itemized instead of
    /// the stored cart. The total line always shows [`Self::total_price`].
    /// With nothing to itemize the message is a plain inquiry.
    #[must_use]
    pub fn build_checkout_message(&self, explicit_items: Option<&[LineItem]>) -> CheckoutLink {
        let items = match explicit_items {
            Some(items) if !items.is_empty() => items,
            _ => self.items.as_slice(),
        };
        CheckoutMessage::for_items(items, self.total()).into_link()
    }

    /// Access the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn save(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.items).map_err(CartError::Encode)?;
        self.storage.set(CART_STORAGE_KEY, &blob)?;
        Ok(())
    }
}

impl<S> CartStore<S> {
    /// Current lines, in first-added order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price × quantity` over all lines, saturating at the
    /// representable bounds.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// [`Self::total`] with two fractional digits; `"0.00"` when empty.
    #[must_use]
    pub fn total_price(&self) -> String {
        format_amount(self.total())
    }

    /// Sum of all quantities; `0` when empty.
    #[must_use]
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|line| &line.id == id)
    }
}
