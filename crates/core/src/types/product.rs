//! Products and cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ProductId;
use super::price::Price;

/// A product as offered on the storefront.
///
/// Only `id`, `name` and `price` are interpreted. Any other field present on
/// the product (image, cut, weight, ...) is kept in `attributes` and carried
/// through to the cart untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier; doubles as the cart line key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Passthrough product fields.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Create a product with no extra attributes.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            attributes: Map::new(),
        }
    }

    /// Attach an opaque attribute, replacing any previous value for `key`.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// One product entry in the cart.
///
/// Serialized as a flat object: `{"id", "name", "price", "quantity", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, assumed stable for the session.
    pub price: Price,
    /// Number of units. Callers adding items are trusted to pass positive values.
    pub quantity: i64,
    /// Passthrough product fields.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LineItem {
    /// Build a line from a product and a quantity.
    #[must_use]
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            attributes: product.attributes.clone(),
        }
    }

    /// `price × quantity`, saturating at the representable bounds.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount().saturating_mul(Decimal::from(self.quantity))
    }

    /// The product this line was built from.
    #[must_use]
    pub fn product(&self) -> Product {
        Product {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            attributes: self.attributes.clone(),
        }
    }
}
