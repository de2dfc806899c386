//! Type-safe unit price using decimal arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative unit price in the store's single currency.
///
/// Prices are stored as JSON numbers so blobs stay readable by the page
/// scripts, and decode from either numbers or decimal strings.
///
/// ## Examples
///
/// ```
/// use prime_beef_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::from_cents(1500);
/// assert_eq!(price.to_fixed(), "15.00");
/// assert_eq!(price.display(), "$15.00");
///
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Currency symbol used when rendering prices.
    pub const SYMBOL: &'static str = "$";

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    ///
    /// Negative inputs are clamped to zero.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents.max(0), 2))
    }

    /// The raw decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount rendered with exactly two fractional digits, e.g. `"9.99"`.
    #[must_use]
    pub fn to_fixed(&self) -> String {
        format_amount(self.0)
    }

    /// The amount with its currency symbol, e.g. `"$9.99"`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", Self::SYMBOL, self.to_fixed())
    }
}

/// Render a decimal with two fractional digits, rounding midpoints away from zero.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_negative_rejected() {
        let result = Price::new(Decimal::from_str("-0.01").unwrap());
        assert!(matches!(result, Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_zero_allowed() {
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_to_fixed_pads_whole_numbers() {
        let price = Price::new(Decimal::from(15)).unwrap();
        assert_eq!(price.to_fixed(), "15.00");
    }

    #[test]
    fn test_format_amount_rounds_midpoint_away_from_zero() {
        assert_eq!(format_amount(Decimal::from_str("2.345").unwrap()), "2.35");
        assert_eq!(format_amount(Decimal::from_str("2.344").unwrap()), "2.34");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_serializes_as_number() {
        let price = Price::from_cents(999);
        assert_eq!(serde_json::to_string(&price).unwrap(), "9.99");
    }

    #[test]
    fn test_deserializes_numbers_and_strings() {
        let price: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(price, Price::from_cents(999));

        let price: Price = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(price.to_fixed(), "12.50");

        let price: Price = serde_json::from_str("15").unwrap();
        assert_eq!(price.display(), "$15.00");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-4").is_err());
    }
}
