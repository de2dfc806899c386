//! Checkout hand-off through a messaging link.
//!
//! There is no payment step: checkout means opening a chat with the shop
//! with the order pre-filled. The recipient and endpoint are fixed.

use std::fmt;

use prime_beef_core::{LineItem, Price, format_amount};
use rust_decimal::Decimal;

/// Messaging service the link points at.
pub const MESSAGING_ENDPOINT: &str = "https://wa.me";

/// The shop's messaging number.
pub const RECIPIENT: &str = "96170608543";

/// Browsing context the link is meant to open in.
pub const LINK_TARGET: &str = "_blank";

const INQUIRY_GREETING: &str = "Hello, I would like to make an inquiry.";
const ORDER_GREETING: &str = "Hello, I would like to place the following order:";

/// Human-readable order summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutMessage(String);

impl CheckoutMessage {
    /// Summarize `items` closed by a `total` line, or fall back to a plain
    /// inquiry when there are none.
    ///
    /// ```text
    /// Hello, I would like to place the following order:
    ///
    /// • Tenderloin (2 × $15.00)
    ///
    /// Total: $30.00
    /// ```
    #[must_use]
    pub fn for_items(items: &[LineItem], total: Decimal) -> Self {
        if items.is_empty() {
            return Self(INQUIRY_GREETING.to_string());
        }

        let mut text = format!("{ORDER_GREETING}\n\n");
        for line in items {
            text.push_str(&format!(
                "• {} ({} × {})\n",
                line.name,
                line.quantity,
                line.price.display()
            ));
        }

        text.push_str(&format!("\nTotal: {}{}", Price::SYMBOL, format_amount(total)));

        Self(text)
    }

    /// The plain message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encode the message onto the messaging endpoint.
    #[must_use]
    pub fn into_link(self) -> CheckoutLink {
        let url = format!(
            "{MESSAGING_ENDPOINT}/{RECIPIENT}?text={}",
            urlencoding::encode(&self.0)
        );
        CheckoutLink {
            message: self.0,
            url,
        }
    }
}

/// A ready-to-open checkout URL together with the message it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLink {
    message: String,
    url: String,
}

impl CheckoutLink {
    /// The unencoded message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The full messaging URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The browsing context to open [`Self::url`] in.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        LINK_TARGET
    }
}

impl fmt::Display for CheckoutLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use prime_beef_core::Product;

    use super::*;

    fn tenderloin(quantity: i64) -> LineItem {
        LineItem::from_product(
            &Product::new("T", "Tenderloin", Price::from_cents(1500)),
            quantity,
        )
    }

    #[test]
    fn test_inquiry_when_empty() {
        let message = CheckoutMessage::for_items(&[], Decimal::ZERO);
        assert_eq!(message.as_str(), "Hello, I would like to make an inquiry.");
    }

    #[test]
    fn test_order_summary() {
        let message = CheckoutMessage::for_items(&[tenderloin(2)], Decimal::from(30));
        assert_eq!(
            message.as_str(),
            "Hello, I would like to place the following order:\n\n\
             • Tenderloin (2 × $15.00)\n\
             \nTotal: $30.00"
        );
    }

    #[test]
    fn test_total_line_uses_given_total() {
        let message = CheckoutMessage::for_items(&[tenderloin(2)], Decimal::new(999, 2));
        assert!(message.as_str().contains("Tenderloin (2 × $15.00)"));
        assert!(message.as_str().ends_with("\nTotal: $9.99"));
    }

    #[test]
    fn test_link_is_percent_encoded() {
        let link = CheckoutMessage::for_items(&[tenderloin(1)], Decimal::from(15)).into_link();

        assert!(link.url().starts_with("https://wa.me/96170608543?text=Hello%2C%20I"));
        assert!(link.url().contains("%E2%80%A2%20Tenderloin"));
        assert!(!link.url().contains(' '));
        assert!(!link.url().contains('\n'));
        assert_eq!(link.to_string(), link.url());
        assert_eq!(link.target(), "_blank");
    }

    #[test]
    fn test_link_decodes_back_to_message() {
        let link = CheckoutMessage::for_items(&[tenderloin(3)], Decimal::from(45)).into_link();
        let encoded = link.url().split_once("?text=").unwrap().1;
        assert_eq!(urlencoding::decode(encoded).unwrap(), link.message());
    }
}
