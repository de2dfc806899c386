//! Checkout and navigation links.

use std::io::Write;

use prime_beef_core::ProductId;
use prime_beef_storefront::navigation::product_detail_url;
use prime_beef_storefront::{CartStore, KeyValueStore};
use url::Url;

use super::CommandError;

/// `pb-cli checkout`: print the messaging link for the stored cart.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn link<S: KeyValueStore>(
    store: &CartStore<S>,
    with_message: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let link = store.build_checkout_message(None);
    if with_message {
        writeln!(out, "{}\n", link.message())?;
    }
    writeln!(out, "{link}")?;
    Ok(())
}

/// `pb-cli product-url`.
///
/// # Errors
///
/// Returns an error if the URL cannot be built or output cannot be written.
pub fn product_url(base: &Url, id: &ProductId, out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "{}", product_detail_url(base, id)?)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use prime_beef_core::{Price, Product};
    use prime_beef_storefront::MemoryStorage;

    use super::*;

    #[test]
    fn test_empty_cart_prints_inquiry_link() {
        let store = CartStore::new(MemoryStorage::new());
        let mut out = Vec::new();
        link(&store, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "https://wa.me/96170608543?text=Hello%2C%20I%20would%20like%20to%20make%20an%20inquiry.\n"
        );
    }

    #[test]
    fn test_link_with_message() {
        let mut store = CartStore::new(MemoryStorage::new());
        store
            .add_item(&Product::new("T", "Tenderloin", Price::from_cents(1500)), Some(2))
            .unwrap();

        let mut out = Vec::new();
        link(&store, true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Hello, I would like to place the following order:"));
        assert!(text.contains("Tenderloin (2 × $15.00)"));
        assert!(text.contains("https://wa.me/96170608543?text="));
    }

    #[test]
    fn test_product_url() {
        let base = Url::parse("http://localhost:3000/").unwrap();
        let mut out = Vec::new();
        product_url(&base, &"ribeye".into(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "http://localhost:3000/product.html?id=ribeye\n"
        );
    }
}
