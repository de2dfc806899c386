//! Product page navigation helpers.
//!
//! Product detail pages are addressed as `product.html?id=<id>` relative to
//! the current page.

use prime_beef_core::ProductId;
use url::Url;

/// Relative path of the product detail page.
pub const PRODUCT_PAGE: &str = "product.html";

/// Query parameter carrying the product id.
pub const PRODUCT_ID_PARAM: &str = "id";

/// URL of the detail page for `id`, resolved against the current page.
///
/// # Errors
///
/// Returns `url::ParseError` if `base` cannot be joined with the page path
/// (e.g. a `data:` URL).
pub fn product_detail_url(base: &Url, id: &ProductId) -> Result<Url, url::ParseError> {
    let mut url = base.join(PRODUCT_PAGE)?;
    url.query_pairs_mut()
        .clear()
        .append_pair(PRODUCT_ID_PARAM, id.as_str());
    Ok(url)
}

/// First value of query parameter `name`, if present.
#[must_use]
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// The product id a detail page was opened for.
#[must_use]
pub fn requested_product(url: &Url) -> Option<ProductId> {
    query_param(url, PRODUCT_ID_PARAM)
        .filter(|id| !id.is_empty())
        .map(ProductId::from)
}
