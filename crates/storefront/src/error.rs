//! Unified error handling for cart operations.
//!
//! Provides a `CartError` type returned by every fallible `CartStore`
//! operation. Missing items are not errors; only storage, serialization and
//! quantity overflow failures surface here.

use prime_beef_core::ProductId;
use thiserror::Error;

use crate::storage::StorageError;

/// Cart-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// Reading or writing the persisted blob failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The item list could not be serialized.
    #[error("Failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    /// The persisted blob is not a valid item list.
    #[error("Failed to decode cart: {0}")]
    Decode(#[source] serde_json::Error),

    /// A quantity change would not fit in the line's counter.
    #[error("Quantity overflow for product {id}")]
    QuantityOverflow { id: ProductId },
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::Storage(StorageError::InvalidKey("../cart".to_string()));
        assert_eq!(err.to_string(), "Storage error: invalid storage key: ../cart");

        let err = CartError::QuantityOverflow { id: "A".into() };
        assert_eq!(err.to_string(), "Quantity overflow for product A");

        let decode = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = CartError::Decode(decode);
        assert!(err.to_string().starts_with("Failed to decode cart:"));
    }
}
