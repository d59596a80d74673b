//! Error types for cart item validation.

use thiserror::Error;

/// Reasons an item is refused by [`Cart::try_add_item`](super::Cart::try_add_item).
///
/// [`Cart::add_item`](super::Cart::add_item) never produces these.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The unit price is negative, NaN or infinite.
    #[error("Invalid price for item {id}: {price}")]
    InvalidPrice { id: String, price: f64 },

    /// The identifier is empty or whitespace.
    #[error("Missing identifier for item {name:?}")]
    MissingId { name: String },
}
