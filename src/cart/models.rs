//! Shopping Cart Domain Models
//!
//! This module contains the line item stored by a [`Cart`](super::Cart).

use super::error::CartError;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Represents one line item in the shopping cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Caller-assigned identifier (uniqueness is not enforced)
    pub id: String,

    /// Display name of the product
    pub name: String,

    /// Unit price, currency unspecified
    pub price: f64,
}

impl CartItem {
    /// Creates a new line item. No checks are performed here.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    /// Checks that the item is well formed.
    ///
    /// # Errors
    ///
    /// * [`CartError::MissingId`] when the identifier is empty or whitespace.
    /// * [`CartError::InvalidPrice`] when the price is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.id.trim().is_empty() {
            return Err(CartError::MissingId {
                name: self.name.clone(),
            });
        }

        // `-0.0 < 0.0` is false, so negative zero passes.
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CartError::InvalidPrice {
                id: self.id.clone(),
                price: self.price,
            });
        }

        Ok(())
    }
}
