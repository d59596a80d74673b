//! Shopping Cart Domain Module
//!
//! This module contains the shopping cart itself:
//! - Domain models (CartItem)
//! - The Cart holder and its read/append operations
//! - Validation errors for the checked append path
//! - Small helpers (identifiers, summaries)

pub mod error;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::CartError;
pub use models::CartItem;
pub use state::Cart;
