//! Shopping Cart Library
//!
//! A minimal in-memory shopping cart: an ordered list of line items that
//! only grows by appending.

// Domain modules
pub mod cart;

// Infrastructure
pub mod logging;

pub use cart::{Cart, CartError, CartItem};
