//! Shopping Cart Helpers
//!
//! Small pure functions used around cart operations and log output.

use super::models::CartItem;
use uuid::Uuid;

/// Returns a fresh identifier for callers that have none of their own.
///
/// The cart itself never assigns identifiers; this only saves callers from
/// inventing one.
pub fn new_item_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"Item 1 (10.00), Item 2 (20.00)"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{} ({:.2})", i.name, i.price))
        .collect::<Vec<_>>()
        .join(", ")
}
