//! Shopping Cart State
//!
//! [`Cart`] owns the ordered sequence of line items. Items are only ever
//! appended; nothing here removes or rewrites an item once it is stored.
//!
//! # Read policy
//!
//! [`Cart::items`] hands out a borrowed view, so it always reflects the
//! current contents and cannot be held across an append. Callers that need
//! to keep the contents around use [`Cart::snapshot`], which copies them and
//! is unaffected by later appends.
//!
//! There is no internal locking. Share a cart between threads by wrapping it,
//! e.g. `Mutex<Cart>`.

use super::{error::CartError, models::CartItem};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// In-memory holder of an ordered sequence of cart items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the end of the cart.
    ///
    /// The item is stored as given; see [`Cart::try_add_item`] for a checked
    /// variant.
    pub fn add_item(&mut self, item: CartItem) {
        trace!(id = %item.id, "adding item to cart");
        self.items.push(item);
        trace!(len = self.items.len(), "cart updated");
    }

    /// Validates `item` and appends it when valid.
    ///
    /// The cart is left untouched when validation fails.
    pub fn try_add_item(&mut self, item: CartItem) -> Result<(), CartError> {
        if let Err(err) = item.validate() {
            warn!(error = %err, "rejected cart item");
            return Err(err);
        }
        self.add_item(item);
        Ok(())
    }

    /// Current items, in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Owned copy of the current items
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Consumes the cart, returning its items
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<CartItem> for Cart {
    fn extend<I: IntoIterator<Item = CartItem>>(&mut self, iter: I) {
        for item in iter {
            self.add_item(item);
        }
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        let mut cart = Cart::new();
        cart.extend(iter);
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();
        assert_eq!(cart.items().len(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn add_item_accepts_malformed_items() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("", "Refund", -5.0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].price, -5.0);
    }

    #[test]
    fn try_add_item_leaves_cart_unchanged_on_error() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Item 1", 10.0));

        let err = cart
            .try_add_item(CartItem::new("2", "Item 2", -1.0))
            .unwrap_err();

        assert!(matches!(err, CartError::InvalidPrice { .. }));
        assert_eq!(cart.snapshot(), vec![CartItem::new("1", "Item 1", 10.0)]);
    }

    #[test]
    fn try_add_item_appends_valid_item() {
        let mut cart = Cart::new();
        cart.try_add_item(CartItem::new("1", "Item 1", 10.0)).unwrap();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn extend_keeps_iteration_order() {
        let mut cart: Cart = vec![CartItem::new("a", "A", 1.0)].into_iter().collect();
        cart.extend([CartItem::new("b", "B", 2.0), CartItem::new("c", "C", 3.0)]);

        let ids: Vec<&str> = cart.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn serializes_as_item_list() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("1", "Item 1", 10.0));

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            value,
            json!({ "items": [{ "id": "1", "name": "Item 1", "price": 10.0 }] })
        );

        let back: Cart = serde_json::from_value(value).unwrap();
        assert_eq!(back, cart);
    }
}
