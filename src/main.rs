use anyhow::{ensure, Result};
use shopping_cart::cart::helpers::format_item_summary;
use shopping_cart::logging::setup_tracing;
use shopping_cart::{Cart, CartItem};
use tracing::info;

/// Runs one demo scenario and checks the resulting item count.
fn run_scenario(name: &str, items: Vec<CartItem>) -> Result<()> {
    let expected = items.len();

    let mut cart = Cart::new();
    for item in items {
        cart.add_item(item);
    }

    info!(
        scenario = name,
        len = cart.len(),
        items = %format_item_summary(cart.items()),
        "scenario finished"
    );

    ensure!(
        cart.len() == expected,
        "scenario {name}: expected {expected} items, got {}",
        cart.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    setup_tracing();

    run_scenario("single item", vec![CartItem::new("1", "Test Item", 9.99)])?;
    run_scenario(
        "multiple items",
        vec![
            CartItem::new("1", "Item 1", 10.0),
            CartItem::new("2", "Item 2", 20.0),
        ],
    )?;
    run_scenario("empty cart", Vec::new())?;

    let cart: Cart = [CartItem::new("1", "Item 1", 10.0)].into_iter().collect();
    info!(cart = %serde_json::to_string(&cart)?, "final cart");

    Ok(())
}
