use std::fmt::Write as _;

use crate::app::customer::CartView;
use crate::core::cart::CartStore;
use crate::utils::format::format_price;

/// Slide-over cart panel. Renders nothing while closed.
#[derive(Debug)]
pub struct CartDrawer {
    cart: CartStore,
    view: CartView,
    open: bool,
}

impl CartDrawer {
    pub fn new(cart: &CartStore) -> Self {
        Self {
            cart: cart.clone(),
            view: CartView::attach(cart),
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn remove_item(&self, id: &str) -> bool {
        self.cart.remove_item(id)
    }

    /// The "Clear Cart" button is disabled on an empty cart.
    pub fn clear(&self) -> bool {
        if !self.can_clear() {
            return false;
        }
        self.cart.clear_cart();
        true
    }

    pub fn can_checkout(&self) -> bool {
        !self.view.snapshot().is_empty()
    }

    pub fn can_clear(&self) -> bool {
        !self.view.snapshot().is_empty()
    }

    pub fn render(&self) -> Option<String> {
        if !self.open {
            return None;
        }

        let snapshot = self.view.snapshot();
        let mut out = String::from("== Your Cart ==  [Close]\n");

        if snapshot.is_empty() {
            out.push_str("Your cart is empty.\n");
        } else {
            for line in snapshot.items() {
                let _ = writeln!(
                    out,
                    "  {} x{}  {}  [Remove {}]",
                    line.name,
                    line.quantity,
                    format_price(line.line_total()),
                    line.name
                );
            }
        }

        let _ = writeln!(out, "Total: {}", format_price(snapshot.total()));
        let state = if snapshot.is_empty() { " (disabled)" } else { "" };
        let _ = writeln!(out, "[Checkout{}]  [Clear Cart{}]", state, state);
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CartItemInput;
    use rust_decimal::Decimal;

    fn burger() -> CartItemInput {
        CartItemInput {
            id: "item1".to_string(),
            name: "Veggie Burger".to_string(),
            price: Decimal::new(799, 2),
        }
    }

    #[test]
    fn test_closed_drawer_renders_nothing() {
        let cart = CartStore::new();
        let drawer = CartDrawer::new(&cart);
        assert!(drawer.render().is_none());
    }

    #[test]
    fn test_empty_drawer_disables_buttons() {
        let cart = CartStore::new();
        let mut drawer = CartDrawer::new(&cart);
        drawer.open();

        let rendered = drawer.render().unwrap();
        assert!(rendered.contains("Your cart is empty."));
        assert!(rendered.contains("Total: $0.00"));
        assert!(rendered.contains("[Checkout (disabled)]"));
        assert!(!drawer.can_checkout());
        assert!(!drawer.clear());
    }

    #[test]
    fn test_line_totals_and_total() {
        let cart = CartStore::new();
        let mut drawer = CartDrawer::new(&cart);
        drawer.open();

        cart.add_item(burger());
        cart.add_item(burger());

        let rendered = drawer.render().unwrap();
        assert!(rendered.contains("Veggie Burger x2  $15.98"));
        assert!(rendered.contains("Total: $15.98"));
        assert!(drawer.can_checkout());
    }

    #[test]
    fn test_remove_and_clear_through_drawer() {
        let cart = CartStore::new();
        let drawer = CartDrawer::new(&cart);
        cart.add_item(burger());

        assert!(drawer.remove_item("item1"));
        assert!(!drawer.remove_item("item1"));
        cart.add_item(burger());
        assert!(drawer.clear());
        assert_eq!(cart.item_count(), 0);
    }
}
