// ============================================================================
// Customer Screens
// ============================================================================
//
// Every customer page receives the session's CartStore handle and binds its
// cart-dependent widgets (header badge, drawer) through CartView, which keeps
// a snapshot current via a store subscription.
//
// ============================================================================

pub mod cart_drawer;
pub mod vendor_list;
pub mod vendor_menu;

pub use cart_drawer::CartDrawer;
pub use vendor_list::VendorListPage;
pub use vendor_menu::{MenuScreen, VendorMenuPage, VendorNotFoundPage};

use std::cell::{Cell, Ref, RefCell};
use std::fmt::Write as _;
use std::rc::Rc;

use crate::app::router::Route;
use crate::core::cart::{CartSnapshot, CartStore, Subscription};
use crate::domain::model::MenuItem;
use crate::utils::format::format_price;

/// A cart snapshot refreshed by the store after every mutation.
#[derive(Debug)]
pub struct CartView {
    snapshot: Rc<RefCell<CartSnapshot>>,
    refreshes: Rc<Cell<u64>>,
    _subscription: Subscription,
}

impl CartView {
    pub fn attach(cart: &CartStore) -> Self {
        let snapshot = Rc::new(RefCell::new(cart.snapshot()));
        let refreshes = Rc::new(Cell::new(0));

        let slot = Rc::clone(&snapshot);
        let counter = Rc::clone(&refreshes);
        let subscription = cart.subscribe(move |latest| {
            *slot.borrow_mut() = latest.clone();
            counter.set(counter.get() + 1);
        });

        Self {
            snapshot,
            refreshes,
            _subscription: subscription,
        }
    }

    pub fn snapshot(&self) -> Ref<'_, CartSnapshot> {
        self.snapshot.borrow()
    }

    /// Number of store notifications received, i.e. re-renders triggered.
    pub fn refreshes(&self) -> u64 {
        self.refreshes.get()
    }
}

/// Top navigation bar with the cart badge.
#[derive(Debug)]
pub struct CustomerHeader {
    brand: String,
    view: CartView,
    show_account_links: bool,
}

impl CustomerHeader {
    pub fn new(brand: &str, cart: &CartStore, show_account_links: bool) -> Self {
        Self {
            brand: brand.to_string(),
            view: CartView::attach(cart),
            show_account_links,
        }
    }

    /// Badge value; `None` hides the badge.
    pub fn badge(&self) -> Option<u32> {
        let count = self.view.snapshot().item_count();
        (count > 0).then_some(count)
    }

    pub fn cart_view(&self) -> &CartView {
        &self.view
    }

    pub fn render(&self) -> String {
        let mut out = format!("{} [{}]", self.brand, Route::VendorList);
        if self.show_account_links {
            out.push_str(" | Orders | Favorites");
        }
        match self.badge() {
            Some(count) => {
                let _ = write!(out, " | Cart ({} items in cart)", count);
            }
            None => out.push_str(" | Cart"),
        }
        out
    }
}

pub(crate) fn render_menu_item_card(out: &mut String, item: &MenuItem) {
    let _ = writeln!(out, "  * {} ({})  {}", item.name, item.id, format_price(item.price));
    let _ = writeln!(out, "      {}", item.description);
    let _ = writeln!(out, "      [Add to Cart]");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CartItemInput;
    use rust_decimal::Decimal;

    fn fries() -> CartItemInput {
        CartItemInput {
            id: "item2".to_string(),
            name: "Fries".to_string(),
            price: Decimal::new(299, 2),
        }
    }

    #[test]
    fn test_badge_tracks_store() {
        let cart = CartStore::new();
        let header = CustomerHeader::new("CharityEats", &cart, true);
        assert_eq!(header.badge(), None);
        assert!(header.render().ends_with("| Cart"));

        cart.add_item(fries());
        cart.add_item(fries());
        assert_eq!(header.badge(), Some(2));
        assert!(header.render().contains("Cart (2 items in cart)"));
        assert_eq!(header.cart_view().refreshes(), 2);
    }

    #[test]
    fn test_dropping_view_unsubscribes() {
        let cart = CartStore::new();
        let view = CartView::attach(&cart);
        assert_eq!(cart.subscriber_count(), 1);
        drop(view);
        assert_eq!(cart.subscriber_count(), 0);
    }
}
