use std::rc::Rc;

use crate::app::customer::{CartDrawer, MenuScreen, VendorListPage};
use crate::app::router::Route;
use crate::core::cart::CartStore;
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{Result, StorefrontError};

/// A customer page currently on screen.
pub enum CustomerScreen {
    VendorList(VendorListPage),
    Menu(MenuScreen),
}

impl CustomerScreen {
    pub fn render(&self) -> String {
        match self {
            CustomerScreen::VendorList(page) => page.render(),
            CustomerScreen::Menu(screen) => screen.render(),
        }
    }

    /// Adds through the visible page. The not-found fallback has no menu.
    pub fn add_to_cart(&self, item_id: &str) -> Result<()> {
        match self {
            CustomerScreen::VendorList(page) => page.add_to_cart(item_id),
            CustomerScreen::Menu(MenuScreen::Menu(page)) => page.add_to_cart(item_id),
            CustomerScreen::Menu(MenuScreen::NotFound(_)) => Err(StorefrontError::MenuItemNotFound {
                item_id: item_id.to_string(),
            }),
        }
    }

    pub fn drawer(&self) -> Option<&CartDrawer> {
        match self {
            CustomerScreen::VendorList(page) => Some(page.drawer()),
            CustomerScreen::Menu(MenuScreen::Menu(page)) => Some(page.drawer()),
            CustomerScreen::Menu(MenuScreen::NotFound(_)) => None,
        }
    }

    pub fn drawer_mut(&mut self) -> Option<&mut CartDrawer> {
        match self {
            CustomerScreen::VendorList(page) => Some(page.drawer_mut()),
            CustomerScreen::Menu(MenuScreen::Menu(page)) => Some(page.drawer_mut()),
            CustomerScreen::Menu(MenuScreen::NotFound(_)) => None,
        }
    }
}

/// One browsing session: owns the cart that every customer page shares.
pub struct CustomerSession {
    catalog: Rc<dyn CatalogProvider>,
    cart: CartStore,
    brand: String,
}

impl CustomerSession {
    pub fn begin(catalog: Rc<dyn CatalogProvider>, brand: &str) -> Self {
        tracing::info!("Customer session started");
        Self {
            catalog,
            cart: CartStore::new(),
            brand: brand.to_string(),
        }
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn navigate(&self, route: &Route) -> Result<CustomerScreen> {
        tracing::debug!(route = %route, "Navigating");
        match route {
            Route::VendorList => Ok(CustomerScreen::VendorList(VendorListPage::mount(
                Rc::clone(&self.catalog),
                &self.cart,
                &self.brand,
            ))),
            Route::VendorMenu { vendor_id } => Ok(CustomerScreen::Menu(MenuScreen::open(
                self.catalog.as_ref(),
                &self.cart,
                vendor_id.as_deref(),
                &self.brand,
            ))),
            other => Err(StorefrontError::UnknownRoute { path: other.path() }),
        }
    }

    pub fn navigate_to(&self, path: &str) -> Result<CustomerScreen> {
        self.navigate(&Route::parse(path)?)
    }

    /// Ends the session; the cart does not outlive it.
    pub fn end(self) {
        self.cart.clear_cart();
        tracing::info!("Customer session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SampleData;

    #[test]
    fn test_cart_is_shared_across_pages() {
        let session = CustomerSession::begin(Rc::new(SampleData::new()), "CharityEats");

        let home = session.navigate(&Route::VendorList).unwrap();
        home.add_to_cart("item1").unwrap();

        let menu = session.navigate_to("/customer/menu?vendor=vendor1").unwrap();
        menu.add_to_cart("item1").unwrap();

        assert_eq!(session.cart().item_count(), 2);
        assert_eq!(session.cart().items().len(), 1);
        assert!(home.render().contains("Cart (2 items in cart)"));
    }

    #[test]
    fn test_not_found_screen_has_no_cart_access() {
        let session = CustomerSession::begin(Rc::new(SampleData::new()), "CharityEats");
        let screen = session.navigate_to("/customer/menu?vendor=nope").unwrap();

        assert!(screen.drawer().is_none());
        assert!(screen.add_to_cart("item1").is_err());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_vendor_routes_are_not_customer_screens() {
        let session = CustomerSession::begin(Rc::new(SampleData::new()), "CharityEats");
        assert!(matches!(
            session.navigate(&Route::OrderDashboard),
            Err(StorefrontError::UnknownRoute { .. })
        ));
    }
}
