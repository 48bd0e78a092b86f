use std::fmt::Write as _;

use crate::app::customer::{render_menu_item_card, CartDrawer, CustomerHeader};
use crate::app::router::Route;
use crate::core::cart::CartStore;
use crate::domain::model::{CartItemInput, Vendor};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{Result, StorefrontError};

/// Result of navigating to `/customer/menu?vendor=ID`.
///
/// Only the `Menu` variant carries a cart handle, so the fallback page has
/// no way to touch the cart.
pub enum MenuScreen {
    Menu(VendorMenuPage),
    NotFound(VendorNotFoundPage),
}

impl MenuScreen {
    pub fn open(
        catalog: &dyn CatalogProvider,
        cart: &CartStore,
        vendor_id: Option<&str>,
        brand: &str,
    ) -> Self {
        match vendor_id.and_then(|id| catalog.vendor(id)) {
            Some(vendor) => {
                tracing::debug!(vendor_id = %vendor.id, "Vendor menu mounted");
                MenuScreen::Menu(VendorMenuPage::new(vendor.clone(), cart, brand))
            }
            None => {
                tracing::info!(vendor_id = ?vendor_id, "Vendor lookup missed, showing fallback");
                MenuScreen::NotFound(VendorNotFoundPage {
                    requested: vendor_id.map(str::to_string),
                })
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MenuScreen::NotFound(_))
    }

    pub fn render(&self) -> String {
        match self {
            MenuScreen::Menu(page) => page.render(),
            MenuScreen::NotFound(page) => page.render(),
        }
    }
}

pub struct VendorMenuPage {
    vendor: Vendor,
    cart: CartStore,
    header: CustomerHeader,
    drawer: CartDrawer,
}

impl VendorMenuPage {
    fn new(vendor: Vendor, cart: &CartStore, brand: &str) -> Self {
        Self {
            vendor,
            cart: cart.clone(),
            header: CustomerHeader::new(brand, cart, false),
            drawer: CartDrawer::new(cart),
        }
    }

    pub fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    pub fn add_to_cart(&self, item_id: &str) -> Result<()> {
        let item = self
            .vendor
            .menu_item(item_id)
            .ok_or_else(|| StorefrontError::MenuItemNotFound {
                item_id: item_id.to_string(),
            })?;
        self.cart.add_item(CartItemInput::from(item));
        Ok(())
    }

    pub fn header(&self) -> &CustomerHeader {
        &self.header
    }

    pub fn drawer(&self) -> &CartDrawer {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut CartDrawer {
        &mut self.drawer
    }

    pub fn render(&self) -> String {
        let mut out = self.header.render();
        let _ = writeln!(out, "\n\n[<- Back to Vendors: {}]", Route::VendorList);
        let _ = writeln!(out, "# {}", self.vendor.name);
        let _ = writeln!(out, "{}\n", self.vendor.description);
        for item in &self.vendor.menu {
            render_menu_item_card(&mut out, item);
        }
        if let Some(drawer) = self.drawer.render() {
            out.push('\n');
            out.push_str(&drawer);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VendorNotFoundPage {
    requested: Option<String>,
}

impl VendorNotFoundPage {
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    pub fn back_link(&self) -> Route {
        Route::VendorList
    }

    pub fn render(&self) -> String {
        let mut out = String::from("# Vendor Not Found\n");
        if let Some(id) = self.requested() {
            let _ = writeln!(out, "No vendor matches '{}'.", id);
        }
        let _ = writeln!(out, "[Back to Vendors: {}]", self.back_link());
        out
    }
}
