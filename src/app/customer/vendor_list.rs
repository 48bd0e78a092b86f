use std::fmt::Write as _;
use std::rc::Rc;

use crate::app::customer::{render_menu_item_card, CartDrawer, CustomerHeader};
use crate::app::router::Route;
use crate::core::cart::CartStore;
use crate::domain::model::{CartItemInput, MenuItem};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{Result, StorefrontError};

/// Customer home: every vendor with its menu cards.
pub struct VendorListPage {
    catalog: Rc<dyn CatalogProvider>,
    cart: CartStore,
    header: CustomerHeader,
    drawer: CartDrawer,
}

impl VendorListPage {
    pub fn mount(catalog: Rc<dyn CatalogProvider>, cart: &CartStore, brand: &str) -> Self {
        tracing::debug!(vendors = catalog.vendors().len(), "Vendor list mounted");
        Self {
            header: CustomerHeader::new(brand, cart, true),
            drawer: CartDrawer::new(cart),
            cart: cart.clone(),
            catalog,
        }
    }

    fn find_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.catalog
            .vendors()
            .iter()
            .find_map(|vendor| vendor.menu_item(item_id))
    }

    pub fn add_to_cart(&self, item_id: &str) -> Result<()> {
        let item = self
            .find_item(item_id)
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
        out.push_str("\n\nVendors\n");

        for vendor in self.catalog.vendors() {
            let _ = writeln!(out, "\n## {}", vendor.name);
            let _ = writeln!(out, "{}", vendor.description);
            let _ = writeln!(out, "[View Menu: {}]", Route::vendor_menu(&vendor.id));
            for item in &vendor.menu {
                render_menu_item_card(&mut out, item);
            }
        }

        if let Some(drawer) = self.drawer.render() {
            out.push('\n');
            out.push_str(&drawer);
        }
        out
    }
}
