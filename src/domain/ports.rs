use chrono::{DateTime, Utc};

use crate::domain::model::{MenuItem, Order, Vendor, VendorProfile};
use crate::utils::error::{Result, StorefrontError};

/// Read-only source of vendors and their menus for customer screens.
pub trait CatalogProvider {
    fn vendors(&self) -> &[Vendor];

    fn vendor(&self, vendor_id: &str) -> Option<&Vendor> {
        self.vendors().iter().find(|v| v.id == vendor_id)
    }

    fn require_vendor(&self, vendor_id: &str) -> Result<&Vendor> {
        self.vendor(vendor_id)
            .ok_or_else(|| StorefrontError::VendorNotFound {
                vendor_id: vendor_id.to_string(),
            })
    }
}

/// Seed data for the vendor-side pages. Every page instance takes its own copy.
pub trait VendorWorkspace {
    fn initial_orders(&self) -> Vec<Order>;

    /// The order injected by the dashboard's arrival simulation.
    fn incoming_order(&self, created_at: DateTime<Utc>) -> Order;

    fn menu(&self) -> Vec<MenuItem>;

    fn profile(&self) -> VendorProfile;
}
