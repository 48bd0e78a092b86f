use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::model::{MenuItem, Order, OrderLine, OrderStatus, Vendor, VendorProfile};
use crate::domain::ports::{CatalogProvider, VendorWorkspace};

fn menu_item(id: &str, name: &str, description: &str, cents: i64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
    }
}

fn line(name: &str, quantity: u32) -> OrderLine {
    OrderLine {
        name: name.to_string(),
        quantity,
    }
}

fn fixed_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 7, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Built-in demo data for both the customer and vendor screens.
#[derive(Debug, Clone)]
pub struct SampleData {
    vendors: Vec<Vendor>,
}

impl SampleData {
    pub fn new() -> Self {
        Self {
            vendors: vec![
                Vendor {
                    id: "vendor1".to_string(),
                    name: "Tasty Bites".to_string(),
                    description: "Delicious street food and snacks.".to_string(),
                    menu: vec![
                        menu_item(
                            "item1",
                            "Veggie Burger",
                            "A healthy veggie patty with fresh toppings.",
                            799,
                        ),
                        menu_item("item2", "Fries", "Crispy golden fries.", 299),
                    ],
                },
                Vendor {
                    id: "vendor2".to_string(),
                    name: "Spice Corner".to_string(),
                    description: "Authentic Indian cuisine.".to_string(),
                    menu: vec![
                        menu_item(
                            "item3",
                            "Chicken Curry",
                            "Spicy and flavorful chicken curry.",
                            1099,
                        ),
                        menu_item("item4", "Naan Bread", "Soft, fresh naan.", 199),
                    ],
                },
            ],
        }
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for SampleData {
    fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }
}

impl VendorWorkspace for SampleData {
    fn initial_orders(&self) -> Vec<Order> {
        vec![
            Order {
                id: "order1".to_string(),
                customer_name: "Alice".to_string(),
                items: vec![line("Veggie Burger", 2), line("Fries", 1)],
                status: OrderStatus::Pending,
                created_at: fixed_time(10, 0),
            },
            Order {
                id: "order2".to_string(),
                customer_name: "Bob".to_string(),
                items: vec![line("Chicken Curry", 1)],
                status: OrderStatus::Preparing,
                created_at: fixed_time(10, 5),
            },
        ]
    }

    fn incoming_order(&self, created_at: DateTime<Utc>) -> Order {
        Order {
            id: "order3".to_string(),
            customer_name: "Charlie".to_string(),
            items: vec![line("Naan Bread", 3)],
            status: OrderStatus::Pending,
            created_at,
        }
    }

    fn menu(&self) -> Vec<MenuItem> {
        let mut menu: Vec<MenuItem> = self.vendors[0].menu.clone();
        menu.push(self.vendors[1].menu[0].clone());
        menu
    }

    fn profile(&self) -> VendorProfile {
        VendorProfile {
            name: self.vendors[0].name.clone(),
            description: self.vendors[0].description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let data = SampleData::new();
        assert_eq!(data.vendors().len(), 2);
        assert_eq!(data.vendor("vendor2").unwrap().name, "Spice Corner");
        assert!(data.vendor("vendor9").is_none());
        assert!(data.require_vendor("vendor9").is_err());
    }

    #[test]
    fn test_vendor_workspace_seed() {
        let data = SampleData::new();
        let menu = data.menu();
        let names: Vec<&str> = menu.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Veggie Burger", "Fries", "Chicken Curry"]);

        let orders = data.initial_orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[1].status, OrderStatus::Preparing);

        assert_eq!(data.profile().name, "Tasty Bites");
    }
}
