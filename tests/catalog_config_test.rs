use rust_decimal::Decimal;
use std::io::Write;
use std::rc::Rc;
use storefront::domain::ports::CatalogProvider;
use storefront::utils::validation::Validate;
use storefront::{CartStore, CustomerSession, FileCatalog, StorefrontConfig, StorefrontError, VendorListPage};
use tempfile::{Builder, TempDir};

const CATALOG_TOML: &str = r#"
[[vendors]]
id = "noodles"
name = "Noodle Bar"
description = "Hand-pulled noodles."

[[vendors.menu]]
id = "ramen"
name = "Shoyu Ramen"
description = "Soy broth, chashu, egg."
price = 12.5

[[vendors.menu]]
id = "gyoza"
name = "Gyoza"
description = "Six pan-fried dumplings."
price = "5.25"
"#;

#[test]
fn test_toml_catalog_file_drives_customer_pages() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(CATALOG_TOML.as_bytes()).unwrap();

    let catalog = FileCatalog::from_file(file.path()).unwrap();
    assert_eq!(catalog.vendors().len(), 1);
    assert_eq!(
        catalog.require_vendor("noodles").unwrap().menu[0].price,
        Decimal::new(1250, 2)
    );

    let session = CustomerSession::begin(Rc::new(catalog), "Night Market");
    let menu = session.navigate_to("/customer/menu?vendor=noodles").unwrap();
    menu.add_to_cart("ramen").unwrap();
    menu.add_to_cart("gyoza").unwrap();
    assert_eq!(session.cart().total(), Decimal::new(1775, 2));

    let rendered = menu.render();
    assert!(rendered.starts_with("Night Market"));
    assert!(rendered.contains("Shoyu Ramen (ramen)  $12.50"));
}

#[test]
fn test_json_catalog_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let toml_catalog = FileCatalog::from_toml_str(CATALOG_TOML).unwrap();

    let path = dir.path().join("catalog.json");
    std::fs::write(&path, toml_catalog.to_json().unwrap()).unwrap();

    let json_catalog = FileCatalog::from_file(&path).unwrap();
    assert!(json_catalog.validate().is_ok());
    assert_eq!(json_catalog.vendors(), toml_catalog.vendors());

    let page = VendorListPage::mount(Rc::new(json_catalog), &CartStore::new(), "CharityEats");
    assert!(page.render().contains("## Noodle Bar"));
}

#[test]
fn test_missing_catalog_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = FileCatalog::from_file(dir.path().join("nope.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, StorefrontError::IoError(_)));
    assert!(!err.user_friendly_message().is_empty());
}

#[test]
fn test_unknown_vendor_lookup_errors() {
    let catalog = FileCatalog::from_toml_str(CATALOG_TOML).unwrap();
    assert!(matches!(
        catalog.require_vendor("vendor1"),
        Err(StorefrontError::VendorNotFound { .. })
    ));
}

#[test]
fn test_config_file_with_catalog_section() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(
        br#"
[storefront]
name = "Night Market"

[timers]
new_order_delay_ms = 250

[catalog]
path = "menus/noodles.toml"
"#,
    )
    .unwrap();

    let config = StorefrontConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.timers.new_order_delay_ms, 250);
    assert_eq!(config.timers.flash_message_ms, 2_000);
    assert_eq!(config.catalog.path.as_deref(), Some("menus/noodles.toml"));
    assert!(!config.json_logging());
}
