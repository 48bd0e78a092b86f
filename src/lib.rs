pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FileCatalog, SampleData};
pub use app::customer::{CartDrawer, MenuScreen, VendorListPage, VendorMenuPage};
pub use app::vendor::{MenuEditorPage, OrderDashboard, OrderTab, ProfileEditorPage};
pub use app::{CustomerSession, CustomerShell, Route};
pub use config::StorefrontConfig;
pub use core::cart::{CartSnapshot, CartStore};
pub use utils::error::{Result, StorefrontError};
