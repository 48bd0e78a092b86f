pub mod cart;
pub mod editor;
pub mod timer;

pub use crate::domain::model::{CartItemInput, CartLineItem, MenuItem, Order, OrderStatus, Vendor};
pub use crate::domain::ports::{CatalogProvider, VendorWorkspace};
pub use crate::utils::error::Result;
pub use cart::{CartSnapshot, CartStore, Subscription};
pub use editor::Draft;
pub use timer::{OneShotTimer, PageEvents, TransientMessage};
