use std::fmt;
use std::str::FromStr;
use url::{form_urlencoded, Url};

use crate::utils::error::{Result, StorefrontError};

const BASE: &str = "http://storefront.local/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    VendorList,
    /// `/customer/menu?vendor=ID`. A missing `vendor` parameter is kept as
    /// `None` so the page can render its not-found fallback.
    VendorMenu { vendor_id: Option<String> },
    OrderDashboard,
    MenuEditor,
    ProfileEditor,
}

impl Route {
    pub fn parse(path: &str) -> Result<Self> {
        let unknown = || StorefrontError::UnknownRoute {
            path: path.to_string(),
        };

        let base = Url::parse(BASE).map_err(|_| unknown())?;
        let url = base.join(path.trim()).map_err(|_| unknown())?;
        if url.host_str() != base.host_str() {
            return Err(unknown());
        }

        let route = match url.path().trim_end_matches('/') {
            "" | "/customer" => Route::VendorList,
            "/customer/menu" => Route::VendorMenu {
                vendor_id: url
                    .query_pairs()
                    .find(|(key, _)| key == "vendor")
                    .map(|(_, value)| value.into_owned())
                    .filter(|value| !value.is_empty()),
            },
            "/vendor" => Route::OrderDashboard,
            "/vendor/menu" => Route::MenuEditor,
            "/vendor/profile" => Route::ProfileEditor,
            _ => return Err(unknown()),
        };

        Ok(route)
    }

    pub fn vendor_menu(vendor_id: impl Into<String>) -> Self {
        Route::VendorMenu {
            vendor_id: Some(vendor_id.into()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::VendorList => "/customer".to_string(),
            Route::VendorMenu { vendor_id: None } => "/customer/menu".to_string(),
            Route::VendorMenu {
                vendor_id: Some(id),
            } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("vendor", id)
                    .finish();
                format!("/customer/menu?{}", query)
            }
            Route::OrderDashboard => "/vendor".to_string(),
            Route::MenuEditor => "/vendor/menu".to_string(),
            Route::ProfileEditor => "/vendor/profile".to_string(),
        }
    }
}

impl FromStr for Route {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
