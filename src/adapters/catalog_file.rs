use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::domain::model::Vendor;
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{price_problem, validate_path, Validate};

/// Read-only catalog loaded from a TOML or JSON document:
///
/// ```toml
/// [[vendors]]
/// id = "vendor1"
/// name = "Tasty Bites"
/// description = "Delicious street food and snacks."
///
/// [[vendors.menu]]
/// id = "item1"
/// name = "Veggie Burger"
/// description = "A healthy veggie patty with fresh toppings."
/// price = "7.99"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCatalog {
    vendors: Vec<Vendor>,
}

impl FileCatalog {
    /// Picks the format from the file extension (`.json`, anything else is TOML).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_path("catalog.path", &path.to_string_lossy())?;

        let content = std::fs::read_to_string(path)?;
        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };

        tracing::info!(
            path = %path.display(),
            vendors = catalog.vendors.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Self =
            toml::from_str(content).map_err(|e| StorefrontError::ConfigValidationError {
                field: "catalog".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Validate for FileCatalog {
    fn validate(&self) -> Result<()> {
        let mut vendor_ids = HashSet::new();
        // The cart merges lines by item id, so ids are unique catalog-wide.
        let mut item_ids = HashSet::new();
        for vendor in &self.vendors {
            if !vendor_ids.insert(vendor.id.as_str()) {
                return Err(StorefrontError::InvalidConfigValueError {
                    field: "vendors.id".to_string(),
                    value: vendor.id.clone(),
                    reason: "Vendor ids must be unique".to_string(),
                });
            }

            for item in &vendor.menu {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(StorefrontError::InvalidConfigValueError {
                        field: "vendors.menu.id".to_string(),
                        value: item.id.clone(),
                        reason: format!("Menu item id repeated in vendor '{}'", vendor.id),
                    });
                }
                if let Some(reason) = price_problem(item.price) {
                    return Err(StorefrontError::InvalidConfigValueError {
                        field: "vendors.menu.price".to_string(),
                        value: item.price.to_string(),
                        reason,
                    });
                }
            }
        }
        Ok(())
    }
}

impl CatalogProvider for FileCatalog {
    fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }
}
