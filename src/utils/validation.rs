use crate::utils::error::{Result, StorefrontError};
use rust_decimal::Decimal;
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(StorefrontError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Form-side equivalent of an HTML `required` attribute.
pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StorefrontError::form(field_name, "this field is required"));
    }
    Ok(())
}

/// Highest price a menu item may carry.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 2);

/// Returns why `price` is not a valid menu price, if it is not: negative,
/// finer than a cent, or above `MAX_PRICE`.
pub fn price_problem(price: Decimal) -> Option<String> {
    if price.is_sign_negative() && !price.is_zero() {
        return Some("price cannot be negative".to_string());
    }
    if price.normalize().scale() > 2 {
        return Some("price cannot have more than two decimal places".to_string());
    }
    if price > MAX_PRICE {
        return Some(format!("price cannot exceed {}", MAX_PRICE));
    }
    None
}

/// Parses a price input the way a `type="number" min="0" step="0.01"` field
/// accepts it.
pub fn validate_price(field_name: &str, value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StorefrontError::form(field_name, "this field is required"));
    }

    let price = Decimal::from_str(trimmed)
        .map_err(|_| StorefrontError::form(field_name, format!("'{}' is not a number", trimmed)))?;

    match price_problem(price) {
        Some(reason) => Err(StorefrontError::form(field_name, reason)),
        None => Ok(price),
    }
}
