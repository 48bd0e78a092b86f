use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input for '{field}': {reason}")]
    FormValidation { field: String, reason: String },

    #[error("Vendor not found: {vendor_id}")]
    VendorNotFound { vendor_id: String },

    #[error("Menu item not found: {item_id}")]
    MenuItemNotFound { item_id: String },

    #[error("No record at position {index}")]
    RecordNotFound { index: usize },

    #[error("Unknown route: {path}")]
    UnknownRoute { path: String },

    #[error("Timers need a running tokio runtime")]
    RuntimeUnavailable,

    #[error("Unrecognized command: {input}")]
    CommandParseError { input: String },
}

impl StorefrontError {
    pub fn form(field: &str, reason: impl Into<String>) -> Self {
        StorefrontError::FormValidation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StorefrontError::IoError(e) => format!("Could not read a file: {}", e),
            StorefrontError::SerializationError(e) => format!("Catalog data is malformed: {}", e),
            StorefrontError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            StorefrontError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            StorefrontError::FormValidation { field, reason } => {
                format!("Please fix the {} field: {}", field, reason)
            }
            StorefrontError::VendorNotFound { vendor_id } => {
                format!("No vendor called '{}' exists", vendor_id)
            }
            StorefrontError::MenuItemNotFound { item_id, .. } => {
                format!("'{}' is not on this menu", item_id)
            }
            StorefrontError::RecordNotFound { index } => {
                format!("There is no entry number {}", index + 1)
            }
            StorefrontError::UnknownRoute { path } => format!("Page '{}' does not exist", path),
            StorefrontError::RuntimeUnavailable => "Background timers could not start".to_string(),
            StorefrontError::CommandParseError { input } => {
                format!("Did not understand '{}'", input)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StorefrontError::IoError(_) => "Check that the file exists and is readable",
            StorefrontError::SerializationError(_) => {
                "Validate the catalog file against the documented vendors/menu layout"
            }
            StorefrontError::ConfigValidationError { .. }
            | StorefrontError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags and retry"
            }
            StorefrontError::FormValidation { .. } => {
                "Fill in every required field and use a non-negative price"
            }
            StorefrontError::VendorNotFound { .. } | StorefrontError::UnknownRoute { .. } => {
                "Go back to the vendor list and pick an existing vendor"
            }
            StorefrontError::MenuItemNotFound { .. } | StorefrontError::RecordNotFound { .. } => {
                "Re-render the page and choose one of the listed entries"
            }
            StorefrontError::RuntimeUnavailable => "Start the page from inside a tokio runtime",
            StorefrontError::CommandParseError { .. } => "Type 'help' to list available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
