use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{validate_one_of, validate_path, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub storefront: BrandingConfig,
    #[serde(default)]
    pub timers: TimerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingConfig {
    pub name: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            name: "CharityEats".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Delay between mounting the order dashboard and the simulated order.
    pub new_order_delay_ms: u64,
    /// Lifetime of notifications and "saved" messages.
    pub flash_message_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            new_order_delay_ms: 8_000,
            flash_message_ms: 2_000,
        }
    }
}

impl TimerConfig {
    pub fn new_order_delay(&self) -> Duration {
        Duration::from_millis(self.new_order_delay_ms)
    }

    pub fn flash_message_ttl(&self) -> Duration {
        Duration::from_millis(self.flash_message_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file; the built-in sample data is used when absent.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StorefrontError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StorefrontError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static pattern compiles")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn json_logging(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for StorefrontConfig {
    fn validate(&self) -> Result<()> {
        if self.storefront.name.trim().is_empty() {
            return Err(StorefrontError::InvalidConfigValueError {
                field: "storefront.name".to_string(),
                value: self.storefront.name.clone(),
                reason: "Name cannot be empty".to_string(),
            });
        }

        validate_positive_number("timers.new_order_delay_ms", self.timers.new_order_delay_ms, 1)?;
        validate_positive_number("timers.flash_message_ms", self.timers.flash_message_ms, 1)?;

        if let Some(path) = &self.catalog.path {
            validate_path("catalog.path", path)?;
        }

        validate_one_of(
            "logging.level",
            &self.logging.level,
            &["trace", "debug", "info", "warn", "error"],
        )?;
        validate_one_of("logging.format", &self.logging.format, &["compact", "json"])?;

        Ok(())
    }
}
