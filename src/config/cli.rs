use clap::{Parser, Subcommand};

use crate::config::toml_config::StorefrontConfig;
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "Food-ordering storefront screens rendered in the terminal")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Catalog file (TOML or JSON); overrides the config file
    #[arg(long)]
    pub catalog: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List vendors and their menus
    Vendors,
    /// Show one vendor's menu page
    Menu {
        /// Vendor identifier, e.g. vendor1
        vendor: String,
    },
    /// Interactive customer session reading commands from stdin
    Shop,
    /// Vendor order dashboard
    Dashboard {
        /// Keep the page open this long to receive the simulated order
        #[arg(long, default_value = "10")]
        watch_secs: u64,

        /// Status changes to apply, e.g. --set order1=ready
        #[arg(long = "set", value_parser = parse_status_change)]
        status_changes: Vec<(String, String)>,
    },
}

fn parse_status_change(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(id, status)| (id.trim().to_string(), status.trim().to_string()))
        .filter(|(id, status)| !id.is_empty() && !status.is_empty())
        .ok_or_else(|| format!("expected ORDER_ID=STATUS, got '{}'", raw))
}

impl CliConfig {
    /// Loads the config file if given and applies command-line overrides.
    pub fn load_settings(&self) -> Result<StorefrontConfig> {
        let mut settings = match &self.config {
            Some(path) => StorefrontConfig::from_file(path)?,
            None => StorefrontConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            settings.catalog.path = Some(catalog.clone());
        }

        Ok(settings)
    }
}
