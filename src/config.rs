//! Catalog Configuration
//!
//! Parsing and validation of the static configuration document.

use std::collections::HashSet;

use log::LevelFilter;

use crate::error::ConfigError;
use crate::models::Catalog;

/// Location of the configuration document, relative to the page
pub const CONFIG_PATH: &str = "public/grocery.json";

/// Parse and validate a configuration document
pub fn parse_config(text: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog =
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&catalog)?;
    Ok(catalog)
}

fn validate(catalog: &Catalog) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for item in &catalog.items {
        if !seen.insert(item.id) {
            return Err(ConfigError::Invalid(format!("duplicate item id {}", item.id)));
        }
        if item.name.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("item {} has no name", item.id)));
        }
    }

    if !catalog.user.shopkeeper_mobile.chars().any(|c| c.is_ascii_digit()) {
        return Err(ConfigError::Invalid("user.shopkeeperMobile has no digits".to_string()));
    }

    let choices = catalog.unit_choices();
    if choices.is_empty() {
        return Err(ConfigError::Invalid("no units configured".to_string()));
    }
    if let Some(unit) = &catalog.settings.default_unit {
        if !choices.contains(unit) {
            return Err(ConfigError::Invalid(format!(
                "default unit {:?} is not a configured unit",
                unit
            )));
        }
    }
    Ok(())
}

/// Map `settings.logLevel` to a filter; unknown names fall back to Info
pub fn log_level(name: &str) -> LevelFilter {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
