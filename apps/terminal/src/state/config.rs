//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PIZZA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is built once in `run()` and passed by reference; nothing
//! reads it through a global.

use std::path::PathBuf;

use directories::ProjectDirs;
use pizza_core::Money;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Folder holding `sizes.json`, `crusts.json` and `toppings.json`.
    pub catalog_dir: PathBuf,

    /// Store name shown in the banner.
    pub store_name: String,

    /// Currency symbol placed before every price
    pub currency_symbol: String,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Catalog: `<data dir>/catalog` (e.g. `~/.local/share/pizza-builder/catalog`),
    ///   or `./data/catalog` when no home directory can be determined
    /// - Currency: USD ($)
    fn default() -> Self {
        ConfigState {
            catalog_dir: default_catalog_dir(),
            store_name: "Pizza Builder".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

fn default_catalog_dir() -> PathBuf {
    ProjectDirs::from("com", "pizza", "pizza-builder")
        .map(|dirs| dirs.data_dir().join("catalog"))
        .unwrap_or_else(|| PathBuf::from("data/catalog"))
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PIZZA_CATALOG_DIR`: Override the catalog folder
    /// - `PIZZA_STORE_NAME`: Override the store name
    /// - `PIZZA_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(dir) = lookup("PIZZA_CATALOG_DIR") {
            config.catalog_dir = PathBuf::from(dir);
        }

        if let Some(store_name) = lookup("PIZZA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("PIZZA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a price with the configured currency symbol.
    ///
    /// ```rust
    /// use pizza_core::Money;
    /// use pizza_terminal_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_cents(1050)), "$10.50");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_money_uses_configured_symbol() {
        let config = ConfigState::default();
        assert_eq!(config.format_money(Money::from_cents(50)), "$0.50");
        assert_eq!(config.format_money(Money::zero()), "$0.00");

        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_money(Money::from_cents(1050)), "€10.50");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PIZZA_CATALOG_DIR", "/srv/catalog"),
            ("PIZZA_CURRENCY_SYMBOL", "€"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.catalog_dir, PathBuf::from("/srv/catalog"));
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.store_name, "Pizza Builder");
    }
}
