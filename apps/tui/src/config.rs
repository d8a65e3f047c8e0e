//! # Shop Configuration
//!
//! Presentation-level configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPFRONT_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use shopfront_core::Money;

/// Shop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    /// Store name shown in the header.
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,

    /// Optional catalog file; when unset the built-in seed is used.
    pub catalog_path: Option<PathBuf>,

    /// Log file path.
    pub log_path: PathBuf,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            store_name: "Shopfront".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            catalog_path: None,
            log_path: PathBuf::from("shopfront.log"),
        }
    }
}

impl ShopConfig {
    /// Creates a ShopConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPFRONT_STORE_NAME`: Override store name
    /// - `SHOPFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `SHOPFRONT_CATALOG`: Path to a JSON catalog file
    /// - `SHOPFRONT_LOG`: Log file path
    pub fn from_env() -> Self {
        let mut config = ShopConfig::default();

        if let Ok(store_name) = std::env::var("SHOPFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("SHOPFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(path) = std::env::var("SHOPFRONT_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("SHOPFRONT_LOG") {
            config.log_path = PathBuf::from(path);
        }

        config
    }

    /// Formats a money amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ShopConfig::default();
    /// assert_eq!(config.format_money(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
