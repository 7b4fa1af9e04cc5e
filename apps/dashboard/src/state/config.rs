//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CATALOG_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use catalog_core::currency::{format_cents, CurrencyConfig, SymbolPosition};
use catalog_core::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Low-stock threshold used by the dashboard page.
pub const DASHBOARD_LOW_STOCK_THRESHOLD: i64 = 20;

/// Hard cap on rows per page.
pub const MAX_PAGE_SIZE: usize = 100;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the dashboard header)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// How prices are masked and displayed
    pub currency: CurrencyConfig,

    /// Stock level at or below which a product is flagged
    pub low_stock_threshold: i64,

    /// Rows per page when a listing does not ask for a size
    pub page_size: usize,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Shopfront Dev Catalog"
    /// - Currency: USD ($, 2 places, symbol first)
    /// - Low stock: 20
    /// - Page size: 10
    fn default() -> Self {
        ConfigState {
            store_name: "Shopfront Dev Catalog".to_string(),
            currency_code: "USD".to_string(),
            currency: CurrencyConfig::default(),
            low_stock_threshold: DASHBOARD_LOW_STOCK_THRESHOLD,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CATALOG_STORE_NAME`: Override store name
    /// - `CATALOG_CURRENCY_CODE`: Override currency code (e.g., "EUR")
    /// - `CATALOG_CURRENCY_SYMBOL`: Override currency symbol
    /// - `CATALOG_DECIMAL_PLACES`: Fraction digits (0-9)
    /// - `CATALOG_SYMBOL_POSITION`: `before` or `after`
    /// - `CATALOG_LOW_STOCK_THRESHOLD`: Non-negative stock level
    /// - `CATALOG_PAGE_SIZE`: Rows per page (1-100)
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("CATALOG_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(code) = lookup("CATALOG_CURRENCY_CODE") {
            config.currency_code = code.trim().to_uppercase();
        }

        let mut currency = config.currency.clone();

        if let Some(symbol) = lookup("CATALOG_CURRENCY_SYMBOL") {
            currency.symbol = symbol;
        }

        if let Some(raw) = lookup("CATALOG_DECIMAL_PLACES") {
            match raw.trim().parse::<u32>() {
                Ok(places) => currency.decimal_places = places,
                Err(_) => warn!(value = %raw, "Ignoring invalid CATALOG_DECIMAL_PLACES"),
            }
        }

        if let Some(raw) = lookup("CATALOG_SYMBOL_POSITION") {
            match raw.trim().to_lowercase().as_str() {
                "before" => currency.symbol_position = SymbolPosition::Before,
                "after" => currency.symbol_position = SymbolPosition::After,
                _ => warn!(value = %raw, "Ignoring invalid CATALOG_SYMBOL_POSITION"),
            }
        }

        match currency.validate() {
            Ok(()) => config.currency = currency,
            Err(e) => warn!(error = %e, "Ignoring currency overrides"),
        }

        if let Some(raw) = lookup("CATALOG_LOW_STOCK_THRESHOLD") {
            match raw.trim().parse::<i64>() {
                Ok(threshold) if threshold >= 0 => config.low_stock_threshold = threshold,
                _ => warn!(value = %raw, "Ignoring invalid CATALOG_LOW_STOCK_THRESHOLD"),
            }
        }

        if let Some(raw) = lookup("CATALOG_PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => config.page_size = size,
                _ => warn!(value = %raw, "Ignoring invalid CATALOG_PAGE_SIZE"),
            }
        }

        config
    }

    /// Formats a cent amount with the configured currency.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_dashboard::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(123456789), "$1,234,567.89");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        format_cents(cents, &self.currency)
    }

    /// Resolves a requested page size against the default and the cap.
    pub fn page_size_or_default(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|size| *size > 0)
            .unwrap_or(self.page_size)
            .min(MAX_PAGE_SIZE)
    }
}
