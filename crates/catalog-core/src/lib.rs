//! # catalog-core: Pure Business Logic for the Catalog Dashboard
//!
//! The masked currency input engine plus the catalog queries, statistics
//! and reducer state behind the product dashboard. No I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Dashboard Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web UI)                            │   │
//! │  │   Product grid ──► New product form ──► Charts ──► Users        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 catalog-dashboard commands                      │   │
//! │  │   list_products, create_product, get_chart_data, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ catalog-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────────┐ ┌─────────┐ ┌────────┐ ┌───────┐ │   │
//! │  │  │ currency │ │currency_input│ │ catalog │ │ stats  │ │ store │ │   │
//! │  │  │ sanitize │ │ CurrencyInput│ │ filter  │ │ tiles  │ │reduce │ │   │
//! │  │  │ format   │ │ focus/blur   │ │ sort    │ │ charts │ │actions│ │   │
//! │  │  └──────────┘ └──────────────┘ └─────────┘ └────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Currency configuration, sanitizing, formatting, clamping
//! - [`currency_input`] - The masked input state machine
//! - [`types`] - Domain types (Product, User, form inputs, pages)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Product filtering, sorting, paging, lookups
//! - [`users`] - User filtering, sorting, lookups
//! - [`stats`] - Dashboard tiles and chart datasets
//! - [`store`] - Reducer-style product state
//! - [`format`] - Date and price display helpers
//! - [`validation`] - Form validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: prices are `i64` cents from keystroke to chart
//! 2. **No I/O**: the app crate owns configuration, state and logging setup
//! 3. **Explicit Errors**: typed errors; the mask engine rejects instead of failing
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::currency::CurrencyConfig;
//! use catalog_core::currency_input::CurrencyInput;
//!
//! let mut price = CurrencyInput::new(0, CurrencyConfig::default());
//! price.focus();
//! price.paste("$1,999");
//! assert_eq!(price.blur(), 199900);
//! assert_eq!(price.display_text(), "$1,999.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod currency;
pub mod currency_input;
pub mod error;
pub mod format;
pub mod money;
pub mod stats;
pub mod store;
pub mod types;
pub mod users;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use currency::{CurrencyConfig, SymbolPosition};
pub use currency_input::{Bounds, CurrencyInput, EditOutcome, InputSnapshot};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{ProductAction, ProductsState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level at or below which a product counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Rows per page when a listing does not ask for a size.
pub const DEFAULT_PAGE_SIZE: usize = 10;
