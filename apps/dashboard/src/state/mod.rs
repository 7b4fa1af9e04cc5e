//! # State Module
//!
//! Manages application state for the dashboard.
//!
//! Separate state types instead of one `AppState`, so each command declares
//! exactly what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      run() / UI shell                           │   │
//! │  │  ProductStore::new(seed::sample_products()?)                    │   │
//! │  │  UserDirectory::new(seed::sample_users()?)                      │   │
//! │  │  ConfigState::from_env()                                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ ProductStore │  │UserDirectory │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Vec<    │  │  store_name      │              │
//! │  │  Products    │  │    User      │  │  currency        │              │
//! │  │  State>>     │  │  >>          │  │  low_stock       │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ProductStore: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • UserDirectory: Read-only after initialization                       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;

pub use catalog::{ProductStore, UserDirectory};
pub use config::{ConfigState, DASHBOARD_LOW_STOCK_THRESHOLD, MAX_PAGE_SIZE};
