//! # Catalog Dashboard Library
//!
//! Backend for the product catalog dashboard: configuration, shared state
//! and the commands the frontend calls. All business logic lives in
//! `catalog-core`.
//!
//! ## Module Organization
//! ```text
//! catalog_dashboard/
//! ├── lib.rs          ◄─── You are here (setup & run)
//! ├── seed.rs         ◄─── Bundled sample products and users
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── ProductStore, UserDirectory
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Product listing/CRUD commands
//! │   ├── user.rs     ◄─── User commands
//! │   ├── dashboard.rs◄─── Overview and charts
//! │   ├── price.rs    ◄─── Price text commit
//! │   └── config.rs   ◄─── Config command
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example
//! ```rust
//! use catalog_dashboard::commands::product::{list_products, ProductQuery};
//! use catalog_dashboard::seed;
//! use catalog_dashboard::state::{ConfigState, ProductStore};
//!
//! let store = ProductStore::new(seed::sample_products().unwrap());
//! let page = list_products(&store, &ConfigState::default(), ProductQuery::default()).unwrap();
//! assert_eq!(page.total, 15);
//! ```

pub mod commands;
pub mod error;
pub mod seed;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{ConfigState, ProductStore, UserDirectory};

/// Runs the dashboard once: seeds state and prints the overview JSON.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: info, debug for catalog crates; RUST_LOG overrides       │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env (CATALOG_* variables)                       │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • ProductStore: sample products behind a Mutex                      │
/// │     • UserDirectory: sample users, read-only                            │
/// │                                                                         │
/// │  4. Print Overview ───────────────────────────────────────────────────► │
/// │     • get_dashboard_overview as pretty JSON on stdout                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    info!("Starting catalog dashboard");

    let config = ConfigState::from_env();
    let store = ProductStore::new(seed::sample_products()?);
    let directory = UserDirectory::new(seed::sample_users()?);

    info!(
        store_name = %config.store_name,
        products = store.with_products(|state| state.products().len()),
        users = directory.len(),
        "State initialized"
    );

    let overview = commands::dashboard::get_dashboard_overview(&store, &directory, &config)?;
    println!("{}", serde_json::to_string_pretty(&overview)?);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=catalog_core=trace` - Show suppressed keystrokes too
/// - Default: INFO, DEBUG for the catalog crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,catalog=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
