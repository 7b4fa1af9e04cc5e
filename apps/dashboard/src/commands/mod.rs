//! # Commands Module
//!
//! All commands exposed to the dashboard frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── product.rs    ◄─── Product listing, CRUD, suggestions
//! ├── user.rs       ◄─── User listing and lookup
//! ├── dashboard.rs  ◄─── Overview tiles and chart data
//! ├── price.rs      ◄─── Committing raw price text
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  listProducts({ category: 'Fitness', sortBy: 'price', page: 2 })        │
//! │         │                                                               │
//! │         │ (JSON)                                                        │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn list_products(                                                      │
//! │      store: &ProductStore,   ◄── Shared state                          │
//! │      config: &ConfigState,   ◄── Page size default                     │
//! │      query: ProductQuery,    ◄── From the request                      │
//! │  ) -> Result<Page<Product>, ApiError>                                   │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { items, total, page, limit }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

pub mod config;
pub mod dashboard;
pub mod price;
pub mod product;
pub mod user;
