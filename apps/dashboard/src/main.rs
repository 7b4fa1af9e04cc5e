//! # Catalog Dashboard Entry Point
//!
//! Loads the sample catalog and prints the dashboard overview as JSON.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `CATALOG_*` variables
//! 3. Seed state from the bundled sample data
//! 4. Print the overview

use std::process::ExitCode;

fn main() -> ExitCode {
    match catalog_dashboard::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("catalog-dashboard: {}", e);
            ExitCode::FAILURE
        }
    }
}
