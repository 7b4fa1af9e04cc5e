//! Sample catalog bundled with the binary.
//!
//! Timestamps are fixed around 2024-06-01 so listings sort the same way on
//! every run.

use catalog_core::store::parse_products_json;
use catalog_core::{CoreResult, Product, User};

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const USERS_JSON: &str = include_str!("../data/users.json");

pub fn sample_products() -> CoreResult<Vec<Product>> {
    parse_products_json(PRODUCTS_JSON)
}

pub fn sample_users() -> CoreResult<Vec<User>> {
    Ok(serde_json::from_str(USERS_JSON)?)
}
