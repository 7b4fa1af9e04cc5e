//! # Product Store
//!
//! Reducer-style state for the product list.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ProductsState Reducer                            │
//! │                                                                         │
//! │   Command ──► ProductAction ──► reduce() ──► ProductsState              │
//! │                                                                         │
//! │   SetLoading(bool)         loading flag                                 │
//! │   SetError(Option<..>)     error banner                                 │
//! │   AddProduct(input)        new id + timestamps, prepended               │
//! │   UpdateProduct(product)   replace by id, bump updated_at               │
//! │   DeleteProduct(id)        remove by id                                 │
//! │   SetProducts(list)        replace everything                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The initial list is always supplied by the caller; this module holds no
//! sample data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::types::{CreateProductInput, Product, ProductCategory, ProductStatus};

/// Default picture size for generated product images.
pub const DEFAULT_IMAGE_SIZE: u32 = 400;

/// Builds a placeholder image URL.
///
/// Each category owns a block of ten picture ids so that its products look
/// alike; `seed` picks one. Without a category a generic id is used.
///
/// ## Example
/// ```rust
/// use catalog_core::store::generate_image_url;
/// use catalog_core::types::ProductCategory;
///
/// assert_eq!(
///     generate_image_url(400, 400, Some(ProductCategory::Home), 2),
///     "https://picsum.photos/400/400?random=1203"
/// );
/// assert_eq!(
///     generate_image_url(200, 100, None, 42),
///     "https://picsum.photos/200/100?random=2042"
/// );
/// ```
pub fn generate_image_url(
    width: u32,
    height: u32,
    category: Option<ProductCategory>,
    seed: u64,
) -> String {
    let image_id = match category {
        Some(category) => {
            let block = ProductCategory::ALL
                .iter()
                .position(|candidate| *candidate == category)
                .unwrap_or(0) as u64;
            1001 + block * 100 + seed % 10
        }
        None => 2000 + seed % 100,
    };

    format!("https://picsum.photos/{}/{}?random={}", width, height, image_id)
}

/// Decodes a JSON array of products (seed files, imports).
pub fn parse_products_json(json: &str) -> CoreResult<Vec<Product>> {
    Ok(serde_json::from_str(json)?)
}

// =============================================================================
// Actions
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    SetLoading(bool),
    SetError(Option<String>),
    AddProduct(CreateProductInput),
    UpdateProduct(Product),
    DeleteProduct(String),
    SetProducts(Vec<Product>),
}

impl ProductAction {
    fn name(&self) -> &'static str {
        match self {
            ProductAction::SetLoading(_) => "set_loading",
            ProductAction::SetError(_) => "set_error",
            ProductAction::AddProduct(_) => "add_product",
            ProductAction::UpdateProduct(_) => "update_product",
            ProductAction::DeleteProduct(_) => "delete_product",
            ProductAction::SetProducts(_) => "set_products",
        }
    }
}

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProductsState {
    pub fn new(products: Vec<Product>) -> Self {
        ProductsState {
            products,
            loading: false,
            error: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Applies `action` using the current time for timestamps.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::store::{ProductAction, ProductsState};
    ///
    /// let mut state = ProductsState::new(Vec::new());
    /// state.reduce(ProductAction::SetLoading(true));
    /// assert!(state.loading);
    /// ```
    pub fn reduce(&mut self, action: ProductAction) {
        self.reduce_at(action, Utc::now());
    }

    /// Applies `action` with an explicit clock reading.
    pub fn reduce_at(&mut self, action: ProductAction, now: DateTime<Utc>) {
        let action_name = action.name();

        match action {
            ProductAction::SetLoading(loading) => self.loading = loading,
            ProductAction::SetError(error) => self.error = error,
            ProductAction::AddProduct(input) => {
                let product = new_product(input, now);
                debug!(action = action_name, id = %product.id, sku = %product.sku, "product added");
                self.products.insert(0, product);
                return;
            }
            ProductAction::UpdateProduct(mut product) => {
                match self.products.iter_mut().find(|existing| existing.id == product.id) {
                    Some(existing) => {
                        product.updated_at = now;
                        *existing = product;
                    }
                    None => {
                        debug!(action = action_name, id = %product.id, "update for unknown product ignored");
                        return;
                    }
                }
            }
            ProductAction::DeleteProduct(id) => self.products.retain(|product| product.id != id),
            ProductAction::SetProducts(products) => self.products = products,
        }

        debug!(action = action_name, count = self.products.len(), "products state reduced");
    }
}

fn new_product(input: CreateProductInput, now: DateTime<Utc>) -> Product {
    let id = Uuid::new_v4();
    let image_url = if input.image_url.trim().is_empty() {
        generate_image_url(
            DEFAULT_IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
            Some(input.category),
            id.as_u128() as u64,
        )
    } else {
        input.image_url
    };

    Product {
        id: id.to_string(),
        name: input.name,
        sku: input.sku,
        category: input.category,
        price_cents: input.price_cents,
        rating: 0.0,
        stock: input.stock,
        tags: input.tags,
        status: ProductStatus::Active,
        created_at: now,
        updated_at: now,
        description: input.description,
        dimensions: input.dimensions,
        image_url,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::error::CoreError;
    use chrono::TimeZone;

    fn input() -> CreateProductInput {
        CreateProductInput {
            name: "Yoga Mat".to_string(),
            sku: "FIT-030".to_string(),
            category: ProductCategory::Fitness,
            price_cents: 2999,
            stock: 40,
            tags: vec!["yoga".to_string()],
            description: "Non-slip mat".to_string(),
            dimensions: None,
            image_url: String::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_flags() {
        let mut state = ProductsState::new(sample_catalog());
        state.reduce_at(ProductAction::SetLoading(true), now());
        state.reduce_at(ProductAction::SetError(Some("offline".to_string())), now());
        assert!(state.loading);
        assert_eq!(state.error.as_deref(), Some("offline"));

        state.reduce_at(ProductAction::SetError(None), now());
        assert!(state.error.is_none());
        assert_eq!(state.products.len(), 5);
    }

    #[test]
    fn test_add_product_prepends_with_defaults() {
        let mut state = ProductsState::new(sample_catalog());
        state.reduce_at(ProductAction::AddProduct(input()), now());

        assert_eq!(state.products.len(), 6);
        let added = &state.products[0];
        assert!(Uuid::parse_str(&added.id).is_ok());
        assert_eq!(added.name, "Yoga Mat");
        assert_eq!(added.rating, 0.0);
        assert_eq!(added.status, ProductStatus::Active);
        assert_eq!(added.created_at, now());
        assert_eq!(added.updated_at, now());
        assert!(added.image_url.starts_with("https://picsum.photos/400/400?random=11"));
    }

    #[test]
    fn test_add_product_keeps_supplied_image() {
        let mut state = ProductsState::default();
        let mut with_image = input();
        with_image.image_url = "https://cdn.example.com/mat.png".to_string();
        state.reduce_at(ProductAction::AddProduct(with_image), now());

        assert_eq!(state.products[0].image_url, "https://cdn.example.com/mat.png");
    }

    #[test]
    fn test_update_product_bumps_timestamp() {
        let mut state = ProductsState::new(sample_catalog());
        let mut edited = state.products[2].clone();
        edited.stock = 5;
        state.reduce_at(ProductAction::UpdateProduct(edited), now());

        assert_eq!(state.products[2].stock, 5);
        assert_eq!(state.products[2].updated_at, now());
        assert_ne!(state.products[2].created_at, now());
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut state = ProductsState::new(sample_catalog());
        let before = state.clone();

        let mut stranger = state.products[0].clone();
        stranger.id = "p-999".to_string();
        state.reduce_at(ProductAction::UpdateProduct(stranger), now());

        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_and_set_products() {
        let mut state = ProductsState::new(sample_catalog());
        state.reduce_at(ProductAction::DeleteProduct("p-002".to_string()), now());
        assert_eq!(state.products.len(), 4);
        assert!(state.products.iter().all(|product| product.id != "p-002"));

        state.reduce_at(ProductAction::DeleteProduct("p-404".to_string()), now());
        assert_eq!(state.products.len(), 4);

        state.reduce_at(ProductAction::SetProducts(Vec::new()), now());
        assert!(state.products().is_empty());
    }

    #[test]
    fn test_generate_image_url() {
        assert_eq!(
            generate_image_url(400, 400, Some(ProductCategory::Electronics), 0),
            "https://picsum.photos/400/400?random=1001"
        );
        assert_eq!(
            generate_image_url(400, 300, Some(ProductCategory::HealthAndWellness), 19),
            "https://picsum.photos/400/300?random=1610"
        );
        assert_eq!(
            generate_image_url(400, 400, None, 199),
            "https://picsum.photos/400/400?random=2099"
        );
    }

    #[test]
    fn test_parse_products_json() {
        let json = serde_json::to_string(&sample_catalog()).unwrap();
        let products = parse_products_json(&json).unwrap();
        assert_eq!(products, sample_catalog());

        let err = parse_products_json("[{\"id\": 1}]").unwrap_err();
        assert!(matches!(err, CoreError::InvalidData(_)));
    }
}
