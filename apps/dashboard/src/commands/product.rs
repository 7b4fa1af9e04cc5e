//! # Product Commands
//!
//! Listing, lookup and CRUD over the shared product store.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing Flow                                 │
//! │                                                                         │
//! │  ProductQuery { search, category, minPrice, sortBy, page, limit }       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_search_query (length cap)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_products ──► sort_products ──► paginate                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Page<Product> to the grid                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::catalog::{
    filter_products, find_product_by_id, paginate, search_suggestions as suggest, sort_products,
    ProductFilters, ProductSortKey, DEFAULT_SUGGESTION_LIMIT,
};
use catalog_core::validation::{
    validate_create_product, validate_description, validate_dimensions, validate_price_cents,
    validate_product_name, validate_search_query, validate_sku, validate_stock,
    validate_unique_sku,
};
use catalog_core::{
    CoreError, CreateProductInput, Page, Product, ProductAction, SortOrder, UpdateProductInput,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, ProductStore};

/// Query parameters of the product grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductQuery {
    #[serde(flatten)]
    pub filters: ProductFilters,
    pub sort_by: ProductSortKey,
    pub sort_order: SortOrder,
    /// 1-based; 0 reads as 1.
    pub page: usize,
    /// Falls back to the configured page size.
    pub limit: Option<usize>,
}

/// Filters, sorts and pages the catalog.
pub fn list_products(
    store: &ProductStore,
    config: &ConfigState,
    query: ProductQuery,
) -> Result<Page<Product>, ApiError> {
    let mut filters = query.filters;
    if let Some(search) = filters.search.take() {
        filters.search = Some(validate_search_query(&search)?);
    }
    let limit = config.page_size_or_default(query.limit);

    debug!(
        sort_by = ?query.sort_by,
        sort_order = ?query.sort_order,
        page = query.page,
        limit,
        "list_products command"
    );

    let page = store.with_products(|state| {
        let matching = filter_products(state.products(), &filters);
        let sorted = sort_products(&matching, query.sort_by, query.sort_order);
        paginate(&sorted, query.page, limit)
    });

    debug!(total = page.total, returned = page.items.len(), "list_products complete");
    Ok(page)
}

pub fn get_product_by_id(store: &ProductStore, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product_by_id command");
    store
        .with_products(|state| find_product_by_id(state.products(), id).cloned())
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()).into())
}

/// Validates the form and prepends the new product.
///
/// ## Returns
/// The stored product with its generated id, timestamps and image.
pub fn create_product(store: &ProductStore, input: CreateProductInput) -> Result<Product, ApiError> {
    debug!(sku = %input.sku, "create_product command");
    validate_create_product(&input)?;

    let product = store.with_products_mut(|state| -> Result<Product, ApiError> {
        validate_unique_sku(&input.sku, state.products(), None)?;
        state.reduce(ProductAction::AddProduct(input));
        state
            .products()
            .first()
            .cloned()
            .ok_or_else(|| ApiError::internal("Product was not stored"))
    })?;

    info!(id = %product.id, sku = %product.sku, "Product created");
    Ok(product)
}

/// Merges a partial edit into an existing product.
pub fn update_product(store: &ProductStore, input: UpdateProductInput) -> Result<Product, ApiError> {
    debug!(id = %input.id, "update_product command");

    let product = store.with_products_mut(|state| -> Result<Product, ApiError> {
        let mut product = find_product_by_id(state.products(), &input.id)
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(input.id.clone()))?;

        input.apply_to(&mut product);
        validate_edit(&product, &input)?;
        validate_unique_sku(&product.sku, state.products(), Some(&product.id))?;

        state.reduce(ProductAction::UpdateProduct(product));
        find_product_by_id(state.products(), &input.id)
            .cloned()
            .ok_or_else(|| ApiError::internal("Product was not stored"))
    })?;

    info!(id = %product.id, "Product updated");
    Ok(product)
}

/// Only the fields the edit touched are checked.
fn validate_edit(product: &Product, input: &UpdateProductInput) -> Result<(), ApiError> {
    if input.name.is_some() {
        validate_product_name(&product.name)?;
    }
    if input.sku.is_some() {
        validate_sku(&product.sku)?;
    }
    if input.price_cents.is_some() {
        validate_price_cents(product.price_cents)?;
    }
    if input.stock.is_some() {
        validate_stock(product.stock)?;
    }
    if input.description.is_some() {
        validate_description(&product.description)?;
    }
    if let Some(dimensions) = &input.dimensions {
        validate_dimensions(dimensions)?;
    }
    Ok(())
}

pub fn delete_product(store: &ProductStore, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_product command");

    store.with_products_mut(|state| {
        if find_product_by_id(state.products(), id).is_none() {
            return Err(ApiError::from(CoreError::ProductNotFound(id.to_string())));
        }
        state.reduce(ProductAction::DeleteProduct(id.to_string()));
        Ok(())
    })?;

    info!(id = %id, "Product deleted");
    Ok(())
}

/// Autocomplete for the search box.
///
/// ## Arguments
/// * `query` - Partial search text; blank returns nothing
/// * `limit` - Maximum suggestions (default: 5)
pub fn search_suggestions(
    store: &ProductStore,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<String>, ApiError> {
    let query = validate_search_query(query)?;
    let limit = limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);

    debug!(query = %query, limit, "search_suggestions command");
    Ok(store.with_products(|state| suggest(state.products(), &query, limit)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::seed;
    use catalog_core::{Money, ProductCategory};

    fn store() -> ProductStore {
        ProductStore::new(seed::sample_products().unwrap())
    }

    fn new_input(sku: &str) -> CreateProductInput {
        CreateProductInput {
            name: "Foam Roller".to_string(),
            sku: sku.to_string(),
            category: ProductCategory::Fitness,
            price_cents: 1999,
            stock: 25,
            tags: vec!["recovery".to_string()],
            description: "High-density foam roller".to_string(),
            dimensions: None,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_list_products_default_page() {
        let page = list_products(&store(), &ConfigState::default(), ProductQuery::default()).unwrap();

        assert_eq!(page.total, 15);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.page, 1);
        assert!(page.has_next());
        assert_eq!(page.items[0].name, "Adjustable Dumbbell Set 20kg");
    }

    #[test]
    fn test_list_products_filtered_and_sorted() {
        let query = ProductQuery {
            filters: ProductFilters {
                category: Some(ProductCategory::Electronics),
                min_price: Some(Money::from_cents(5000)),
                ..Default::default()
            },
            sort_by: ProductSortKey::Price,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };

        let page = list_products(&store(), &ConfigState::default(), query).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|product| product.id.as_str()).collect();
        assert_eq!(ids, vec!["p-012", "p-006", "p-001", "p-010"]);
    }

    #[test]
    fn test_list_products_search_and_paging() {
        let query = ProductQuery {
            filters: ProductFilters {
                search: Some("  wireless ".to_string()),
                ..Default::default()
            },
            page: 2,
            limit: Some(1),
            ..Default::default()
        };

        let page = list_products(&store(), &ConfigState::default(), query).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].id, "p-008");
        assert!(!page.has_next());
    }

    #[test]
    fn test_query_deserializes_flat() {
        let query: ProductQuery = serde_json::from_str(
            r#"{"category": "Fitness", "sortBy": "rating", "sortOrder": "desc", "page": 1}"#,
        )
        .unwrap();

        assert_eq!(query.filters.category, Some(ProductCategory::Fitness));
        assert_eq!(query.sort_by, ProductSortKey::Rating);
        let page = list_products(&store(), &ConfigState::default(), query).unwrap();
        assert_eq!(page.items[0].id, "p-005");
    }

    #[test]
    fn test_overlong_search_is_rejected() {
        let query = ProductQuery {
            filters: ProductFilters {
                search: Some("x".repeat(101)),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = list_products(&store(), &ConfigState::default(), query).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_get_product_by_id() {
        let store = store();
        assert_eq!(get_product_by_id(&store, "p-007").unwrap().sku, "FOOD-089");

        let err = get_product_by_id(&store, "p-404").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: p-404");
    }

    #[test]
    fn test_create_product() {
        let store = store();
        let product = create_product(&store, new_input("FIT-400")).unwrap();

        assert_eq!(product.rating, 0.0);
        assert!(product.image_url.starts_with("https://picsum.photos/400/400?random="));
        assert_eq!(get_product_by_id(&store, &product.id).unwrap(), product);
        assert_eq!(store.snapshot().len(), 16);
    }

    #[test]
    fn test_create_product_rejects_invalid_and_duplicate() {
        let store = store();

        let mut blank = new_input("FIT-401");
        blank.name = "   ".to_string();
        assert_eq!(create_product(&store, blank).unwrap_err().code, ErrorCode::ValidationError);

        let err = create_product(&store, new_input("elec-001")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "sku 'elec-001' already exists");
        assert_eq!(store.snapshot().len(), 15);
    }

    #[test]
    fn test_update_product() {
        let store = store();
        let updated = update_product(
            &store,
            UpdateProductInput {
                id: "p-003".to_string(),
                price_cents: Some(1299),
                stock: Some(4),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.price_cents, 1299);
        assert_eq!(updated.stock, 4);
        assert_eq!(updated.name, "Smart LED Light Bulb");
        assert!(updated.updated_at > updated.created_at);
    }

    #[test]
    fn test_update_product_errors() {
        let store = store();

        let err = update_product(
            &store,
            UpdateProductInput {
                id: "p-404".to_string(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = update_product(
            &store,
            UpdateProductInput {
                id: "p-003".to_string(),
                sku: Some("ELEC-001".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = update_product(
            &store,
            UpdateProductInput {
                id: "p-003".to_string(),
                price_cents: Some(-1),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_product_by_id(&store, "p-003").unwrap().price_cents, 1599);
    }

    #[test]
    fn test_update_keeps_own_sku() {
        let store = store();
        let updated = update_product(
            &store,
            UpdateProductInput {
                id: "p-003".to_string(),
                sku: Some("HOME-101".to_string()),
                ..Default::default()
            },
        );
        assert!(updated.is_ok());
    }

    #[test]
    fn test_delete_product() {
        let store = store();
        delete_product(&store, "p-010").unwrap();
        assert_eq!(store.snapshot().len(), 14);

        let err = delete_product(&store, "p-010").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_search_suggestions() {
        let store = store();
        let suggestions = search_suggestions(&store, "gam", None).unwrap();
        assert_eq!(
            suggestions,
            vec!["Mechanical Gaming Keyboard RGB", "gaming", "Gaming Mouse RGB"]
        );

        assert!(search_suggestions(&store, "   ", None).unwrap().is_empty());
        assert_eq!(search_suggestions(&store, "e", Some(2)).unwrap().len(), 2);
    }
}
