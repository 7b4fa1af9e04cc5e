//! # Catalog Queries
//!
//! Filtering, sorting, paging and lookups over an in-memory product list.
//!
//! ## Listing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Listing Pipeline                            │
//! │                                                                         │
//! │  &[Product] ──► filter_products ──► sort_products ──► paginate          │
//! │                  (ProductFilters)    (key, order)     (page, limit)     │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                          Page { items, total, ... }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All functions borrow the catalog and return owned results; the caller's
//! list is never reordered in place.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Page, Product, ProductCategory, ProductStatus, SortOrder};

/// Suggestions returned when the caller does not ask for a count.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

// =============================================================================
// Filtering
// =============================================================================

/// Product listing filters. Every `None` or empty field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilters {
    pub category: Option<ProductCategory>,
    pub status: Option<ProductStatus>,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    pub min_rating: Option<f64>,
    /// Any of these, as a case-insensitive substring of any product tag.
    pub tags: Vec<String>,
    /// Case-insensitive substring of name, description, SKU, category, tags.
    pub search: Option<String>,
}

impl ProductFilters {
    /// Whether `product` passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        if self.category.is_some_and(|category| product.category != category) {
            return false;
        }

        if self.status.is_some_and(|status| product.status != status) {
            return false;
        }

        let price = product.price();
        if self.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| price > max) {
            return false;
        }

        if self.min_rating.is_some_and(|min| product.rating < min) {
            return false;
        }

        if !self.matches_tags(product) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                search_haystack(product).contains(&term.to_lowercase())
            }
            _ => true,
        }
    }

    fn matches_tags(&self, product: &Product) -> bool {
        let wanted: Vec<String> = self
            .tags
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        if wanted.is_empty() {
            return true;
        }

        wanted.iter().any(|tag| {
            product
                .tags
                .iter()
                .any(|product_tag| product_tag.to_lowercase().contains(tag.as_str()))
        })
    }
}

/// Everything the search box looks at, lowercased and space-joined.
fn search_haystack(product: &Product) -> String {
    let mut fields = vec![
        product.name.as_str(),
        product.description.as_str(),
        product.sku.as_str(),
        product.category.display_name(),
    ];
    fields.extend(product.tags.iter().map(String::as_str));
    fields.join(" ").to_lowercase()
}

/// Products passing `filters`, in their original order.
///
/// ## Example
/// ```rust
/// use catalog_core::catalog::{filter_products, ProductFilters};
/// use catalog_core::types::ProductCategory;
///
/// let filters = ProductFilters {
///     category: Some(ProductCategory::Books),
///     ..Default::default()
/// };
/// assert!(filter_products(&[], &filters).is_empty());
/// ```
pub fn filter_products(products: &[Product], filters: &ProductFilters) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filters.matches(product))
        .cloned()
        .collect()
}

// =============================================================================
// Sorting
// =============================================================================

/// Columns a product listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ProductSortKey {
    #[default]
    Name,
    Price,
    Rating,
    CreatedAt,
    UpdatedAt,
}

impl ProductSortKey {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ProductSortKey::Price => a.price_cents.cmp(&b.price_cents),
            ProductSortKey::Rating => a.rating.total_cmp(&b.rating),
            ProductSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            ProductSortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Applies a sort direction to an ascending ordering.
pub(crate) fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// A sorted copy; ties keep their original relative order.
pub fn sort_products(products: &[Product], key: ProductSortKey, order: SortOrder) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| directed(key.compare(a, b), order));
    sorted
}

// =============================================================================
// Paging
// =============================================================================

/// Cuts one page out of `items`.
///
/// `page` is 1-based; 0 is read as 1. A page past the end is empty but
/// still reports the real total.
///
/// ## Example
/// ```rust
/// use catalog_core::catalog::paginate;
///
/// let numbers: Vec<u32> = (1..=25).collect();
/// let page = paginate(&numbers, 3, 10);
/// assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
/// assert_eq!(page.total, 25);
///
/// assert!(paginate(&numbers, 9, 10).items.is_empty());
/// ```
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> Page<T> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(limit);

    Page {
        items: items.iter().skip(start).take(limit).cloned().collect(),
        total: items.len(),
        page,
        limit,
    }
}

// =============================================================================
// Lookups
// =============================================================================

pub fn find_product_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|product| product.id == id)
}

pub fn products_by_category(products: &[Product], category: ProductCategory) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .cloned()
        .collect()
}

pub fn products_by_status(products: &[Product], status: ProductStatus) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.status == status)
        .cloned()
        .collect()
}

/// Products with stock at or below `threshold` (out of stock included).
pub fn low_stock_products(products: &[Product], threshold: i64) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.is_low_stock(threshold))
        .cloned()
        .collect()
}

/// Σ price × stock over the catalog.
pub fn total_inventory_value(products: &[Product]) -> Money {
    products.iter().map(Product::stock_value).sum()
}

/// Categories present in the catalog, in first-seen order.
pub fn unique_categories(products: &[Product]) -> Vec<ProductCategory> {
    let mut seen = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category);
        }
    }
    seen
}

/// Every distinct tag, sorted.
pub fn all_tags(products: &[Product]) -> Vec<String> {
    let mut tags: Vec<String> = products
        .iter()
        .flat_map(|product| product.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Names, categories and tags containing `query`, first-seen order.
///
/// A blank query suggests nothing.
pub fn search_suggestions(products: &[Product], query: &str, limit: usize) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for product in products {
        let candidates = std::iter::once(product.name.as_str())
            .chain(std::iter::once(product.category.display_name()))
            .chain(product.tags.iter().map(String::as_str));

        for candidate in candidates {
            if candidate.to_lowercase().contains(&query) && seen.insert(candidate.to_string()) {
                suggestions.push(candidate.to_string());
                if suggestions.len() == limit {
                    return suggestions;
                }
            }
        }
    }

    suggestions
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    pub(crate) fn product(
        id: &str,
        name: &str,
        category: ProductCategory,
        price_cents: i64,
        stock: i64,
    ) -> Product {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Product {
            id: id.to_string(),
            name: name.to_string(),
            sku: format!("SKU-{}", id),
            category,
            price_cents,
            rating: 4.0,
            stock,
            tags: Vec::new(),
            status: ProductStatus::Active,
            created_at: at,
            updated_at: at,
            description: String::new(),
            dimensions: None,
            image_url: String::new(),
        }
    }

    pub(crate) fn sample_catalog() -> Vec<Product> {
        let mut headphones = product("p-001", "Wireless Bluetooth Headphones", ProductCategory::Electronics, 8999, 32);
        headphones.tags = vec!["bluetooth".into(), "audio".into(), "wireless".into()];
        headphones.rating = 4.5;
        headphones.description = "Noise cancelling over-ear headphones".into();

        let mut dumbbells = product("p-002", "Adjustable Dumbbell Set 20kg", ProductCategory::Fitness, 12999, 8);
        dumbbells.tags = vec!["weights".into(), "strength".into()];
        dumbbells.rating = 4.7;

        let mut bulb = product("p-003", "Smart LED Light Bulb", ProductCategory::Home, 1599, 120);
        bulb.tags = vec!["smart".into(), "lighting".into()];
        bulb.rating = 4.2;

        let mut novel = product("p-004", "The Silent Orbit", ProductCategory::Books, 1999, 0);
        novel.tags = vec!["fiction".into()];
        novel.rating = 3.9;
        novel.status = ProductStatus::Archived;

        let mut speaker = product("p-005", "Portable Speaker", ProductCategory::Electronics, 4999, 15);
        speaker.tags = vec!["Audio".into(), "outdoor".into()];
        speaker.rating = 4.5;
        speaker.created_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        vec![headphones, dumbbells, bulb, novel, speaker]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|product| product.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let catalog = sample_catalog();
        assert_eq!(filter_products(&catalog, &ProductFilters::default()).len(), 5);
    }

    #[test]
    fn test_filter_by_category_status_and_price() {
        let catalog = sample_catalog();

        let electronics = ProductFilters {
            category: Some(ProductCategory::Electronics),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&catalog, &electronics)), vec!["p-001", "p-005"]);

        let archived = ProductFilters {
            status: Some(ProductStatus::Archived),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&catalog, &archived)), vec!["p-004"]);

        let mid_range = ProductFilters {
            min_price: Some(Money::from_cents(1999)),
            max_price: Some(Money::from_cents(8999)),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_products(&catalog, &mid_range)),
            vec!["p-001", "p-004", "p-005"]
        );
    }

    #[test]
    fn test_filter_by_rating_and_tags() {
        let catalog = sample_catalog();

        let top_rated = ProductFilters {
            min_rating: Some(4.5),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_products(&catalog, &top_rated)),
            vec!["p-001", "p-002", "p-005"]
        );

        let audio = ProductFilters {
            tags: vec!["AUD".into(), " ".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&catalog, &audio)), vec!["p-001", "p-005"]);
    }

    #[test]
    fn test_search_covers_all_text_fields() {
        let catalog = sample_catalog();
        let search = |term: &str| {
            let filters = ProductFilters {
                search: Some(term.to_string()),
                ..Default::default()
            };
            ids(&filter_products(&catalog, &filters)).join(",")
        };

        assert_eq!(search("BLUETOOTH"), "p-001");
        assert_eq!(search("noise cancelling"), "p-001");
        assert_eq!(search("sku-p-003"), "p-003");
        assert_eq!(search("books"), "p-004");
        assert_eq!(search("outdoor"), "p-005");
        assert_eq!(search("  "), "p-001,p-002,p-003,p-004,p-005");
        assert_eq!(search("nothing like this"), "");
    }

    #[test]
    fn test_sort_products() {
        let catalog = sample_catalog();

        let by_price = sort_products(&catalog, ProductSortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&by_price), vec!["p-003", "p-004", "p-005", "p-001", "p-002"]);

        let by_name_desc = sort_products(&catalog, ProductSortKey::Name, SortOrder::Desc);
        assert_eq!(ids(&by_name_desc)[0], "p-001");

        // p-001 and p-005 tie at 4.5 and keep catalog order
        let by_rating = sort_products(&catalog, ProductSortKey::Rating, SortOrder::Desc);
        assert_eq!(ids(&by_rating), vec!["p-002", "p-001", "p-005", "p-003", "p-004"]);

        let newest = sort_products(&catalog, ProductSortKey::CreatedAt, SortOrder::Desc);
        assert_eq!(ids(&newest)[0], "p-005");

        assert_eq!(ids(&catalog)[0], "p-001");
    }

    #[test]
    fn test_paginate() {
        let catalog = sample_catalog();

        let first = paginate(&catalog, 1, 2);
        assert_eq!(ids(&first.items), vec!["p-001", "p-002"]);
        assert_eq!(first.total, 5);

        let last = paginate(&catalog, 3, 2);
        assert_eq!(ids(&last.items), vec!["p-005"]);

        let zeroth = paginate(&catalog, 0, 2);
        assert_eq!(zeroth.page, 1);
        assert_eq!(zeroth.items, first.items);

        let beyond = paginate(&catalog, 10, 2);
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 5);
    }

    #[test]
    fn test_lookups() {
        let catalog = sample_catalog();

        assert_eq!(
            find_product_by_id(&catalog, "p-003").map(|p| p.name.as_str()),
            Some("Smart LED Light Bulb")
        );
        assert!(find_product_by_id(&catalog, "p-999").is_none());

        assert_eq!(products_by_category(&catalog, ProductCategory::Electronics).len(), 2);
        assert_eq!(products_by_status(&catalog, ProductStatus::Active).len(), 4);
        assert_eq!(ids(&low_stock_products(&catalog, 10)), vec!["p-002", "p-004"]);
    }

    #[test]
    fn test_total_inventory_value() {
        let catalog = sample_catalog();
        // 8999×32 + 12999×8 + 1599×120 + 1999×0 + 4999×15
        let expected = 287968 + 103992 + 191880 + 74985;
        assert_eq!(total_inventory_value(&catalog).cents(), expected);
        assert!(total_inventory_value(&[]).is_zero());
    }

    #[test]
    fn test_unique_categories_and_tags() {
        let catalog = sample_catalog();

        assert_eq!(
            unique_categories(&catalog),
            vec![
                ProductCategory::Electronics,
                ProductCategory::Fitness,
                ProductCategory::Home,
                ProductCategory::Books,
            ]
        );

        let tags = all_tags(&catalog);
        assert_eq!(tags.first().map(String::as_str), Some("Audio"));
        assert_eq!(tags.len(), 10);
    }

    #[test]
    fn test_search_suggestions() {
        let catalog = sample_catalog();

        assert_eq!(
            search_suggestions(&catalog, "audio", DEFAULT_SUGGESTION_LIMIT),
            vec!["audio", "Audio"]
        );
        assert_eq!(
            search_suggestions(&catalog, "elec", DEFAULT_SUGGESTION_LIMIT),
            vec!["Electronics"]
        );
        assert_eq!(search_suggestions(&catalog, "s", 3).len(), 3);
        assert!(search_suggestions(&catalog, "   ", 5).is_empty());
    }
}
