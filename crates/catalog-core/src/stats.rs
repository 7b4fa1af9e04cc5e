//! # Dashboard Statistics
//!
//! Summary tiles and chart datasets derived from the product list.
//!
//! ## Datasets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ChartKind        Buckets                              Value            │
//! │  ──────────────   ──────────────────────────────────   ──────────────   │
//! │  Category         one per category, first-seen order   product count    │
//! │  PriceRange       Under $25 ... Over $200              product count    │
//! │  StockStatus      Out of Stock ... High Stock (50+)    product count    │
//! │  CategoryValue    one per category, first-seen order   Σ price × stock  │
//! │                                                        (whole units)    │
//! │                                                                         │
//! │  Fixed-bucket datasets omit empty buckets.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{low_stock_products, total_inventory_value, unique_categories};
use crate::money::Money;
use crate::types::{Product, ProductCategory};
use crate::DEFAULT_LOW_STOCK_THRESHOLD;

/// Slice colours, assigned by position and cycled.
pub const CHART_COLORS: [&str; 7] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#F97316", "#06B6D4",
];

// =============================================================================
// Summary Tiles
// =============================================================================

/// The four tiles at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub active_products: usize,
    pub low_stock_count: usize,
    pub total_value: Money,
}

pub fn dashboard_stats(products: &[Product], low_stock_threshold: i64) -> DashboardStats {
    DashboardStats {
        total_products: products.len(),
        active_products: products.iter().filter(|product| product.is_active()).count(),
        low_stock_count: low_stock_products(products, low_stock_threshold).len(),
        total_value: total_inventory_value(products),
    }
}

// =============================================================================
// Chart Data
// =============================================================================

/// One slice or bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChartDatum {
    pub name: String,
    pub value: i64,
    pub fill: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    #[default]
    Category,
    PriceRange,
    StockStatus,
    CategoryValue,
}

pub fn chart_data(products: &[Product], kind: ChartKind) -> Vec<ChartDatum> {
    match kind {
        ChartKind::Category => category_counts(products),
        ChartKind::PriceRange => price_range_counts(products),
        ChartKind::StockStatus => stock_status_counts(products),
        ChartKind::CategoryValue => category_values(products),
    }
}

fn colored(entries: impl IntoIterator<Item = (String, i64)>) -> Vec<ChartDatum> {
    entries
        .into_iter()
        .zip(CHART_COLORS.iter().cycle())
        .map(|((name, value), fill)| ChartDatum {
            name,
            value,
            fill: (*fill).to_string(),
        })
        .collect()
}

/// Fixed buckets, dropping the empty ones before colours are assigned.
fn bucketed<const N: usize>(
    labels: [&str; N],
    products: &[Product],
    bucket_of: impl Fn(&Product) -> usize,
) -> Vec<ChartDatum> {
    let mut counts = [0i64; N];
    for product in products {
        counts[bucket_of(product)] += 1;
    }

    colored(
        labels
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(label, count)| (label.to_string(), count)),
    )
}

fn per_category(products: &[Product], value_of: impl Fn(&[&Product]) -> i64) -> Vec<ChartDatum> {
    colored(unique_categories(products).into_iter().map(|category: ProductCategory| {
        let members: Vec<&Product> = products
            .iter()
            .filter(|product| product.category == category)
            .collect();
        (category.to_string(), value_of(&members))
    }))
}

/// Product count per category.
pub fn category_counts(products: &[Product]) -> Vec<ChartDatum> {
    per_category(products, |members| members.len() as i64)
}

/// Product count per price band; bands are `[low, high)` in whole units.
///
/// ## Example
/// ```rust
/// use catalog_core::stats::price_range_counts;
///
/// assert!(price_range_counts(&[]).is_empty());
/// ```
pub fn price_range_counts(products: &[Product]) -> Vec<ChartDatum> {
    const LABELS: [&str; 5] = ["Under $25", "$25 - $50", "$50 - $100", "$100 - $200", "Over $200"];

    bucketed(LABELS, products, |product| match product.price_cents {
        cents if cents < 2_500 => 0,
        cents if cents < 5_000 => 1,
        cents if cents < 10_000 => 2,
        cents if cents < 20_000 => 3,
        _ => 4,
    })
}

/// Product count per stock level.
pub fn stock_status_counts(products: &[Product]) -> Vec<ChartDatum> {
    const LABELS: [&str; 4] = [
        "Out of Stock",
        "Low Stock (1-10)",
        "Medium Stock (11-50)",
        "High Stock (50+)",
    ];

    bucketed(LABELS, products, |product| match product.stock {
        stock if stock <= 0 => 0,
        stock if stock <= DEFAULT_LOW_STOCK_THRESHOLD => 1,
        stock if stock <= 50 => 2,
        _ => 3,
    })
}

/// Inventory value per category, in whole currency units.
pub fn category_values(products: &[Product]) -> Vec<ChartDatum> {
    per_category(products, |members| {
        members
            .iter()
            .map(|product| product.stock_value())
            .sum::<Money>()
            .rounded_units()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{product, sample_catalog};

    fn names_and_values(data: &[ChartDatum]) -> Vec<(&str, i64)> {
        data.iter().map(|datum| (datum.name.as_str(), datum.value)).collect()
    }

    #[test]
    fn test_dashboard_stats() {
        let stats = dashboard_stats(&sample_catalog(), 20);
        assert_eq!(stats.total_products, 5);
        assert_eq!(stats.active_products, 4);
        assert_eq!(stats.low_stock_count, 3);
        assert_eq!(stats.total_value.cents(), 658825);
    }

    #[test]
    fn test_category_counts() {
        let data = category_counts(&sample_catalog());
        assert_eq!(
            names_and_values(&data),
            vec![("Electronics", 2), ("Fitness", 1), ("Home", 1), ("Books", 1)]
        );
        assert_eq!(data[0].fill, "#3B82F6");
        assert_eq!(data[3].fill, "#EF4444");
    }

    #[test]
    fn test_price_range_counts_omit_empty_buckets() {
        let data = price_range_counts(&sample_catalog());
        assert_eq!(
            names_and_values(&data),
            vec![("Under $25", 2), ("$25 - $50", 1), ("$50 - $100", 1), ("$100 - $200", 1)]
        );

        let boundary = vec![
            product("a", "A", ProductCategory::Home, 2_500, 1),
            product("b", "B", ProductCategory::Home, 20_000, 1),
        ];
        assert_eq!(
            names_and_values(&price_range_counts(&boundary)),
            vec![("$25 - $50", 1), ("Over $200", 1)]
        );
    }

    #[test]
    fn test_stock_status_counts() {
        let data = stock_status_counts(&sample_catalog());
        assert_eq!(
            names_and_values(&data),
            vec![
                ("Out of Stock", 1),
                ("Low Stock (1-10)", 1),
                ("Medium Stock (11-50)", 2),
                ("High Stock (50+)", 1),
            ]
        );
    }

    #[test]
    fn test_stock_status_low_stock_edge() {
        let edge = vec![
            product("a", "A", ProductCategory::Home, 1_000, DEFAULT_LOW_STOCK_THRESHOLD),
            product("b", "B", ProductCategory::Home, 1_000, DEFAULT_LOW_STOCK_THRESHOLD + 1),
        ];
        assert_eq!(
            names_and_values(&stock_status_counts(&edge)),
            vec![("Low Stock (1-10)", 1), ("Medium Stock (11-50)", 1)]
        );
        assert_eq!(low_stock_products(&edge, DEFAULT_LOW_STOCK_THRESHOLD).len(), 1);
    }

    #[test]
    fn test_category_values_in_whole_units() {
        let data = category_values(&sample_catalog());
        // Electronics: 287968 + 74985 = 362953 cents → 3630
        assert_eq!(
            names_and_values(&data),
            vec![("Electronics", 3630), ("Fitness", 1040), ("Home", 1919), ("Books", 0)]
        );
    }

    #[test]
    fn test_chart_data_dispatch() {
        let catalog = sample_catalog();
        assert_eq!(chart_data(&catalog, ChartKind::Category), category_counts(&catalog));
        assert_eq!(chart_data(&catalog, ChartKind::StockStatus), stock_status_counts(&catalog));
        assert!(chart_data(&[], ChartKind::CategoryValue).is_empty());
    }

    #[test]
    fn test_chart_kind_wire_names() {
        let kind: ChartKind = serde_json::from_str("\"priceRange\"").unwrap();
        assert_eq!(kind, ChartKind::PriceRange);
    }
}
