//! # Dashboard Commands
//!
//! Summary tiles, the low-stock panel, recent activity and chart datasets.

use catalog_core::catalog::{low_stock_products, sort_products, unique_categories, ProductSortKey};
use catalog_core::format::{format_date, format_relative_time};
use catalog_core::stats::{chart_data, dashboard_stats, ChartDatum, ChartKind, DashboardStats};
use catalog_core::users::{active_users, recently_active_users, DEFAULT_RECENT_DAYS};
use catalog_core::{Product, ProductCategory, SortOrder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, ProductStore, UserDirectory};

/// Products shown in the "recently added" list.
pub const RECENT_PRODUCT_COUNT: usize = 3;

/// Everything the dashboard page renders above the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub store_name: String,
    pub stats: DashboardStats,
    /// `stats.total_value` formatted with the configured currency.
    pub total_value_display: String,
    pub low_stock_threshold: i64,
    pub low_stock: Vec<Product>,
    pub categories: Vec<ProductCategory>,
    pub recent_products: Vec<RecentProduct>,
    pub active_users: usize,
    pub recently_active_users: usize,
}

/// A row of the "recently added" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentProduct {
    pub id: String,
    pub name: String,
    pub price_display: String,
    pub added_on: String,
    pub added_ago: String,
}

pub fn get_dashboard_overview(
    store: &ProductStore,
    directory: &UserDirectory,
    config: &ConfigState,
) -> Result<DashboardOverview, ApiError> {
    get_dashboard_overview_at(store, directory, config, Utc::now())
}

/// [`get_dashboard_overview`] with an explicit clock reading.
pub fn get_dashboard_overview_at(
    store: &ProductStore,
    directory: &UserDirectory,
    config: &ConfigState,
    now: DateTime<Utc>,
) -> Result<DashboardOverview, ApiError> {
    debug!(threshold = config.low_stock_threshold, "get_dashboard_overview command");

    let (stats, low_stock, categories, recent) = store.with_products(|state| {
        let products = state.products();
        let newest = sort_products(products, ProductSortKey::CreatedAt, SortOrder::Desc);
        (
            dashboard_stats(products, config.low_stock_threshold),
            low_stock_products(products, config.low_stock_threshold),
            unique_categories(products),
            newest.into_iter().take(RECENT_PRODUCT_COUNT).collect::<Vec<_>>(),
        )
    });

    let recent_products = recent
        .into_iter()
        .map(|product| RecentProduct {
            price_display: config.format_currency(product.price_cents),
            added_on: format_date(product.created_at),
            added_ago: format_relative_time(product.created_at, now),
            id: product.id,
            name: product.name,
        })
        .collect();

    let users = directory.users();

    Ok(DashboardOverview {
        store_name: config.store_name.clone(),
        total_value_display: config.format_currency(stats.total_value.cents()),
        stats,
        low_stock_threshold: config.low_stock_threshold,
        low_stock,
        categories,
        recent_products,
        active_users: active_users(users).len(),
        recently_active_users: recently_active_users(users, now, DEFAULT_RECENT_DAYS).len(),
    })
}

/// One chart dataset; colours follow the shared palette.
pub fn get_chart_data(store: &ProductStore, kind: ChartKind) -> Result<Vec<ChartDatum>, ApiError> {
    debug!(kind = ?kind, "get_chart_data command");
    Ok(store.with_products(|state| chart_data(state.products(), kind)))
}
