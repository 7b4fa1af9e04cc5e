//! # User Commands
//!
//! Read-only queries over the user directory.

use catalog_core::catalog::paginate;
use catalog_core::users::{filter_users, find_user_by_id, sort_users, UserFilters, UserSortKey};
use catalog_core::validation::validate_search_query;
use catalog_core::{CoreError, Page, SortOrder, User};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, UserDirectory};

/// Query parameters of the users table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserQuery {
    #[serde(flatten)]
    pub filters: UserFilters,
    pub sort_by: UserSortKey,
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: Option<usize>,
}

pub fn list_users(
    directory: &UserDirectory,
    config: &ConfigState,
    query: UserQuery,
) -> Result<Page<User>, ApiError> {
    let mut filters = query.filters;
    if let Some(search) = filters.search.take() {
        filters.search = Some(validate_search_query(&search)?);
    }
    let limit = config.page_size_or_default(query.limit);

    debug!(sort_by = ?query.sort_by, page = query.page, limit, "list_users command");

    let matching = filter_users(directory.users(), &filters);
    let sorted = sort_users(&matching, query.sort_by, query.sort_order);
    Ok(paginate(&sorted, query.page, limit))
}

pub fn get_user_by_id(directory: &UserDirectory, id: &str) -> Result<User, ApiError> {
    debug!(id = %id, "get_user_by_id command");
    find_user_by_id(directory.users(), id)
        .cloned()
        .ok_or_else(|| CoreError::UserNotFound(id.to_string()).into())
}
