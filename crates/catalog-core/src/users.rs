//! # User Queries
//!
//! The user-list counterpart of [`crate::catalog`]. Paging reuses
//! [`crate::catalog::paginate`].

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::directed;
use crate::types::{SortOrder, User, UserRole};

/// Window used by the "recently active" widget.
pub const DEFAULT_RECENT_DAYS: i64 = 7;

/// User listing filters. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilters {
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub email_verified: Option<bool>,
    /// Case-insensitive substring of username, full name or email.
    pub search: Option<String>,
}

impl UserFilters {
    pub fn matches(&self, user: &User) -> bool {
        if self.role.is_some_and(|role| user.role != role) {
            return false;
        }
        if self.is_active.is_some_and(|active| user.is_active != active) {
            return false;
        }
        if self
            .email_verified
            .is_some_and(|verified| user.email_verified != verified)
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let haystack =
                    format!("{} {} {}", user.username, user.full_name, user.email).to_lowercase();
                haystack.contains(&term.to_lowercase())
            }
            _ => true,
        }
    }
}

pub fn filter_users(users: &[User], filters: &UserFilters) -> Vec<User> {
    users
        .iter()
        .filter(|user| filters.matches(user))
        .cloned()
        .collect()
}

/// Columns a user listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum UserSortKey {
    #[default]
    Username,
    FullName,
    Email,
    CreatedAt,
    LastLoginAt,
}

impl UserSortKey {
    fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            UserSortKey::Username => a.username.to_lowercase().cmp(&b.username.to_lowercase()),
            UserSortKey::FullName => a.full_name.to_lowercase().cmp(&b.full_name.to_lowercase()),
            UserSortKey::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            UserSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            UserSortKey::LastLoginAt => a.last_login_at.cmp(&b.last_login_at),
        }
    }
}

/// A sorted copy; ties keep their original relative order.
pub fn sort_users(users: &[User], key: UserSortKey, order: SortOrder) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| directed(key.compare(a, b), order));
    sorted
}

pub fn find_user_by_id<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|user| user.id == id)
}

pub fn users_by_role(users: &[User], role: UserRole) -> Vec<User> {
    users.iter().filter(|user| user.role == role).cloned().collect()
}

pub fn active_users(users: &[User]) -> Vec<User> {
    users.iter().filter(|user| user.is_active).cloned().collect()
}

pub fn verified_users(users: &[User]) -> Vec<User> {
    users.iter().filter(|user| user.email_verified).cloned().collect()
}

/// Users whose last login is within `days` of `now` (inclusive).
///
/// `now` is passed in so the result does not depend on the wall clock.
pub fn recently_active_users(users: &[User], now: DateTime<Utc>, days: i64) -> Vec<User> {
    let cutoff = now - Duration::days(days.max(0));
    users
        .iter()
        .filter(|user| user.last_login_at >= cutoff)
        .cloned()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
