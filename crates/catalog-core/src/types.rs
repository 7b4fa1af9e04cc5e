//! # Domain Types
//!
//! Core domain types used throughout the catalog dashboard.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │    Page<T>      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  items          │       │
//! │  │  sku (business) │   │  username       │   │  total          │       │
//! │  │  category       │   │  role           │   │  page, limit    │       │
//! │  │  price_cents    │   │  last_login_at  │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductCategory │   │  ProductStatus  │   │    UserRole     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Electronics    │   │  Active         │   │  Admin          │       │
//! │  │  Fitness, Home  │   │  Inactive       │   │  User           │       │
//! │  │  ... (7 total)  │   │  Archived       │   │  Moderator      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Everything serializes in camelCase with ISO 8601 timestamps, matching what
//! the dashboard frontend consumes. TypeScript bindings are generated by
//! `ts-rs`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Category
// =============================================================================

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProductCategory {
    Electronics,
    Fitness,
    Home,
    Clothing,
    Books,
    #[serde(rename = "Food & Beverages")]
    FoodAndBeverages,
    #[serde(rename = "Health & Wellness")]
    HealthAndWellness,
}

impl ProductCategory {
    /// Every category, in the order the create form lists them.
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::Electronics,
        ProductCategory::Fitness,
        ProductCategory::Home,
        ProductCategory::Clothing,
        ProductCategory::Books,
        ProductCategory::FoodAndBeverages,
        ProductCategory::HealthAndWellness,
    ];

    /// The human-readable name, identical to the serialized form.
    pub const fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Fitness => "Fitness",
            ProductCategory::Home => "Home",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Books => "Books",
            ProductCategory::FoodAndBeverages => "Food & Beverages",
            ProductCategory::HealthAndWellness => "Health & Wellness",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parses a display name, ignoring case and surrounding whitespace.
///
/// ## Example
/// ```rust
/// use catalog_core::types::ProductCategory;
///
/// let category: ProductCategory = "food & beverages".parse().unwrap();
/// assert_eq!(category, ProductCategory::FoodAndBeverages);
/// assert!("Toys".parse::<ProductCategory>().is_err());
/// ```
impl FromStr for ProductCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ProductCategory::ALL
            .into_iter()
            .find(|category| category.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: ProductCategory::ALL
                    .iter()
                    .map(|category| category.display_name().to_string())
                    .collect(),
            })
    }
}

// =============================================================================
// Product Status
// =============================================================================

/// Lifecycle status of a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}

impl ProductStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// Physical size of a product, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDimensions {
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,

    /// Display name shown on cards and in search.
    pub name: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    pub category: ProductCategory,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Average review score, 0.0 to 5.0.
    pub rating: f64,

    /// Units on hand.
    pub stock: i64,

    pub tags: Vec<String>,

    pub status: ProductStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    pub description: String,

    /// Not every product has known dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dimensions: Option<ProductDimensions>,

    pub image_url: String,
}

impl Product {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Price × units on hand.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.stock)
    }

    /// Stock at or below `threshold`, including out of stock.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.stock <= threshold
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

// =============================================================================
// User
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Moderator,
}

impl UserRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Moderator => "moderator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dashboard user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub email_verified: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub last_login_at: DateTime<Utc>,
    pub avatar_url: String,
    pub permissions: Vec<String>,
}

// =============================================================================
// Form Inputs
// =============================================================================

/// Payload of the "new product" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub price_cents: i64,
    pub stock: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub dimensions: Option<ProductDimensions>,
    /// Empty means "generate one from the category".
    #[serde(default)]
    pub image_url: String,
}

/// A partial product edit; `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductInput {
    pub id: String,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<ProductCategory>,
    pub price_cents: Option<i64>,
    pub stock: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub dimensions: Option<ProductDimensions>,
    pub image_url: Option<String>,
    pub status: Option<ProductStatus>,
}

impl UpdateProductInput {
    /// Merges the present fields into `product`.
    ///
    /// Does not touch `id` or timestamps; the store bumps `updated_at`.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::types::{ProductStatus, UpdateProductInput};
    /// # use catalog_core::types::{Product, ProductCategory};
    /// # let mut product = Product {
    /// #     id: "p-001".into(), name: "Lamp".into(), sku: "HOME-001".into(),
    /// #     category: ProductCategory::Home, price_cents: 1599, rating: 4.0,
    /// #     stock: 3, tags: vec![], status: ProductStatus::Active,
    /// #     created_at: chrono::Utc::now(), updated_at: chrono::Utc::now(),
    /// #     description: String::new(), dimensions: None, image_url: String::new(),
    /// # };
    ///
    /// let edit = UpdateProductInput {
    ///     id: "p-001".into(),
    ///     price_cents: Some(1299),
    ///     status: Some(ProductStatus::Archived),
    ///     ..Default::default()
    /// };
    /// edit.apply_to(&mut product);
    ///
    /// assert_eq!(product.price_cents, 1299);
    /// assert_eq!(product.status, ProductStatus::Archived);
    /// assert_eq!(product.name, "Lamp");
    /// ```
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name.clone_from(name);
        }
        if let Some(sku) = &self.sku {
            product.sku.clone_from(sku);
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price_cents) = self.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(tags) = &self.tags {
            product.tags.clone_from(tags);
        }
        if let Some(description) = &self.description {
            product.description.clone_from(description);
        }
        if let Some(dimensions) = self.dimensions {
            product.dimensions = Some(dimensions);
        }
        if let Some(image_url) = &self.image_url {
            product.image_url.clone_from(image_url);
        }
        if let Some(status) = self.status {
            product.status = status;
        }
    }
}

/// Payload of the "new user" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// A partial user edit; `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserInput {
    pub id: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub avatar_url: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub email_verified: Option<bool>,
}

impl UpdateUserInput {
    /// Merges the present fields into `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username.clone_from(username);
        }
        if let Some(full_name) = &self.full_name {
            user.full_name.clone_from(full_name);
        }
        if let Some(email) = &self.email {
            user.email.clone_from(email);
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(avatar_url) = &self.avatar_url {
            user.avatar_url.clone_from(avatar_url);
        }
        if let Some(permissions) = &self.permissions {
            user.permissions.clone_from(permissions);
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(email_verified) = self.email_verified {
            user.email_verified = email_verified;
        }
    }
}

// =============================================================================
// Query Results
// =============================================================================

/// Sort direction shared by product and user listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matching items across all pages.
    pub total: usize,
    /// 1-based.
    pub page: usize,
    pub limit: usize,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` items; at least 1.
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 1;
        }
        self.total.div_ceil(self.limit).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
