//! # Validation Module
//!
//! Form validation for the catalog dashboard.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form widgets                                                  │
//! │  ├── CurrencyInput never produces a malformed price                     │
//! │  └── Required markers, immediate feedback                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Dashboard command (Rust)                                      │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: field rules, duplicate SKU                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ProductsState reducer                                         │
//! │  └── Assigns id, timestamps, image URL                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_sku, validate_tags};
//!
//! validate_sku("ELEC-001").unwrap();
//!
//! let tags = validate_tags("bluetooth, audio, ,wireless").unwrap();
//! assert_eq!(tags, vec!["bluetooth", "audio", "wireless"]);
//! ```

use crate::error::ValidationError;
use crate::types::{CreateProductInput, CreateUserInput, Product, ProductDimensions};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

pub const MAX_SKU_LEN: usize = 50;
pub const MAX_NAME_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 2000;
pub const MAX_QUERY_LEN: usize = 100;
pub const MAX_TAGS: usize = 20;
pub const MAX_TAG_LEN: usize = 30;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 30;

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only letters, digits, hyphens, underscores
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_sku;
///
/// assert!(validate_sku("FIT-020").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(required("sku"));
    }

    if sku.chars().count() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// SKUs are unique across the catalog, compared case-insensitively.
///
/// `except_id` skips the product being edited.
pub fn validate_unique_sku(
    sku: &str,
    products: &[Product],
    except_id: Option<&str>,
) -> ValidationResult<()> {
    let sku = sku.trim();
    let taken = products
        .iter()
        .filter(|product| Some(product.id.as_str()) != except_id)
        .any(|product| product.sku.eq_ignore_ascii_case(sku));

    if taken {
        return Err(ValidationError::Duplicate {
            field: "sku".to_string(),
            value: sku.to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: required, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(required("name"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(required("description"));
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// Empty is fine (no filtering). Returns the trimmed query.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Parses the comma-separated tag field of the product form.
///
/// Tags are trimmed and empty entries dropped.
pub fn validate_tags(raw: &str) -> ValidationResult<Vec<String>> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    check_tag_list(&tags)?;
    Ok(tags)
}

fn check_tag_list(tags: &[String]) -> ValidationResult<()> {
    if tags.len() > MAX_TAGS {
        return Err(ValidationError::OutOfRange {
            field: "tags".to_string(),
            min: 0,
            max: MAX_TAGS as i64,
        });
    }

    for tag in tags {
        if tag.trim().is_empty() {
            return Err(ValidationError::InvalidFormat {
                field: "tags".to_string(),
                reason: "tags cannot be blank".to_string(),
            });
        }
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(ValidationError::TooLong {
                field: "tag".to_string(),
                max: MAX_TAG_LEN,
            });
        }
    }

    Ok(())
}

/// Validates an email address.
///
/// A light structural check: `local@domain.tld`, no whitespace.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_email;
///
/// assert!(validate_email("alex@example.com").is_ok());
/// assert!(validate_email("alex@localhost").is_err());
/// assert!(validate_email("@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(required("email"));
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("must contain '@'"));
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must have exactly one '@' after a name"));
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid("must have a domain like example.com"));
    }

    Ok(())
}

/// Validates a username.
///
/// ## Rules
/// - 3 to 30 characters
/// - Letters, digits, `_`, `-`, `.`
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(required("username"));
    }

    let len = username.chars().count();
    if len < MIN_USERNAME_LEN {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: MIN_USERNAME_LEN,
        });
    }
    if len > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must contain only letters, numbers, '_', '-' and '.'".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Ratings are 0 to 5 stars.
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

/// Every dimension must be a positive, finite length.
pub fn validate_dimensions(dimensions: &ProductDimensions) -> ValidationResult<()> {
    let fields = [
        ("widthCm", dimensions.width_cm),
        ("heightCm", dimensions.height_cm),
        ("depthCm", dimensions.depth_cm),
    ];

    for (field, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::MustBePositive {
                field: field.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a UUID string.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(required("id"));
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates the whole "new product" form, stopping at the first error.
///
/// Uniqueness of the SKU needs the catalog; see [`validate_unique_sku`].
pub fn validate_create_product(input: &CreateProductInput) -> ValidationResult<()> {
    validate_product_name(&input.name)?;
    validate_sku(&input.sku)?;
    validate_price_cents(input.price_cents)?;
    validate_stock(input.stock)?;
    check_tag_list(&input.tags)?;
    validate_description(&input.description)?;

    if let Some(dimensions) = &input.dimensions {
        validate_dimensions(dimensions)?;
    }

    Ok(())
}

/// Validates the whole "new user" form, stopping at the first error.
pub fn validate_create_user(input: &CreateUserInput) -> ValidationResult<()> {
    validate_username(&input.username)?;

    if input.full_name.trim().is_empty() {
        return Err(required("fullName"));
    }

    validate_email(&input.email)
}

// =============================================================================
// Unit Tests
// =============================================================================
