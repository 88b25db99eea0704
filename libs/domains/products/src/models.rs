use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Stock Keeping Unit: exactly 8 alphanumeric characters, unique
    pub sku: String,
    /// Price in cents (for precision)
    pub price_cents: i64,
    /// Expiration date; never in the past at creation or update
    pub expiration: NaiveDate,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub sku: String,
    /// Price in cents
    pub price_cents: Option<i64>,
    pub expiration: Option<NaiveDate>,
}

/// DTO for updating an existing product (addressed by SKU; the SKU itself
/// is immutable)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: String,
    /// Price in cents
    pub price_cents: Option<i64>,
    pub expiration: Option<NaiveDate>,
}

/// A validated, normalized product ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price_cents: i64,
    pub expiration: NaiveDate,
}

/// Validated replacement values for an update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    pub price_cents: i64,
    pub expiration: NaiveDate,
}

/// Query filters for listing products
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductFilter {
    /// Substring match on name
    pub name: Option<String>,
    /// Exact match on SKU
    pub sku: Option<String>,
    /// Minimum price in cents, inclusive
    pub min_price_cents: Option<i64>,
    /// Maximum price in cents, inclusive
    pub max_price_cents: Option<i64>,
}
