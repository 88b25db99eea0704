use async_trait::async_trait;
use database::{Page, PageRequest};
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProductChanges, ProductFilter};

/// Repository trait for Product persistence
///
/// Products are addressed externally by SKU; the surrogate id only
/// matters for foreign keys.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product, returning the record with its assigned id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Look up a product by SKU
    async fn find_by_sku(&self, sku: &str) -> ProductResult<Option<Product>>;

    /// Look up a product by surrogate id (used for order-item references)
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Filtered, sorted, paginated listing
    async fn find_page(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> ProductResult<Page<Product>>;

    /// Does a product with this SKU exist?
    async fn exists_by_sku(&self, sku: &str) -> ProductResult<bool>;

    /// Replace the mutable fields of the product with this SKU.
    /// Returns None when no product matched.
    async fn update_by_sku(
        &self,
        sku: &str,
        changes: ProductChanges,
    ) -> ProductResult<Option<Product>>;

    /// Delete by SKU; false when nothing matched
    async fn delete_by_sku(&self, sku: &str) -> ProductResult<bool>;
}
