//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use database::{Page, PageRequest};

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, NewProduct, Product, ProductChanges, ProductFilter, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::validation;

/// Service layer for product business rules.
///
/// Save and update run the same validation sequence and stop at the
/// first violation: name, price, expiration, SKU format, then the SKU
/// uniqueness (save) or existence (update/delete) check.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let name = validation::product_name(&input.name)?;
        let price_cents = validation::price(input.price_cents)?;
        let expiration = validation::expiration(input.expiration)?;

        let sku = validation::sku_field(&input.sku)?;
        if self.repository.exists_by_sku(&sku).await? {
            return Err(ProductError::DuplicateSku(sku));
        }

        self.repository
            .create(NewProduct {
                name,
                sku,
                price_cents,
                expiration,
            })
            .await
    }

    /// Look up a product by SKU
    #[instrument(skip(self))]
    pub async fn get_by_sku(&self, sku: &str) -> ProductResult<Product> {
        let sku = validation::sku_field(sku)?;
        self.repository
            .find_by_sku(&sku)
            .await?
            .ok_or(ProductError::NotFound(sku))
    }

    /// Filtered, paginated product listing
    #[instrument(skip(self))]
    pub async fn find_page(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> ProductResult<Page<Product>> {
        let filter = validation::filter(filter)?;
        self.repository.find_page(filter, page).await
    }

    /// Update the product with the given SKU
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, sku: &str, input: UpdateProduct) -> ProductResult<Product> {
        let name = validation::product_name(&input.name)?;
        let price_cents = validation::price(input.price_cents)?;
        let expiration = validation::expiration(input.expiration)?;
        let sku = validation::sku_field(sku)?;

        self.repository
            .update_by_sku(
                &sku,
                ProductChanges {
                    name,
                    price_cents,
                    expiration,
                },
            )
            .await?
            .ok_or(ProductError::NotFound(sku))
    }

    /// Delete the product with the given SKU
    #[instrument(skip(self))]
    pub async fn delete_by_sku(&self, sku: &str) -> ProductResult<()> {
        let sku = validation::sku_field(sku)?;
        if !self.repository.delete_by_sku(&sku).await? {
            return Err(ProductError::NotFound(sku));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn tomorrow() -> NaiveDate {
        Utc::now().date_naive() + chrono::Days::new(1)
    }

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Batarang".to_string(),
            sku: "AB12CD34".to_string(),
            price_cents: Some(7999),
            expiration: Some(tomorrow()),
        }
    }

    fn stored_product() -> Product {
        Product {
            id: Uuid::now_v7(),
            name: "Batarang".to_string(),
            sku: "AB12CD34".to_string(),
            price_cents: 7999,
            expiration: tomorrow(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_exists_by_sku()
            .with(mockall::predicate::eq("AB12CD34"))
            .returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .withf(|input| input.sku == "AB12CD34" && input.price_cents == 7999)
            .returning(|_| Ok(stored_product()));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(create_input()).await.unwrap();

        assert_eq!(product.sku, "AB12CD34");
    }

    #[tokio::test]
    async fn test_create_product_seven_char_sku_fails_before_lookup() {
        // No expectations: the SKU length failure must precede any
        // repository call.
        let service = ProductService::new(MockProductRepository::new());

        let result = service
            .create_product(CreateProduct {
                sku: "AB12CD3".to_string(),
                ..create_input()
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_product_duplicate_sku() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_exists_by_sku().returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        let result = service.create_product(create_input()).await;

        assert!(matches!(result, Err(ProductError::DuplicateSku(_))));
    }

    #[tokio::test]
    async fn test_create_product_name_checked_first() {
        let service = ProductService::new(MockProductRepository::new());

        let result = service
            .create_product(CreateProduct {
                name: "abc".to_string(),
                price_cents: None, // would also fail, but name wins
                ..create_input()
            })
            .await;

        match result {
            Err(ProductError::Validation(msg)) => assert!(msg.contains("NAME")),
            other => panic!("expected name validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_product_rejects_past_expiration() {
        let service = ProductService::new(MockProductRepository::new());

        let result = service
            .create_product(CreateProduct {
                expiration: Some(Utc::now().date_naive() - chrono::Days::new(1)),
                ..create_input()
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update_by_sku().returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(
                "AB12CD34",
                UpdateProduct {
                    name: "Batarang Mk2".to_string(),
                    price_cents: Some(8999),
                    expiration: Some(tomorrow()),
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_product_success() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update_by_sku()
            .withf(|sku, changes| sku == "AB12CD34" && changes.price_cents == 8999)
            .returning(|_, _| Ok(Some(stored_product())));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(
                "AB12CD34",
                UpdateProduct {
                    name: "Batarang Mk2".to_string(),
                    price_cents: Some(8999),
                    expiration: Some(tomorrow()),
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_find_page_rejects_inverted_price_range_before_query() {
        let service = ProductService::new(MockProductRepository::new());

        let result = service
            .find_page(
                ProductFilter {
                    min_price_cents: Some(1000),
                    max_price_cents: Some(500),
                    ..Default::default()
                },
                PageRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_by_sku_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete_by_sku().returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_by_sku("AB12CD34").await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }
}
