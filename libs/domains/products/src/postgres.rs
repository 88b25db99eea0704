//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use database::{fetch_page, BaseRepository, Page, PageRequest};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use uuid::Uuid;

use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, Product, ProductChanges, ProductFilter};
use crate::repository::ProductRepository;

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn filter_condition(filter: &ProductFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = &filter.name {
            condition = condition.add(entity::Column::Name.contains(name));
        }
        if let Some(sku) = &filter.sku {
            condition = condition.add(entity::Column::Sku.eq(sku.as_str()));
        }
        if let Some(min) = filter.min_price_cents {
            condition = condition.add(entity::Column::PriceCents.gte(min));
        }
        if let Some(max) = filter.max_price_cents {
            condition = condition.add(entity::Column::PriceCents.lte(max));
        }

        condition
    }

    /// Sort key allow-list; unknown or blank keys fall back to the name
    /// column.
    fn sort_column(key: &str) -> entity::Column {
        match key {
            "sku" => entity::Column::Sku,
            "price_cents" => entity::Column::PriceCents,
            "expiration" => entity::Column::Expiration,
            _ => entity::Column::Name,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let sku = input.sku.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => ProductError::DuplicateSku(sku),
                _ => ProductError::storage(e),
            })?;

        tracing::info!(product_id = %model.id, sku = %model.sku, "Created product");
        Ok(model.into())
    }

    async fn find_by_sku(&self, sku: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Sku.eq(sku))
            .one(self.base.db())
            .await
            .map_err(ProductError::storage)?;

        Ok(model.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(ProductError::storage)?;

        Ok(model.map(Into::into))
    }

    async fn find_page(
        &self,
        filter: ProductFilter,
        page: PageRequest,
    ) -> ProductResult<Page<Product>> {
        let query = entity::Entity::find()
            .filter(Self::filter_condition(&filter))
            .order_by(Self::sort_column(page.sort_by()), page.direction().into());

        let rows = fetch_page(self.base.db(), query, &page)
            .await
            .map_err(ProductError::storage)?;

        Ok(rows.map(Into::into))
    }

    async fn exists_by_sku(&self, sku: &str) -> ProductResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Sku.eq(sku))
            .count(self.base.db())
            .await
            .map_err(ProductError::storage)?;

        Ok(count > 0)
    }

    async fn update_by_sku(
        &self,
        sku: &str,
        changes: ProductChanges,
    ) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find()
            .filter(entity::Column::Sku.eq(sku))
            .one(self.base.db())
            .await
            .map_err(ProductError::storage)?
        else {
            return Ok(None);
        };

        let active_model = entity::ActiveModel {
            id: Set(model.id),
            name: Set(changes.name),
            sku: Set(model.sku),
            price_cents: Set(changes.price_cents),
            expiration: Set(changes.expiration),
            created_at: Set(model.created_at),
            updated_at: Set(chrono::Utc::now().into()),
        };

        let updated = self
            .base
            .update(active_model)
            .await
            .map_err(ProductError::storage)?;

        tracing::info!(sku = %sku, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn delete_by_sku(&self, sku: &str) -> ProductResult<bool> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::Sku.eq(sku))
            .exec(self.base.db())
            .await
            .map_err(ProductError::storage)?;

        if result.rows_affected > 0 {
            tracing::info!(sku = %sku, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
