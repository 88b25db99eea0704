//! SeaORM implementations of the order repositories

use async_trait::async_trait;
use database::{fetch_page, BaseRepository, Page, PageRequest};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use uuid::Uuid;

use crate::entity::{order, order_item};
use crate::error::{OrderError, OrderResult};
use crate::models::{
    NewOrder, NewOrderItem, Order, OrderItem, OrderItemFilter, OrderQuery, OrderStatus,
};
use crate::repository::{OrderItemRepository, OrderRepository};

pub struct PgOrderRepository {
    base: BaseRepository<order::Entity>,
}

impl PgOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn filter_condition(filter: &OrderQuery) -> Condition {
        let mut condition = Condition::all();

        if let Some(client_id) = filter.client_id {
            condition = condition.add(order::Column::ClientId.eq(client_id));
        }
        if let Some(status) = filter.status {
            condition = condition.add(order::Column::Status.eq(status));
        }
        if let Some(from) = filter.date_from {
            condition = condition.add(order::Column::OrderDate.gte(from));
        }
        if let Some(to) = filter.date_to {
            condition = condition.add(order::Column::OrderDate.lte(to));
        }

        condition
    }

    /// Sort key allow-list; unknown or blank keys fall back to the order
    /// date column.
    fn sort_column(key: &str) -> order::Column {
        match key {
            "status" => order::Column::Status,
            "client_id" => order::Column::ClientId,
            _ => order::Column::OrderDate,
        }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, input: NewOrder) -> OrderResult<Order> {
        let client_id = input.client_id;
        let active_model: order::ActiveModel = input.into();

        // The FK is the backstop for a client deleted between the
        // existence check and this insert.
        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    OrderError::ClientNotFound(client_id)
                }
                _ => OrderError::storage(e),
            })?;

        tracing::info!(order_id = %model.id, client_id = %client_id, "Created order");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let model = self.base.find_by_id(id).await.map_err(OrderError::storage)?;
        Ok(model.map(Into::into))
    }

    async fn find_page(&self, filter: OrderQuery, page: PageRequest) -> OrderResult<Page<Order>> {
        let query = order::Entity::find()
            .filter(Self::filter_condition(&filter))
            .order_by(Self::sort_column(page.sort_by()), page.direction().into());

        let rows = fetch_page(self.base.db(), query, &page)
            .await
            .map_err(OrderError::storage)?;

        Ok(rows.map(Into::into))
    }

    async fn exists_by_id(&self, id: Uuid) -> OrderResult<bool> {
        let count = order::Entity::find()
            .filter(order::Column::Id.eq(id))
            .count(self.base.db())
            .await
            .map_err(OrderError::storage)?;

        Ok(count > 0)
    }

    async fn set_status_if_pending(&self, id: Uuid, next: OrderStatus) -> OrderResult<bool> {
        let result = order::Entity::update_many()
            .col_expr(order::Column::Status, Expr::value(next))
            .filter(order::Column::Id.eq(id))
            .filter(order::Column::Status.eq(OrderStatus::Pending))
            .exec(self.base.db())
            .await
            .map_err(OrderError::storage)?;

        if result.rows_affected > 0 {
            tracing::info!(order_id = %id, status = %next, "Updated order status");
        }
        Ok(result.rows_affected > 0)
    }
}

pub struct PgOrderItemRepository {
    base: BaseRepository<order_item::Entity>,
}

impl PgOrderItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn filter_condition(filter: &OrderItemFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(order_id) = filter.order_id {
            condition = condition.add(order_item::Column::OrderId.eq(order_id));
        }
        if let Some(product_id) = filter.product_id {
            condition = condition.add(order_item::Column::ProductId.eq(product_id));
        }
        if let Some(min) = filter.min_quantity {
            condition = condition.add(order_item::Column::Quantity.gte(min));
        }
        if let Some(max) = filter.max_quantity {
            condition = condition.add(order_item::Column::Quantity.lte(max));
        }

        condition
    }

    /// Sort key allow-list; unknown or blank keys fall back to the
    /// surrogate id.
    fn sort_column(key: &str) -> order_item::Column {
        match key {
            "quantity" => order_item::Column::Quantity,
            "price_cents" => order_item::Column::PriceCents,
            "order_id" => order_item::Column::OrderId,
            "product_id" => order_item::Column::ProductId,
            _ => order_item::Column::Id,
        }
    }
}

#[async_trait]
impl OrderItemRepository for PgOrderItemRepository {
    async fn create(&self, input: NewOrderItem) -> OrderResult<OrderItem> {
        let order_id = input.order_id;
        let product_id = input.product_id;
        let active_model: order_item::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(constraint)) => {
                    if constraint.contains("product") {
                        OrderError::ProductNotFound(product_id)
                    } else {
                        OrderError::NotFound(order_id)
                    }
                }
                _ => OrderError::storage(e),
            })?;

        tracing::info!(item_id = %model.id, order_id = %order_id, "Created order item");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> OrderResult<Option<OrderItem>> {
        let model = self.base.find_by_id(id).await.map_err(OrderError::storage)?;
        Ok(model.map(Into::into))
    }

    async fn find_page(
        &self,
        filter: OrderItemFilter,
        page: PageRequest,
    ) -> OrderResult<Page<OrderItem>> {
        let query = order_item::Entity::find()
            .filter(Self::filter_condition(&filter))
            .order_by(Self::sort_column(page.sort_by()), page.direction().into());

        let rows = fetch_page(self.base.db(), query, &page)
            .await
            .map_err(OrderError::storage)?;

        Ok(rows.map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_sort_keys_resolve_through_allow_list() {
        assert!(matches!(
            PgOrderRepository::sort_column("status"),
            order::Column::Status
        ));
        assert!(matches!(
            PgOrderRepository::sort_column("client_id"),
            order::Column::ClientId
        ));
    }

    #[test]
    fn test_unknown_order_sort_key_falls_back_to_order_date() {
        assert!(matches!(
            PgOrderRepository::sort_column("total"),
            order::Column::OrderDate
        ));
        assert!(matches!(
            PgOrderRepository::sort_column(""),
            order::Column::OrderDate
        ));
    }

    #[test]
    fn test_item_sort_keys_resolve_through_allow_list() {
        assert!(matches!(
            PgOrderItemRepository::sort_column("quantity"),
            order_item::Column::Quantity
        ));
        assert!(matches!(
            PgOrderItemRepository::sort_column("price_cents"),
            order_item::Column::PriceCents
        ));
    }

    #[test]
    fn test_unknown_item_sort_key_falls_back_to_id() {
        assert!(matches!(
            PgOrderItemRepository::sort_column("name"),
            order_item::Column::Id
        ));
    }
}
