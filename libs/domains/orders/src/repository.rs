use async_trait::async_trait;
use database::{Page, PageRequest};
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{
    NewOrder, NewOrderItem, Order, OrderItem, OrderItemFilter, OrderQuery, OrderStatus,
};

/// Repository trait for Order persistence
///
/// Orders are never deleted; their status only changes through
/// [`set_status_if_pending`](OrderRepository::set_status_if_pending).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store a new order in the pending state with a server-side order
    /// date
    async fn create(&self, input: NewOrder) -> OrderResult<Order>;

    /// Look up an order by id
    async fn find_by_id(&self, id: Uuid) -> OrderResult<Option<Order>>;

    /// Filtered, sorted, paginated listing
    async fn find_page(&self, filter: OrderQuery, page: PageRequest) -> OrderResult<Page<Order>>;

    /// Does an order with this id exist?
    async fn exists_by_id(&self, id: Uuid) -> OrderResult<bool>;

    /// Atomic conditional status write: `UPDATE ... WHERE id = $1 AND
    /// status = 'pending'`. Returns false when no row qualified, i.e.
    /// the order is gone or already left pending.
    async fn set_status_if_pending(&self, id: Uuid, next: OrderStatus) -> OrderResult<bool>;
}

/// Repository trait for OrderItem persistence
///
/// Line items are immutable once created.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    /// Store a new line item with its resolved price snapshot
    async fn create(&self, input: NewOrderItem) -> OrderResult<OrderItem>;

    /// Look up a line item by id
    async fn find_by_id(&self, id: Uuid) -> OrderResult<Option<OrderItem>>;

    /// Filtered, sorted, paginated listing
    async fn find_page(
        &self,
        filter: OrderItemFilter,
        page: PageRequest,
    ) -> OrderResult<Page<OrderItem>>;
}
