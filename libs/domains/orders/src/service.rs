//! Order and OrderItem services - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use database::{Page, PageRequest};
use domain_clients::ClientRepository;
use domain_products::ProductRepository;

use crate::error::{OrderError, OrderResult};
use crate::models::{
    CreateOrder, CreateOrderItem, NewOrder, NewOrderItem, Order, OrderFilter, OrderItem,
    OrderItemFilter, UpdateOrderStatus,
};
use crate::repository::{OrderItemRepository, OrderRepository};
use crate::validation;

/// Service layer for order business rules.
///
/// Placing an order checks the client reference, validates the requested
/// status name, and stores the order in pending with a server-side order
/// date. Status updates consult the state machine against the stored
/// status and then write through an atomic conditional update.
#[derive(Clone)]
pub struct OrderService<R, C>
where
    R: OrderRepository,
    C: ClientRepository,
{
    repository: Arc<R>,
    clients: Arc<C>,
}

impl<R, C> OrderService<R, C>
where
    R: OrderRepository,
    C: ClientRepository,
{
    pub fn new(repository: R, clients: C) -> Self {
        Self {
            repository: Arc::new(repository),
            clients: Arc::new(clients),
        }
    }

    /// Place a new order
    #[instrument(skip(self, input))]
    pub async fn place_order(&self, input: CreateOrder) -> OrderResult<Order> {
        let client_id = input.client_id.ok_or_else(|| {
            OrderError::Validation("Field CLIENT ID is required".to_string())
        })?;
        if !self.clients.exists_by_id(client_id).await? {
            return Err(OrderError::ClientNotFound(client_id));
        }

        // The requested status name must parse, but every order is
        // stored pending: the machine's only initial state.
        validation::status_name(input.status.as_deref().unwrap_or_default())?;

        self.repository.create(NewOrder { client_id }).await
    }

    /// Look up an order by id
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: Uuid) -> OrderResult<Order> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    /// Filtered, paginated order listing
    #[instrument(skip(self))]
    pub async fn find_page(
        &self,
        filter: OrderFilter,
        page: PageRequest,
    ) -> OrderResult<Page<Order>> {
        let query = validation::order_filter(filter)?;
        self.repository.find_page(query, page).await
    }

    /// Apply a status transition to an order
    #[instrument(skip(self, input))]
    pub async fn update_status(&self, id: Uuid, input: UpdateOrderStatus) -> OrderResult<Order> {
        let next = validation::status_name(input.status.as_deref().unwrap_or_default())?;

        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id))?;
        if !order.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: order.status,
                to: next,
            });
        }

        if !self.repository.set_status_if_pending(id, next).await? {
            // Lost the race: the order left pending between the read and
            // the conditional write. Re-read for an accurate message.
            let current = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or(OrderError::NotFound(id))?;
            return Err(OrderError::InvalidTransition {
                from: current.status,
                to: next,
            });
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id))
    }
}

/// Service layer for order line items.
///
/// Creation checks the order and product references in that order, then
/// the quantity, and snapshots the product's unit price. Items are
/// immutable once stored.
#[derive(Clone)]
pub struct OrderItemService<R, O, P>
where
    R: OrderItemRepository,
    O: OrderRepository,
    P: ProductRepository,
{
    repository: Arc<R>,
    orders: Arc<O>,
    products: Arc<P>,
}

impl<R, O, P> OrderItemService<R, O, P>
where
    R: OrderItemRepository,
    O: OrderRepository,
    P: ProductRepository,
{
    pub fn new(repository: R, orders: O, products: P) -> Self {
        Self {
            repository: Arc::new(repository),
            orders: Arc::new(orders),
            products: Arc::new(products),
        }
    }

    /// Add a line item to an order
    #[instrument(skip(self, input))]
    pub async fn add_item(&self, input: CreateOrderItem) -> OrderResult<OrderItem> {
        let order_id = input.order_id.ok_or_else(|| {
            OrderError::Validation("Field ORDER ID is required".to_string())
        })?;
        if !self.orders.exists_by_id(order_id).await? {
            return Err(OrderError::NotFound(order_id));
        }

        let product_id = input.product_id.ok_or_else(|| {
            OrderError::Validation("Field PRODUCT ID is required".to_string())
        })?;
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or(OrderError::ProductNotFound(product_id))?;

        let quantity = validation::quantity(input.quantity)?;

        // The unit price comes from the product, never from the request.
        self.repository
            .create(NewOrderItem {
                order_id,
                product_id,
                quantity,
                price_cents: product.price_cents,
            })
            .await
    }

    /// Look up a line item by id
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> OrderResult<OrderItem> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(OrderError::ItemNotFound(id))
    }

    /// Filtered, paginated line-item listing
    #[instrument(skip(self))]
    pub async fn find_page(
        &self,
        filter: OrderItemFilter,
        page: PageRequest,
    ) -> OrderResult<Page<OrderItem>> {
        let filter = validation::item_filter(filter)?;
        self.repository.find_page(filter, page).await
    }
}
