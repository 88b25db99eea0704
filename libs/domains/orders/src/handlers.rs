use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    UnprocessableEntityResponse,
};
use axum_helpers::UuidPath;
use chrono::{DateTime, Utc};
use database::{Page, PageRequest};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{
    CreateOrder, CreateOrderItem, Order, OrderFilter, OrderItem, OrderItemFilter,
    UpdateOrderStatus,
};
use crate::repository::{OrderItemRepository, OrderRepository};
use crate::service::{OrderItemService, OrderService};
use domain_clients::ClientRepository;
use domain_products::ProductRepository;

/// OpenAPI documentation for the Orders API
#[derive(OpenApi)]
#[openapi(
    paths(list_orders, place_order, get_order, update_order_status),
    components(
        schemas(Order, CreateOrder, UpdateOrderStatus, Page<Order>),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "orders", description = "Order lifecycle endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the Order Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_order_items, add_order_item, get_order_item),
    components(
        schemas(OrderItem, CreateOrderItem, Page<OrderItem>),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "order-items", description = "Order line-item endpoints")
    )
)]
pub struct ItemsApiDoc;

/// Query parameters for the order listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderListParams {
    /// Page index, 0-based; negative values clamp to 0
    #[serde(default)]
    pub page: i64,
    /// Page size; values <= 0 fall back to 10
    #[serde(default)]
    pub lines_per_page: i64,
    /// Sort column: order_date, status, client_id (default: order_date)
    #[serde(default)]
    pub order_by: String,
    /// Sort direction: asc or desc (default: asc)
    #[serde(default)]
    pub direction: String,
    /// Exact match on client
    pub client_id: Option<Uuid>,
    /// Status name, case-insensitive
    pub status: Option<String>,
    /// Earliest order date, inclusive
    pub date_from: Option<DateTime<Utc>>,
    /// Latest order date, inclusive
    pub date_to: Option<DateTime<Utc>>,
}

/// Query parameters for the order-item listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderItemListParams {
    /// Page index, 0-based; negative values clamp to 0
    #[serde(default)]
    pub page: i64,
    /// Page size; values <= 0 fall back to 10
    #[serde(default)]
    pub lines_per_page: i64,
    /// Sort column: quantity, price_cents, order_id, product_id (default: id)
    #[serde(default)]
    pub order_by: String,
    /// Sort direction: asc or desc (default: asc)
    #[serde(default)]
    pub direction: String,
    /// Exact match on order
    pub order_id: Option<Uuid>,
    /// Exact match on product
    pub product_id: Option<Uuid>,
    /// Minimum quantity, inclusive
    pub min_quantity: Option<i32>,
    /// Maximum quantity, inclusive
    pub max_quantity: Option<i32>,
}

/// Create the order router with all HTTP endpoints
pub fn router<R, C>(service: OrderService<R, C>) -> Router
where
    R: OrderRepository + 'static,
    C: ClientRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_orders).post(place_order))
        .route("/{id}", get(get_order))
        .route("/{id}/status", patch(update_order_status))
        .with_state(shared_service)
}

/// Create the order-item router with all HTTP endpoints
pub fn items_router<R, O, P>(service: OrderItemService<R, O, P>) -> Router
where
    R: OrderItemRepository + 'static,
    O: OrderRepository + 'static,
    P: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_order_items).post(add_order_item))
        .route("/{id}", get(get_order_item))
        .with_state(shared_service)
}

/// List orders with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "orders",
    params(OrderListParams),
    responses(
        (status = 200, description = "Page of orders", body = Page<Order>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_orders<R: OrderRepository, C: ClientRepository>(
    State(service): State<Arc<OrderService<R, C>>>,
    Query(params): Query<OrderListParams>,
) -> OrderResult<Json<Page<Order>>> {
    let page = PageRequest::new(
        params.page,
        params.lines_per_page,
        params.order_by,
        &params.direction,
    );
    let filter = OrderFilter {
        client_id: params.client_id,
        status: params.status,
        date_from: params.date_from,
        date_to: params.date_to,
    };

    let orders = service.find_page(filter, page).await?;
    Ok(Json(orders))
}

/// Place a new order
#[utoipa::path(
    post,
    path = "",
    tag = "orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order placed successfully", body = Order),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn place_order<R: OrderRepository, C: ClientRepository>(
    State(service): State<Arc<OrderService<R, C>>>,
    Json(input): Json<CreateOrder>,
) -> OrderResult<impl IntoResponse> {
    let order = service.place_order(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Get an order by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_order<R: OrderRepository, C: ClientRepository>(
    State(service): State<Arc<OrderService<R, C>>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Json<Order>> {
    let order = service.get_order(id).await?;
    Ok(Json(order))
}

/// Update the status of an order
#[utoipa::path(
    patch,
    path = "/{id}/status",
    tag = "orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatus,
    responses(
        (status = 200, description = "Status updated successfully", body = Order),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_order_status<R: OrderRepository, C: ClientRepository>(
    State(service): State<Arc<OrderService<R, C>>>,
    UuidPath(id): UuidPath,
    Json(input): Json<UpdateOrderStatus>,
) -> OrderResult<Json<Order>> {
    let order = service.update_status(id, input).await?;
    Ok(Json(order))
}

/// List order items with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "order-items",
    params(OrderItemListParams),
    responses(
        (status = 200, description = "Page of order items", body = Page<OrderItem>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_order_items<R, O, P>(
    State(service): State<Arc<OrderItemService<R, O, P>>>,
    Query(params): Query<OrderItemListParams>,
) -> OrderResult<Json<Page<OrderItem>>>
where
    R: OrderItemRepository,
    O: OrderRepository,
    P: ProductRepository,
{
    let page = PageRequest::new(
        params.page,
        params.lines_per_page,
        params.order_by,
        &params.direction,
    );
    let filter = OrderItemFilter {
        order_id: params.order_id,
        product_id: params.product_id,
        min_quantity: params.min_quantity,
        max_quantity: params.max_quantity,
    };

    let items = service.find_page(filter, page).await?;
    Ok(Json(items))
}

/// Add a line item to an order
#[utoipa::path(
    post,
    path = "",
    tag = "order-items",
    request_body = CreateOrderItem,
    responses(
        (status = 201, description = "Item added successfully", body = OrderItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_order_item<R, O, P>(
    State(service): State<Arc<OrderItemService<R, O, P>>>,
    Json(input): Json<CreateOrderItem>,
) -> OrderResult<impl IntoResponse>
where
    R: OrderItemRepository,
    O: OrderRepository,
    P: ProductRepository,
{
    let item = service.add_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an order item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "order-items",
    params(
        ("id" = Uuid, Path, description = "Order item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = OrderItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_order_item<R, O, P>(
    State(service): State<Arc<OrderItemService<R, O, P>>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Json<OrderItem>>
where
    R: OrderItemRepository,
    O: OrderRepository,
    P: ProductRepository,
{
    let item = service.get_item(id).await?;
    Ok(Json(item))
}
