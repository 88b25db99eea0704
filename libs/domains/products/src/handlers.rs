use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
};
use database::{Page, PageRequest};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, Page<Product>),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Query parameters for the product listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListParams {
    /// Page index, 0-based; negative values clamp to 0
    #[serde(default)]
    pub page: i64,
    /// Page size; values <= 0 fall back to 10
    #[serde(default)]
    pub lines_per_page: i64,
    /// Sort column: name, sku, price_cents, expiration (default: name)
    #[serde(default)]
    pub order_by: String,
    /// Sort direction: asc or desc (default: asc)
    #[serde(default)]
    pub direction: String,
    /// Substring match on name
    pub name: Option<String>,
    /// Exact match on SKU
    pub sku: Option<String>,
    /// Minimum price in cents, inclusive
    pub min_price_cents: Option<i64>,
    /// Maximum price in cents, inclusive
    pub max_price_cents: Option<i64>,
}

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{sku}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Page of products", body = Page<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<ProductListParams>,
) -> ProductResult<Json<Page<Product>>> {
    let page = PageRequest::new(
        params.page,
        params.lines_per_page,
        params.order_by,
        &params.direction,
    );
    let filter = ProductFilter {
        name: params.name,
        sku: params.sku,
        min_price_cents: params.min_price_cents,
        max_price_cents: params.max_price_cents,
    };

    let products = service.find_page(filter, page).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by SKU
#[utoipa::path(
    get,
    path = "/{sku}",
    tag = "products",
    params(
        ("sku" = String, Path, description = "Product SKU (8 alphanumeric characters)")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(sku): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_by_sku(&sku).await?;
    Ok(Json(product))
}

/// Update a product by SKU
#[utoipa::path(
    put,
    path = "/{sku}",
    tag = "products",
    params(
        ("sku" = String, Path, description = "Product SKU (8 alphanumeric characters)")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(sku): Path<String>,
    Json(input): Json<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&sku, input).await?;
    Ok(Json(product))
}

/// Delete a product by SKU
#[utoipa::path(
    delete,
    path = "/{sku}",
    tag = "products",
    params(
        ("sku" = String, Path, description = "Product SKU (8 alphanumeric characters)")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(sku): Path<String>,
) -> ProductResult<impl IntoResponse> {
    service.delete_by_sku(&sku).await?;
    Ok(StatusCode::NO_CONTENT)
}
