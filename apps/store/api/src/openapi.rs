use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Store API",
        version = "0.1.0",
        description = "Registration and query API for clients, products, orders and order items"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/clients", api = domain_clients::handlers::ApiDoc),
        (path = "/products", api = domain_products::handlers::ApiDoc),
        (path = "/orders", api = domain_orders::handlers::ApiDoc),
        (path = "/order-items", api = domain_orders::handlers::ItemsApiDoc)
    )
)]
pub struct ApiDoc;
