use axum::Router;

pub mod clients;
pub mod health;
pub mod order_items;
pub mod orders;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Takes a reference to AppState and initializes all services. Returns a
/// stateless Router (all sub-routers have their state already applied);
/// only cheap pool-handle clones remain.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/clients", clients::router(state))
        .nest("/products", products::router(state))
        .nest("/orders", orders::router(state))
        .nest("/order-items", order_items::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks against the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
