use axum::Router;
use domain_orders::{OrderItemService, PgOrderItemRepository, PgOrderRepository, handlers};
use domain_products::PgProductRepository;

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgOrderItemRepository::new(state.db.clone());
    let orders = PgOrderRepository::new(state.db.clone());
    let products = PgProductRepository::new(state.db.clone());
    let service = OrderItemService::new(repository, orders, products);
    handlers::items_router(service)
}
