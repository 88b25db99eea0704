use axum::Router;
use domain_clients::PgClientRepository;
use domain_orders::{OrderService, PgOrderRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgOrderRepository::new(state.db.clone());
    let clients = PgClientRepository::new(state.db.clone());
    let service = OrderService::new(repository, clients);
    handlers::router(service)
}
