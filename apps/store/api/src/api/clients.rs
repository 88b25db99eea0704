use axum::Router;
use domain_clients::{handlers, ClientService, PgClientRepository};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgClientRepository::new(state.db.clone());
    let service = ClientService::new(repository);
    handlers::router(service)
}
