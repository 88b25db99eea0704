mod app;
mod health;

pub use app::{create_app, create_production_app, create_router};
pub use health::{
    health_handler, health_router, run_health_checks, HealthCheckFuture, HealthResponse,
};
