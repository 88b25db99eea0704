use axum::{extract::State, response::IntoResponse};
use axum_helpers::{run_health_checks, HealthCheckFuture};

use crate::state::AppState;

/// Readiness handler: pings the database through the pool.
pub async fn ready_handler(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok(response) => response.into_response(),
        Err(response) => response.into_response(),
    }
}
