use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

use crate::models::OrderStatus;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order '{0}' not found")]
    NotFound(Uuid),

    #[error("Order item '{0}' not found")]
    ItemNotFound(Uuid),

    #[error("Client '{0}' not found")]
    ClientNotFound(Uuid),

    #[error("Product '{0}' not found")]
    ProductNotFound(Uuid),

    #[error("Order in status '{from}' cannot change to '{to}'")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Order storage operation failed")]
    Database,
}

pub type OrderResult<T> = Result<T, OrderError>;

impl OrderError {
    /// Wrap an unanticipated storage failure; cause goes to the log, the
    /// caller gets the stable message.
    pub(crate) fn storage(err: sea_orm::DbErr) -> Self {
        tracing::error!(error = %err, "order storage failure");
        OrderError::Database
    }
}

// Failures from the referenced domains while checking client/product
// references are storage failures here; their cause is already logged at
// the source repository.
impl From<domain_clients::ClientError> for OrderError {
    fn from(_: domain_clients::ClientError) -> Self {
        OrderError::Database
    }
}

impl From<domain_products::ProductError> for OrderError {
    fn from(_: domain_products::ProductError) -> Self {
        OrderError::Database
    }
}

/// Convert OrderError to AppError for standardized error responses
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => AppError::NotFound(format!("Order '{}' not found", id)),
            OrderError::ItemNotFound(id) => {
                AppError::NotFound(format!("Order item '{}' not found", id))
            }
            OrderError::ClientNotFound(id) => {
                AppError::UnprocessableEntity(format!("Client '{}' not found", id))
            }
            OrderError::ProductNotFound(id) => {
                AppError::UnprocessableEntity(format!("Product '{}' not found", id))
            }
            OrderError::InvalidTransition { from, to } => AppError::UnprocessableEntity(format!(
                "Order in status '{}' cannot change to '{}'",
                from, to
            )),
            OrderError::Validation(msg) => AppError::BadRequest(msg),
            OrderError::Database => {
                AppError::InternalServerError("order storage operation failed".to_string())
            }
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
