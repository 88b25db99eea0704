use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with SKU '{0}' not found")]
    NotFound(String),

    #[error("Product with SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Product storage operation failed")]
    Database,
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Wrap an unanticipated storage failure; cause goes to the log, the
    /// caller gets the stable message.
    pub(crate) fn storage(err: sea_orm::DbErr) -> Self {
        tracing::error!(error = %err, "product storage failure");
        ProductError::Database
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(sku) => {
                AppError::NotFound(format!("Product with SKU '{}' not found", sku))
            }
            ProductError::DuplicateSku(sku) => {
                AppError::Conflict(format!("Product with SKU '{}' already exists", sku))
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database => {
                AppError::InternalServerError("product storage operation failed".to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
