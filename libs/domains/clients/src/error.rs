use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client with CPF '{0}' not found")]
    NotFound(String),

    #[error("Client with CPF '{0}' is already registered")]
    DuplicateCpf(String),

    #[error("Client with email '{0}' is already registered")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Client storage operation failed")]
    Database,
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Wrap an unanticipated storage failure.
    ///
    /// The cause is logged for diagnostics; the caller only ever sees the
    /// stable message of [`ClientError::Database`].
    pub(crate) fn storage(err: sea_orm::DbErr) -> Self {
        tracing::error!(error = %err, "client storage failure");
        ClientError::Database
    }
}

/// Convert ClientError to AppError for standardized error responses
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(cpf) => {
                AppError::NotFound(format!("Client with CPF '{}' not found", cpf))
            }
            ClientError::DuplicateCpf(cpf) => {
                AppError::Conflict(format!("Client with CPF '{}' is already registered", cpf))
            }
            ClientError::DuplicateEmail(email) => AppError::Conflict(format!(
                "Client with email '{}' is already registered",
                email
            )),
            ClientError::Validation(msg) => AppError::BadRequest(msg),
            ClientError::Database => {
                AppError::InternalServerError("client storage operation failed".to_string())
            }
        }
    }
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
