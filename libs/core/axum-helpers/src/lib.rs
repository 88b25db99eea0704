//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the HTTP applications in
//! this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (UUID path parameters)
//! - **[`middleware`]**: HTTP middleware (security headers)
//! - **[`server`]**: Server setup, health checks, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;
mod shutdown;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::UuidPath;

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, run_health_checks,
    HealthCheckFuture, HealthResponse,
};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
