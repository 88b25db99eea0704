//! Clients Domain
//!
//! Registration and querying of clients, keyed externally by CPF.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules, validation pipeline
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! Validation rules run in a fixed order and stop at the first violation:
//! name, email shape, email uniqueness, CPF shape/checksum, CPF
//! uniqueness, birth date. See [`service::ClientService`].

pub mod cpf;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
mod validation;

// Re-export commonly used types
pub use error::{ClientError, ClientResult};
pub use models::{Client, ClientChanges, ClientFilter, CreateClient, NewClient, UpdateClient};
pub use postgres::PgClientRepository;
pub use repository::ClientRepository;
pub use service::ClientService;
