//! Products Domain
//!
//! Catalog of products addressed externally by SKU: an exactly-8-character
//! alphanumeric code, unique across products. Prices are stored as integer
//! cents. Same handler/service/repository/models layering as the other
//! domain crates.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use models::{CreateProduct, NewProduct, Product, ProductChanges, ProductFilter, UpdateProduct};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
