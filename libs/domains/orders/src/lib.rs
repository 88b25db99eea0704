//! Orders Domain
//!
//! Orders and their line items. An order belongs to a client, starts in
//! `pending`, and moves through a small state machine: `pending` may go
//! to `completed` or `cancelled`, both of which are terminal. Line items
//! reference an order and a product and snapshot the product's unit
//! price at creation; they are immutable afterwards and persist as a
//! join table, not a nested collection.
//!
//! Status updates use an atomic conditional write (`UPDATE ... WHERE
//! status = 'pending'`); zero affected rows means the order already left
//! `pending` and the request is rejected as a business error.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
mod validation;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use models::{
    CreateOrder, CreateOrderItem, NewOrder, NewOrderItem, Order, OrderFilter, OrderItem,
    OrderItemFilter, OrderQuery, OrderStatus, UpdateOrderStatus,
};
pub use postgres::{PgOrderItemRepository, PgOrderRepository};
pub use repository::{OrderItemRepository, OrderRepository};
pub use service::{OrderItemService, OrderService};
