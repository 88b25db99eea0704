use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Order lifecycle status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OrderStatus {
    /// The only initial state; the only state an order may leave
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Terminal
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Terminal
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// State machine rule: a transition is legal only when the current
    /// state is pending and the target is not pending. Completed and
    /// cancelled are terminal; nothing ever returns to pending.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self == OrderStatus::Pending && next != OrderStatus::Pending
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Unique identifier
    pub id: Uuid,
    /// Owning client
    pub client_id: Uuid,
    /// Set server-side at creation; immutable thereafter
    pub order_date: DateTime<Utc>,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for placing a new order
///
/// The requested status name is validated but the stored order always
/// starts in `pending`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrder {
    pub client_id: Option<Uuid>,
    /// Status name, case-insensitive (e.g. "pending")
    pub status: Option<String>,
}

/// DTO for an order status update
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrderStatus {
    /// Target status name, case-insensitive
    pub status: Option<String>,
}

/// A validated order ready to be stored; the repository stamps the order
/// date and the initial pending status.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub client_id: Uuid,
}

/// Raw filter inputs for order listings
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OrderFilter {
    /// Exact match on client
    pub client_id: Option<Uuid>,
    /// Status name, case-insensitive
    pub status: Option<String>,
    /// Earliest order date, inclusive
    pub date_from: Option<DateTime<Utc>>,
    /// Latest order date, inclusive
    pub date_to: Option<DateTime<Utc>>,
}

/// Validated order filter with a typed status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    pub client_id: Option<Uuid>,
    pub status: Option<OrderStatus>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

/// Order line item entity
///
/// `price_cents` is the unit price snapshotted from the product when the
/// item was created; later product price changes never touch it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    /// Unique identifier
    pub id: Uuid,
    /// Owning order
    pub order_id: Uuid,
    /// Referenced product
    pub product_id: Uuid,
    /// Units ordered, always positive
    pub quantity: i32,
    /// Snapshot unit price in cents
    pub price_cents: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for adding a line item to an order
///
/// Carries no price: the unit price is always snapshotted from the
/// referenced product.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrderItem {
    pub order_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
}

/// A validated line item with its price snapshot resolved
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price_cents: i64,
}

/// Query filters for listing order items
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OrderItemFilter {
    /// Exact match on order
    pub order_id: Option<Uuid>,
    /// Exact match on product
    pub product_id: Option<Uuid>,
    /// Minimum quantity, inclusive
    pub min_quantity: Option<i32>,
    /// Maximum quantity, inclusive
    pub max_quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_may_complete_or_cancel() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_nothing_returns_to_pending() {
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn test_terminal_states_never_move() {
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Completed));
    }

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!("pending".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!("COMPLETED".parse::<OrderStatus>().unwrap(), OrderStatus::Completed);
        assert_eq!("Cancelled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_display_is_lowercase() {
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
        assert_eq!(OrderStatus::Completed.to_string(), "completed");
    }
}
