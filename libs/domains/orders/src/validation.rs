//! Field validation for order and order-item operations.

use chrono::Utc;

use crate::error::{OrderError, OrderResult};
use crate::models::{OrderFilter, OrderItemFilter, OrderQuery, OrderStatus};

/// Parse a requested status name: whitespace-stripped, case-insensitive,
/// must name a known status.
pub(crate) fn status_name(raw: &str) -> OrderResult<OrderStatus> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(OrderError::Validation(
            "Field STATUS is required".to_string(),
        ));
    }
    stripped.parse::<OrderStatus>().map_err(|_| {
        OrderError::Validation(format!("'{}' is not a valid order status", stripped))
    })
}

pub(crate) fn quantity(value: Option<i32>) -> OrderResult<i32> {
    match value {
        Some(quantity) if quantity > 0 => Ok(quantity),
        Some(_) => Err(OrderError::Validation(
            "Field QUANTITY must be greater than zero".to_string(),
        )),
        None => Err(OrderError::Validation(
            "Field QUANTITY is required".to_string(),
        )),
    }
}

/// Validate and type order listing filters: blank status becomes absent,
/// a present status must parse, the date range must be ordered with
/// neither bound in the future.
pub(crate) fn order_filter(filter: OrderFilter) -> OrderResult<OrderQuery> {
    let status = match filter.status.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Some(status_name(s)?),
        _ => None,
    };

    if let (Some(from), Some(to)) = (filter.date_from, filter.date_to) {
        if from > to {
            return Err(OrderError::Validation(
                "Order date range start must not be after its end".to_string(),
            ));
        }
    }

    let now = Utc::now();
    for bound in [filter.date_from, filter.date_to].into_iter().flatten() {
        if bound > now {
            return Err(OrderError::Validation(
                "Order date filters cannot be in the future".to_string(),
            ));
        }
    }

    Ok(OrderQuery {
        client_id: filter.client_id,
        status,
        date_from: filter.date_from,
        date_to: filter.date_to,
    })
}

/// Validate order-item listing filters: the quantity range must be
/// ordered.
pub(crate) fn item_filter(filter: OrderItemFilter) -> OrderResult<OrderItemFilter> {
    if let (Some(min), Some(max)) = (filter.min_quantity, filter.max_quantity) {
        if min > max {
            return Err(OrderError::Validation(
                "Minimum quantity must not exceed maximum quantity".to_string(),
            ));
        }
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn test_status_name_strips_and_ignores_case() {
        assert_eq!(status_name(" pending ").unwrap(), OrderStatus::Pending);
        assert_eq!(status_name("COMPLETED").unwrap(), OrderStatus::Completed);
        assert_eq!(status_name("Can celled").unwrap(), OrderStatus::Cancelled);
    }

    #[test]
    fn test_status_name_rejects_unknown_and_blank() {
        assert!(matches!(status_name(""), Err(OrderError::Validation(_))));
        assert!(matches!(status_name("   "), Err(OrderError::Validation(_))));
        assert!(matches!(
            status_name("shipped"),
            Err(OrderError::Validation(_))
        ));
    }

    #[test]
    fn test_quantity_rules() {
        assert_eq!(quantity(Some(3)).unwrap(), 3);
        assert!(quantity(Some(0)).is_err());
        assert!(quantity(Some(-1)).is_err());
        assert!(quantity(None).is_err());
    }

    #[test]
    fn test_order_filter_types_the_status() {
        let query = order_filter(OrderFilter {
            status: Some("PENDING".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(query.status, Some(OrderStatus::Pending));
    }

    #[test]
    fn test_order_filter_blank_status_becomes_absent() {
        let query = order_filter(OrderFilter {
            status: Some("  ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(query.status.is_none());
    }

    #[test]
    fn test_order_filter_unknown_status_is_rejected() {
        let result = order_filter(OrderFilter {
            status: Some("shipped".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[test]
    fn test_order_filter_inverted_date_range_is_rejected() {
        let now = Utc::now();
        let result = order_filter(OrderFilter {
            date_from: Some(now),
            date_to: Some(now - Days::new(1)),
            ..Default::default()
        });
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[test]
    fn test_order_filter_future_bound_is_rejected() {
        let result = order_filter(OrderFilter {
            date_to: Some(Utc::now() + Days::new(1)),
            ..Default::default()
        });
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[test]
    fn test_item_filter_inverted_quantity_range_is_rejected() {
        let result = item_filter(OrderItemFilter {
            min_quantity: Some(10),
            max_quantity: Some(5),
            ..Default::default()
        });
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }
}
