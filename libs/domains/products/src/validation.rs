//! Field normalization and validation for product operations.

use chrono::{NaiveDate, Utc};

use crate::error::{ProductError, ProductResult};
use crate::models::ProductFilter;

pub(crate) const SKU_LENGTH: usize = 8;

fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

pub(crate) fn product_name(raw: &str) -> ProductResult<String> {
    let name = normalize_name(raw);
    if name.chars().count() <= 3 {
        return Err(ProductError::Validation(
            "Field NAME is required and must have more than 3 characters".to_string(),
        ));
    }
    Ok(name)
}

pub(crate) fn price(value: Option<i64>) -> ProductResult<i64> {
    match value {
        Some(cents) if cents > 0 => Ok(cents),
        Some(_) => Err(ProductError::Validation(
            "Field PRICE must be greater than zero".to_string(),
        )),
        None => Err(ProductError::Validation(
            "Field PRICE is required".to_string(),
        )),
    }
}

pub(crate) fn expiration(value: Option<NaiveDate>) -> ProductResult<NaiveDate> {
    let expiration = value.ok_or_else(|| {
        ProductError::Validation("Field EXPIRATION DATE is required".to_string())
    })?;
    if expiration < Utc::now().date_naive() {
        return Err(ProductError::Validation(
            "Expiration date cannot be in the past".to_string(),
        ));
    }
    Ok(expiration)
}

/// SKUs are exactly 8 ASCII-alphanumeric characters, whitespace-stripped.
pub(crate) fn sku_field(raw: &str) -> ProductResult<String> {
    let sku = strip_whitespace(raw);
    if sku.is_empty() {
        return Err(ProductError::Validation("Field SKU is required".to_string()));
    }
    if sku.chars().count() != SKU_LENGTH {
        return Err(ProductError::Validation(format!(
            "SKU must have exactly {} characters",
            SKU_LENGTH
        )));
    }
    if !sku.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ProductError::Validation(
            "SKU must contain only letters and digits".to_string(),
        ));
    }
    Ok(sku)
}

/// Validate and normalize listing filters: blanks become absent, a
/// present SKU still satisfies the full SKU rule, price range must be
/// ordered.
pub(crate) fn filter(filter: ProductFilter) -> ProductResult<ProductFilter> {
    let name = filter
        .name
        .as_deref()
        .map(normalize_name)
        .filter(|s| !s.is_empty());

    let sku = match filter.sku.as_deref().map(strip_whitespace) {
        Some(s) if !s.is_empty() => Some(sku_field(&s)?),
        _ => None,
    };

    if let (Some(min), Some(max)) = (filter.min_price_cents, filter.max_price_cents) {
        if min > max {
            return Err(ProductError::Validation(
                "Minimum price must not exceed maximum price".to_string(),
            ));
        }
    }

    Ok(ProductFilter {
        name,
        sku,
        min_price_cents: filter.min_price_cents,
        max_price_cents: filter.max_price_cents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_of_exactly_8_alphanumerics_is_accepted() {
        assert_eq!(sku_field("AB12CD34").unwrap(), "AB12CD34");
        assert_eq!(sku_field("ab12cd34").unwrap(), "ab12cd34");
        assert_eq!(sku_field(" AB12CD34 ").unwrap(), "AB12CD34");
    }

    #[test]
    fn test_sku_wrong_length_is_rejected() {
        assert!(sku_field("AB12CD3").is_err()); // 7 chars
        assert!(sku_field("AB12CD345").is_err()); // 9 chars
        assert!(sku_field("").is_err());
    }

    #[test]
    fn test_sku_non_alphanumeric_is_rejected() {
        assert!(sku_field("AB12CD3!").is_err());
        assert!(sku_field("AB-12-34").is_err());
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(price(Some(7999)).unwrap(), 7999);
        assert!(price(Some(0)).is_err());
        assert!(price(Some(-100)).is_err());
        assert!(price(None).is_err());
    }

    #[test]
    fn test_expiration_rules() {
        let today = Utc::now().date_naive();
        assert_eq!(expiration(Some(today)).unwrap(), today);

        let tomorrow = today + chrono::Days::new(1);
        assert_eq!(expiration(Some(tomorrow)).unwrap(), tomorrow);

        let yesterday = today - chrono::Days::new(1);
        assert!(expiration(Some(yesterday)).is_err());
        assert!(expiration(None).is_err());
    }

    #[test]
    fn test_filter_blank_sku_becomes_absent() {
        let validated = filter(ProductFilter {
            sku: Some("  ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(validated.sku.is_none());
    }

    #[test]
    fn test_filter_sku_still_obeys_format_rule() {
        let result = filter(ProductFilter {
            sku: Some("AB12CD3".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[test]
    fn test_filter_inverted_price_range_is_rejected() {
        let result = filter(ProductFilter {
            min_price_cents: Some(1000),
            max_price_cents: Some(500),
            ..Default::default()
        });
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[test]
    fn test_filter_single_price_bound_is_fine() {
        let validated = filter(ProductFilter {
            min_price_cents: Some(1000),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(validated.min_price_cents, Some(1000));
        assert!(validated.max_price_cents.is_none());
    }
}
