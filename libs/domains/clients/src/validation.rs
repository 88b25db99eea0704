//! Field normalization and validation for client operations.
//!
//! Each function checks exactly one rule; the service strings them
//! together in the contractual order and stops at the first failure.

use chrono::{NaiveDate, Utc};
use validator::ValidateEmail;

use crate::cpf;
use crate::error::{ClientError, ClientResult};
use crate::models::ClientFilter;

/// Names keep single spaces between words: trim and collapse internal
/// whitespace runs.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Emails and identifiers drop all whitespace.
pub(crate) fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

pub(crate) fn client_name(raw: &str) -> ClientResult<String> {
    let name = normalize_name(raw);
    if name.chars().count() <= 3 {
        return Err(ClientError::Validation(
            "Field NAME is required and must have more than 3 characters".to_string(),
        ));
    }
    Ok(name)
}

pub(crate) fn email(raw: &str) -> ClientResult<String> {
    let email = strip_whitespace(raw);
    if email.is_empty() {
        return Err(ClientError::Validation(
            "Field EMAIL is required".to_string(),
        ));
    }
    if !email.validate_email() {
        return Err(ClientError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )));
    }
    Ok(email)
}

pub(crate) fn cpf_field(raw: &str) -> ClientResult<String> {
    let stripped = strip_whitespace(raw);
    if stripped.is_empty() {
        return Err(ClientError::Validation("Field CPF is required".to_string()));
    }
    cpf::normalize(&stripped).map_err(|e| ClientError::Validation(e.to_string()))
}

pub(crate) fn birth_date(value: Option<NaiveDate>) -> ClientResult<NaiveDate> {
    let birth = value.ok_or_else(|| {
        ClientError::Validation("Field BIRTH DATE is required".to_string())
    })?;
    if birth > Utc::now().date_naive() {
        return Err(ClientError::Validation(
            "Birth date cannot be in the future".to_string(),
        ));
    }
    Ok(birth)
}

/// Validate and normalize listing filters.
///
/// Blank strings are treated as absent, not as failures; present values
/// are held to the same field rules as writes, and date ranges must be
/// ordered with neither bound in the future.
pub(crate) fn filter(filter: ClientFilter) -> ClientResult<ClientFilter> {
    let name = filter
        .name
        .as_deref()
        .map(normalize_name)
        .filter(|s| !s.is_empty());

    let email = filter
        .email
        .as_deref()
        .map(strip_whitespace)
        .filter(|s| !s.is_empty());

    let cpf = match filter.cpf.as_deref().map(strip_whitespace) {
        Some(s) if !s.is_empty() => Some(cpf_field(&s)?),
        _ => None,
    };

    if let (Some(from), Some(to)) = (filter.birth_from, filter.birth_to) {
        if from > to {
            return Err(ClientError::Validation(
                "Birth date range start must not be after its end".to_string(),
            ));
        }
    }

    let today = Utc::now().date_naive();
    for bound in [filter.birth_from, filter.birth_to].into_iter().flatten() {
        if bound > today {
            return Err(ClientError::Validation(
                "Birth date filters cannot be in the future".to_string(),
            ));
        }
    }

    Ok(ClientFilter {
        name,
        email,
        cpf,
        birth_from: filter.birth_from,
        birth_to: filter.birth_to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_whitespace_is_collapsed() {
        assert_eq!(client_name("  Bruce   Wayne ").unwrap(), "Bruce Wayne");
    }

    #[test]
    fn test_name_too_short_is_rejected() {
        assert!(client_name("Ann").is_err());
        assert!(client_name("").is_err());
        assert!(client_name("   ").is_err());
        assert!(client_name("Anna").is_ok());
    }

    #[test]
    fn test_email_strips_whitespace() {
        assert_eq!(email(" b@w.com ").unwrap(), "b@w.com");
    }

    #[test]
    fn test_email_shape_is_checked() {
        assert!(email("not-an-email").is_err());
        assert!(email("").is_err());
        assert!(email("b@w.com").is_ok());
    }

    #[test]
    fn test_birth_date_rules() {
        assert!(birth_date(None).is_err());

        let future = Utc::now().date_naive() + chrono::Days::new(1);
        assert!(birth_date(Some(future)).is_err());

        let past = NaiveDate::from_ymd_opt(1972, 2, 19).unwrap();
        assert_eq!(birth_date(Some(past)).unwrap(), past);
    }

    #[test]
    fn test_filter_blank_values_become_absent() {
        let validated = filter(ClientFilter {
            name: Some("   ".to_string()),
            email: Some("".to_string()),
            cpf: Some(" ".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert!(validated.name.is_none());
        assert!(validated.email.is_none());
        assert!(validated.cpf.is_none());
    }

    #[test]
    fn test_filter_cpf_must_be_valid() {
        let result = filter(ClientFilter {
            cpf: Some("40177715056".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_filter_inverted_birth_range_is_rejected() {
        let result = filter(ClientFilter {
            birth_from: NaiveDate::from_ymd_opt(1990, 1, 1),
            birth_to: NaiveDate::from_ymd_opt(1980, 1, 1),
            ..Default::default()
        });
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_filter_future_birth_bound_is_rejected() {
        let future = Utc::now().date_naive() + chrono::Days::new(7);
        let result = filter(ClientFilter {
            birth_to: Some(future),
            ..Default::default()
        });
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }
}
