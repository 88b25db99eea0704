use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Client entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Client {
    /// Unique identifier
    pub id: Uuid,
    /// Full name, whitespace-normalized
    pub name: String,
    /// Email address, unique across clients
    pub email: String,
    /// Normalized 11-digit CPF, unique across clients
    pub cpf: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for registering a new client
///
/// Raw request fields; the service normalizes and validates them before
/// anything is written.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    /// CPF in any common format ("401.777.150-57", "40177715057", ...)
    pub cpf: String,
    pub birth_date: Option<NaiveDate>,
}

/// DTO for updating an existing client (addressed by CPF; the CPF itself
/// is immutable)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateClient {
    pub name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
}

/// A fully validated, normalized client ready to be stored.
///
/// Only the service constructs these, after the validation pipeline has
/// passed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
}

/// Validated replacement values for an update
#[derive(Debug, Clone, PartialEq)]
pub struct ClientChanges {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

/// Query filters for listing clients
///
/// Every field is optional; a present value contributes one predicate
/// fragment, an absent (or blank) value contributes none.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ClientFilter {
    /// Substring match on name
    pub name: Option<String>,
    /// Substring match on email
    pub email: Option<String>,
    /// Exact match on normalized CPF
    pub cpf: Option<String>,
    /// Earliest birth date, inclusive
    pub birth_from: Option<NaiveDate>,
    /// Latest birth date, inclusive
    pub birth_to: Option<NaiveDate>,
}
