use async_trait::async_trait;
use database::{Page, PageRequest};
use uuid::Uuid;

use crate::error::ClientResult;
use crate::models::{Client, ClientChanges, ClientFilter, NewClient};

/// Repository trait for Client persistence
///
/// Defines the data access interface; the service only ever talks to
/// this trait. Inputs are pre-validated and normalized by the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Store a new client, returning the record with its assigned id
    async fn create(&self, input: NewClient) -> ClientResult<Client>;

    /// Look up a client by normalized CPF
    async fn find_by_cpf(&self, cpf: &str) -> ClientResult<Option<Client>>;

    /// Filtered, sorted, paginated listing; the count and the rows see
    /// the same predicate
    async fn find_page(&self, filter: ClientFilter, page: PageRequest)
        -> ClientResult<Page<Client>>;

    /// Does a client with this surrogate id exist? (used for order
    /// referential checks)
    async fn exists_by_id(&self, id: Uuid) -> ClientResult<bool>;

    /// Does a client with this CPF exist?
    async fn exists_by_cpf(&self, cpf: &str) -> ClientResult<bool>;

    /// Does a client with this email exist?
    async fn exists_by_email(&self, email: &str) -> ClientResult<bool>;

    /// Replace the mutable fields of the client with this CPF.
    /// Returns None when no client matched.
    async fn update_by_cpf(
        &self,
        cpf: &str,
        changes: ClientChanges,
    ) -> ClientResult<Option<Client>>;

    /// Delete by normalized CPF; false when nothing matched
    async fn delete_by_cpf(&self, cpf: &str) -> ClientResult<bool>;
}
