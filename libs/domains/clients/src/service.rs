//! Client Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use database::{Page, PageRequest};

use crate::error::{ClientError, ClientResult};
use crate::models::{Client, ClientChanges, ClientFilter, CreateClient, NewClient, UpdateClient};
use crate::repository::ClientRepository;
use crate::validation;

/// Service layer for client business rules.
///
/// Registration runs the validation pipeline in a fixed order and stops
/// at the first violation: name, email shape, email uniqueness, CPF
/// shape/checksum, CPF uniqueness, birth date.
#[derive(Clone)]
pub struct ClientService<R: ClientRepository> {
    repository: Arc<R>,
}

impl<R: ClientRepository> ClientService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new client
    #[instrument(skip(self, input))]
    pub async fn register_client(&self, input: CreateClient) -> ClientResult<Client> {
        let name = validation::client_name(&input.name)?;

        let email = validation::email(&input.email)?;
        if self.repository.exists_by_email(&email).await? {
            return Err(ClientError::DuplicateEmail(email));
        }

        let cpf = validation::cpf_field(&input.cpf)?;
        if self.repository.exists_by_cpf(&cpf).await? {
            return Err(ClientError::DuplicateCpf(cpf));
        }

        let birth_date = validation::birth_date(input.birth_date)?;

        self.repository
            .create(NewClient {
                name,
                email,
                cpf,
                birth_date,
            })
            .await
    }

    /// Look up a client by CPF (any common format)
    #[instrument(skip(self))]
    pub async fn get_by_cpf(&self, cpf: &str) -> ClientResult<Client> {
        let cpf = validation::cpf_field(cpf)?;
        self.repository
            .find_by_cpf(&cpf)
            .await?
            .ok_or(ClientError::NotFound(cpf))
    }

    /// Filtered, paginated client listing
    #[instrument(skip(self))]
    pub async fn find_page(
        &self,
        filter: ClientFilter,
        page: PageRequest,
    ) -> ClientResult<Page<Client>> {
        let filter = validation::filter(filter)?;
        self.repository.find_page(filter, page).await
    }

    /// Update the client with the given CPF
    ///
    /// The CPF is the immutable address of the record; name, email and
    /// birth date are replaced after passing the same field rules as
    /// registration. An email taken by another client surfaces as a
    /// duplicate through the unique constraint.
    #[instrument(skip(self, input))]
    pub async fn update_client(&self, cpf: &str, input: UpdateClient) -> ClientResult<Client> {
        let name = validation::client_name(&input.name)?;
        let email = validation::email(&input.email)?;
        let birth_date = validation::birth_date(input.birth_date)?;
        let cpf = validation::cpf_field(cpf)?;

        self.repository
            .update_by_cpf(
                &cpf,
                ClientChanges {
                    name,
                    email,
                    birth_date,
                },
            )
            .await?
            .ok_or(ClientError::NotFound(cpf))
    }

    /// Delete a client by CPF
    #[instrument(skip(self))]
    pub async fn delete_by_cpf(&self, cpf: &str) -> ClientResult<()> {
        let cpf = validation::cpf_field(cpf)?;
        if !self.repository.delete_by_cpf(&cpf).await? {
            return Err(ClientError::NotFound(cpf));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockClientRepository;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    const VALID_CPF: &str = "40177715057";

    fn create_input() -> CreateClient {
        CreateClient {
            name: "Bruce Wayne".to_string(),
            email: "b@w.com".to_string(),
            cpf: VALID_CPF.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1972, 2, 19),
        }
    }

    fn stored_client() -> Client {
        Client {
            id: Uuid::now_v7(),
            name: "Bruce Wayne".to_string(),
            email: "b@w.com".to_string(),
            cpf: VALID_CPF.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1972, 2, 19).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_client_success() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo
            .expect_exists_by_email()
            .with(mockall::predicate::eq("b@w.com"))
            .returning(|_| Ok(false));
        mock_repo
            .expect_exists_by_cpf()
            .with(mockall::predicate::eq(VALID_CPF))
            .returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .withf(|input| input.cpf == VALID_CPF && input.name == "Bruce Wayne")
            .returning(|_| Ok(stored_client()));

        let service = ClientService::new(mock_repo);
        let client = service.register_client(create_input()).await.unwrap();

        assert_eq!(client.cpf, VALID_CPF);
    }

    #[tokio::test]
    async fn test_register_rejects_short_name_before_any_lookup() {
        // No expectations set: any repository call would panic the test.
        let service = ClientService::new(MockClientRepository::new());

        let result = service
            .register_client(CreateClient {
                name: "Ann".to_string(),
                ..create_input()
            })
            .await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_short_circuits() {
        let mut mock_repo = MockClientRepository::new();
        // Only the email existence check may run; the CPF checks must not.
        mock_repo
            .expect_exists_by_email()
            .returning(|_| Ok(true));

        let service = ClientService::new(mock_repo);
        let result = service.register_client(create_input()).await;

        assert!(matches!(result, Err(ClientError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_cpf() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo
            .expect_exists_by_email()
            .returning(|_| Ok(false));
        mock_repo.expect_exists_by_cpf().returning(|_| Ok(true));

        let service = ClientService::new(mock_repo);
        let result = service.register_client(create_input()).await;

        assert!(matches!(result, Err(ClientError::DuplicateCpf(_))));
    }

    #[tokio::test]
    async fn test_register_invalid_cpf_checked_after_email() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo
            .expect_exists_by_email()
            .returning(|_| Ok(false));

        let service = ClientService::new(mock_repo);
        let result = service
            .register_client(CreateClient {
                cpf: "40177715056".to_string(), // wrong check digit
                ..create_input()
            })
            .await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_future_birth_date() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo
            .expect_exists_by_email()
            .returning(|_| Ok(false));
        mock_repo.expect_exists_by_cpf().returning(|_| Ok(false));

        let service = ClientService::new(mock_repo);
        let result = service
            .register_client(CreateClient {
                birth_date: Some(Utc::now().date_naive() + chrono::Days::new(1)),
                ..create_input()
            })
            .await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_by_cpf_normalizes_formatting() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo
            .expect_find_by_cpf()
            .with(mockall::predicate::eq(VALID_CPF))
            .returning(|_| Ok(Some(stored_client())));

        let service = ClientService::new(mock_repo);
        let client = service.get_by_cpf("401.777.150-57").await.unwrap();

        assert_eq!(client.cpf, VALID_CPF);
    }

    #[tokio::test]
    async fn test_get_by_cpf_not_found() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo.expect_find_by_cpf().returning(|_| Ok(None));

        let service = ClientService::new(mock_repo);
        let result = service.get_by_cpf(VALID_CPF).await;

        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_page_rejects_inverted_range_before_query() {
        // No find_page expectation: the repository must never be reached.
        let service = ClientService::new(MockClientRepository::new());

        let result = service
            .find_page(
                ClientFilter {
                    birth_from: NaiveDate::from_ymd_opt(1990, 1, 1),
                    birth_to: NaiveDate::from_ymd_opt(1980, 1, 1),
                    ..Default::default()
                },
                PageRequest::default(),
            )
            .await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_find_page_passes_normalized_filter() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo
            .expect_find_page()
            .withf(|filter, _| filter.name.is_none() && filter.email.as_deref() == Some("b@w.com"))
            .returning(|_, _| Ok(Page::new(1, vec![stored_client()])));

        let service = ClientService::new(mock_repo);
        let page = service
            .find_page(
                ClientFilter {
                    name: Some("   ".to_string()),
                    email: Some(" b@w.com ".to_string()),
                    ..Default::default()
                },
                PageRequest::default(),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_update_client_not_found() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo.expect_update_by_cpf().returning(|_, _| Ok(None));

        let service = ClientService::new(mock_repo);
        let result = service
            .update_client(
                VALID_CPF,
                UpdateClient {
                    name: "Bruce Wayne".to_string(),
                    email: "b@w.com".to_string(),
                    birth_date: NaiveDate::from_ymd_opt(1972, 2, 19),
                },
            )
            .await;

        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_client_validates_fields_first() {
        // Invalid email: the repository must never be reached.
        let service = ClientService::new(MockClientRepository::new());

        let result = service
            .update_client(
                VALID_CPF,
                UpdateClient {
                    name: "Bruce Wayne".to_string(),
                    email: "not-an-email".to_string(),
                    birth_date: NaiveDate::from_ymd_opt(1972, 2, 19),
                },
            )
            .await;

        assert!(matches!(result, Err(ClientError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_by_cpf_not_found() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo.expect_delete_by_cpf().returning(|_| Ok(false));

        let service = ClientService::new(mock_repo);
        let result = service.delete_by_cpf(VALID_CPF).await;

        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_by_cpf_success() {
        let mut mock_repo = MockClientRepository::new();
        mock_repo
            .expect_delete_by_cpf()
            .with(mockall::predicate::eq(VALID_CPF))
            .returning(|_| Ok(true));

        let service = ClientService::new(mock_repo);
        assert!(service.delete_by_cpf("401.777.150-57").await.is_ok());
    }
}
