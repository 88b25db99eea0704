//! SeaORM implementation of ClientRepository

use async_trait::async_trait;
use database::{fetch_page, BaseRepository, Page, PageRequest};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::entity;
use crate::error::{ClientError, ClientResult};
use crate::models::{Client, ClientChanges, ClientFilter, NewClient};
use crate::repository::ClientRepository;

pub struct PgClientRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// One predicate fragment per present filter; values only ever bind
    /// as parameters.
    fn filter_condition(filter: &ClientFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = &filter.name {
            condition = condition.add(entity::Column::Name.contains(name));
        }
        if let Some(email) = &filter.email {
            condition = condition.add(entity::Column::Email.contains(email));
        }
        if let Some(cpf) = &filter.cpf {
            condition = condition.add(entity::Column::Cpf.eq(cpf.as_str()));
        }
        if let Some(from) = filter.birth_from {
            condition = condition.add(entity::Column::BirthDate.gte(from));
        }
        if let Some(to) = filter.birth_to {
            condition = condition.add(entity::Column::BirthDate.lte(to));
        }

        condition
    }

    /// Sort key allow-list; unknown or blank keys fall back to the name
    /// column.
    fn sort_column(key: &str) -> entity::Column {
        match key {
            "email" => entity::Column::Email,
            "cpf" => entity::Column::Cpf,
            "birth_date" => entity::Column::BirthDate,
            _ => entity::Column::Name,
        }
    }

    fn map_unique_violation(err: sea_orm::DbErr, email: &str, cpf: &str) -> ClientError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(constraint)) => {
                if constraint.contains("email") {
                    ClientError::DuplicateEmail(email.to_string())
                } else {
                    ClientError::DuplicateCpf(cpf.to_string())
                }
            }
            _ => ClientError::storage(err),
        }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn create(&self, input: NewClient) -> ClientResult<Client> {
        let email = input.email.clone();
        let cpf = input.cpf.clone();
        let active_model: entity::ActiveModel = input.into();

        // The unique indexes are the real duplicate guard; a conflict
        // surfaces as the same business error the pre-flight check gives.
        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| Self::map_unique_violation(e, &email, &cpf))?;

        tracing::info!(client_id = %model.id, "Created client");
        Ok(model.into())
    }

    async fn find_by_cpf(&self, cpf: &str) -> ClientResult<Option<Client>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Cpf.eq(cpf))
            .one(self.base.db())
            .await
            .map_err(ClientError::storage)?;

        Ok(model.map(Into::into))
    }

    async fn find_page(
        &self,
        filter: ClientFilter,
        page: PageRequest,
    ) -> ClientResult<Page<Client>> {
        let query = entity::Entity::find()
            .filter(Self::filter_condition(&filter))
            .order_by(Self::sort_column(page.sort_by()), page.direction().into());

        let rows = fetch_page(self.base.db(), query, &page)
            .await
            .map_err(ClientError::storage)?;

        Ok(rows.map(Into::into))
    }

    async fn exists_by_id(&self, id: uuid::Uuid) -> ClientResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Id.eq(id))
            .count(self.base.db())
            .await
            .map_err(ClientError::storage)?;

        Ok(count > 0)
    }

    async fn exists_by_cpf(&self, cpf: &str) -> ClientResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Cpf.eq(cpf))
            .count(self.base.db())
            .await
            .map_err(ClientError::storage)?;

        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> ClientResult<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .count(self.base.db())
            .await
            .map_err(ClientError::storage)?;

        Ok(count > 0)
    }

    async fn update_by_cpf(
        &self,
        cpf: &str,
        changes: ClientChanges,
    ) -> ClientResult<Option<Client>> {
        let Some(model) = entity::Entity::find()
            .filter(entity::Column::Cpf.eq(cpf))
            .one(self.base.db())
            .await
            .map_err(ClientError::storage)?
        else {
            return Ok(None);
        };

        let email = changes.email.clone();
        let active_model = entity::ActiveModel {
            id: Set(model.id),
            name: Set(changes.name),
            email: Set(changes.email),
            cpf: Set(model.cpf),
            birth_date: Set(changes.birth_date),
            created_at: Set(model.created_at),
            updated_at: Set(chrono::Utc::now().into()),
        };

        let updated = self
            .base
            .update(active_model)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => ClientError::DuplicateEmail(email),
                _ => ClientError::storage(e),
            })?;

        tracing::info!(cpf = %cpf, "Updated client");
        Ok(Some(updated.into()))
    }

    async fn delete_by_cpf(&self, cpf: &str) -> ClientResult<bool> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::Cpf.eq(cpf))
            .exec(self.base.db())
            .await
            .map_err(ClientError::storage)?;

        if result.rows_affected > 0 {
            tracing::info!(cpf = %cpf, "Deleted client");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
