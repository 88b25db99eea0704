//! Repository helpers shared by the domain crates.
//!
//! [`BaseRepository`] wraps a connection with the generic CRUD operations
//! every SeaORM entity supports; [`fetch_page`] is the paired
//! count-then-fetch executor behind every listing endpoint.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QuerySelect, Select,
};
use std::marker::PhantomData;

use crate::pagination::{Page, PageRequest};

/// Runs the paired queries of a paginated listing.
///
/// The count runs on a clone of `query` before LIMIT/OFFSET are applied,
/// so the total always reflects the same predicate set as the returned
/// rows. Callers apply their ORDER BY before passing the query in; the
/// count ignores it. A zero total short-circuits: no row fetch is issued
/// and an empty page is returned.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    query: Select<E>,
    page: &PageRequest,
) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let total = query.clone().count(db).await?;
    if total == 0 {
        return Ok(Page::empty());
    }

    let items = query
        .limit(page.lines_per_page())
        .offset(page.offset())
        .all(db)
        .await?;

    Ok(Page::new(total, items))
}

/// Generic data-access base for a single SeaORM entity.
///
/// Domain repositories hold one of these and add their entity-specific
/// queries on top.
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// The underlying connection, for entity-specific queries.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert an active model and return the stored row.
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Fetch one row by primary key.
    pub async fn find_by_id<V>(&self, id: V) -> Result<Option<E::Model>, DbErr>
    where
        V: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    /// Update an active model and return the stored row.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Delete by primary key, returning the number of rows affected.
    pub async fn delete_by_id<V>(&self, id: V) -> Result<u64, DbErr>
    where
        V: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
