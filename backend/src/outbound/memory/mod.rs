//! In-memory reference adapters for the catalogue repository ports.
//!
//! Entities live in an ordered `Vec` behind an async read/write lock. The
//! lock only guards each single operation: a caller that checks existence,
//! suspends and then inserts can race another caller doing the same, and
//! both inserts land. Persistent adapters are expected to turn that case
//! into [`StoreError::Conflict`](crate::domain::ports::StoreError) through a
//! uniqueness constraint instead.

use std::marker::PhantomData;

use async_trait::async_trait;
use pagination::{SearchParams, SearchResult};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{
    CategoryExistence, ExistsById, Repository, RepositoryError, SearchHooks, SearchableRepository,
    apply_search,
};
use crate::domain::{CastMember, Category, CategoryId, Entity, Genre, Identity, NotFoundError};

mod hooks;

pub use hooks::{CastMemberSearch, CategorySearch, GenreSearch};

/// In-memory category store.
pub type InMemoryCategoryRepository = InMemoryRepository<Category, CategorySearch>;
/// In-memory cast member store.
pub type InMemoryCastMemberRepository = InMemoryRepository<CastMember, CastMemberSearch>;
/// In-memory genre store.
pub type InMemoryGenreRepository = InMemoryRepository<Genre, GenreSearch>;

/// Ordered in-memory store for entities of type `E`, searched with the
/// hooks `H`.
pub struct InMemoryRepository<E, H> {
    items: RwLock<Vec<E>>,
    hooks: PhantomData<fn() -> H>,
}

impl<E, H> InMemoryRepository<E, H> {
    /// Empty store.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Store seeded with `items` in the given order.
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: RwLock::new(items),
            hooks: PhantomData,
        }
    }
}

impl<E, H> Default for InMemoryRepository<E, H> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<E: Entity>(id: &Identity<E>) -> RepositoryError {
    NotFoundError::new(E::NAME, [id]).into()
}

#[async_trait]
impl<E, H> Repository<E> for InMemoryRepository<E, H>
where
    E: Entity,
    H: Send + Sync + 'static,
{
    async fn insert(&self, entity: &E) -> Result<(), RepositoryError> {
        self.items.write().await.push(entity.clone());
        debug!(entity = E::NAME, id = %entity.entity_id(), "inserted entity");
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[E]) -> Result<(), RepositoryError> {
        self.items.write().await.extend_from_slice(entities);
        debug!(entity = E::NAME, count = entities.len(), "inserted entities");
        Ok(())
    }

    async fn find_by_id(&self, id: &Identity<E>) -> Result<E, RepositoryError> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.entity_id() == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn find_by_ids(&self, ids: &[Identity<E>]) -> Result<Vec<E>, RepositoryError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|item| ids.contains(item.entity_id()))
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, ids: &[Identity<E>]) -> Result<ExistsById<E>, RepositoryError> {
        let items = self.items.read().await;
        let (exists, not_exists): (Vec<Identity<E>>, Vec<Identity<E>>) = ids
            .iter()
            .cloned()
            .partition(|id| items.iter().any(|item| item.entity_id() == id));
        Ok(ExistsById { exists, not_exists })
    }

    async fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        Ok(self.items.read().await.clone())
    }

    async fn update(&self, entity: &E) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        let id = entity.entity_id();
        let slot = items
            .iter_mut()
            .find(|item| item.entity_id() == id)
            .ok_or_else(|| not_found(id))?;
        *slot = entity.clone();
        debug!(entity = E::NAME, %id, "updated entity");
        Ok(())
    }

    async fn delete(&self, id: &Identity<E>) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        let position = items
            .iter()
            .position(|item| item.entity_id() == id)
            .ok_or_else(|| not_found(id))?;
        items.remove(position);
        debug!(entity = E::NAME, %id, "deleted entity");
        Ok(())
    }
}

#[async_trait]
impl<E, H> SearchableRepository<E> for InMemoryRepository<E, H>
where
    E: Entity,
    H: SearchHooks<E>,
{
    type Filter = H::Filter;

    fn sortable_fields(&self) -> &'static [&'static str] {
        H::SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &SearchParams<Self::Filter>,
    ) -> Result<SearchResult<E, Self::Filter>, RepositoryError> {
        let snapshot = self.items.read().await.clone();
        let result = apply_search::<E, H>(snapshot, params);
        debug!(
            entity = E::NAME,
            total = result.total(),
            page = result.current_page(),
            last_page = result.last_page(),
            "searched entities"
        );
        Ok(result)
    }
}

#[async_trait]
impl<H> CategoryExistence for InMemoryRepository<Category, H>
where
    H: Send + Sync + 'static,
{
    async fn categories_exist(
        &self,
        ids: &[CategoryId],
    ) -> Result<ExistsById<Category>, RepositoryError> {
        self.exists_by_id(ids).await
    }
}
