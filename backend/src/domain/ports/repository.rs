//! Port abstraction for catalogue entity persistence and its errors.

use async_trait::async_trait;
use pagination::{SearchFilter, SearchParams, SearchResult};

use crate::domain::{Entity, Identity, IdentityKind, LoadEntityError, NotFoundError};

use super::define_port_error;

define_port_error! {
    /// Failures raised by the backing store itself.
    pub enum StoreError {
        /// Store connection could not be established.
        Connection { message: String } => "catalogue store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "catalogue store query failed: {message}",
        /// A uniqueness constraint rejected the write.
        Conflict { id: String } => "catalogue store already holds id {id}",
    }
}

/// Errors surfaced by [`Repository`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The looked-up identities are absent.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// A stored record could not be rebuilt into an entity.
    #[error(transparent)]
    Load(#[from] LoadEntityError),
    /// The store failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Partition of requested identities by presence in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsById<K: IdentityKind> {
    /// Requested ids present in the store, in request order.
    pub exists: Vec<Identity<K>>,
    /// Requested ids absent from the store, in request order.
    pub not_exists: Vec<Identity<K>>,
}

impl<K: IdentityKind> ExistsById<K> {
    /// Whether every requested id was found.
    pub fn all_exist(&self) -> bool {
        self.not_exists.is_empty()
    }
}

/// CRUD port shared by every catalogue entity.
///
/// `find_by_id`, `update` and `delete` fail with
/// [`RepositoryError::NotFound`] before touching anything when the identity
/// is unknown; they never silently no-op.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Store a new entity.
    async fn insert(&self, entity: &E) -> Result<(), RepositoryError>;

    /// Store several new entities in order.
    async fn bulk_insert(&self, entities: &[E]) -> Result<(), RepositoryError>;

    /// Fetch one entity by identity.
    async fn find_by_id(&self, id: &Identity<E>) -> Result<E, RepositoryError>;

    /// Fetch every entity whose identity is listed; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Identity<E>]) -> Result<Vec<E>, RepositoryError>;

    /// Split `ids` into those present and those absent.
    async fn exists_by_id(&self, ids: &[Identity<E>]) -> Result<ExistsById<E>, RepositoryError>;

    /// Fetch every stored entity in storage order.
    async fn find_all(&self) -> Result<Vec<E>, RepositoryError>;

    /// Replace the stored entity sharing `entity`'s identity.
    async fn update(&self, entity: &E) -> Result<(), RepositoryError>;

    /// Remove the entity with identity `id`.
    async fn delete(&self, id: &Identity<E>) -> Result<(), RepositoryError>;
}

/// Repository that also answers paginated searches.
#[async_trait]
pub trait SearchableRepository<E: Entity>: Repository<E> {
    /// Entity-specific filter shape.
    type Filter: SearchFilter + Clone + Send + Sync;

    /// Fields accepted as `sort`; anything else falls back to newest first.
    fn sortable_fields(&self) -> &'static [&'static str];

    /// Filter, sort and paginate the stored entities.
    async fn search(
        &self,
        params: &SearchParams<Self::Filter>,
    ) -> Result<SearchResult<E, Self::Filter>, RepositoryError>;
}
