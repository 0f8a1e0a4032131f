//! Generic repository contract.
//!
//! The traits here are the surface application code programs against;
//! concrete implementations (SQL, key-value, the in-memory twin in this
//! crate) are interchangeable behind them.

use async_trait::async_trait;
use groundwork_domain::Entity;

use crate::error::PersistenceError;

/// Object-safe filter form used by the query operations.
pub type Predicate<'a, E> = &'a (dyn Fn(&E) -> bool + Send + Sync);

/// CRUD/query contract over entities of type `E`, addressed by their id.
///
/// Absence is not an error: [`find_by_id`](Self::find_by_id) returns
/// `Ok(None)` when no record matches. Call sites that require existence
/// convert absence into an explicit
/// [`EntityNotFoundError`](crate::EntityNotFoundError) themselves.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Look up a single entity by id; `Ok(None)` when no record matches.
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, PersistenceError>;

    /// Whether an entity with the given id exists.
    async fn has_by_id(&self, id: &E::Id) -> Result<bool, PersistenceError>;

    /// All entities in the store.
    async fn find_all(&self) -> Result<Vec<E>, PersistenceError>;

    /// All entities matching the predicate.
    async fn find_all_by_filter(
        &self,
        filter: Predicate<'_, E>,
    ) -> Result<Vec<E>, PersistenceError>;

    /// Total number of entities.
    async fn count(&self) -> Result<u64, PersistenceError>;

    /// Number of entities matching the predicate.
    async fn count_by_filter(&self, filter: Predicate<'_, E>) -> Result<u64, PersistenceError>;

    /// Persist a new entity.
    ///
    /// Adding an id that already exists is a
    /// [`Conflict`](PersistenceError::Conflict).
    async fn add(&self, entity: E) -> Result<(), PersistenceError>;

    /// Replace the stored state of an existing entity.
    ///
    /// Updating a missing id is a [`NotFound`](PersistenceError::NotFound).
    async fn update(&self, entity: E) -> Result<(), PersistenceError>;

    /// Remove the entity with the given id.
    ///
    /// Deleting a missing id is a [`NotFound`](PersistenceError::NotFound).
    async fn delete_by_id(&self, id: &E::Id) -> Result<(), PersistenceError>;
}

/// Extends the repository contract with paginated retrieval.
#[async_trait]
pub trait PaginatedRepository<E: Entity>: Repository<E> {
    /// Retrieve one page of entities.
    ///
    /// `page` is 1-based; both `page` and `page_size` must be at least 1
    /// ([`InvalidArgument`](PersistenceError::InvalidArgument) otherwise).
    /// Pages past the end of the collection are empty, not errors.
    async fn find_all_with_paging(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<E>, PersistenceError>;
}
