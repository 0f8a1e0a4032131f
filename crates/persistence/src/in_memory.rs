//! In-memory repository + data context.
//!
//! Intended for tests/dev. Not optimized for performance; entries live in a
//! `BTreeMap` keyed by entity id, so every listing comes back in id order.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use groundwork_domain::Entity;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::data_context::{CancellationToken, DataContext, ProvidesSet};
use crate::error::{EntityNotFoundError, PersistenceError};
use crate::repository::{PaginatedRepository, Predicate, Repository};

#[derive(Debug, Error)]
#[error("store lock poisoned")]
struct LockPoisoned;

/// In-memory repository over entities of type `E`.
#[derive(Debug)]
pub struct InMemoryRepository<E: Entity>
where
    E::Id: Ord,
{
    entries: RwLock<BTreeMap<E::Id, E>>,
    pending: AtomicU64,
}

impl<E: Entity> InMemoryRepository<E>
where
    E::Id: Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mutations accumulated since the last durable commit.
    pub fn pending_writes(&self) -> u64 {
        self.pending.load(Ordering::SeqCst)
    }

    fn take_pending(&self) -> u64 {
        self.pending.swap(0, Ordering::SeqCst)
    }

    fn mark_pending(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    fn read_entries(&self) -> Result<RwLockReadGuard<'_, BTreeMap<E::Id, E>>, PersistenceError> {
        self.entries
            .read()
            .map_err(|_| PersistenceError::datastore(LockPoisoned))
    }

    fn write_entries(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<E::Id, E>>, PersistenceError> {
        self.entries
            .write()
            .map_err(|_| PersistenceError::datastore(LockPoisoned))
    }
}

impl<E: Entity> Default for InMemoryRepository<E>
where
    E::Id: Ord,
{
    fn default() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            pending: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync,
    E::Id: Ord + fmt::Display + Send + Sync,
{
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, PersistenceError> {
        let entries = self.read_entries()?;
        Ok(entries.get(id).cloned())
    }

    async fn has_by_id(&self, id: &E::Id) -> Result<bool, PersistenceError> {
        let entries = self.read_entries()?;
        Ok(entries.contains_key(id))
    }

    async fn find_all(&self) -> Result<Vec<E>, PersistenceError> {
        let entries = self.read_entries()?;
        Ok(entries.values().cloned().collect())
    }

    async fn find_all_by_filter(
        &self,
        filter: Predicate<'_, E>,
    ) -> Result<Vec<E>, PersistenceError> {
        let entries = self.read_entries()?;
        Ok(entries.values().filter(|e| filter(e)).cloned().collect())
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        let entries = self.read_entries()?;
        Ok(entries.len() as u64)
    }

    async fn count_by_filter(&self, filter: Predicate<'_, E>) -> Result<u64, PersistenceError> {
        let entries = self.read_entries()?;
        Ok(entries.values().filter(|e| filter(e)).count() as u64)
    }

    async fn add(&self, entity: E) -> Result<(), PersistenceError> {
        let mut entries = self.write_entries()?;
        let id = entity.id().clone();
        if entries.contains_key(&id) {
            return Err(PersistenceError::conflict(format!(
                "an entity with id '{id}' already exists"
            )));
        }

        tracing::debug!(%id, "adding entity");
        entries.insert(id, entity);
        self.mark_pending();
        Ok(())
    }

    async fn update(&self, entity: E) -> Result<(), PersistenceError> {
        let mut entries = self.write_entries()?;
        let id = entity.id().clone();
        if !entries.contains_key(&id) {
            return Err(EntityNotFoundError::for_key(&id, "entity").into());
        }

        tracing::debug!(%id, "updating entity");
        entries.insert(id, entity);
        self.mark_pending();
        Ok(())
    }

    async fn delete_by_id(&self, id: &E::Id) -> Result<(), PersistenceError> {
        let mut entries = self.write_entries()?;
        if entries.remove(id).is_none() {
            return Err(EntityNotFoundError::for_key(id, "id").into());
        }

        tracing::debug!(%id, "deleted entity");
        self.mark_pending();
        Ok(())
    }
}

#[async_trait]
impl<E> PaginatedRepository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync,
    E::Id: Ord + fmt::Display + Send + Sync,
{
    async fn find_all_with_paging(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<E>, PersistenceError> {
        if page == 0 || page_size == 0 {
            return Err(PersistenceError::invalid_argument(
                "page and page_size must both be at least 1",
            ));
        }

        let entries = self.read_entries()?;
        let skip = (page as usize - 1) * page_size as usize;
        Ok(entries
            .values()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect())
    }
}

/// In-memory data context tracking a single entity set.
///
/// `save_changes` reports and resets the set's accumulated mutation count,
/// simulating a durable flush. Raw statements are accepted for contract
/// parity but there is no engine to run them against.
#[derive(Debug)]
pub struct InMemoryDataContext<E: Entity>
where
    E::Id: Ord,
{
    set: Arc<InMemoryRepository<E>>,
}

impl<E: Entity> InMemoryDataContext<E>
where
    E::Id: Ord,
{
    pub fn new() -> Self {
        Self {
            set: Arc::new(InMemoryRepository::new()),
        }
    }

    /// Build a context around an existing (possibly shared) set.
    pub fn with_set(set: Arc<InMemoryRepository<E>>) -> Self {
        Self { set }
    }
}

impl<E: Entity> Default for InMemoryDataContext<E>
where
    E::Id: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Clone for InMemoryDataContext<E>
where
    E::Id: Ord,
{
    fn clone(&self) -> Self {
        Self {
            set: Arc::clone(&self.set),
        }
    }
}

#[async_trait]
impl<E> DataContext for InMemoryDataContext<E>
where
    E: Entity + Send + Sync,
    E::Id: Ord + Send + Sync,
{
    async fn save_changes(&self) -> Result<u64, PersistenceError> {
        let written = self.set.take_pending();
        tracing::debug!(written, "changes persisted");
        Ok(written)
    }

    async fn save_changes_with_cancel(
        &self,
        cancel: &CancellationToken,
    ) -> Result<u64, PersistenceError> {
        if cancel.is_cancelled() {
            return Err(PersistenceError::Cancelled);
        }
        self.save_changes().await
    }

    async fn execute_raw(
        &self,
        statement: &str,
        params: &[JsonValue],
    ) -> Result<u64, PersistenceError> {
        tracing::debug!(statement, params = params.len(), "raw statement ignored");
        Ok(0)
    }
}

impl<E> ProvidesSet<E> for InMemoryDataContext<E>
where
    E: Entity + Clone + Send + Sync,
    E::Id: Ord + fmt::Display + Send + Sync,
{
    type Set = InMemoryRepository<E>;

    fn set(&self) -> &Self::Set {
        &self.set
    }
}
