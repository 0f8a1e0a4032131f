//! Data-context contract: durable commit, raw statements, typed-set access.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use groundwork_domain::Entity;
use serde_json::Value as JsonValue;

use crate::error::PersistenceError;
use crate::repository::Repository;

/// Cheap, cloneable cancellation flag.
///
/// Clones share one flag: any holder may request cancellation, and an
/// operation handed the token checks it at its own granularity. An
/// operation that observes a cancellation request reports
/// [`PersistenceError::Cancelled`] — never a datastore fault.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every operation holding a clone.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Contract for a data context that mediates interactions with a data
/// store: durable commit of accumulated changes plus raw-statement escape
/// hatch. Implementations report failure in the persistence error
/// vocabulary; mechanics (transactions, retries, timeouts) are theirs.
#[async_trait]
pub trait DataContext: Send + Sync {
    /// Persist all pending changes. Returns the number of state entries
    /// written to the data store.
    async fn save_changes(&self) -> Result<u64, PersistenceError>;

    /// Like [`save_changes`](Self::save_changes), honoring a cancellation
    /// token. An observed cancellation surfaces as
    /// [`PersistenceError::Cancelled`].
    async fn save_changes_with_cancel(
        &self,
        cancel: &CancellationToken,
    ) -> Result<u64, PersistenceError>;

    /// Execute a raw statement against the data store. Returns the number
    /// of rows affected.
    async fn execute_raw(
        &self,
        statement: &str,
        params: &[JsonValue],
    ) -> Result<u64, PersistenceError>;
}

/// Typed-set access: a data context that exposes the entities of type `E`
/// it tracks as a repository handle.
pub trait ProvidesSet<E: Entity>: DataContext {
    type Set: Repository<E>;

    /// The set of tracked entities of type `E`.
    fn set(&self) -> &Self::Set;
}
