//! Persistence error vocabulary.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use groundwork_outcome::{FailureInfo, FailureOrNothing, Fault};
use thiserror::Error;

/// An entity could not be found in the datastore.
///
/// `find_by_id` reports absence as `Ok(None)`; this error exists for call
/// sites that *require* existence (updates, deletes, lookups that feed a
/// later step) and need absence as an explicit failure.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct EntityNotFoundError {
    message: String,
}

impl EntityNotFoundError {
    /// The generic form, when no key context is available.
    pub fn new() -> Self {
        Self {
            message: "No item with specified key value was found in the datastore. \
                      Operation cancelled."
                .to_string(),
        }
    }

    /// A keyed form naming the missing key value and, when supplied, the
    /// parameter it arrived through.
    pub fn for_key(key: impl fmt::Display, param: &str) -> Self {
        let mut message = format!("Item with key value '{key}' does not exist in the datastore.");
        if !param.trim().is_empty() {
            message.push_str(&format!(" Parameter name: '{param}'."));
        }
        Self { message }
    }
}

impl Default for EntityNotFoundError {
    fn default() -> Self {
        Self::new()
    }
}

/// Failure vocabulary for repository and data-context operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A required entity does not exist.
    #[error(transparent)]
    NotFound(#[from] EntityNotFoundError),

    /// The operation observed a cancellation request before completing.
    ///
    /// Kept distinct from [`Datastore`](Self::Datastore) so boundary
    /// handlers can tell an interrupted commit from a broken one.
    #[error("operation was cancelled before completion")]
    Cancelled,

    /// A caller-supplied argument violated the operation's preconditions.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation conflicts with existing datastore state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// An underlying fault raised by the datastore, preserved verbatim.
    #[error("datastore operation failed: {0}")]
    Datastore(Fault),
}

impl PersistenceError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Wrap an underlying datastore fault, keeping the original object.
    pub fn datastore<E>(fault: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Datastore(Arc::new(fault))
    }
}

impl From<PersistenceError> for FailureInfo {
    /// Persistence failures enter the value-based pipeline with the error
    /// itself preserved as the cause.
    fn from(err: PersistenceError) -> Self {
        FailureInfo::wrapping(err)
    }
}

impl From<PersistenceError> for FailureOrNothing {
    fn from(err: PersistenceError) -> Self {
        FailureOrNothing::failure(FailureInfo::from(err))
    }
}
