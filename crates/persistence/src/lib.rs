//! `groundwork-persistence` — generic persistence contracts.
//!
//! Defines the repository and data-context trait surfaces application code
//! programs against, and the error vocabulary those operations use to
//! report failure. Storage mechanics (query translation, a real engine)
//! belong to external implementations; this crate ships only an in-memory
//! reference implementation for tests and development.

pub mod data_context;
pub mod error;
pub mod in_memory;
pub mod repository;

pub use data_context::{CancellationToken, DataContext, ProvidesSet};
pub use error::{EntityNotFoundError, PersistenceError};
pub use in_memory::{InMemoryDataContext, InMemoryRepository};
pub use repository::{PaginatedRepository, Predicate, Repository};
