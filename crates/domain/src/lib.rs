//! `groundwork-domain` — identity and equality building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//!
//! - [`EntityId`]: a typed wrapper around an ordered scalar, equal by value
//! - [`Entity`]: identity + continuity across state changes
//! - [`ValueObject`]: objects with no identity, equal by structure

pub mod entity;
pub mod entity_id;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use entity_id::EntityId;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
