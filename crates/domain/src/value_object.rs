//! Value object trait: equality by structure, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two instances with the same attribute
/// values are fully substitutable in every context (caching, deduplication,
/// set membership). Each concrete type supplies structural equality over all
/// of its semantically relevant fields — normally `#[derive(PartialEq)]`.
///
/// Types that are also `Hash` must derive both `PartialEq` and `Hash` from
/// the same fields so that equal values always hash identically.
///
/// Value objects are immutable: to "modify" one, construct a new instance
/// with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
