//! Typed entity identifiers: equality by wrapped value, never by allocation.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A typed wrapper around an ordered scalar used to identify an entity.
///
/// Two ids with equal scalar values are interchangeable regardless of where
/// or when they were constructed. Equality is defined through the scalar's
/// total order (`cmp(..) == Equal`) and is applied uniformly: `eq`, `hash`
/// and the ordering operators all observe the same scalar, so the
/// equals/hash contract cannot diverge.
///
/// The wrapped value is fixed at construction. There is no mutator: the
/// identity of a domain object is permanent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId<T>(T);

impl<T> EntityId<T> {
    /// Wrap a scalar value as a typed identifier.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the wrapped scalar.
    pub const fn value(&self) -> &T {
        &self.0
    }

    /// Unwrap into the scalar value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Ord> PartialEq for EntityId<T> {
    fn eq(&self, other: &Self) -> bool {
        // Comparison-based equality: the one definition used everywhere.
        self.0.cmp(&other.0) == Ordering::Equal
    }
}

impl<T: Ord> Eq for EntityId<T> {}

impl<T: Ord> PartialOrd for EntityId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for EntityId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: Hash> Hash for EntityId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T> From<T> for EntityId<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

/// Declarative macro that defines a domain-named id newtype over
/// [`EntityId`].
///
/// Generates:
/// - the newtype struct wrapping `EntityId<Scalar>`
/// - `derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)`
/// - `new()`, `value()`, `into_inner()`
/// - `Display` (delegates to the scalar) and `From` conversions
///
/// The scalar must be `Ord + Display`; callers need `serde` (with the
/// `derive` feature) in their dependency graph.
///
/// # Example
///
/// ```rust
/// use groundwork_domain::define_entity_id;
///
/// define_entity_id! {
///     /// Identifier of an invoice (sequential, datastore-assigned).
///     pub struct InvoiceId(i64);
/// }
///
/// let id = InvoiceId::new(42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[macro_export]
macro_rules! define_entity_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident($Scalar:ty);
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $Name($crate::EntityId<$Scalar>);

        impl $Name {
            /// Wrap a scalar value as this identifier.
            pub const fn new(value: $Scalar) -> Self {
                Self($crate::EntityId::new(value))
            }

            /// Borrow the wrapped scalar.
            pub const fn value(&self) -> &$Scalar {
                self.0.value()
            }

            /// Unwrap into the scalar value.
            pub fn into_inner(self) -> $Scalar {
                self.0.into_inner()
            }
        }

        impl core::fmt::Display for $Name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$Scalar> for $Name {
            fn from(value: $Scalar) -> Self {
                Self::new(value)
            }
        }

        impl From<$Name> for $Scalar {
            fn from(id: $Name) -> Self {
                id.into_inner()
            }
        }
    };
}

/// Like [`define_entity_id!`], specialized for UUID-backed identifiers.
///
/// Adds on top of the general form:
/// - `generate()`: a fresh UUIDv7 (time-ordered). Prefer passing ids
///   explicitly in tests for determinism.
/// - `FromStr` returning [`DomainError::InvalidId`](crate::DomainError) on
///   parse failure.
///
/// Callers need `uuid` and `serde` in their dependency graph.
#[macro_export]
macro_rules! define_uuid_entity_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $crate::define_entity_id! {
            $(#[$meta])*
            $vis struct $Name(uuid::Uuid);
        }

        impl $Name {
            /// Generate a fresh identifier (UUIDv7, time-ordered).
            pub fn generate() -> Self {
                Self::new(uuid::Uuid::now_v7())
            }
        }

        impl core::str::FromStr for $Name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.parse::<uuid::Uuid>().map_err(|e| {
                    $crate::DomainError::invalid_id(format!(
                        "{}: {}",
                        stringify!($Name),
                        e
                    ))
                })?;
                Ok(Self::new(raw))
            }
        }
    };
}
