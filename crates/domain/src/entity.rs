//! Entity trait: identity + continuity across state changes.

use core::hash::{Hash, Hasher};

/// Entity marker + minimal interface.
///
/// An entity is equal to another entity of the same concrete type exactly
/// when their identifiers are equal; no other field participates. The
/// identifier is a required construction input with no default — an entity
/// without identity is unrepresentable, so there is no "absent id" failure
/// path to recover from.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity-based equality: true exactly when the ids are equal.
    fn identity_eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Identity-based hash, fed from the id alone.
    ///
    /// Implementations of `Hash` for entity types must route through this
    /// so equal entities (equal ids) always hash identically.
    fn hash_identity<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

/// Implements `PartialEq`, `Eq` and `Hash` for a concrete entity type by
/// delegating to its identifier alone.
///
/// Keeps the equals/hash pair mechanically derived from the same source, so
/// the two can never disagree no matter what other fields the type grows.
///
/// # Example
///
/// ```rust
/// use groundwork_domain::{Entity, impl_entity_equality};
///
/// #[derive(Debug, Clone)]
/// struct Customer {
///     id: u64,
///     name: String,
/// }
///
/// impl Entity for Customer {
///     type Id = u64;
///     fn id(&self) -> &u64 {
///         &self.id
///     }
/// }
///
/// impl_entity_equality!(Customer);
///
/// let a = Customer { id: 1, name: "Ada".into() };
/// let b = Customer { id: 1, name: "Grace".into() };
/// assert_eq!(a, b); // same identity, different fields
/// ```
#[macro_export]
macro_rules! impl_entity_equality {
    ($Type:ty) => {
        impl PartialEq for $Type {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::identity_eq(self, other)
            }
        }

        impl Eq for $Type {}

        impl core::hash::Hash for $Type {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                $crate::Entity::hash_identity(self, state)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::hash::{DefaultHasher, Hash, Hasher};

    use crate::EntityId;

    use super::*;

    #[derive(Debug, Clone)]
    struct Account {
        id: EntityId<u64>,
        owner: String,
        balance: i64,
    }

    impl Account {
        fn new(id: u64, owner: &str, balance: i64) -> Self {
            Self {
                id: EntityId::new(id),
                owner: owner.to_string(),
                balance,
            }
        }
    }

    impl Entity for Account {
        type Id = EntityId<u64>;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    impl_entity_equality!(Account);

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_tracks_the_id_alone() {
        let a = Account::new(1, "Ada", 100);
        let b = Account::new(1, "Grace", -3);
        let c = Account::new(2, "Ada", 100);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a == b, a.id() == b.id());
        assert_eq!(a == c, a.id() == c.id());
    }

    #[test]
    fn equality_is_reflexive() {
        let account = Account::new(9, "Ada", 0);
        assert!(account.identity_eq(&account));
        assert_eq!(account, account.clone());
    }

    #[test]
    fn hash_is_derived_from_the_id_alone() {
        let a = Account::new(5, "Ada", 10);
        let b = Account::new(5, "Grace", 9000);

        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(a.id()));
    }

    #[test]
    fn entities_deduplicate_by_identity_in_sets() {
        let mut accounts = HashSet::new();
        accounts.insert(Account::new(1, "Ada", 100));
        accounts.insert(Account::new(1, "Grace", 200));
        accounts.insert(Account::new(2, "Ada", 100));

        assert_eq!(accounts.len(), 2);
    }
}
