//! Entity identity and aggregate root traits
//!
//! Entities are domain objects with identity that persists across time.
//! The phantom type parameter on [`EntityId`] keeps ids for different
//! entity types apart at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed entity ID using phantom types for type safety
///
/// These IDs are globally unique and persistent. The phantom type
/// parameter ensures that IDs for different entity types cannot be
/// mixed up at compile time.
///
/// # Examples
///
/// ```rust
/// use order_domain::EntityId;
///
/// struct Customer;
/// struct Product;
///
/// let customer_id = EntityId::<Customer>::new();
/// let product_id = EntityId::<Product>::new();
///
/// // These are different types - won't compile if mixed up:
/// // let _: EntityId<Customer> = product_id; // ERROR!
/// ```
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent, bound(serialize = "", deserialize = ""))]
pub struct EntityId<T> {
    id: Uuid,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> EntityId<T> {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            _phantom: PhantomData,
        }
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.id
    }

    /// Whether this is the nil UUID (an "empty" reference)
    pub fn is_nil(&self) -> bool {
        self.id.is_nil()
    }
}

// Manual impls so the phantom parameter never picks up trait bounds.
impl<T> Clone for EntityId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityId<T> {}

impl<T> PartialEq for EntityId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for EntityId<T> {}

impl<T> std::hash::Hash for EntityId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> Default for EntityId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<EntityId<T>> for Uuid {
    fn from(id: EntityId<T>) -> Self {
        id.id
    }
}

impl<T> From<&EntityId<T>> for Uuid {
    fn from(id: &EntityId<T>) -> Self {
        id.id
    }
}

/// Marker trait for aggregate roots
///
/// Aggregate roots are the entry points for modifying aggregates.
/// All changes to entities within an aggregate must go through the root.
/// The version counter is the optimistic-concurrency token consumed by
/// the persistence layer.
pub trait AggregateRoot: Sized {
    /// The type of ID for this aggregate
    type Id: Copy + Eq + Send + Sync;

    /// Get the aggregate's ID
    fn id(&self) -> Self::Id;

    /// Get the aggregate's version for optimistic concurrency
    fn version(&self) -> u64;

    /// Increment the version
    fn increment_version(&mut self);
}

/// Trait for domain entities with identity
pub trait DomainEntity: Sized + Send + Sync {
    /// The marker type for this entity
    type IdType;

    /// Get the entity's ID
    fn id(&self) -> EntityId<Self::IdType>;
}

/// Marker for line item entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemMarker;
