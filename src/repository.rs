// Copyright 2025 Cowboy AI, LLC.

//! Persistence contract for order aggregates
//!
//! The aggregate never calls these itself; a surrounding application layer
//! loads, mutates, and saves. Real implementations live with the storage
//! infrastructure - this crate ships only the contract and an in-memory
//! implementation for tests.

use crate::entity::AggregateRoot;
use crate::errors::{DomainError, DomainResult};
use crate::order::{Order, OrderId, OrderKind};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Repository contract for loading and saving order aggregates
pub trait OrderRepository<K: OrderKind>: Send + Sync {
    /// Store a newly created aggregate; fails if the id is already taken
    fn create(&self, order: &Order<K>) -> DomainResult<()>;

    /// Load an aggregate by id
    fn get_by_id(&self, id: OrderId<K>) -> DomainResult<Option<Order<K>>>;

    /// Persist the current state of an existing aggregate
    fn update(&self, order: &Order<K>) -> DomainResult<()>;
}

/// In-memory repository for tests and examples
#[derive(Clone)]
pub struct InMemoryOrderRepository<K: OrderKind> {
    storage: Arc<RwLock<HashMap<OrderId<K>, Order<K>>>>,
}

impl<K: OrderKind> Default for InMemoryOrderRepository<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: OrderKind> InMemoryOrderRepository<K> {
    /// Create an empty in-memory repository
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored aggregates
    pub fn len(&self) -> usize {
        self.storage.read().unwrap().len()
    }

    /// Whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: OrderKind> OrderRepository<K> for InMemoryOrderRepository<K> {
    fn create(&self, order: &Order<K>) -> DomainResult<()> {
        let mut storage = self.storage.write().unwrap();
        if storage.contains_key(&order.id()) {
            return Err(DomainError::AggregateAlreadyExists {
                kind: K::NAME,
                id: *order.id().as_uuid(),
            });
        }
        storage.insert(order.id(), order.clone());
        Ok(())
    }

    fn get_by_id(&self, id: OrderId<K>) -> DomainResult<Option<Order<K>>> {
        Ok(self.storage.read().unwrap().get(&id).cloned())
    }

    fn update(&self, order: &Order<K>) -> DomainResult<()> {
        let mut storage = self.storage.write().unwrap();
        if !storage.contains_key(&order.id()) {
            return Err(DomainError::AggregateNotFound {
                kind: K::NAME,
                id: *order.id().as_uuid(),
            });
        }
        storage.insert(order.id(), order.clone());
        Ok(())
    }
}
