// Copyright 2025 Cowboy AI, LLC.

//! Command handlers for order aggregates
//!
//! Handlers process commands against one aggregate: load through the
//! repository, invoke the aggregate operation, bump the concurrency
//! version, save, and hand the drained notifications to the event
//! publisher. Business rules stay inside the aggregate; handlers only
//! orchestrate.

use crate::commands::{AddOrderItem, CancelOrder, Command, CreateOrder, RemoveOrderItem};
use crate::entity::{AggregateRoot, DomainEntity};
use crate::errors::{DomainError, DomainResult};
use crate::events::OrderEvent;
use crate::identifiers::LineItemId;
use crate::order::{Order, OrderId, OrderKind};
use crate::repository::OrderRepository;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};
use tracing::info;
use uuid::Uuid;

/// Event publisher trait for handlers to emit drained notifications
pub trait EventPublisher: Send + Sync {
    /// Publish domain events in emission order
    fn publish_events(&self, events: Vec<OrderEvent>) -> DomainResult<()>;
}

/// Recording event publisher for tests
#[derive(Clone, Default)]
pub struct MockEventPublisher {
    published: Arc<RwLock<Vec<OrderEvent>>>,
}

impl MockEventPublisher {
    /// Create a new recording publisher
    pub fn new() -> Self {
        Self::default()
    }

    /// All events published so far, in publication order
    pub fn published_events(&self) -> Vec<OrderEvent> {
        self.published.read().unwrap().clone()
    }
}

impl EventPublisher for MockEventPublisher {
    fn publish_events(&self, events: Vec<OrderEvent>) -> DomainResult<()> {
        self.published.write().unwrap().extend(events);
        Ok(())
    }
}

/// Command handler for one order aggregate kind
pub struct OrderCommandHandler<K: OrderKind, R, P> {
    repository: R,
    publisher: P,
    _kind: PhantomData<K>,
}

impl<K, R, P> OrderCommandHandler<K, R, P>
where
    K: OrderKind,
    R: OrderRepository<K>,
    P: EventPublisher,
{
    /// Create a handler over a repository and a publisher
    pub fn new(repository: R, publisher: P) -> Self {
        Self {
            repository,
            publisher,
            _kind: PhantomData,
        }
    }

    /// Handle [`CreateOrder`]: construct, store, publish, return the new id
    pub fn handle_create(&self, command: CreateOrder) -> DomainResult<OrderId<K>> {
        info!(kind = K::NAME, command = command.command_type(), "handling command");

        let mut order = Order::<K>::create(
            command.created_at,
            command.customer_id,
            command.customer_name,
            command.branch_id,
            command.branch_name,
        )?;
        let events = order.take_events();
        self.repository.create(&order)?;
        self.publish(events)?;
        Ok(order.id())
    }

    /// Handle [`AddOrderItem`]: returns the created line item's id
    pub fn handle_add_item(&self, command: AddOrderItem) -> DomainResult<LineItemId> {
        info!(kind = K::NAME, command = command.command_type(), "handling command");

        let mut order = self.load(command.order_id)?;
        let item_id = order
            .add_item(
                command.product_id,
                command.product_name,
                command.quantity,
                command.unit_price,
            )?
            .id();
        self.store(order)?;
        Ok(item_id)
    }

    /// Handle [`RemoveOrderItem`]
    pub fn handle_remove_item(&self, command: RemoveOrderItem) -> DomainResult<()> {
        info!(kind = K::NAME, command = command.command_type(), "handling command");

        let mut order = self.load(command.order_id)?;
        order.remove_item(LineItemId::from_uuid(command.item_id))?;
        self.store(order)
    }

    /// Handle [`CancelOrder`]; a second cancel is a stored no-op
    pub fn handle_cancel(&self, command: CancelOrder) -> DomainResult<()> {
        info!(kind = K::NAME, command = command.command_type(), "handling command");

        let mut order = self.load(command.order_id)?;
        order.cancel();
        self.store(order)
    }

    fn load(&self, id: Uuid) -> DomainResult<Order<K>> {
        let order_id = OrderId::<K>::from_uuid(id);
        self.repository
            .get_by_id(order_id)?
            .ok_or(DomainError::AggregateNotFound { kind: K::NAME, id })
    }

    fn store(&self, mut order: Order<K>) -> DomainResult<()> {
        order.increment_version();
        let events = order.take_events();
        self.repository.update(&order)?;
        self.publish(events)
    }

    fn publish(&self, events: Vec<OrderEvent>) -> DomainResult<()> {
        if events.is_empty() {
            return Ok(());
        }
        self.publisher.publish_events(events)
    }
}
