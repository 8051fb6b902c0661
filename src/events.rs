// Copyright 2025 Cowboy AI, LLC.

//! Domain events emitted by order aggregates
//!
//! Events are immutable facts describing state changes that already
//! happened. The aggregate queues them as plain values in transition order;
//! the caller drains the queue after each operation and hands the values to
//! whatever dispatcher it uses. Transport, serialization on the wire, and
//! delivery guarantees belong to that collaborator, not to this crate.

use crate::identifiers::{BranchId, CustomerId, LineItemId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base trait for all domain events
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Get the aggregate ID this event relates to
    fn aggregate_id(&self) -> Uuid;

    /// Get the event type name
    fn event_type(&self) -> &'static str;

    /// Get the schema version
    fn version(&self) -> &'static str {
        "v1"
    }
}

/// An order aggregate was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    /// The aggregate that was created
    pub order_id: Uuid,
    /// The customer the order belongs to
    pub customer_id: CustomerId,
    /// The branch the order was taken at
    pub branch_id: BranchId,
    /// When the order was created
    pub created_at: DateTime<Utc>,
}

/// An order's line item collection changed
///
/// Emitted after every successful add and remove, carrying the totals as
/// they stand after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderModified {
    /// The aggregate that changed
    pub order_id: Uuid,
    /// Aggregate total after the change
    pub total_amount: Decimal,
    /// Number of line items after the change
    pub item_count: usize,
}

/// A line item was removed from an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    /// The aggregate the item was removed from
    pub order_id: Uuid,
    /// The removed item's identifier
    pub item_id: LineItemId,
}

/// An order was cancelled
///
/// Emitted exactly once per aggregate; cancelling an already-cancelled
/// order is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelled {
    /// The aggregate that was cancelled
    pub order_id: Uuid,
    /// When the cancellation took effect
    pub cancelled_at: DateTime<Utc>,
}

impl DomainEvent for OrderCreated {
    fn aggregate_id(&self) -> Uuid {
        self.order_id
    }
    fn event_type(&self) -> &'static str {
        "OrderCreated"
    }
}

impl DomainEvent for OrderModified {
    fn aggregate_id(&self) -> Uuid {
        self.order_id
    }
    fn event_type(&self) -> &'static str {
        "OrderModified"
    }
}

impl DomainEvent for ItemRemoved {
    fn aggregate_id(&self) -> Uuid {
        self.order_id
    }
    fn event_type(&self) -> &'static str {
        "ItemRemoved"
    }
}

impl DomainEvent for OrderCancelled {
    fn aggregate_id(&self) -> Uuid {
        self.order_id
    }
    fn event_type(&self) -> &'static str {
        "OrderCancelled"
    }
}

/// Enum wrapper over the order event types for uniform queueing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    /// An order aggregate was created
    Created(OrderCreated),
    /// An order's line item collection changed
    Modified(OrderModified),
    /// A line item was removed
    ItemRemoved(ItemRemoved),
    /// An order was cancelled
    Cancelled(OrderCancelled),
}

impl DomainEvent for OrderEvent {
    fn aggregate_id(&self) -> Uuid {
        match self {
            Self::Created(e) => e.aggregate_id(),
            Self::Modified(e) => e.aggregate_id(),
            Self::ItemRemoved(e) => e.aggregate_id(),
            Self::Cancelled(e) => e.aggregate_id(),
        }
    }

    fn event_type(&self) -> &'static str {
        match self {
            Self::Created(e) => e.event_type(),
            Self::Modified(e) => e.event_type(),
            Self::ItemRemoved(e) => e.event_type(),
            Self::Cancelled(e) => e.event_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types_and_aggregate_ids() {
        let order_id = Uuid::new_v4();

        let created = OrderEvent::Created(OrderCreated {
            order_id,
            customer_id: CustomerId::new(),
            branch_id: BranchId::new(),
            created_at: Utc::now(),
        });
        assert_eq!(created.event_type(), "OrderCreated");
        assert_eq!(created.aggregate_id(), order_id);
        assert_eq!(created.version(), "v1");

        let removed = OrderEvent::ItemRemoved(ItemRemoved {
            order_id,
            item_id: LineItemId::new(),
        });
        assert_eq!(removed.event_type(), "ItemRemoved");
        assert_eq!(removed.aggregate_id(), order_id);
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = OrderEvent::Modified(OrderModified {
            order_id: Uuid::new_v4(),
            total_amount: Decimal::new(15000, 2),
            item_count: 2,
        });

        let json = serde_json::to_string(&event).unwrap();
        let back: OrderEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
