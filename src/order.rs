// Copyright 2025 Cowboy AI, LLC.

//! Order aggregate root
//!
//! The consistency boundary for a customer order. The aggregate exclusively
//! owns its line items: items are created through [`Order::add_item`],
//! destroyed through [`Order::remove_item`], and exposed to callers only as
//! a read-only slice. Every precondition is checked before any mutation, so
//! a failed call leaves the aggregate exactly as it was.
//!
//! Carts and sales share these invariants completely, so the aggregate is
//! implemented once and parameterized by [`OrderKind`]; only naming differs
//! between the [`Cart`] and [`Sale`] specializations.

use crate::entity::{AggregateRoot, DomainEntity, EntityId};
use crate::errors::{DomainError, DomainResult};
use crate::events::{ItemRemoved, OrderCancelled, OrderCreated, OrderEvent, OrderModified};
use crate::identifiers::{BranchId, CustomerId, LineItemId, ProductId};
use crate::line_item::LineItem;
use crate::state::{OrderStatus, State};
use crate::validation::validate_order_header;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, info};
use uuid::Uuid;

/// Marker trait selecting an order aggregate kind
///
/// Kinds carry no data; they specialize naming (error messages, logs) and
/// keep cart and sale ids distinct at compile time.
pub trait OrderKind:
    Debug + Clone + Copy + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Lowercase label used in error messages and logging
    const NAME: &'static str;
}

/// Kind marker for shopping carts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartKind;

impl OrderKind for CartKind {
    const NAME: &'static str = "cart";
}

/// Kind marker for completed sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleKind;

impl OrderKind for SaleKind {
    const NAME: &'static str = "sale";
}

/// Identifier of an order aggregate of kind `K`
pub type OrderId<K> = EntityId<K>;

/// A shopping cart aggregate
pub type Cart = Order<CartKind>;

/// A sale aggregate
pub type Sale = Order<SaleKind>;

/// Order aggregate - lifecycle owner and invariant guardian for its items
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use order_domain::{BranchId, CustomerId, DomainEntity, ProductId, Sale};
/// use rust_decimal::Decimal;
///
/// let mut sale = Sale::create(
///     Utc::now(),
///     CustomerId::new(),
///     "Ada Lovelace",
///     BranchId::new(),
///     "Downtown",
/// )?;
///
/// let item_id = {
///     let item = sale.add_item(
///         ProductId::new(),
///         "Widget",
///         5,
///         Decimal::new(2000, 2), // 20.00
///     )?;
///     item.id()
/// };
///
/// // 5 * 20.00 with the 10% tier applied
/// assert_eq!(sale.total_amount(), Decimal::new(9000, 2));
///
/// sale.remove_item(item_id)?;
/// assert_eq!(sale.total_amount(), Decimal::ZERO);
/// # Ok::<(), order_domain::DomainError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Order<K: OrderKind> {
    id: OrderId<K>,
    created_at: DateTime<Utc>,
    customer_id: CustomerId,
    customer_name: String,
    branch_id: BranchId,
    branch_name: String,
    status: OrderStatus,
    items: Vec<LineItem>,
    version: u64,
    #[serde(skip)]
    pending_events: Vec<OrderEvent>,
}

impl<K: OrderKind> Order<K> {
    /// Create a new active order
    ///
    /// Fails with [`DomainError::Validation`] listing every offending field
    /// when a reference is nil, a name snapshot is empty, or the creation
    /// date lies in the future. On success an [`OrderEvent::Created`]
    /// notification is queued.
    pub fn create(
        created_at: DateTime<Utc>,
        customer_id: CustomerId,
        customer_name: impl Into<String>,
        branch_id: BranchId,
        branch_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let customer_name = customer_name.into();
        let branch_name = branch_name.into();

        let report = validate_order_header(
            customer_id,
            &customer_name,
            branch_id,
            &branch_name,
            created_at,
        );
        if !report.is_valid() {
            return Err(DomainError::Validation(report));
        }

        let id = OrderId::<K>::new();
        let mut order = Self {
            id,
            created_at,
            customer_id,
            customer_name,
            branch_id,
            branch_name,
            status: OrderStatus::Active,
            items: Vec::new(),
            version: 0,
            pending_events: Vec::new(),
        };
        order.pending_events.push(OrderEvent::Created(OrderCreated {
            order_id: order.uuid(),
            customer_id,
            branch_id,
            created_at,
        }));

        info!(kind = K::NAME, order_id = %order.id, "order created");
        Ok(order)
    }

    /// Add a line item
    ///
    /// Requires the order to be `Active`, otherwise fails with
    /// [`DomainError::ModificationNotAllowed`]. Line-item construction
    /// failures (quantity bound, missing product fields, non-positive
    /// price) propagate unchanged. On success the item is appended and an
    /// [`OrderEvent::Modified`] notification is queued.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> DomainResult<&LineItem> {
        self.ensure_active()?;

        let item = LineItem::new(product_id, product_name, quantity, unit_price)?;
        debug!(
            kind = K::NAME,
            order_id = %self.id,
            item_id = %item.id(),
            quantity,
            "line item added"
        );

        self.items.push(item);
        self.record_modified();

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Remove a line item by identifier
    ///
    /// Requires the order to be `Active`. An absent identifier fails with
    /// [`DomainError::ItemNotFound`]. On success an
    /// [`OrderEvent::ItemRemoved`] notification is queued, followed by an
    /// [`OrderEvent::Modified`] carrying the new totals.
    pub fn remove_item(&mut self, item_id: LineItemId) -> DomainResult<()> {
        self.ensure_active()?;

        let index = self
            .items
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or(DomainError::ItemNotFound {
                item_id: *item_id.as_uuid(),
            })?;
        let removed = self.items.remove(index);
        debug!(
            kind = K::NAME,
            order_id = %self.id,
            item_id = %removed.id(),
            "line item removed"
        );

        self.pending_events.push(OrderEvent::ItemRemoved(ItemRemoved {
            order_id: self.uuid(),
            item_id: removed.id(),
        }));
        self.record_modified();
        Ok(())
    }

    /// Cancel the order
    ///
    /// Transitions `Active -> Cancelled` and queues an
    /// [`OrderEvent::Cancelled`] notification. Idempotent: cancelling an
    /// already-cancelled order is a no-op and emits nothing.
    pub fn cancel(&mut self) {
        if !self.status.can_transition_to(&OrderStatus::Cancelled) {
            return;
        }

        self.status = OrderStatus::Cancelled;
        self.pending_events.push(OrderEvent::Cancelled(OrderCancelled {
            order_id: self.uuid(),
            cancelled_at: Utc::now(),
        }));
        info!(kind = K::NAME, order_id = %self.id, "order cancelled");
    }

    /// Aggregate total: the sum of all current line item totals
    ///
    /// Derived on every read, so it can never go stale relative to the
    /// item collection.
    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(LineItem::total_amount).sum()
    }

    /// Read-only view of the line items, in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by identifier
    pub fn item(&self, item_id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == item_id)
    }

    /// Current lifecycle status
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// When the order was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reference to the owning customer
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Customer name snapshot taken at creation
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Reference to the branch
    pub fn branch_id(&self) -> BranchId {
        self.branch_id
    }

    /// Branch name snapshot taken at creation
    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    /// Notifications queued since the last drain, in emission order
    pub fn pending_events(&self) -> &[OrderEvent] {
        &self.pending_events
    }

    /// Drain the queued notifications for dispatch
    pub fn take_events(&mut self) -> Vec<OrderEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn ensure_active(&self) -> DomainResult<()> {
        if self.status.is_terminal() {
            return Err(DomainError::ModificationNotAllowed {
                kind: K::NAME,
                status: self.status.name(),
            });
        }
        Ok(())
    }

    fn record_modified(&mut self) {
        self.pending_events.push(OrderEvent::Modified(OrderModified {
            order_id: self.uuid(),
            total_amount: self.total_amount(),
            item_count: self.items.len(),
        }));
    }

    fn uuid(&self) -> Uuid {
        *self.id.as_uuid()
    }
}

impl<K: OrderKind> AggregateRoot for Order<K> {
    type Id = OrderId<K>;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn increment_version(&mut self) {
        self.version += 1;
    }
}
