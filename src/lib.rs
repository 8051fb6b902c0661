//! # Order Domain
//!
//! Order aggregate core: cart and sale aggregates that own their line items,
//! enforce quantity and lifecycle invariants, and compute quantity-tiered
//! discounts and totals.
//!
//! Building blocks:
//! - **Entity**: typed identity via phantom-typed [`EntityId`]
//! - **Line items**: self-validating, immutable once constructed
//! - **Discount policy**: the fixed quantity-tier table, a pure function
//! - **Aggregate root**: one generic [`Order`] parameterized by kind, with
//!   [`Cart`] and [`Sale`] specializations
//! - **Domain events**: plain queued values drained by the caller
//! - **Validation**: reporting-only pre-flight checks for API layers
//! - **Commands and handlers**: the application seam over repository and
//!   event publisher contracts
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: phantom types keep cart, sale, and item ids apart
//! 2. **Fail fast**: every precondition is checked before any mutation
//! 3. **Derived, never stale**: discounts and totals are computed from the
//!    owned items, not cached alongside them
//! 4. **Controlled state**: the lifecycle enum permits exactly one
//!    transition, `Active -> Cancelled`
//! 5. **Decoupled notifications**: events are values, not callbacks

#![warn(missing_docs)]

mod commands;
mod discount;
mod entity;
mod errors;
mod events;
mod handlers;
mod identifiers;
mod line_item;
mod order;
mod repository;
mod state;
mod validation;

pub use commands::{AddOrderItem, CancelOrder, Command, CreateOrder, RemoveOrderItem};
pub use discount::{discount_for, MAX_QUANTITY, MIN_QUANTITY};
pub use entity::{AggregateRoot, DomainEntity, EntityId, LineItemMarker};
pub use errors::{DomainError, DomainResult};
pub use events::{
    DomainEvent, ItemRemoved, OrderCancelled, OrderCreated, OrderEvent, OrderModified,
};
pub use handlers::{EventPublisher, MockEventPublisher, OrderCommandHandler};
pub use identifiers::{BranchId, CustomerId, LineItemId, ProductId};
pub use line_item::LineItem;
pub use order::{Cart, CartKind, Order, OrderId, OrderKind, Sale, SaleKind};
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use state::{OrderStatus, State};
pub use validation::{Validate, ValidationFailure, ValidationReport};
