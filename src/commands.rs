// Copyright 2025 Cowboy AI, LLC.

//! Commands for order aggregates
//!
//! Commands are requests to change state. They carry exactly the input the
//! aggregate operation needs, with ids as plain UUIDs so one command set
//! serves both cart and sale handlers.

use crate::identifiers::{BranchId, CustomerId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

/// Trait implemented by all order commands
pub trait Command: Debug + Send + Sync {
    /// The aggregate this command targets, if it exists yet
    fn aggregate_id(&self) -> Option<Uuid>;

    /// The command type name
    fn command_type(&self) -> &'static str;
}

/// Create a new order for a customer at a branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrder {
    /// When the order was taken
    pub created_at: DateTime<Utc>,
    /// The owning customer
    pub customer_id: CustomerId,
    /// Customer name snapshot
    pub customer_name: String,
    /// The branch taking the order
    pub branch_id: BranchId,
    /// Branch name snapshot
    pub branch_name: String,
}

/// Add a line item to an existing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOrderItem {
    /// The target order
    pub order_id: Uuid,
    /// The product being ordered
    pub product_id: ProductId,
    /// Product name snapshot
    pub product_name: String,
    /// Ordered quantity
    pub quantity: u32,
    /// Price per unit
    pub unit_price: Decimal,
}

/// Remove a line item from an existing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveOrderItem {
    /// The target order
    pub order_id: Uuid,
    /// The line item to remove
    pub item_id: Uuid,
}

/// Cancel an existing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrder {
    /// The target order
    pub order_id: Uuid,
}

impl Command for CreateOrder {
    fn aggregate_id(&self) -> Option<Uuid> {
        None
    }
    fn command_type(&self) -> &'static str {
        "CreateOrder"
    }
}

impl Command for AddOrderItem {
    fn aggregate_id(&self) -> Option<Uuid> {
        Some(self.order_id)
    }
    fn command_type(&self) -> &'static str {
        "AddOrderItem"
    }
}

impl Command for RemoveOrderItem {
    fn aggregate_id(&self) -> Option<Uuid> {
        Some(self.order_id)
    }
    fn command_type(&self) -> &'static str {
        "RemoveOrderItem"
    }
}

impl Command for CancelOrder {
    fn aggregate_id(&self) -> Option<Uuid> {
        Some(self.order_id)
    }
    fn command_type(&self) -> &'static str {
        "CancelOrder"
    }
}
