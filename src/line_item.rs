// Copyright 2025 Cowboy AI, LLC.

//! Line item entity
//!
//! One priced product line inside an order. A line item validates itself at
//! construction and is immutable afterward - discount and total are computed
//! once and never recomputed. There is no update operation; a quantity
//! change is modeled as remove-then-add by the owning aggregate.

use crate::discount::discount_for;
use crate::entity::{DomainEntity, LineItemMarker};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{LineItemId, ProductId};
use crate::validation::ValidationReport;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currency scale of computed totals
const MONEY_SCALE: u32 = 2;

/// One product line within an order
///
/// Created only by the owning aggregate (the constructor is crate-private),
/// destroyed only through the aggregate's remove operation, and never
/// persisted independently. The product name is a denormalized snapshot and
/// is not re-synced with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: LineItemId,
    product_id: ProductId,
    product_name: String,
    quantity: u32,
    unit_price: Decimal,
    discount: Decimal,
    total: Decimal,
}

impl LineItem {
    /// Construct a validated line item
    ///
    /// Enforces every invariant up front: product reference and name
    /// required, quantity within the discount policy bounds, unit price
    /// strictly positive. On success the discount fraction and total are
    /// fixed for the lifetime of the item, with the total rounded to
    /// currency scale using banker's rounding.
    pub(crate) fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> DomainResult<Self> {
        let product_name = product_name.into();

        let mut report = ValidationReport::new();
        if product_id.is_nil() {
            report.add("product_id", "product reference is required");
        }
        if product_name.trim().is_empty() {
            report.add("product_name", "product name is required");
        }
        if unit_price <= Decimal::ZERO {
            report.add("unit_price", "unit price must be greater than zero");
        }
        if !report.is_valid() {
            return Err(DomainError::Validation(report));
        }

        // The policy re-checks the bound; construction surfaces its error as-is.
        let discount = discount_for(quantity)?;
        let total = (Decimal::from(quantity) * unit_price * (Decimal::ONE - discount))
            .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);

        Ok(Self {
            id: LineItemId::new(),
            product_id,
            product_name,
            quantity,
            unit_price,
            discount,
            total,
        })
    }

    /// Reference to the product this line is for
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Product name snapshot taken at creation
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Ordered quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price per unit at creation
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Discount fraction derived from the quantity tier
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Line total: `quantity * unit_price * (1 - discount)`
    pub fn total_amount(&self) -> Decimal {
        self.total
    }
}

impl DomainEntity for LineItem {
    type IdType = LineItemMarker;

    fn id(&self) -> LineItemId {
        self.id
    }
}
