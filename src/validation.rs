// Copyright 2025 Cowboy AI, LLC.

//! Structural validation reporting
//!
//! Pre-flight checks exposed to callers (typically an API layer) before
//! invoking aggregate operations. A report lists every failing field with a
//! message; it never blocks the imperative invariant checks the aggregate
//! performs itself on each mutating call.

use crate::discount::MAX_QUANTITY;
use crate::identifiers::{BranchId, CustomerId};
use crate::line_item::LineItem;
use crate::order::{Order, OrderKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single failed check: which field, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Field path, e.g. `customer_name` or `items[2].quantity`
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

/// Outcome of a [`Validate::validate`] run
///
/// Empty means pass. Reports are also carried inside
/// [`DomainError::Validation`](crate::DomainError::Validation) when
/// construction rejects its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// Create an empty (passing) report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failing field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.failures.push(ValidationFailure {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Whether every check passed
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// The recorded failures, in check order
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Absorb another report, prefixing its field paths
    pub fn absorb(&mut self, prefix: &str, other: ValidationReport) {
        for failure in other.failures {
            self.failures.push(ValidationFailure {
                field: format!("{prefix}.{}", failure.field),
                message: failure.message,
            });
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "valid");
        }
        let joined = self
            .failures
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

/// Reporting-only structural validation
pub trait Validate {
    /// Run every check and collect the failures
    fn validate(&self) -> ValidationReport;
}

/// Checks on the order header fields, shared by aggregate construction and
/// the post-hoc [`Validate`] run.
pub(crate) fn validate_order_header(
    customer_id: CustomerId,
    customer_name: &str,
    branch_id: BranchId,
    branch_name: &str,
    created_at: DateTime<Utc>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    if customer_id.is_nil() {
        report.add("customer_id", "customer reference is required");
    }
    if customer_name.trim().is_empty() {
        report.add("customer_name", "customer name is required");
    }
    if branch_id.is_nil() {
        report.add("branch_id", "branch reference is required");
    }
    if branch_name.trim().is_empty() {
        report.add("branch_name", "branch name is required");
    }
    if created_at > Utc::now() {
        report.add("created_at", "creation date cannot be in the future");
    }
    report
}

impl Validate for LineItem {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.product_id().is_nil() {
            report.add("product_id", "product reference is required");
        }
        if self.product_name().trim().is_empty() {
            report.add("product_name", "product name is required");
        }
        if self.quantity() == 0 {
            report.add("quantity", "quantity must be greater than zero");
        } else if self.quantity() > MAX_QUANTITY {
            report.add(
                "quantity",
                format!("quantity cannot exceed {MAX_QUANTITY}"),
            );
        }
        if self.unit_price() <= Decimal::ZERO {
            report.add("unit_price", "unit price must be greater than zero");
        }
        report
    }
}

impl<K: OrderKind> Validate for Order<K> {
    fn validate(&self) -> ValidationReport {
        let mut report = validate_order_header(
            self.customer_id(),
            self.customer_name(),
            self.branch_id(),
            self.branch_name(),
            self.created_at(),
        );
        for (index, item) in self.items().iter().enumerate() {
            report.absorb(&format!("items[{index}]"), item.validate());
        }
        report
    }
}
