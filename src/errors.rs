// Copyright 2025 Cowboy AI, LLC.

//! Error types for domain operations

use crate::discount::{MAX_QUANTITY, MIN_QUANTITY};
use crate::validation::ValidationReport;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in domain operations
///
/// Every error is a rejected operation: the aggregate is left in its prior
/// valid state and the call is safe to retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Quantity outside the allowed bounds at line-item construction or
    /// discount lookup
    #[error("invalid quantity {quantity}: must be between {MIN_QUANTITY} and {MAX_QUANTITY}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: u32,
    },

    /// Attempted add/remove on a cancelled aggregate
    #[error("cannot modify a {kind} in status {status}")]
    ModificationNotAllowed {
        /// Aggregate kind label (cart, sale)
        kind: &'static str,
        /// The status that rejected the mutation
        status: &'static str,
    },

    /// Remove referenced a line item absent from the collection
    #[error("line item not found: {item_id}")]
    ItemNotFound {
        /// The identifier that was searched for
        item_id: Uuid,
    },

    /// Required field missing or invalid at aggregate or line-item creation
    #[error("validation failed: {0}")]
    Validation(ValidationReport),

    /// Aggregate not found in the repository
    #[error("{kind} not found: {id}")]
    AggregateNotFound {
        /// Aggregate kind label (cart, sale)
        kind: &'static str,
        /// ID that was searched for
        id: Uuid,
    },

    /// Aggregate already stored under this id
    #[error("{kind} already exists: {id}")]
    AggregateAlreadyExists {
        /// Aggregate kind label (cart, sale)
        kind: &'static str,
        /// The conflicting id
        id: Uuid,
    },
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::ItemNotFound { .. } | DomainError::AggregateNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(_) | DomainError::InvalidQuantity { .. }
        )
    }
}
