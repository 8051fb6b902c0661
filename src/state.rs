//! Lifecycle states for order aggregates
//!
//! Aggregates use enum states with controlled transitions to keep invalid
//! lifecycles unrepresentable. The order lifecycle is deliberately small:
//! one irreversible transition from `Active` to `Cancelled`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for types that can be used as aggregate lifecycle states
pub trait State: fmt::Debug + Clone + PartialEq + Eq + Send + Sync {
    /// Get the name of this state for logging/debugging
    fn name(&self) -> &'static str;

    /// Check if this is a terminal state
    fn is_terminal(&self) -> bool {
        false
    }

    /// Check if a transition to the target state is valid
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Get all valid target states from this state
    fn valid_transitions(&self) -> Vec<Self>;
}

/// Lifecycle status of an order aggregate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Open for mutation: items may be added and removed
    #[default]
    Active,
    /// Terminal state - the order exists as a record but rejects mutation
    Cancelled,
}

impl State for OrderStatus {
    fn name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    fn can_transition_to(&self, target: &Self) -> bool {
        matches!((self, target), (Self::Active, Self::Cancelled))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::Active => vec![Self::Cancelled],
            Self::Cancelled => vec![],
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
