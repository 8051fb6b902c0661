// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for external references held by an order
//!
//! Products, customers, and branches live in other bounded contexts. The
//! order only holds opaque references to them, next to a denormalized name
//! snapshot taken at creation time.

use crate::entity::{EntityId, LineItemMarker};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a line item within its owning order
pub type LineItemId = EntityId<LineItemMarker>;

macro_rules! external_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from a UUID
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Whether this is the nil UUID (an "empty" reference)
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<&$name> for Uuid {
            fn from(id: &$name) -> Self {
                id.0
            }
        }
    };
}

external_id! {
    /// Reference to a product in the catalog context
    ///
    /// Products are not entities of this crate - the order keeps the
    /// reference plus a name snapshot that is never re-synced.
    ProductId
}

external_id! {
    /// Reference to the customer who owns the order
    CustomerId
}

external_id! {
    /// Reference to the branch the order was taken at
    BranchId
}
