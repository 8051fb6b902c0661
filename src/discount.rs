// Copyright 2025 Cowboy AI, LLC.

//! Quantity-tiered discount policy
//!
//! The tier table is a closed business rule, not configuration:
//!
//! | Quantity | Discount |
//! |----------|----------|
//! | 1-3      | 0%       |
//! | 4-9      | 10%      |
//! | 10-20    | 20%      |
//!
//! Quantities outside `[1, 20]` are rejected. The policy re-validates its
//! own input instead of trusting the caller, so it stays correct when
//! invoked in isolation.

use crate::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;

/// Smallest quantity a line item may carry
pub const MIN_QUANTITY: u32 = 1;
/// Largest quantity a line item may carry
pub const MAX_QUANTITY: u32 = 20;

/// First quantity that earns the 10% tier
const TIER_TEN_FROM: u32 = 4;
/// First quantity that earns the 20% tier
const TIER_TWENTY_FROM: u32 = 10;

/// Map a quantity to its discount fraction
///
/// Pure and deterministic; total over `[MIN_QUANTITY, MAX_QUANTITY]`.
///
/// # Examples
///
/// ```rust
/// use order_domain::discount_for;
/// use rust_decimal::Decimal;
///
/// assert_eq!(discount_for(3).unwrap(), Decimal::ZERO);
/// assert_eq!(discount_for(4).unwrap(), Decimal::new(10, 2));
/// assert_eq!(discount_for(20).unwrap(), Decimal::new(20, 2));
/// assert!(discount_for(21).is_err());
/// ```
pub fn discount_for(quantity: u32) -> DomainResult<Decimal> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        return Err(DomainError::InvalidQuantity { quantity });
    }

    Ok(match quantity {
        q if q >= TIER_TWENTY_FROM => Decimal::new(20, 2),
        q if q >= TIER_TEN_FROM => Decimal::new(10, 2),
        _ => Decimal::ZERO,
    })
}
