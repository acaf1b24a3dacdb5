//! # Discount Policy
//!
//! Per-user discount data as seen by the pricing engine.
//!
//! ## Two Inputs, Fixed Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  is_eligible(user, product)   rate(user)                                │
//! │          │                        │                                     │
//! │          └──────────┬─────────────┘                                     │
//! │                     ▼                                                   │
//! │   eligible && 0 <= rate <= 1  →  amount × (1 − rate)                    │
//! │   otherwise                   →  amount                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The arithmetic and the range check belong to the engine. A policy only
//! answers the two questions.

use std::sync::Arc;

use crate::types::{DiscountRate, Product};

/// Source of per-user discount rates and category eligibility.
pub trait DiscountPolicy {
    /// The user's discount rate. Unknown users get [`DiscountRate::ZERO`].
    ///
    /// The value is not range-checked here.
    fn rate(&self, user_id: &str) -> DiscountRate;

    /// Whether the user gets a discount on this product.
    ///
    /// False for unknown users and for categories outside the user's
    /// eligible set.
    fn is_eligible(&self, user_id: &str, product: &Product) -> bool;
}

impl<T: DiscountPolicy + ?Sized> DiscountPolicy for &T {
    fn rate(&self, user_id: &str) -> DiscountRate {
        (**self).rate(user_id)
    }

    fn is_eligible(&self, user_id: &str, product: &Product) -> bool {
        (**self).is_eligible(user_id, product)
    }
}

impl<T: DiscountPolicy + ?Sized> DiscountPolicy for Arc<T> {
    fn rate(&self, user_id: &str) -> DiscountRate {
        (**self).rate(user_id)
    }

    fn is_eligible(&self, user_id: &str, product: &Product) -> bool {
        (**self).is_eligible(user_id, product)
    }
}

/// A policy that never discounts. Handy for callers pricing anonymously.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscounts;

impl DiscountPolicy for NoDiscounts {
    fn rate(&self, _user_id: &str) -> DiscountRate {
        DiscountRate::ZERO
    }

    fn is_eligible(&self, _user_id: &str, _product: &Product) -> bool {
        false
    }
}
