//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents fixes addition, but not percentage discounts:           │
//! │    $99.99 × (1 - 0.10) = $89.991   → not a whole number of cents       │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimal                                          │
//! │    99.99 - 99.99 × 0.10 = 89.991 exactly                               │
//! │    Rounding happens only when a caller asks for it (display)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricing_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let doubled = price * 2;             // $21.98
//! assert_eq!(doubled.amount(), Decimal::new(2198, 2));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount with exact decimal precision.
///
/// ## Design Decisions
/// - **Decimal (signed)**: negative values are representable, pricing rules
///   decide what to do with them
/// - **No implicit rounding**: `89.991` stays `89.991`
/// - **Transparent serde**: serialized as the decimal string (`"89.991"`)
///
/// ## Where Money is Used
/// ```text
/// Product.price ──┬──► CartLine.unit_price ──► base total ──► discount
///                 │
///                 └──► fallback when the line has no override price
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    ///
    /// let price = Money::from_cents(9999);
    /// assert_eq!(price.to_string(), "$99.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2499);
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total, Money::from_cents(4998));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Like [`multiply_quantity`](Self::multiply_quantity), `None` if the
    /// product leaves the `Decimal` range.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Addition that returns `None` instead of panicking on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns the amount taken off by `rate` (`amount × rate`).
    #[inline]
    pub fn discount_amount(&self, rate: DiscountRate) -> Money {
        Money(self.0 * rate.value())
    }

    /// Applies a fractional discount and returns the discounted amount.
    ///
    /// The result is `amount − amount × rate`, with no rounding. Range
    /// checking is the caller's job; see `DiscountRate::is_in_range`.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::money::Money;
    /// use pricing_core::types::DiscountRate;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_cents(9999);
    /// let rate = DiscountRate::new(Decimal::new(10, 2)); // 0.10
    /// assert_eq!(price.apply_discount(rate).amount(), Decimal::new(89991, 3));
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        *self - self.discount_amount(rate)
    }

    /// Rounds to `dp` decimal places using Bankers Rounding.
    ///
    /// Presentation only. Pricing operations never round.
    #[inline]
    pub fn round_dp(&self, dp: u32) -> Money {
        Money(self.0.round_dp(dp))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the exact amount with a dollar sign: `$89.991`, `-$5.50`.
///
/// Trailing zeros from multiplication are dropped, but at least two
/// fraction digits are always shown.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_sign_negative() && !self.0.is_zero() {
            "-"
        } else {
            ""
        };
        let mut abs = self.0.abs().normalize();
        if abs.scale() < 2 {
            abs.rescale(2);
        }
        write!(f, "{}${}", sign, abs)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Parses a plain decimal string (`"99.99"`); no currency symbol.
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), dec!(10.99));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::new(dec!(89.991)).to_string(), "$89.991");
        assert_eq!(Money::new(dec!(36.0000)).to_string(), "$36.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a * 3, Money::from_cents(3000));

        let mut c = a;
        c += b;
        c -= Money::from_cents(100);
        assert_eq!(c, Money::from_cents(1400));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert!(!negative.is_positive());
    }

    #[test]
    fn test_apply_discount_is_exact() {
        let price = Money::new(dec!(99.99));
        let rate = DiscountRate::new(dec!(0.10));
        assert_eq!(price.apply_discount(rate).amount(), dec!(89.991));
        assert_eq!(price.discount_amount(rate).amount(), dec!(9.999));
    }

    #[test]
    fn test_decimal_has_no_float_drift() {
        let total: Money = [dec!(0.1), dec!(0.2)].into_iter().map(Money::new).sum();
        assert_eq!(total.amount(), dec!(0.3));
    }

    #[test]
    fn test_round_dp_uses_bankers_rounding() {
        assert_eq!(Money::new(dec!(0.125)).round_dp(2).amount(), dec!(0.12));
        assert_eq!(Money::new(dec!(0.135)).round_dp(2).amount(), dec!(0.14));
        assert_eq!(Money::new(dec!(89.991)).round_dp(2).amount(), dec!(89.99));
    }

    #[test]
    fn test_parse() {
        assert_eq!("99.99".parse::<Money>().unwrap(), Money::from_cents(9999));
        assert_eq!(" 12.5 ".parse::<Money>().unwrap(), Money::from_cents(1250));
        assert!("ten".parse::<Money>().is_err());
    }
}
