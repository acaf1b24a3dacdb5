//! # Domain Types
//!
//! Core domain types used throughout the pricing pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  sku (8 chars)  │◄──│  product?       │   │  Decimal        │       │
//! │  │  name           │   │  quantity       │   │  0.10 = 10% off │       │
//! │  │  price (Money)  │   │  unit_price     │   │  valid: [0, 1]  │       │
//! │  │  category       │   │  (0 = catalog)  │   └─────────────────┘       │
//! │  │  is_active      │   └─────────────────┘                              │
//! │  │  created_at     │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Case-Insensitive Keys
//! SKUs, categories and user ids compare case-insensitively. Every
//! comparison goes through [`normalize_key`] so the rule is applied the
//! same way everywhere.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Normalizes a case-insensitive key (SKU, category, user id).
///
/// Letters are uppercased with full Unicode case mapping. Whitespace is
/// kept, so `" user1 "` and `"user1"` are different keys.
///
/// ```rust
/// use pricing_core::types::normalize_key;
///
/// assert_eq!(normalize_key("abc12345"), "ABC12345");
/// assert_eq!(normalize_key("Home & Garden"), "HOME & GARDEN");
/// ```
pub fn normalize_key(key: &str) -> String {
    key.to_uppercase()
}

/// Returns true if `value` is absent, empty, or whitespace only.
#[inline]
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A fraction taken off a price: `0.10` means 10% off.
///
/// Rates come from the discount policy and are not trusted. Any value can
/// be held; [`DiscountRate::is_in_range`] decides whether the engine may
/// use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// No discount.
    pub const ZERO: DiscountRate = DiscountRate(Decimal::ZERO);

    /// Wraps a raw rate without checking it.
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        DiscountRate(value)
    }

    /// Returns the raw fraction.
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Checks the closed interval `[0, 1]`.
    ///
    /// ```rust
    /// use pricing_core::types::DiscountRate;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(DiscountRate::ZERO.is_in_range());
    /// assert!(DiscountRate::new(Decimal::ONE).is_in_range());
    /// assert!(!DiscountRate::new(Decimal::new(11, 1)).is_in_range());  // 1.1
    /// assert!(!DiscountRate::new(Decimal::new(-1, 1)).is_in_range());  // -0.1
    /// ```
    #[inline]
    pub fn is_in_range(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the rate as a percentage (0.10 → 10).
    pub fn percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::ZERO
    }
}

impl From<Decimal> for DiscountRate {
    fn from(value: Decimal) -> Self {
        DiscountRate(value)
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Product
// =============================================================================

fn default_active() -> bool {
    true
}

/// A catalog product.
///
/// Owned by the catalog. The pricing engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stock Keeping Unit - business identifier, 8 letters/digits.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Catalog price.
    pub price: Money,

    /// Category label, compared case-insensitively for discount eligibility.
    pub category: String,

    /// Whether the product is sellable (soft delete).
    #[serde(default = "default_active", alias = "active")]
    pub is_active: bool,

    /// When the product was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates an active product stamped with the current time.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            price,
            category: category.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Marks the product inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Overrides the creation timestamp.
    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Case-insensitive SKU comparison.
    pub fn matches_sku(&self, sku: &str) -> bool {
        normalize_key(&self.sku) == normalize_key(sku)
    }

    /// Case-insensitive category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        normalize_key(&self.category) == normalize_key(category)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One line of a cart, built by the caller for a single calculation.
///
/// ## Unit Price Precedence
/// ```text
/// unit_price > 0 ?  ──yes──►  unit_price       (override wins)
///        │
///        no
///        ▼
/// product.price                                (catalog fallback)
/// ```
///
/// Quantity is taken as given. Zero and negative quantities are the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product being bought. A line without one prices at zero.
    pub product: Option<Product>,

    /// Requested quantity.
    pub quantity: i64,

    /// Override unit price. Zero or negative means "use the catalog price".
    #[serde(default)]
    pub unit_price: Money,
}

impl CartLine {
    /// Creates a line priced from the catalog.
    pub fn new(product: Product, quantity: i64) -> Self {
        CartLine {
            product: Some(product),
            quantity,
            unit_price: Money::zero(),
        }
    }

    /// Sets an override unit price.
    pub fn with_unit_price(mut self, unit_price: Money) -> Self {
        self.unit_price = unit_price;
        self
    }

    /// Effective unit price, or `None` when the line has no product.
    pub fn effective_unit_price(&self) -> Option<Money> {
        let product = self.product.as_ref()?;
        if self.unit_price.is_positive() {
            Some(self.unit_price)
        } else {
            Some(product.price)
        }
    }

    /// Like [`subtotal`](Self::subtotal), `None` if the amount overflows.
    pub fn checked_subtotal(&self) -> Option<Money> {
        match self.effective_unit_price() {
            Some(price) => price.checked_multiply_quantity(self.quantity),
            None => Some(Money::zero()),
        }
    }

    /// Line subtotal before any discount (zero when there is no product).
    pub fn subtotal(&self) -> Money {
        self.effective_unit_price()
            .map(|price| price.multiply_quantity(self.quantity))
            .unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
