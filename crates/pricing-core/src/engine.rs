//! # Pricing Engine
//!
//! Turns cart lines into charged amounts.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricing Pipeline                                 │
//! │                                                                         │
//! │  get_product(sku)                                                      │
//! │  ├── is_valid_sku?      no  → None   (catalog NOT queried)             │
//! │  ├── catalog.find_by_sku    → None   (unknown SKU)                     │
//! │  ├── product.is_active? no  → None   (inactive never surfaced)         │
//! │  └── Some(product)                                                     │
//! │                                                                         │
//! │  calculate_item_total(line, user)                                      │
//! │  ├── no line / no product   → 0                                        │
//! │  ├── unit = override > 0 ? override : catalog price                    │
//! │  ├── base = unit × quantity                                            │
//! │  ├── blank user             → base                                     │
//! │  └── apply_user_discount(base, user, product)                          │
//! │                                                                         │
//! │  apply_user_discount(amount, user, product)                            │
//! │  ├── blank user / no product / amount <= 0 → amount                    │
//! │  ├── not eligible                          → amount                    │
//! │  ├── rate outside [0, 1]                   → amount                    │
//! │  └── amount − amount × rate                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here returns an error. Every invalid input degrades to a
//! defined value so a cart total always resolves.

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::CatalogLookup;
use crate::discount::DiscountPolicy;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{is_blank, CartLine, Product};
use crate::validation::is_valid_sku;

/// The pricing engine.
///
/// Stateless between calls; safe to share across threads whenever the
/// catalog and the discount policy are.
#[derive(Debug, Clone)]
pub struct PricingEngine<C, D> {
    catalog: C,
    discounts: D,
}

impl<C, D> PricingEngine<C, D>
where
    C: CatalogLookup,
    D: DiscountPolicy,
{
    /// Creates an engine over a catalog and a discount policy.
    pub fn new(catalog: C, discounts: D) -> Self {
        PricingEngine { catalog, discounts }
    }

    /// The catalog this engine reads from.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The discount policy this engine consults.
    pub fn discounts(&self) -> &D {
        &self.discounts
    }

    /// Looks up a sellable product.
    ///
    /// Malformed SKUs return `None` before the catalog is touched.
    /// Inactive products are never returned.
    pub fn get_product(&self, sku: Option<&str>) -> Option<Product> {
        let sku = match sku {
            Some(sku) if is_valid_sku(Some(sku)) => sku,
            _ => {
                debug!(sku = ?sku, "Malformed SKU, skipping catalog lookup");
                return None;
            }
        };

        let product = self.catalog.find_by_sku(sku)?;
        if !product.is_active {
            debug!(sku = %product.sku, "Product is inactive, not surfaced");
            return None;
        }

        Some(product)
    }

    /// Like [`get_product`](Self::get_product) but with a reason on failure.
    pub fn require_product(&self, sku: &str) -> CoreResult<Product> {
        crate::validation::validate_sku(sku)?;
        self.get_product(Some(sku))
            .ok_or_else(|| CoreError::ProductNotFound(sku.to_string()))
    }

    /// Prices one cart line, applying the user's discount when there is one.
    pub fn calculate_item_total(&self, line: Option<&CartLine>, user_id: Option<&str>) -> Money {
        let Some(line) = line else {
            return Money::zero();
        };
        let Some(product) = line.product.as_ref() else {
            return Money::zero();
        };

        let base_total = line.subtotal();

        if is_blank(user_id) {
            return base_total;
        }

        self.apply_user_discount(base_total, user_id, Some(product))
    }

    /// Sums [`calculate_item_total`](Self::calculate_item_total) over a cart.
    ///
    /// An absent cart and an empty cart both total zero. Lines are not
    /// merged; two lines for the same product are priced separately.
    pub fn calculate_cart_total(&self, lines: Option<&[CartLine]>, user_id: Option<&str>) -> Money {
        let Some(lines) = lines else {
            return Money::zero();
        };

        lines
            .iter()
            .map(|line| self.calculate_item_total(Some(line), user_id))
            .sum()
    }

    /// Applies the user's discount to `amount` if every gate passes.
    ///
    /// ## Gates (first failure returns `amount` unchanged)
    /// 1. user id present and not blank, product present, amount > 0
    /// 2. the policy says the user is eligible for this product
    /// 3. the policy's rate lies in `[0, 1]`
    pub fn apply_user_discount(
        &self,
        amount: Money,
        user_id: Option<&str>,
        product: Option<&Product>,
    ) -> Money {
        let (Some(user_id), Some(product)) = (user_id, product) else {
            return amount;
        };
        if user_id.trim().is_empty() || !amount.is_positive() {
            return amount;
        }

        if !self.discounts.is_eligible(user_id, product) {
            debug!(user_id, sku = %product.sku, "User not eligible for discount");
            return amount;
        }

        let rate = self.discounts.rate(user_id);
        if !rate.is_in_range() {
            warn!(
                user_id,
                rate = %rate.value(),
                "Discount rate outside [0, 1], ignoring"
            );
            return amount;
        }

        let discounted = amount.apply_discount(rate);
        debug!(
            user_id,
            sku = %product.sku,
            rate = %rate,
            original = %amount,
            discounted = %discounted,
            "Applied user discount"
        );
        discounted
    }

    /// Prices a cart line by line.
    ///
    /// `quote.total` always equals
    /// [`calculate_cart_total`](Self::calculate_cart_total) for the same
    /// inputs. Lines without a product are kept with zero amounts.
    pub fn price_cart(&self, lines: &[CartLine], user_id: Option<&str>) -> CartQuote {
        let lines: Vec<LineQuote> = lines
            .iter()
            .map(|line| {
                let base_total = line.subtotal();
                let charged = self.calculate_item_total(Some(line), user_id);
                LineQuote {
                    sku: line.product.as_ref().map(|p| p.sku.clone()),
                    quantity: line.quantity,
                    unit_price: line.effective_unit_price().unwrap_or_default(),
                    base_total,
                    discount: base_total - charged,
                    total: charged,
                }
            })
            .collect();

        let total = lines.iter().map(|l| l.total).sum();
        CartQuote { lines, total }
    }

    /// Like [`price_cart`](Self::price_cart), but checks the amounts first.
    ///
    /// Returns [`CoreError::AmountOverflow`] when a line subtotal, or the
    /// sum of all line subtotals, does not fit in a `Decimal`. Charged
    /// totals never exceed subtotals in magnitude, so a cart that passes
    /// cannot overflow while being priced.
    pub fn try_price_cart(&self, lines: &[CartLine], user_id: Option<&str>) -> CoreResult<CartQuote> {
        let mut bound = Money::zero();
        for line in lines {
            let overflow = || {
                let sku = line.product.as_ref().map_or("-", |p| p.sku.as_str());
                warn!(sku, quantity = line.quantity, "Line amount out of range");
                CoreError::AmountOverflow(sku.to_string())
            };
            let subtotal = line.checked_subtotal().ok_or_else(overflow)?;
            bound = bound
                .checked_add(Money::new(subtotal.amount().abs()))
                .ok_or_else(overflow)?;
        }

        Ok(self.price_cart(lines, user_id))
    }
}

// =============================================================================
// Quotes
// =============================================================================

/// Itemized result for one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineQuote {
    /// SKU of the line's product, if it had one.
    pub sku: Option<String>,
    pub quantity: i64,
    /// Effective unit price (override or catalog).
    pub unit_price: Money,
    /// Unit price × quantity.
    pub base_total: Money,
    /// Amount taken off by the user discount.
    pub discount: Money,
    /// Charged amount.
    pub total: Money,
}

/// Itemized result for a whole cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartQuote {
    pub lines: Vec<LineQuote>,
    pub total: Money,
}

impl CartQuote {
    /// Total taken off across all lines.
    pub fn total_discount(&self) -> Money {
        self.lines.iter().map(|l| l.discount).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
