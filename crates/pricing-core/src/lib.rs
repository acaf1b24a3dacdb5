//! # pricing-core: Pure Pricing Logic
//!
//! Computes what a shopper is charged for a cart: catalog prices, optional
//! per-line price overrides, and per-user, per-category discounts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Pricing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Callers (price-cart CLI, services, tests)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ pricing-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  engine   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  Pricing  │  │    SKU    │  │   │
//! │  │   │ CartLine  │  │ (Decimal) │  │  Engine   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └─────┬─────┘  └───────────┘  │   │
//! │  │                                       │                         │   │
//! │  │            ┌──────────────────────────┴───────────┐             │   │
//! │  │            ▼                                      ▼             │   │
//! │  │   trait CatalogLookup                  trait DiscountPolicy     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           pricing-catalog (concrete collaborators)              │   │
//! │  │     ProductRepository, UserDiscountService, data files          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartLine, DiscountRate)
//! - [`money`] - Exact decimal Money type (no floating point!)
//! - [`validation`] - SKU format rules
//! - [`catalog`] - The `CatalogLookup` collaborator trait
//! - [`discount`] - The `DiscountPolicy` collaborator trait
//! - [`engine`] - `PricingEngine`
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input and same collaborator answers = same output
//! 2. **No I/O**: storage lives behind the two traits
//! 3. **Decimal Money**: no binary floats anywhere in a price
//! 4. **Silent Fallbacks**: pricing never fails; bad input prices at zero or
//!    at the undiscounted amount
//!
//! ## Example Usage
//!
//! ```rust
//! use pricing_core::{CartLine, DiscountRate, Money, PricingEngine, Product};
//! use pricing_core::catalog::CatalogLookup;
//! use pricing_core::discount::DiscountPolicy;
//! use rust_decimal::Decimal;
//!
//! struct OneProduct(Product);
//!
//! impl CatalogLookup for OneProduct {
//!     fn find_by_sku(&self, sku: &str) -> Option<Product> {
//!         self.0.matches_sku(sku).then(|| self.0.clone())
//!     }
//!     fn list_active_products(&self) -> Vec<Product> {
//!         vec![self.0.clone()]
//!     }
//! }
//!
//! struct TenPercentOff;
//!
//! impl DiscountPolicy for TenPercentOff {
//!     fn rate(&self, _user_id: &str) -> DiscountRate {
//!         DiscountRate::new(Decimal::new(10, 2))
//!     }
//!     fn is_eligible(&self, _user_id: &str, product: &Product) -> bool {
//!         product.in_category("electronics")
//!     }
//! }
//!
//! let headphones = Product::new("ABC12345", "Wireless Headphones", Money::from_cents(9999), "Electronics");
//! let engine = PricingEngine::new(OneProduct(headphones), TenPercentOff);
//!
//! let product = engine.get_product(Some("abc12345")).unwrap();
//! let line = CartLine::new(product, 1);
//! let total = engine.calculate_item_total(Some(&line), Some("user1"));
//! assert_eq!(total.amount(), Decimal::new(89991, 3)); // 89.991
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod discount;
pub mod engine;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::CatalogLookup;
pub use discount::{DiscountPolicy, NoDiscounts};
pub use engine::{CartQuote, LineQuote, PricingEngine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use validation::{is_valid_sku, validate_sku};
