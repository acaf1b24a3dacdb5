//! # pricing-catalog: Collaborators for the Pricing Engine
//!
//! Concrete, in-memory implementations of the two traits `pricing-core`
//! prices against, plus the plumbing a binary needs around them.
//!
//! ## Crate Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        pricing-catalog                                  │
//! │                                                                         │
//! │   config ──────► data path, log filter, default user                   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │   data ────────► TOML file ──┐                                         │
//! │   sample ──────► built-in ───┤                                         │
//! │                              ▼                                          │
//! │   repository::product   (CatalogLookup)  ──┐                           │
//! │   repository::discount  (DiscountPolicy) ──┴──► PricingEngine          │
//! │                                                                         │
//! │   logging ─────► tracing-subscriber                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use pricing_catalog::{ProductRepository, UserDiscountService};
//! use pricing_core::{CartLine, PricingEngine};
//! use rust_decimal::Decimal;
//!
//! let engine = PricingEngine::new(
//!     ProductRepository::with_sample_data(),
//!     UserDiscountService::with_sample_data(),
//! );
//!
//! let headphones = engine.get_product(Some("ABC12345")).unwrap();
//! let cart = vec![CartLine::new(headphones, 2)];
//!
//! let total = engine.calculate_cart_total(Some(&cart), None);
//! assert_eq!(total.amount(), Decimal::new(19998, 2));
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod repository;
pub mod sample;

pub use config::PricingConfig;
pub use data::{CatalogData, DiscountEntry};
pub use error::{CatalogError, CatalogResult};
pub use repository::discount::UserDiscountService;
pub use repository::product::ProductRepository;

use pricing_core::PricingEngine;

/// An engine backed by the in-memory stores.
pub type CatalogEngine = PricingEngine<ProductRepository, UserDiscountService>;

/// Builds an engine from the configured data file, or the sample data when
/// no file is configured.
pub fn engine_from_config(config: &PricingConfig) -> CatalogResult<CatalogEngine> {
    let (products, discounts) = match config.data.path {
        Some(ref path) => CatalogData::load(path)?.into_stores()?,
        None => (
            ProductRepository::with_sample_data(),
            UserDiscountService::with_sample_data(),
        ),
    };
    Ok(PricingEngine::new(products, discounts))
}
