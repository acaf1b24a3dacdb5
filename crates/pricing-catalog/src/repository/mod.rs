//! # Repository Module
//!
//! In-memory stores behind the pricing engine's collaborator traits.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  PricingEngine                                                         │
//! │       │                                                                 │
//! │       │  catalog.find_by_sku("ABC12345")                               │
//! │       │  discounts.is_eligible("user1", &product)                      │
//! │       ▼                                                                 │
//! │  ProductRepository      (impl CatalogLookup)                           │
//! │  UserDiscountService    (impl DiscountPolicy)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RwLock<HashMap<normalized key, record>>                               │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • The engine never sees storage                                       │
//! │  • Easy to test (swap in a fake)                                       │
//! │  • Case folding happens once, at the store boundary                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product catalog
//! - [`UserDiscountService`](discount::UserDiscountService) - Per-user discounts

pub mod discount;
pub mod product;
