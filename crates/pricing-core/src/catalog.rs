//! # Catalog Lookup
//!
//! The product catalog as seen by the pricing engine.
//!
//! The engine never owns product storage. It asks a `CatalogLookup` for
//! one product at a time and filters what it gets back. Concrete stores
//! live in `pricing-catalog`; tests use small hand-rolled fakes.

use std::sync::Arc;

use crate::types::Product;

/// Read access to the product catalog.
///
/// ## Contract
/// - `find_by_sku` matches case-insensitively and returns inactive
///   products too. Filtering is the engine's job.
/// - `list_active_products` is for reporting callers. The engine does not
///   use it.
pub trait CatalogLookup {
    /// Finds a product by SKU (case-insensitive exact match).
    fn find_by_sku(&self, sku: &str) -> Option<Product>;

    /// Lists every product that is currently sellable.
    fn list_active_products(&self) -> Vec<Product>;
}

impl<T: CatalogLookup + ?Sized> CatalogLookup for &T {
    fn find_by_sku(&self, sku: &str) -> Option<Product> {
        (**self).find_by_sku(sku)
    }

    fn list_active_products(&self) -> Vec<Product> {
        (**self).list_active_products()
    }
}

impl<T: CatalogLookup + ?Sized> CatalogLookup for Arc<T> {
    fn find_by_sku(&self, sku: &str) -> Option<Product> {
        (**self).find_by_sku(sku)
    }

    fn list_active_products(&self) -> Vec<Product> {
        (**self).list_active_products()
    }
}
