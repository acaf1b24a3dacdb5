//! # Product Repository
//!
//! In-memory product catalog.
//!
//! ## Key Operations
//! - Case-insensitive SKU lookup (returns inactive products too)
//! - Active product listing in insertion order
//! - Inserts with SKU validation and duplicate detection
//! - Soft delete
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Lookups Work                                     │
//! │                                                                         │
//! │  Caller asks: "abc12345"                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize_key → "ABC12345"                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ by_sku (HashMap, normalized keys)       │                           │
//! │  │                                         │                           │
//! │  │ ABC12345 → Wireless Headphones (active) │ ← MATCH!                  │
//! │  │ GHI11111 → Cotton T-Shirt (inactive)    │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product returned with its original SKU casing                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use pricing_core::{normalize_key, validate_sku, CatalogLookup, Product};
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::sample;

#[derive(Debug, Default)]
struct Inner {
    /// Normalized SKUs in insertion order.
    order: Vec<String>,
    by_sku: HashMap<String, Product>,
}

/// Thread-safe in-memory product store.
///
/// ## Usage
/// ```rust
/// use pricing_catalog::ProductRepository;
/// use pricing_core::CatalogLookup;
///
/// let repo = ProductRepository::with_sample_data();
/// let product = repo.find_by_sku("abc12345").unwrap();
/// assert_eq!(product.sku, "ABC12345");
/// ```
#[derive(Debug, Default)]
pub struct ProductRepository {
    inner: RwLock<Inner>,
}

impl ProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the built-in sample catalog.
    pub fn with_sample_data() -> Self {
        let repo = Self::new();
        for product in sample::products() {
            if let Err(e) = repo.insert(product) {
                // Sample data is fixed; this only fires if it is edited badly.
                warn!(error = %e, "Skipping sample product");
            }
        }
        repo
    }

    /// Builds a repository from a list of products, rejecting bad entries.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> CatalogResult<Self> {
        let repo = Self::new();
        for product in products {
            repo.insert(product)?;
        }
        Ok(repo)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(())` - Inserted
    /// * `Err(CatalogError::InvalidProduct)` - SKU fails format rules
    /// * `Err(CatalogError::DuplicateSku)` - SKU already exists (any casing)
    pub fn insert(&self, product: Product) -> CatalogResult<()> {
        validate_sku(&product.sku).map_err(|source| CatalogError::InvalidProduct {
            sku: product.sku.clone(),
            source,
        })?;

        let key = normalize_key(&product.sku);
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CatalogError::LockPoisoned("product"))?;

        if inner.by_sku.contains_key(&key) {
            return Err(CatalogError::DuplicateSku(product.sku));
        }

        debug!(sku = %product.sku, active = product.is_active, "Inserting product");
        inner.order.push(key.clone());
        inner.by_sku.insert(key, product);
        Ok(())
    }

    /// Soft-deletes a product by setting `is_active = false`.
    ///
    /// The product stays reachable through `find_by_sku`.
    pub fn soft_delete(&self, sku: &str) -> CatalogResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| CatalogError::LockPoisoned("product"))?;

        match inner.by_sku.get_mut(&normalize_key(sku)) {
            Some(product) => {
                debug!(sku = %product.sku, "Soft-deleting product");
                product.is_active = false;
                Ok(())
            }
            None => Err(CatalogError::not_found("Product", sku)),
        }
    }

    /// Counts active products.
    pub fn count(&self) -> usize {
        self.read()
            .map(|inner| inner.by_sku.values().filter(|p| p.is_active).count())
            .unwrap_or(0)
    }

    /// Counts all products, active or not.
    pub fn len_all(&self) -> usize {
        self.read().map(|inner| inner.order.len()).unwrap_or(0)
    }

    fn read(&self) -> Option<RwLockReadGuard<'_, Inner>> {
        match self.inner.read() {
            Ok(guard) => Some(guard),
            Err(_) => {
                warn!("Product store lock poisoned, treating catalog as empty");
                None
            }
        }
    }
}

impl CatalogLookup for ProductRepository {
    fn find_by_sku(&self, sku: &str) -> Option<Product> {
        if sku.trim().is_empty() {
            return None;
        }

        let inner = self.read()?;
        let product = inner.by_sku.get(&normalize_key(sku)).cloned();
        debug!(sku, found = product.is_some(), "Catalog lookup");
        product
    }

    fn list_active_products(&self) -> Vec<Product> {
        let Some(inner) = self.read() else {
            return Vec::new();
        };

        let active: Vec<Product> = inner
            .order
            .iter()
            .filter_map(|key| inner.by_sku.get(key))
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        active
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
