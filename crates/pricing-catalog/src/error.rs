//! # Catalog Error Types
//!
//! Error types for loading and maintaining catalog data.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / toml::de::Error / ValidationError                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price-cart prints the message and exits non-zero                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups never produce these. A missing product is `None`, an unknown
//! user has no discount.

use pricing_core::ValidationError;
use thiserror::Error;

/// Catalog data and configuration errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a data or config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data or config file is not valid TOML for its schema.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// Product data failed validation (e.g., malformed SKU).
    #[error("Invalid product {sku:?}: {source}")]
    InvalidProduct {
        sku: String,
        #[source]
        source: ValidationError,
    },

    /// Record not found in a store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Two products share a SKU (case-insensitive).
    #[error("Duplicate SKU: '{0}' already exists")]
    DuplicateSku(String),

    /// Two discount entries share a user id (case-insensitive).
    #[error("Duplicate discount entry for user '{0}'")]
    DuplicateUser(String),

    /// A discount entry has no user id.
    #[error("Discount entry has a blank user id")]
    BlankUser,

    /// Configuration value is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A store's lock was poisoned by a panicking writer.
    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),
}

impl CatalogError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates a Parse error for a file path.
    pub fn parse(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        CatalogError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
