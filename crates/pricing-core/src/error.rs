//! # Error Types
//!
//! Domain-specific error types for pricing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricing-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pricing-catalog errors (separate crate)                               │
//! │  └── CatalogError     - Data file, config and store failures           │
//! │                                                                         │
//! │  NOTE: the pricing operations themselves never return these.           │
//! │  A cart total always resolves to a number; invalid input degrades      │
//! │  to zero, "not found" or "no discount applied".                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These types are for the edges: loading catalog data, entering products,
//! and callers that want a reason instead of an `Option`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No sellable product exists for the SKU.
    ///
    /// ## When This Occurs
    /// - SKU is not in the catalog
    /// - Product exists but is inactive
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A line or cart amount does not fit in a `Decimal`.
    #[error("Amount out of range pricing {0}")]
    AmountOverflow(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation when data enters the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value does not have the exact required length.
    #[error("{field} must be exactly {expected} characters, got {actual}")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid format (e.g., punctuation in a SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("ABC12345".to_string());
        assert_eq!(err.to_string(), "Product not found: ABC12345");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::InvalidLength {
            field: "sku".to_string(),
            expected: 8,
            actual: 7,
        };
        assert_eq!(err.to_string(), "sku must be exactly 8 characters, got 7");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "sku".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
