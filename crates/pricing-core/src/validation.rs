//! # Validation Module
//!
//! SKU format rules.
//!
//! ## Two Entry Points, One Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SKU Validation                                     │
//! │                                                                         │
//! │  is_valid_sku(Option<&str>) -> bool                                    │
//! │  ├── Used by PricingEngine::get_product before any catalog lookup      │
//! │  └── Silent: malformed input simply means "no product"                 │
//! │                                                                         │
//! │  validate_sku(&str) -> ValidationResult<()>                            │
//! │  ├── Used when products enter the catalog (data files, inserts)        │
//! │  └── Explains which rule failed                                        │
//! │                                                                         │
//! │  Rules (both):                                                         │
//! │  • not blank                                                           │
//! │  • exactly 8 characters                                                │
//! │  • Unicode letters (L*) and decimal digits (Nd) only                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pricing_core::validation::{is_valid_sku, validate_sku};
//!
//! assert!(is_valid_sku(Some("ABC12345")));
//! assert!(!is_valid_sku(Some("INVALID")));
//! assert!(validate_sku("ABC-1234").is_err());
//! ```

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Required SKU length, in characters.
pub const SKU_LENGTH: usize = 8;

/// Letter categories plus decimal digits.
///
/// Superscripts, fractions and letter numbers (`²`, `½`, `Ⅳ`) are numeric
/// to `char::is_alphanumeric` but are not SKU characters.
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Checks a candidate SKU.
///
/// Returns false for `None`, blank strings, anything that is not exactly
/// [`SKU_LENGTH`] characters, and anything containing a character that is
/// not a letter or digit. Pure, no side effects.
pub fn is_valid_sku(candidate: Option<&str>) -> bool {
    candidate.map_or(false, |sku| validate_sku(sku).is_ok())
}

/// Validates a SKU (Stock Keeping Unit), reporting the first rule it breaks.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must be exactly 8 characters (no trimming; surrounding spaces count)
/// - Must contain only letters and digits
///
/// ## Example
/// ```rust
/// use pricing_core::validation::validate_sku;
///
/// assert!(validate_sku("DEF67890").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("ABC123456").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    if sku.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    let length = sku.chars().count();
    if length != SKU_LENGTH {
        return Err(ValidationError::InvalidLength {
            field: "sku".to_string(),
            expected: SKU_LENGTH,
            actual: length,
        });
    }

    if let Some(bad) = sku.chars().find(|&c| !is_letter_or_digit(c)) {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: format!("must contain only letters and digits, found {:?}", bad),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_skus() {
        assert!(is_valid_sku(Some("ABC12345")));
        assert!(is_valid_sku(Some("abc12345")));
        assert!(is_valid_sku(Some("12345678")));
        assert!(is_valid_sku(Some("ABCDEFGH")));
    }

    #[test]
    fn test_blank_skus() {
        assert!(!is_valid_sku(None));
        assert!(!is_valid_sku(Some("")));
        assert!(!is_valid_sku(Some("        ")));
        assert!(!is_valid_sku(Some("\t")));
    }

    #[test]
    fn test_length_must_be_exact() {
        assert!(!is_valid_sku(Some("INVALID")));
        assert!(!is_valid_sku(Some("ABC123456")));
        assert!(!is_valid_sku(Some("A")));
    }

    #[test]
    fn test_rejects_non_alphanumeric() {
        assert!(!is_valid_sku(Some("ABC-1234")));
        assert!(!is_valid_sku(Some("ABC 1234")));
        assert!(!is_valid_sku(Some("ABC_1234")));
        assert!(!is_valid_sku(Some("ABC@1234")));
        assert!(!is_valid_sku(Some(" ABC1234")));
    }

    #[test]
    fn test_unicode_letters_and_digits() {
        // 8 characters, more than 8 bytes
        assert!(is_valid_sku(Some("ÄÖÜ12345")));
        assert!(is_valid_sku(Some("日本語12345")));
        assert!(is_valid_sku(Some("ABC１２３４５")));
        assert!(!is_valid_sku(Some("€BC12345")));
    }

    #[test]
    fn test_rejects_numeric_symbols_that_are_not_digits() {
        assert!(!is_valid_sku(Some("ABC1234²")));
        assert!(!is_valid_sku(Some("ABCDEFGⅣ")));
        assert!(!is_valid_sku(Some("ABC1234½")));
        assert!(matches!(
            validate_sku("ABC1234½"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_sku_reasons() {
        assert_eq!(
            validate_sku("   "),
            Err(ValidationError::Required {
                field: "sku".to_string()
            })
        );
        assert_eq!(
            validate_sku("INVALID"),
            Err(ValidationError::InvalidLength {
                field: "sku".to_string(),
                expected: 8,
                actual: 7,
            })
        );
        assert!(matches!(
            validate_sku("ABC-1234"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_eight_alphanumerics_are_valid(sku in "[A-Za-z0-9]{8}") {
            prop_assert!(is_valid_sku(Some(&sku)));
        }

        #[test]
        fn prop_wrong_length_is_invalid(sku in "[A-Za-z0-9]{0,7}|[A-Za-z0-9]{9,16}") {
            prop_assert!(!is_valid_sku(Some(&sku)));
        }

        #[test]
        fn prop_any_symbol_is_invalid(
            prefix in "[A-Z0-9]{3}",
            symbol in "[-_ .@#/]",
            suffix in "[A-Z0-9]{4}",
        ) {
            let sku = format!("{}{}{}", prefix, symbol, suffix);
            prop_assert!(!is_valid_sku(Some(&sku)));
        }

        #[test]
        fn prop_eight_letters_or_digits_are_valid(sku in "[\\p{L}\\p{Nd}]{8}") {
            // The regex engine's Unicode tables may be newer than ours.
            prop_assume!(sku
                .chars()
                .all(|c| !matches!(get_general_category(c), GeneralCategory::Unassigned)));
            prop_assert!(is_valid_sku(Some(&sku)));
        }

        #[test]
        fn prop_any_other_class_is_invalid(
            prefix in "[\\p{L}\\p{Nd}]{4}",
            bad in "[\\p{No}\\p{Nl}\\p{P}\\p{S}\\p{M}\\p{Zs}]",
            suffix in "[\\p{L}\\p{Nd}]{3}",
        ) {
            let sku = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(!is_valid_sku(Some(&sku)));
        }
    }
}
