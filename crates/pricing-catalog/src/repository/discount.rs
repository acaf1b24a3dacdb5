//! # User Discount Service
//!
//! In-memory per-user discount rates and eligible categories.
//!
//! ## Eligibility Rules
//! ```text
//! is_eligible(user, product)
//!   ├── blank user id                     → false
//!   ├── user has no discount entry        → false
//!   ├── product.category ∉ user categories → false   (case-insensitive)
//!   └── true
//! ```
//!
//! Rates are stored as given. A rate outside `[0, 1]` can be loaded from a
//! data file; the pricing engine refuses to use it.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard};

use pricing_core::{normalize_key, DiscountPolicy, DiscountRate, Product};
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::sample;

/// One user's discount entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UserDiscount {
    rate: DiscountRate,
    /// Normalized category labels.
    categories: HashSet<String>,
}

/// Thread-safe in-memory discount policy.
///
/// ## Usage
/// ```rust
/// use pricing_catalog::UserDiscountService;
/// use pricing_core::DiscountPolicy;
/// use rust_decimal::Decimal;
///
/// let discounts = UserDiscountService::with_sample_data();
/// assert_eq!(discounts.rate("USER1").value(), Decimal::new(10, 2));
/// assert!(discounts.rate("nobody").is_zero());
/// ```
#[derive(Debug, Default)]
pub struct UserDiscountService {
    by_user: RwLock<HashMap<String, UserDiscount>>,
}

impl UserDiscountService {
    /// Creates a service with no discounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service holding the built-in sample users.
    pub fn with_sample_data() -> Self {
        let service = Self::new();
        for entry in sample::discounts() {
            if let Err(e) = service.set_discount(&entry.user_id, entry.rate, &entry.categories) {
                warn!(error = %e, "Skipping sample discount");
            }
        }
        service
    }

    /// Creates or replaces a user's discount entry.
    pub fn set_discount<S: AsRef<str>>(
        &self,
        user_id: &str,
        rate: DiscountRate,
        categories: &[S],
    ) -> CatalogResult<()> {
        if user_id.trim().is_empty() {
            return Err(CatalogError::BlankUser);
        }

        let entry = UserDiscount {
            rate,
            categories: categories
                .iter()
                .map(|c| normalize_key(c.as_ref()))
                .collect(),
        };

        debug!(user_id, rate = %rate, categories = entry.categories.len(), "Setting user discount");
        self.by_user
            .write()
            .map_err(|_| CatalogError::LockPoisoned("discount"))?
            .insert(normalize_key(user_id), entry);
        Ok(())
    }

    /// Removes a user's discount entry. Returns true if one existed.
    pub fn remove_discount(&self, user_id: &str) -> CatalogResult<bool> {
        let removed = self
            .by_user
            .write()
            .map_err(|_| CatalogError::LockPoisoned("discount"))?
            .remove(&normalize_key(user_id))
            .is_some();
        Ok(removed)
    }

    /// Number of users with a discount entry.
    pub fn user_count(&self) -> usize {
        self.read().map(|users| users.len()).unwrap_or(0)
    }

    fn read(&self) -> Option<RwLockReadGuard<'_, HashMap<String, UserDiscount>>> {
        match self.by_user.read() {
            Ok(guard) => Some(guard),
            Err(_) => {
                warn!("Discount store lock poisoned, treating every user as undiscounted");
                None
            }
        }
    }
}

impl DiscountPolicy for UserDiscountService {
    fn rate(&self, user_id: &str) -> DiscountRate {
        if user_id.trim().is_empty() {
            return DiscountRate::ZERO;
        }

        self.read()
            .and_then(|users| users.get(&normalize_key(user_id)).map(|d| d.rate))
            .unwrap_or(DiscountRate::ZERO)
    }

    fn is_eligible(&self, user_id: &str, product: &Product) -> bool {
        if user_id.trim().is_empty() {
            return false;
        }

        let Some(users) = self.read() else {
            return false;
        };

        users
            .get(&normalize_key(user_id))
            .map_or(false, |d| d.categories.contains(&normalize_key(&product.category)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_core::Money;
    use rust_decimal_macros::dec;

    fn product_in(category: &str) -> Product {
        Product::new("ABC12345", "Thing", Money::from_cents(1000), category)
    }

    #[test]
    fn test_sample_rates() {
        let service = UserDiscountService::with_sample_data();

        assert_eq!(service.rate("user1").value(), dec!(0.10));
        assert_eq!(service.rate("user2").value(), dec!(0.15));
        assert_eq!(service.rate("user3").value(), dec!(0.05));
        assert_eq!(service.rate("premiumuser").value(), dec!(0.20));
        assert_eq!(service.rate("vipuser").value(), dec!(0.25));
        assert_eq!(service.user_count(), 5);
    }

    #[test]
    fn test_rate_is_case_insensitive() {
        let service = UserDiscountService::with_sample_data();
        assert_eq!(service.rate("USER1"), service.rate("user1"));
        assert_eq!(service.rate("PremiumUser").value(), dec!(0.20));
    }

    #[test]
    fn test_unknown_or_blank_user_has_zero_rate() {
        let service = UserDiscountService::with_sample_data();
        for user in ["unknownuser", "", "   "] {
            assert!(service.rate(user).is_zero());
        }
    }

    #[test]
    fn test_eligibility_by_category() {
        let service = UserDiscountService::with_sample_data();

        assert!(service.is_eligible("user1", &product_in("Electronics")));
        assert!(service.is_eligible("user1", &product_in("Books")));
        assert!(!service.is_eligible("user1", &product_in("Clothing")));

        assert!(service.is_eligible("user3", &product_in("Books")));
        assert!(!service.is_eligible("user3", &product_in("Electronics")));

        assert!(service.is_eligible("premiumuser", &product_in("Home & Garden")));
    }

    #[test]
    fn test_eligibility_is_case_insensitive() {
        let service = UserDiscountService::with_sample_data();
        assert!(service.is_eligible("USER1", &product_in("electronics")));
        assert!(service.is_eligible("user2", &product_in("CLOTHING")));
        assert!(service.is_eligible("vipuser", &product_in("home & garden")));
    }

    #[test]
    fn test_padded_user_id_is_a_different_user() {
        let service = UserDiscountService::with_sample_data();
        assert!(service.rate(" user1 ").is_zero());
        assert!(!service.is_eligible(" user1 ", &product_in("Electronics")));
        assert!(!service.is_eligible("user1", &product_in(" Electronics")));
    }

    #[test]
    fn test_unknown_or_blank_user_not_eligible() {
        let service = UserDiscountService::with_sample_data();
        assert!(!service.is_eligible("unknownuser", &product_in("Electronics")));
        assert!(!service.is_eligible("", &product_in("Electronics")));
        assert!(!service.is_eligible(" ", &product_in("Electronics")));
    }

    #[test]
    fn test_set_and_remove_discount() {
        let service = UserDiscountService::new();
        service
            .set_discount("newuser", DiscountRate::new(dec!(0.30)), &["Toys"])
            .unwrap();

        assert_eq!(service.rate("NEWUSER").value(), dec!(0.30));
        assert!(service.is_eligible("newuser", &product_in("toys")));

        // Replace
        service
            .set_discount("NewUser", DiscountRate::new(dec!(0.05)), &["Books"])
            .unwrap();
        assert_eq!(service.rate("newuser").value(), dec!(0.05));
        assert!(!service.is_eligible("newuser", &product_in("Toys")));

        assert!(service.remove_discount("newuser").unwrap());
        assert!(!service.remove_discount("newuser").unwrap());
        assert!(service.rate("newuser").is_zero());
    }

    #[test]
    fn test_blank_user_rejected() {
        let service = UserDiscountService::new();
        let categories: [&str; 0] = [];
        assert!(matches!(
            service.set_discount("  ", DiscountRate::ZERO, &categories),
            Err(CatalogError::BlankUser)
        ));
    }

    #[test]
    fn test_out_of_range_rate_is_stored_as_given() {
        let service = UserDiscountService::new();
        service
            .set_discount("broken", DiscountRate::new(dec!(1.5)), &["Books"])
            .unwrap();
        assert!(!service.rate("broken").is_in_range());
    }
}
