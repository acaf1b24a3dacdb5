//! # Catalog Data Files
//!
//! Loads products and user discounts from a TOML document.
//!
//! ## File Format
//! ```toml
//! [[products]]
//! sku = "ABC12345"
//! name = "Wireless Headphones"
//! price = "99.99"              # decimal as a string, never a float
//! category = "Electronics"
//! is_active = true             # optional, defaults to true
//! created_at = "2024-05-01T09:30:00Z"  # optional RFC 3339 string
//!
//! [[discounts]]
//! user_id = "user1"
//! rate = "0.10"
//! categories = ["Electronics", "Books"]
//! ```
//!
//! ## Load Pipeline
//! ```text
//! file ──► toml::from_str ──► CatalogData ──► into_stores()
//!                                              ├── SKU format check
//!                                              ├── duplicate SKU check
//!                                              └── duplicate user check
//! ```

use std::collections::HashSet;
use std::path::Path;

use pricing_core::{normalize_key, DiscountRate, Product};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CatalogError, CatalogResult};
use crate::repository::discount::UserDiscountService;
use crate::repository::product::ProductRepository;
use crate::sample;

/// One user's discount as written in a data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountEntry {
    pub user_id: String,
    pub rate: DiscountRate,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// The contents of a catalog data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub discounts: Vec<DiscountEntry>,
}

impl CatalogData {
    /// The built-in sample catalog and discount table.
    pub fn sample() -> Self {
        CatalogData {
            products: sample::products(),
            discounts: sample::discounts(),
        }
    }

    /// Reads a data file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let data = Self::from_toml_str(&contents)
            .map_err(|e| CatalogError::parse(path.display().to_string(), e))?;

        info!(
            ?path,
            products = data.products.len(),
            discounts = data.discounts.len(),
            "Loaded catalog data"
        );
        Ok(data)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Writes the document as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builds both stores, validating every entry.
    pub fn into_stores(self) -> CatalogResult<(ProductRepository, UserDiscountService)> {
        let products = ProductRepository::from_products(self.products)?;

        let discounts = UserDiscountService::new();
        let mut seen = HashSet::new();
        for entry in self.discounts {
            if entry.user_id.trim().is_empty() {
                return Err(CatalogError::BlankUser);
            }
            if !seen.insert(normalize_key(&entry.user_id)) {
                return Err(CatalogError::DuplicateUser(entry.user_id));
            }
            discounts.set_discount(&entry.user_id, entry.rate, &entry.categories)?;
        }

        Ok((products, discounts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_core::{CatalogLookup, DiscountPolicy};
    use rust_decimal_macros::dec;
    use std::io::Write;

    const SMALL: &str = r#"
        [[products]]
        sku = "TOY00001"
        name = "Wooden Train"
        price = "34.50"
        category = "Toys"

        [[products]]
        sku = "TOY00002"
        name = "Old Kite"
        price = "9.99"
        category = "Toys"
        is_active = false
        created_at = "2024-05-01T09:30:00Z"

        [[discounts]]
        user_id = "kid"
        rate = "0.5"
        categories = ["toys"]
    "#;

    #[test]
    fn test_parse_small_document() {
        let data = CatalogData::from_toml_str(SMALL).unwrap();
        assert_eq!(data.products.len(), 2);
        assert_eq!(data.products[0].price.amount(), dec!(34.50));
        assert!(data.products[0].is_active);
        assert!(!data.products[1].is_active);
        assert_eq!(data.discounts[0].rate.value(), dec!(0.5));
    }

    #[test]
    fn test_into_stores() {
        let (products, discounts) = CatalogData::from_toml_str(SMALL)
            .unwrap()
            .into_stores()
            .unwrap();

        assert_eq!(products.list_active_products().len(), 1);
        let train = products.find_by_sku("toy00001").unwrap();
        assert!(discounts.is_eligible("KID", &train));
        assert_eq!(discounts.rate("kid").value(), dec!(0.5));
    }

    #[test]
    fn test_rejects_malformed_sku() {
        let doc = r#"
            [[products]]
            sku = "TOY-1"
            name = "Bad"
            price = "1.00"
            category = "Toys"
        "#;
        let err = CatalogData::from_toml_str(doc).unwrap().into_stores().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidProduct { .. }));
    }

    #[test]
    fn test_rejects_duplicate_user() {
        let doc = r#"
            [[discounts]]
            user_id = "kid"
            rate = "0.1"

            [[discounts]]
            user_id = "KID"
            rate = "0.2"
        "#;
        let err = CatalogData::from_toml_str(doc).unwrap().into_stores().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateUser(_)));
    }

    #[test]
    fn test_sample_round_trips_through_toml() {
        let sample = CatalogData::sample();
        let text = sample.to_toml_string().unwrap();
        let parsed = CatalogData::from_toml_str(&text).unwrap();
        assert_eq!(parsed, sample);
    }

    #[test]
    fn test_load_from_file_and_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();
        let data = CatalogData::load(file.path()).unwrap();
        assert_eq!(data.products.len(), 2);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"[[products]]\nsku = 12").unwrap();
        assert!(matches!(
            CatalogData::load(broken.path()),
            Err(CatalogError::Parse { .. })
        ));

        assert!(matches!(
            CatalogData::load(Path::new("/definitely/not/here.toml")),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn test_bundled_sample_file_matches_builtin_sample() {
        let text = include_str!("../data/sample.toml");
        let (products, discounts) = CatalogData::from_toml_str(text)
            .unwrap()
            .into_stores()
            .unwrap();
        let builtin = ProductRepository::with_sample_data();

        assert_eq!(products.len_all(), builtin.len_all());
        for product in builtin.list_active_products() {
            let loaded = products.find_by_sku(&product.sku).unwrap();
            assert_eq!(loaded.price, product.price);
            assert_eq!(loaded.category, product.category);
        }
        assert_eq!(discounts.user_count(), 5);
    }
}
