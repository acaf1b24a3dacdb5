//! # Sample Data
//!
//! The built-in demo catalog and discount table.
//!
//! ## Products
//! ```text
//! SKU        Name                  Price   Category        Active
//! ─────────  ────────────────────  ──────  ──────────────  ──────
//! ABC12345   Wireless Headphones    99.99  Electronics     yes
//! DEF67890   Programming Book       45.00  Books           yes
//! GHI11111   Cotton T-Shirt         19.99  Clothing        NO
//! JKL22222   Coffee Mug             12.50  Home & Garden   yes
//! MNO33333   Smartphone Case        24.99  Electronics     yes
//! ```
//!
//! ## Users
//! ```text
//! User         Rate  Eligible categories
//! ───────────  ────  ─────────────────────────────────────────
//! user1        10%   Electronics, Books
//! user2        15%   Electronics, Clothing
//! user3         5%   Books
//! premiumuser  20%   Electronics, Books, Clothing, Home & Garden
//! vipuser      25%   Electronics, Books, Clothing, Home & Garden
//! ```

use chrono::{Duration, Utc};
use pricing_core::{DiscountRate, Money, Product};
use rust_decimal::Decimal;

use crate::data::DiscountEntry;

const ALL_CATEGORIES: &[&str] = &["Electronics", "Books", "Clothing", "Home & Garden"];

/// Sample products, created relative to now.
pub fn products() -> Vec<Product> {
    let now = Utc::now();
    vec![
        Product::new("ABC12345", "Wireless Headphones", Money::from_cents(9999), "Electronics")
            .created(now - Duration::days(30)),
        Product::new("DEF67890", "Programming Book", Money::from_cents(4500), "Books")
            .created(now - Duration::days(15)),
        Product::new("GHI11111", "Cotton T-Shirt", Money::from_cents(1999), "Clothing")
            .inactive()
            .created(now - Duration::days(60)),
        Product::new("JKL22222", "Coffee Mug", Money::from_cents(1250), "Home & Garden")
            .created(now - Duration::days(7)),
        Product::new("MNO33333", "Smartphone Case", Money::from_cents(2499), "Electronics")
            .created(now - Duration::days(3)),
    ]
}

/// Sample discount entries.
pub fn discounts() -> Vec<DiscountEntry> {
    vec![
        entry("user1", 10, &["Electronics", "Books"]),
        entry("user2", 15, &["Electronics", "Clothing"]),
        entry("user3", 5, &["Books"]),
        entry("premiumuser", 20, ALL_CATEGORIES),
        entry("vipuser", 25, ALL_CATEGORIES),
    ]
}

fn entry(user_id: &str, percent: i64, categories: &[&str]) -> DiscountEntry {
    DiscountEntry {
        user_id: user_id.to_string(),
        rate: DiscountRate::new(Decimal::new(percent, 2)),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}
