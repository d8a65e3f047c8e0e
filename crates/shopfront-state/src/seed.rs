//! # Sample Catalog
//!
//! The built-in grocery catalog used when no catalog file is configured.
//! Fixed for the session: ids are stable and never reused, and nothing
//! creates, updates, or deletes entries at runtime.

use shopfront_core::{Category, Money, Product};

/// Seed rows: id, name, description, category, price (major, minor),
/// discount percent, image slug.
#[rustfmt::skip]
const SAMPLE_ROWS: &[(u32, &str, &str, Category, (i64, i64), u8, &str)] = &[
    (1,  "Golden Apples",    "Fresh sweet Golden apples",            Category::Fruits,     (2, 49), 10, "apple"),
    (2,  "Carrots",          "Fresh carrots rich in vitamins",       Category::Vegetables, (1, 29), 0,  "carrot"),
    (3,  "Milk 3.2%",        "Fresh whole milk, 1 liter",            Category::Dairy,      (1, 99), 0,  "milk"),
    (4,  "Chicken Breast",   "Fresh boneless chicken breast",        Category::Meat,       (6, 99), 15, "chicken-breast"),
    (5,  "Rye Bread",        "Traditional dark rye loaf",            Category::Bakery,     (2, 19), 0,  "bread"),
    (6,  "Oranges",          "Juicy oranges from Morocco",           Category::Fruits,     (3, 49), 0,  "orange"),
    (7,  "Natural Yogurt",   "Plain yogurt with no additives",       Category::Dairy,      (1, 79), 0,  "yogurt"),
    (8,  "Potatoes",         "Fresh potatoes for boiling or frying", Category::Vegetables, (0, 99), 0,  "potato"),
    (9,  "Orange Juice",     "Natural orange juice, 1 liter",        Category::Beverages,  (2, 99), 0,  "orange-juice"),
    (10, "Oatmeal Cookies",  "Homestyle oatmeal cookies",            Category::Snacks,     (2, 39), 20, "oatmeal-cookie"),
    (11, "Bananas",          "Ripe bananas from Ecuador",            Category::Fruits,     (1, 59), 0,  "banana"),
    (12, "Cherry Tomatoes",  "Fresh cherry tomatoes",                Category::Vegetables, (2, 79), 5,  "tomato"),
    (13, "Gouda Cheese",     "Dutch Gouda cheese, 200g",             Category::Dairy,      (4, 99), 0,  "cheese"),
    (14, "Fresh Fish",       "Fresh fish for pan frying",            Category::Meat,       (8, 99), 12, "fish"),
    (15, "Croissant",        "Freshly baked French croissant",       Category::Bakery,     (1, 49), 0,  "croissant"),
];

/// Builds the sample catalog.
pub fn sample_catalog() -> Vec<Product> {
    SAMPLE_ROWS
        .iter()
        .map(|&(id, name, description, category, (major, minor), discount, image)| {
            Product::new(
                id,
                name,
                description,
                category,
                Money::from_major_minor(major, minor),
                discount,
                image,
            )
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = sample_catalog();
        let ids: HashSet<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_seed_prices_are_positive() {
        for product in sample_catalog() {
            assert!(product.price.is_positive(), "{} has no price", product.name);
        }
    }

    #[test]
    fn test_seed_discounts_within_range() {
        for product in sample_catalog() {
            assert!(product.discount_percent <= 100);
            assert!(product.discounted_price().cents() >= 0);
        }
    }

    #[test]
    fn test_seed_covers_deals() {
        // The deals view needs discounted entries to show.
        assert!(sample_catalog().iter().any(|p| p.has_discount()));
    }
}
