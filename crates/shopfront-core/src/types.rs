//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                             │
//! │                                                                 │
//! │  ┌────────────────┐  ┌────────────────┐  ┌──────────────────┐   │
//! │  │    Product     │  │    Category    │  │    SortOption    │   │
//! │  │  ────────────  │  │  ────────────  │  │  ──────────────  │   │
//! │  │  id (u32)      │  │  Fruits        │  │  Name            │   │
//! │  │  name          │  │  Vegetables    │  │  Price           │   │
//! │  │  price (Money) │  │  Dairy ...     │  │  Discount        │   │
//! │  │  discount %    │  └────────────────┘  └──────────────────┘   │
//! │  └────────────────┘                                             │
//! │                      ┌────────────────┐                         │
//! │                      │   ThemeMode    │                         │
//! │                      │  System/Light/ │                         │
//! │                      │  Dark          │                         │
//! │                      └────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::MAX_DISCOUNT_PERCENT;

/// Unique, stable product identifier.
///
/// Ids are assigned once when the catalog is built and never reused.
pub type ProductId = u32;

// =============================================================================
// Category
// =============================================================================

/// A store department. Closed enumeration with a stable serde key
/// (snake_case) and a display label for the filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fruits,
    Vegetables,
    Dairy,
    Meat,
    Bakery,
    Beverages,
    Snacks,
    Frozen,
}

impl Category {
    /// Every department, in chip display order.
    pub const ALL: [Category; 8] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Dairy,
        Category::Meat,
        Category::Bakery,
        Category::Beverages,
        Category::Snacks,
        Category::Frozen,
    ];

    /// Display label shown on filter chips and the detail view.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat & Poultry",
            Category::Bakery => "Bakery",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::Frozen => "Frozen",
        }
    }
}

// =============================================================================
// Sort Option
// =============================================================================

/// Secondary ordering applied after search relevance.
///
/// Only the active option's field participates in ordering; the other
/// two contribute neutral keys (see [`crate::catalog`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Alphabetical by lowercased name.
    #[default]
    Name,
    /// Discounted price, ascending.
    Price,
    /// Discount percent, descending.
    Discount,
}

impl SortOption {
    /// Label for the sort indicator in the catalog header.
    pub const fn label(&self) -> &'static str {
        match self {
            SortOption::Name => "Name",
            SortOption::Price => "Price",
            SortOption::Discount => "Discount",
        }
    }

    /// The next option in the cycle (UI sort toggle).
    pub const fn next(&self) -> SortOption {
        match self {
            SortOption::Name => SortOption::Price,
            SortOption::Price => SortOption::Discount,
            SortOption::Discount => SortOption::Name,
        }
    }
}

// =============================================================================
// Theme Mode
// =============================================================================

/// Color scheme preference. `System` defers to the environment; the
/// presentation layer decides what that resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    pub const fn label(&self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Immutable once constructed; the catalog is a fixed seed list for the
/// session, so there is no update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, stable for the session.
    pub id: ProductId,

    /// Display name shown in lists and on the detail view.
    pub name: String,

    /// Longer description, also searched by the query filter.
    pub description: String,

    /// Department this product belongs to.
    pub category: Category,

    /// Shelf price in cents, before any discount.
    pub price: Money,

    /// Discount in whole percent; 0 = no discount.
    #[serde(default)]
    pub discount_percent: u8,

    /// Whether the product can currently be added to the cart.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    /// Asset slug for the product image. Cosmetic; the core never
    /// interprets it.
    #[serde(default)]
    pub image: String,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Builds a product, clamping the discount to [`MAX_DISCOUNT_PERCENT`].
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        price: Money,
        discount_percent: u8,
        image: impl Into<String>,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            description: description.into(),
            category,
            price,
            discount_percent: discount_percent.min(MAX_DISCOUNT_PERCENT),
            in_stock: true,
            image: image.into(),
        }
    }

    /// The effective price: shelf price reduced by the discount when one
    /// is set, the shelf price otherwise.
    #[inline]
    pub fn discounted_price(&self) -> Money {
        if self.discount_percent > 0 {
            self.price.apply_percent_discount(self.discount_percent)
        } else {
            self.price
        }
    }

    /// Whether this product participates in deal listings.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price_cents: i64, discount: u8) -> Product {
        Product::new(
            1,
            "Golden Apples",
            "Fresh sweet apples",
            Category::Fruits,
            Money::from_cents(price_cents),
            discount,
            "apple",
        )
    }

    #[test]
    fn test_discounted_price_no_discount() {
        let p = product(12000, 0);
        assert_eq!(p.discounted_price(), p.price);
        assert!(!p.has_discount());
    }

    #[test]
    fn test_discounted_price_with_discount() {
        let p = product(12000, 10);
        assert_eq!(p.discounted_price().cents(), 10800);
        assert!(p.discounted_price() < p.price);
        assert!(p.has_discount());
    }

    #[test]
    fn test_discount_clamped_to_max() {
        let p = product(12000, 250);
        assert_eq!(p.discount_percent, MAX_DISCOUNT_PERCENT);
        assert_eq!(p.discounted_price().cents(), 0);
    }

    #[test]
    fn test_sort_option_cycle() {
        assert_eq!(SortOption::Name.next(), SortOption::Price);
        assert_eq!(SortOption::Price.next(), SortOption::Discount);
        assert_eq!(SortOption::Discount.next(), SortOption::Name);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SortOption::default(), SortOption::Name);
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn test_product_wire_shape() {
        // The catalog file format: camelCase keys, price as bare cents,
        // optional discount/stock/image fields.
        let json = r#"{
            "id": 7,
            "name": "Natural Yogurt",
            "description": "Plain yogurt with no additives",
            "category": "dairy",
            "price": 8500
        }"#;

        let p: Product = serde_json::from_str(json).expect("catalog entry parses");
        assert_eq!(p.id, 7);
        assert_eq!(p.category, Category::Dairy);
        assert_eq!(p.price.cents(), 8500);
        assert_eq!(p.discount_percent, 0);
        assert!(p.in_stock);
        assert!(p.image.is_empty());
    }
}
