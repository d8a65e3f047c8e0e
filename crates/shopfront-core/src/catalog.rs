//! # Catalog Pipeline
//!
//! The filter/rank/sort pipeline as a pure function, plus the small pure
//! lookups the presentation layer needs (deal listings, id lookup).
//!
//! ## Pipeline Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  recompute(products, category, query, sort)                     │
//! │                                                                 │
//! │  1. normalize query (trim + lowercase)                          │
//! │  2. filter       category chip AND name/description substring   │
//! │  3. rank         relevance tier, then first-match position      │
//! │  4. order        active sort key; inactive keys stay neutral    │
//! │                                                                 │
//! │  Deterministic and idempotent: unchanged inputs produce a list  │
//! │  equal in both membership and order. Ties keep insertion order  │
//! │  (stable sort).                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Relevance Tiers
//! With a non-empty query, matches are bucketed before the secondary
//! sort: tier 0 = name starts with the query, tier 1 = query elsewhere
//! in the name, tier 2 = matched only via the description. Ties inside a
//! tier break on the position of the first match in the name; products
//! without a name match sort last within their tier.

use crate::money::Money;
use crate::types::{Category, Product, ProductId, SortOption};

// =============================================================================
// Query Normalization
// =============================================================================

/// Normalizes a raw search query: trims surrounding whitespace and
/// lowercases (Unicode-aware).
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// =============================================================================
// Relevance Ranking
// =============================================================================

/// Match-quality bucket plus the tie-break position of the first query
/// match in the lowercased name.
///
/// The empty query collapses to `(0, usize::MAX)` for every product, so
/// ordering reduces purely to the active sort option.
fn relevance(name_lower: &str, query: &str) -> (u8, usize) {
    if query.is_empty() {
        return (0, usize::MAX);
    }
    match name_lower.find(query) {
        Some(0) => (0, 0),
        Some(pos) => (1, pos),
        None => (2, usize::MAX),
    }
}

// =============================================================================
// The Pipeline
// =============================================================================

/// Recomputes the filtered, ranked product list.
///
/// ## Arguments
/// * `products` - the full catalog
/// * `category` - `None` means "all departments"
/// * `query`    - raw search text; normalized here
/// * `sort`     - secondary ordering applied after relevance
///
/// ## Ordering
/// The comparison key is `(tier, match position, name key, price key,
/// discount key)`. Only the field matching the active sort option
/// participates; the other two contribute neutral values so they never
/// perturb the ordering. The sort is stable, so full ties keep catalog
/// insertion order.
pub fn recompute(
    products: &[Product],
    category: Option<Category>,
    query: &str,
    sort: SortOption,
) -> Vec<Product> {
    let q = normalize_query(query);

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| {
            let matches_category = category.is_none_or(|c| p.category == c);
            if !matches_category {
                return false;
            }
            if q.is_empty() {
                return true;
            }
            p.name.to_lowercase().contains(&q) || p.description.to_lowercase().contains(&q)
        })
        .cloned()
        .collect();

    filtered.sort_by_cached_key(|p| {
        let name_lower = p.name.to_lowercase();
        let (tier, match_pos) = relevance(&name_lower, &q);

        let name_key = match sort {
            SortOption::Name => name_lower,
            _ => String::new(),
        };
        let price_key = match sort {
            SortOption::Price => p.discounted_price(),
            _ => Money::zero(),
        };
        // Negated so a plain ascending comparison yields discount-descending.
        let discount_key = match sort {
            SortOption::Discount => -(p.discount_percent as i16),
            _ => 0,
        };

        (tier, match_pos, name_key, price_key, discount_key)
    });

    filtered
}

// =============================================================================
// Pure Lookups
// =============================================================================

/// Products carrying a discount, ordered by discount percent descending
/// (deal listings view). Stable on insertion order for equal discounts.
pub fn deals(products: &[Product]) -> Vec<Product> {
    let mut discounted: Vec<Product> = products.iter().filter(|p| p.has_discount()).cloned().collect();
    discounted.sort_by(|a, b| b.discount_percent.cmp(&a.discount_percent));
    discounted
}

/// Resolves a product id against the full catalog. Used by detail-view
/// navigation; carries no side effects.
pub fn find_product(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(
        id: ProductId,
        name: &str,
        description: &str,
        category: Category,
        price_cents: i64,
        discount: u8,
    ) -> Product {
        Product::new(
            id,
            name,
            description,
            category,
            Money::from_cents(price_cents),
            discount,
            "img",
        )
    }

    /// The two-product fixture from the state holder's contract.
    fn apple_and_carrot() -> Vec<Product> {
        vec![
            product(1, "Apple", "Fresh sweet apples", Category::Fruits, 10000, 10),
            product(2, "Carrot", "Fresh crunchy carrots", Category::Vegetables, 8000, 0),
        ]
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Milk "), "milk");
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_query_matches_name_prefix() {
        let result = recompute(&apple_and_carrot(), None, "app", SortOption::Name);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_empty_query_price_sort_is_full_catalog_ascending() {
        let products = vec![
            product(1, "A", "", Category::Snacks, 300, 0),
            product(2, "B", "", Category::Snacks, 100, 0),
            product(3, "C", "", Category::Snacks, 200, 50), // discounted to 100
        ];
        let result = recompute(&products, None, "", SortOption::Price);
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        // 2 and 3 tie at 100 discounted cents; insertion order breaks the tie.
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_category_filter() {
        let result = recompute(
            &apple_and_carrot(),
            Some(Category::Vegetables),
            "",
            SortOption::Name,
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_category_and_query_combine() {
        let result = recompute(
            &apple_and_carrot(),
            Some(Category::Vegetables),
            "apple",
            SortOption::Name,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_relevance_tiers() {
        let products = vec![
            product(1, "Oat Cookies", "with milk chocolate", Category::Snacks, 100, 0),
            product(2, "Milk 3.2%", "fresh whole milk", Category::Dairy, 100, 0),
            product(3, "Oat Milk", "plant-based drink", Category::Beverages, 100, 0),
        ];
        let result = recompute(&products, None, "milk", SortOption::Name);
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        // tier 0: name starts with "milk"; tier 1: "milk" later in name;
        // tier 2: description-only match.
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_tier_tie_broken_by_match_position() {
        let products = vec![
            product(1, "Wild Rice Tea", "", Category::Beverages, 100, 0),
            product(2, "Iced Tea", "", Category::Beverages, 100, 0),
        ];
        let result = recompute(&products, None, "tea", SortOption::Name);
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        // "iced tea" matches at position 5, "wild rice tea" at 10.
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_description_only_matches_sort_last() {
        let products = vec![
            product(1, "Breakfast Blend", "ground coffee beans", Category::Beverages, 100, 0),
            product(2, "Coffee Classic", "", Category::Beverages, 100, 0),
        ];
        let result = recompute(&products, None, "coffee", SortOption::Name);
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let products = vec![
            product(1, "banana", "", Category::Fruits, 100, 0),
            product(2, "Apple", "", Category::Fruits, 100, 0),
        ];
        let result = recompute(&products, None, "", SortOption::Name);
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_sort_by_discount_descending() {
        let products = vec![
            product(1, "A", "", Category::Snacks, 100, 5),
            product(2, "B", "", Category::Snacks, 100, 20),
            product(3, "C", "", Category::Snacks, 100, 0),
        ];
        let result = recompute(&products, None, "", SortOption::Discount);
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_inactive_sort_fields_stay_neutral() {
        // Same name prefix ordering regardless of wildly different prices:
        // under Name sort the price key must not participate.
        let products = vec![
            product(1, "Aa", "", Category::Snacks, 90000, 0),
            product(2, "Ab", "", Category::Snacks, 100, 0),
        ];
        let result = recompute(&products, None, "", SortOption::Name);
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let products = vec![
            product(1, "Milk 3.2%", "fresh whole milk", Category::Dairy, 6500, 0),
            product(2, "Oat Milk", "plant-based drink", Category::Beverages, 9000, 15),
            product(3, "Cheddar", "aged milk cheese", Category::Dairy, 28000, 0),
        ];
        let first = recompute(&products, None, " Milk ", SortOption::Price);
        let second = recompute(&products, None, " Milk ", SortOption::Price);
        assert_eq!(first, second);
    }

    #[test]
    fn test_deals_sorted_by_discount_descending() {
        let products = vec![
            product(1, "A", "", Category::Snacks, 100, 10),
            product(2, "B", "", Category::Snacks, 100, 0),
            product(3, "C", "", Category::Snacks, 100, 25),
        ];
        let result = deals(&products);
        let ids: Vec<ProductId> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_find_product() {
        let products = apple_and_carrot();
        assert_eq!(find_product(&products, 2).map(|p| p.id), Some(2));
        assert!(find_product(&products, 99).is_none());
    }
}
