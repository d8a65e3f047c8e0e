//! # Catalog File Loading
//!
//! The catalog is fixed for the session. By default it is the built-in
//! seed; `SHOPFRONT_CATALOG` points at a JSON file with the same shape
//! instead (an array of products, camelCase keys, prices in cents).
//!
//! A broken file is not fatal: the app warns and falls back to the seed
//! so the storefront always starts.

use std::path::Path;

use tracing::{info, warn};

use shopfront_core::Product;
use shopfront_state::seed;

use crate::config::ShopConfig;
use crate::error::AppError;

/// Parses catalog JSON: an array of products.
pub fn parse(json: &str) -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Loads a catalog file from disk.
pub fn load(path: &Path) -> Result<Vec<Product>, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json).map_err(|source| AppError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves the session catalog: the configured file when present and
/// valid, the built-in seed otherwise.
pub fn load_or_seed(config: &ShopConfig) -> Vec<Product> {
    match &config.catalog_path {
        Some(path) => match load(path) {
            Ok(products) => {
                info!(path = %path.display(), count = products.len(), "catalog loaded");
                products
            }
            Err(err) => {
                warn!(%err, "catalog file unusable, falling back to seed");
                seed::sample_catalog()
            }
        },
        None => seed::sample_catalog(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Category;

    #[test]
    fn test_parse_catalog_json() {
        let json = r#"[
            {
                "id": 1,
                "name": "Golden Apples",
                "description": "Fresh sweet Golden apples",
                "category": "fruits",
                "price": 249,
                "discountPercent": 10,
                "image": "apple"
            },
            {
                "id": 2,
                "name": "Carrots",
                "description": "Fresh carrots rich in vitamins",
                "category": "vegetables",
                "price": 129
            }
        ]"#;

        let products = parse(json).expect("catalog parses");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].discount_percent, 10);
        assert_eq!(products[1].category, Category::Vegetables);
        assert!(products[1].in_stock);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse("{not json").is_err());
        assert!(parse(r#"[{"id": 1}]"#).is_err()); // missing required fields
    }

    #[test]
    fn test_missing_file_surfaces_read_error() {
        let err = load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AppError::CatalogRead { .. }));
    }
}
