//! Comparison result entity

use serde::Serialize;

use super::product::Product;

/// The outcome of comparing 2-3 products
///
/// `products` preserves the order of the requested ids; `summary` is empty
/// only when `products` is empty.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub products: Vec<Product>,
    pub summary: String,
}
