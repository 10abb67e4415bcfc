//! Comparison request validation
//!
//! Pure checks on the `product_ids` field before any catalog traffic.

use serde_json::Value;

use crate::domain::entities::ProductId;
use crate::error::ValidationError;

/// Validate the `product_ids` value from a comparison request
///
/// Accepts a JSON array of 2-3 strings and returns the ids in order.
/// Duplicates are permitted; a product may be compared against itself.
pub fn validate_product_ids(value: &Value) -> Result<Vec<ProductId>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::InvalidInput)?;

    if items.len() < 2 {
        return Err(ValidationError::TooFew);
    }
    if items.len() > 3 {
        return Err(ValidationError::TooMany);
    }

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(ProductId::from)
                .ok_or(ValidationError::InvalidInput)
        })
        .collect()
}
