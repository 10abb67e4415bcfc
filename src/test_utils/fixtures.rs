//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Money, Product, ProductId};

/// Create a test product with the given id, name, and price
pub fn test_product(id: &str, name: &str, units: i64, nanos: i32) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        description: format!("Description of {}", name),
        picture: format!("/static/img/products/{}.jpg", id),
        price: Money {
            currency_code: "USD".to_string(),
            units,
            nanos,
        },
        categories: vec!["accessories".to_string()],
    }
}

/// Create a test product priced in whole dollars
pub fn test_product_priced(id: &str, units: i64) -> Product {
    test_product(id, id, units, 0)
}
