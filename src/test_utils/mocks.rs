//! Mock implementations of port traits
//!
//! In-memory catalog that can be pre-populated with products or configured
//! to fail, standing in for the real catalog service in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductCatalog;
use crate::error::CatalogError;

/// In-memory product catalog
#[derive(Default)]
pub struct InMemoryCatalog {
    products: Arc<RwLock<HashMap<String, Product>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog that reports an upstream failure for every lookup
    pub fn failing() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(true)),
        }
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        {
            let mut products = self.products.write().unwrap();
            products.insert(product.id.to_string(), product);
        }
        self
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        if *self.should_fail.read().unwrap() {
            return Err(CatalogError::Api {
                status: 503,
                message: "Mock failure".to_string(),
            });
        }

        let products = self.products.read().unwrap();
        products
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }
}
