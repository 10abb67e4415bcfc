//! Product catalog port trait
//!
//! The catalog service owns authoritative product data; this service only
//! reads from it through this narrow contract.

use async_trait::async_trait;

use crate::domain::entities::{Product, ProductId};
use crate::error::CatalogError;

/// Client for the upstream product catalog service
///
/// Implementations must be safe for concurrent use by multiple in-flight
/// requests.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch a single product by id
    ///
    /// Fails with `CatalogError::ProductNotFound` when the catalog does not
    /// know the id, and with a transport-level variant when the catalog
    /// itself is unreachable or misbehaving.
    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError>;
}
