//! Comparison service
//!
//! Orchestrates per-id catalog lookups and selects the cheapest product.
//! A comparison is all-or-nothing: any failed lookup aborts the whole
//! request rather than returning a partial product list.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::app::money::format_money;
use crate::domain::entities::{ComparisonResult, Product, ProductId};
use crate::domain::ports::ProductCatalog;
use crate::error::AppError;

/// Service comparing 2-3 products fetched from the catalog
pub struct ComparisonService<C>
where
    C: ProductCatalog,
{
    catalog: Arc<C>,
}

impl<C> ComparisonService<C>
where
    C: ProductCatalog + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Compare the given products
    ///
    /// Lookups fan out concurrently; the first failure aborts the remaining
    /// lookups and surfaces that id's error. On success the products come
    /// back in request order, never sorted by price, together with a summary
    /// naming the cheapest option.
    pub async fn compare(&self, ids: Vec<ProductId>) -> Result<ComparisonResult, AppError> {
        let mut lookups = JoinSet::new();
        for (index, id) in ids.iter().cloned().enumerate() {
            let catalog = Arc::clone(&self.catalog);
            lookups.spawn(async move { (index, catalog.get_product(&id).await) });
        }

        // Full barrier: cheapest selection runs only once every lookup landed.
        let mut slots: Vec<Option<Product>> = vec![None; ids.len()];
        while let Some(joined) = lookups.join_next().await {
            let (index, result) = joined.map_err(|e| AppError::Internal(e.to_string()))?;
            match result {
                Ok(product) => slots[index] = Some(product),
                Err(e) => {
                    lookups.abort_all();
                    return Err(e.into());
                }
            }
        }

        let products: Vec<Product> = slots.into_iter().flatten().collect();
        let summary = build_summary(&products);

        Ok(ComparisonResult { products, summary })
    }
}

/// Build the human-readable comparison summary
///
/// Empty input yields an empty summary, not an error.
pub fn build_summary(products: &[Product]) -> String {
    match cheapest(products) {
        Some(product) => format!(
            "{} is the cheapest option at {}",
            product.name,
            format_money(&product.price)
        ),
        None => String::new(),
    }
}

/// Stable minimum by total price in nanos; ties go to the earliest product
fn cheapest(products: &[Product]) -> Option<&Product> {
    let mut cheapest: Option<&Product> = None;
    for product in products {
        let beats = match cheapest {
            Some(current) => product.price.total_nanos() < current.price.total_nanos(),
            None => true,
        };
        if beats {
            cheapest = Some(product);
        }
    }
    cheapest
}
