//! Comparison handler
//!
//! Boundary glue: parses the inbound request, delegates to the validator and
//! the comparison service, and maps domain outcomes to response payloads.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::app::validate_product_ids;
use crate::domain::entities::Product;
use crate::domain::ports::ProductCatalog;
use crate::error::AppError;
use crate::AppState;

/// Response for a successful comparison
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub products: Vec<Product>,
    pub summary: String,
}

/// POST /compare
///
/// Compare 2-3 products.
/// Request body: `{ "product_ids": ["id1", "id2", "id3"] }`
pub async fn compare_products<C>(
    State(state): State<AppState<C>>,
    Json(body): Json<Value>,
) -> Result<Json<CompareResponse>, AppError>
where
    C: ProductCatalog + 'static,
{
    let ids_value = body
        .get("product_ids")
        .ok_or_else(|| AppError::BadRequest("product_ids required".to_string()))?;

    let ids = validate_product_ids(ids_value)?;

    tracing::info!("[CompareProducts] comparing products: {:?}", ids);

    let result = state.comparison_service.compare(ids).await?;

    tracing::info!(
        "[CompareProducts] returning {} products",
        result.products.len()
    );

    Ok(Json(CompareResponse {
        products: result.products,
        summary: result.summary,
    }))
}
