//! Unified error types for the compare API
//!
//! This module defines error types for each layer:
//! - `ValidationError`: Request validation errors (pure business rules)
//! - `CatalogError`: Product catalog client errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Validation errors for the comparison request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product_ids must be a list")]
    InvalidInput,

    #[error("At least 2 products required for comparison")]
    TooFew,

    #[error("Maximum 3 products allowed for comparison")]
    TooMany,
}

/// Product catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(e.to_string()),
            ),
            AppError::Catalog(CatalogError::ProductNotFound(id)) => (
                StatusCode::NOT_FOUND,
                "Not found",
                Some(format!("Product not found: {}", id)),
            ),
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (StatusCode::BAD_GATEWAY, "Catalog service error", None)
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
