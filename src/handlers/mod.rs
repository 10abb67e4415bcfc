//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod compare;

pub use compare::compare_products;
