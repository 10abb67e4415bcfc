//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod catalog;

pub use catalog::HttpCatalogClient;
