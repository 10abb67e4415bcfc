//! Product catalog adapter

pub mod client;

pub use client::HttpCatalogClient;
