//! Test utilities
//!
//! Mock port implementations and fixture factories shared across tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::{test_product, test_product_priced};
pub use mocks::InMemoryCatalog;
