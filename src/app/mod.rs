//! Application layer
//!
//! Services orchestrating domain logic over the port traits, plus the pure
//! validation and formatting functions they build on.

pub mod comparison_service;
pub mod money;
pub mod validation;

pub use comparison_service::ComparisonService;
pub use money::format_money;
pub use validation::validate_product_ids;
