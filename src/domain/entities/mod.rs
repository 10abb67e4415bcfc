//! Domain entities

pub mod comparison;
pub mod product;

pub use comparison::ComparisonResult;
pub use product::{Money, Product, ProductId};
