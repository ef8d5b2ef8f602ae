//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, etc.).
//!
//! # Structure
//!
//! - `product` - Product types (`Product`, `NewProduct`, `ProductUpdate`)
//! - `filter` - Pure list filtering (`ProductFilter`, `filter_products`)
//! - `validation` - The `ValidationError` taxonomy

mod filter;
mod product;
mod validation;

// Re-export domain types at the domain level for convenience
pub use filter::{ProductFilter, filter_products};
pub use product::{NewProduct, Product, ProductUpdate};
pub use validation::ValidationError;
