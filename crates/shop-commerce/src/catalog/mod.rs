//! Product catalog module.
//!
//! Contains the product record and the static catalog provider.

mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::Product;
