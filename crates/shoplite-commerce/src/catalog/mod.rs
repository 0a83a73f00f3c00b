//! Product catalog module.
//!
//! Immutable reference data for the storefront listing and product pages.

mod product;

pub use product::{demo_catalog, Catalog, Product, ProductId};
