//! Product catalog module.
//!
//! Contains the product types and the store that tracks catalog loading.

mod product;
mod store;

pub use product::{Product, Rating};
pub use store::{CatalogAction, CatalogSnapshot, CatalogStore, LoadStatus};
