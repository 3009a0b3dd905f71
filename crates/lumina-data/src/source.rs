//! The catalog data-source seam.

use crate::FetchError;
use async_trait::async_trait;
use lumina_commerce::catalog::Product;

/// Id offset between expanded catalog copies.
pub const EXPANSION_ID_STRIDE: u64 = 1000;

/// Where the storefront gets its catalog from.
///
/// Both calls may fail independently. Callers decide how a failure degrades.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Fetch the category names.
    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError>;

    /// Human-readable name for logs.
    fn name(&self) -> &str {
        "catalog"
    }
}

/// Replicate `products` `factor` times.
///
/// Copy `i` gets ids offset by `i * 1000`; copies after the first get a
/// ` (Var. i)` title suffix. A factor of 0 or 1 returns the input unchanged.
pub fn expand_catalog(products: Vec<Product>, factor: u32) -> Vec<Product> {
    if factor <= 1 || products.is_empty() {
        return products;
    }

    let capacity = usize::try_from(factor)
        .ok()
        .and_then(|f| products.len().checked_mul(f))
        .unwrap_or(products.len());
    let mut expanded = Vec::with_capacity(capacity);
    for i in 0..u64::from(factor) {
        expanded.extend(products.iter().map(|p| {
            let mut copy = p.clone();
            copy.id = p.id.offset(i * EXPANSION_ID_STRIDE);
            if i > 0 {
                copy.title = format!("{} (Var. {})", p.title, i);
            }
            copy
        }));
    }
    expanded
}
