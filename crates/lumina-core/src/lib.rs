//! # Lumina Core
//!
//! The storefront container: one owned value holding the catalog (with its
//! filter/sort/paginate engine), the persistent cart, and the catalog source.
//! A view layer drives it with [`Intent`]s and reads state back through
//! accessors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lumina_core::prelude::*;
//! use std::sync::Arc;
//!
//! let config = StorefrontConfig::default();
//! let source = lumina_core::http_source(&config)?;
//! let mut store = Storefront::with_config(&config, source, MemoryStore::new());
//!
//! store.load_catalog().await;
//! store.dispatch(Intent::SetCategoryFilter(CategoryFilter::named("electronics")));
//! store.dispatch(Intent::SetSortOption(SortOption::PriceAsc));
//!
//! for product in store.listing().displayed_items() {
//!     println!("{} {}", product.title, product.unit_price());
//! }
//! ```
//!
//! ## Loading without blocking the cart
//!
//! `load_catalog` is a convenience over three steps. Holding the
//! [`PendingLoad`] instead of the storefront lets cart intents run while the
//! network round-trip is outstanding:
//!
//! ```rust,ignore
//! let pending = store.begin_load();
//! let fetch = pending.fetch();
//! store.dispatch(Intent::AddToCart(product));
//! store.complete_load(fetch.await);
//! ```

mod config;
mod error;
mod intent;
pub mod prelude;
mod storefront;

pub use config::{
    StorefrontConfig, DEFAULT_API_BASE_URL, DEFAULT_CATALOG_EXPANSION,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_CATALOG_EXPANSION,
};
pub use error::StorefrontError;
pub use intent::Intent;
pub use storefront::{LoadOutcome, PendingLoad, Storefront};

use lumina_data::{CatalogSource, FetchClient, HttpCatalogSource};
use std::sync::Arc;

/// Build the HTTP catalog source described by `config`.
pub fn http_source(config: &StorefrontConfig) -> Result<Arc<dyn CatalogSource>, StorefrontError> {
    config.validate()?;
    let client = FetchClient::new(config.request_timeout())?.with_base_url(&config.api_base_url);
    Ok(Arc::new(HttpCatalogSource::new(
        client,
        config.catalog_expansion,
    )))
}
