//! The storefront container.

use crate::intent::{Intent, Route};
use crate::StorefrontConfig;
use lumina_cache::KvStore;
use lumina_commerce::cart::{Cart, CartPricing, CartStore};
use lumina_commerce::catalog::{CatalogAction, CatalogSnapshot, CatalogStore, LoadStatus, Product};
use lumina_commerce::search::ProductListing;
use lumina_commerce::{CommerceError, ProductId};
use lumina_data::{CatalogSource, FetchError};
use std::sync::Arc;

/// Message recorded when a load fails without a usable error description.
const FALLBACK_LOAD_ERROR: &str = "Something went wrong";

/// Owns the catalog, the cart, and the data source.
///
/// Created once by the application entry point and driven by [`Intent`]s.
/// Every synchronous intent has fully re-derived state by the time
/// [`dispatch`](Self::dispatch) returns.
pub struct Storefront<S: KvStore> {
    catalog: CatalogStore,
    cart: CartStore<S>,
    source: Arc<dyn CatalogSource>,
}

impl<S: KvStore> Storefront<S> {
    /// Create a storefront with default filters and pagination.
    ///
    /// The cart is restored from `store`; an unreadable cart starts empty.
    pub fn new(source: Arc<dyn CatalogSource>, store: S) -> Self {
        Self {
            catalog: CatalogStore::new(),
            cart: CartStore::open(store),
            source,
        }
    }

    /// Create a storefront using the page size and mode from `config`.
    pub fn with_config(config: &StorefrontConfig, source: Arc<dyn CatalogSource>, store: S) -> Self {
        let listing = ProductListing::new()
            .with_items_per_page(config.items_per_page)
            .with_mode(config.default_mode);
        Self {
            catalog: CatalogStore::with_listing(listing),
            cart: CartStore::open(store),
            source,
        }
    }

    /// Apply an intent.
    ///
    /// Returns a [`PendingLoad`] for [`Intent::LoadCatalog`], which the caller
    /// drives with [`PendingLoad::fetch`] and hands back to
    /// [`complete_load`](Self::complete_load). All other intents return `None`.
    pub fn dispatch(&mut self, intent: Intent) -> Option<PendingLoad> {
        match Route::from(intent) {
            Route::Listing(action) => {
                self.catalog.dispatch(CatalogAction::Listing(action));
                None
            }
            Route::Cart(action) => {
                self.cart.dispatch(action);
                None
            }
            Route::Load => Some(self.begin_load()),
        }
    }

    /// Mark the catalog as loading and hand out the fetch.
    ///
    /// Issuing a second load before the first completes is not guarded
    /// against; whichever completes last wins.
    pub fn begin_load(&mut self) -> PendingLoad {
        if self.catalog.is_loading() {
            tracing::warn!("catalog load started while another is in flight");
        }
        self.catalog.dispatch(CatalogAction::LoadStarted);
        PendingLoad {
            source: Arc::clone(&self.source),
        }
    }

    /// Record the outcome of a fetch.
    ///
    /// A products failure fails the load and leaves the current items in
    /// place. A categories failure alone degrades to an empty category list.
    pub fn complete_load(&mut self, outcome: LoadOutcome) {
        let action = match outcome.products {
            Ok(products) => {
                let categories = outcome.categories.unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "category fetch failed; continuing without categories");
                    Vec::new()
                });
                CatalogAction::LoadSucceeded(CatalogSnapshot::new(products, categories))
            }
            Err(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    CatalogAction::LoadFailed(FALLBACK_LOAD_ERROR.to_string())
                } else {
                    CatalogAction::LoadFailed(message)
                }
            }
        };
        self.catalog.dispatch(action);
    }

    /// Run a whole load: begin, fetch, complete.
    pub async fn load_catalog(&mut self) -> LoadStatus {
        let pending = self.begin_load();
        let outcome = pending.fetch().await;
        self.complete_load(outcome);
        self.catalog.status()
    }

    /// Add `quantity` units of the catalog product `id` to the cart.
    pub fn add_to_cart_by_id(&mut self, id: ProductId, quantity: u32) -> Result<(), CommerceError> {
        let product = self
            .catalog
            .find_product(id)
            .cloned()
            .ok_or(CommerceError::ProductNotFound(id.get()))?;
        self.dispatch(Intent::AddQuantityToCart { product, quantity });
        Ok(())
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The filter/sort/paginate state.
    pub fn listing(&self) -> &ProductListing {
        self.catalog.listing()
    }

    pub fn status(&self) -> LoadStatus {
        self.catalog.status()
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.find_product(id)
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn cart_store(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Sum of quantities in the cart.
    pub fn cart_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Subtotal, tax, and total for the current cart.
    pub fn cart_pricing(&self) -> Result<CartPricing, CommerceError> {
        self.cart.pricing()
    }

    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        &self.source
    }
}

/// An in-flight catalog load.
///
/// Holds no borrow of the storefront, so cart and listing intents can be
/// dispatched while [`fetch`](Self::fetch) is awaited.
#[must_use = "a pending load does nothing until fetched and completed"]
pub struct PendingLoad {
    source: Arc<dyn CatalogSource>,
}

impl PendingLoad {
    /// Fetch products and categories concurrently.
    pub async fn fetch(self) -> LoadOutcome {
        tracing::debug!(source = self.source.name(), "fetching catalog");
        let (products, categories) = futures::join!(
            self.source.fetch_products(),
            self.source.fetch_categories()
        );
        LoadOutcome {
            products,
            categories,
        }
    }
}

/// Raw results of a fetch, before degradation rules are applied.
#[derive(Debug)]
pub struct LoadOutcome {
    pub products: Result<Vec<Product>, FetchError>,
    pub categories: Result<Vec<String>, FetchError>,
}
