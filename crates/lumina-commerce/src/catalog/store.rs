//! Catalog store: load status, categories, and the product listing.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::search::{ListingAction, ProductListing};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of the catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// No load has been requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load populated the catalog.
    Succeeded,
    /// The last load failed; see [`CatalogStore::error`].
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Succeeded => "succeeded",
            LoadStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful fetch from the data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
        }
    }
}

/// Actions accepted by [`CatalogStore::reduce`].
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// A load was started.
    LoadStarted,
    /// A load resolved with data.
    LoadSucceeded(CatalogSnapshot),
    /// A load resolved with an error message.
    LoadFailed(String),
    /// A filter, sort, or pagination intent for the listing.
    Listing(ListingAction),
}

/// Owns the raw catalog and everything derived from it.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    status: LoadStatus,
    error: Option<String>,
    categories: Vec<String>,
    listing: ProductListing,
}

impl CatalogStore {
    /// Create an empty store in the `idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose listing uses `listing`'s filters and pagination.
    pub fn with_listing(listing: ProductListing) -> Self {
        Self {
            listing,
            ..Self::default()
        }
    }

    /// Apply an action, returning the next state.
    pub fn reduce(mut self, action: CatalogAction) -> Self {
        match action {
            CatalogAction::LoadStarted => {
                tracing::debug!(previous = %self.status, "catalog load started");
                self.status = LoadStatus::Loading;
            }
            CatalogAction::LoadSucceeded(snapshot) => {
                tracing::debug!(
                    products = snapshot.products.len(),
                    categories = snapshot.categories.len(),
                    "catalog load succeeded"
                );
                self.status = LoadStatus::Succeeded;
                self.error = None;
                self.categories = snapshot.categories;
                self.listing = self
                    .listing
                    .reduce(ListingAction::ReplaceItems(snapshot.products));
            }
            CatalogAction::LoadFailed(message) => {
                tracing::warn!(error = %message, "catalog load failed");
                self.status = LoadStatus::Failed;
                self.error = Some(message);
            }
            CatalogAction::Listing(action) => {
                self.listing = self.listing.reduce(action);
            }
        }
        self
    }

    /// Apply an action in place.
    pub fn dispatch(&mut self, action: CatalogAction) {
        let current = std::mem::take(self);
        *self = current.reduce(action);
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Error message retained from the last failed load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Category names reported by the data source.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The filter/sort/paginate state.
    pub fn listing(&self) -> &ProductListing {
        &self.listing
    }

    /// Raw catalog, in source order.
    pub fn products(&self) -> &[Product] {
        self.listing.items()
    }

    /// Look up a product in the raw catalog.
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::CategoryFilter;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new(
            vec![
                Product::new(1u64, "Backpack", 109.95, "men's clothing"),
                Product::new(2u64, "Monitor", 199.0, "electronics"),
            ],
            vec!["electronics".to_string(), "men's clothing".to_string()],
        )
    }

    #[test]
    fn test_initial_state_is_idle() {
        let store = CatalogStore::new();
        assert_eq!(store.status(), LoadStatus::Idle);
        assert!(store.products().is_empty());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_load_success_populates_and_derives() {
        let store = CatalogStore::new()
            .reduce(CatalogAction::LoadStarted)
            .reduce(CatalogAction::LoadSucceeded(snapshot()));

        assert_eq!(store.status(), LoadStatus::Succeeded);
        assert_eq!(store.products().len(), 2);
        assert_eq!(store.categories().len(), 2);
        // Price filter defaults to [0, 1000], so both are visible.
        assert_eq!(store.listing().total_items(), 2);
        assert_eq!(store.listing().displayed_items().len(), 2);
    }

    #[test]
    fn test_load_failure_keeps_items() {
        let store = CatalogStore::new()
            .reduce(CatalogAction::LoadSucceeded(snapshot()))
            .reduce(CatalogAction::LoadStarted)
            .reduce(CatalogAction::LoadFailed("Failed to fetch products".to_string()));

        assert_eq!(store.status(), LoadStatus::Failed);
        assert_eq!(store.error(), Some("Failed to fetch products"));
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let store = CatalogStore::new()
            .reduce(CatalogAction::LoadFailed("boom".to_string()))
            .reduce(CatalogAction::LoadSucceeded(snapshot()));
        assert!(store.error().is_none());
    }

    #[test]
    fn test_listing_actions_pass_through() {
        let mut store = CatalogStore::new().reduce(CatalogAction::LoadSucceeded(snapshot()));
        store.dispatch(CatalogAction::Listing(ListingAction::SetCategory(
            CategoryFilter::named("electronics"),
        )));

        assert_eq!(store.listing().total_items(), 1);
        assert_eq!(store.listing().displayed_items()[0].title, "Monitor");
    }

    #[test]
    fn test_find_product() {
        let store = CatalogStore::new().reduce(CatalogAction::LoadSucceeded(snapshot()));
        assert_eq!(
            store.find_product(ProductId::new(2)).map(|p| p.title.as_str()),
            Some("Monitor")
        );
        assert!(store.find_product(ProductId::new(99)).is_none());
    }
}
