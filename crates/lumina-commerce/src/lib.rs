//! Storefront domain types and state containers for Lumina.
//!
//! - **Catalog**: products, ratings, and the load-status store
//! - **Search**: the filter/sort/paginate engine that derives what the view shows
//! - **Cart**: quantity-aggregated line items, pricing, and persistence
//!
//! Every container is driven by a pure reducer (`state, action -> state`);
//! derived sets are recomputed from scratch on every change.
//!
//! # Example
//!
//! ```rust,ignore
//! use lumina_commerce::prelude::*;
//!
//! let listing = ProductListing::new()
//!     .reduce(ListingAction::ReplaceItems(products))
//!     .reduce(ListingAction::SetCategory(CategoryFilter::named("electronics")))
//!     .reduce(ListingAction::SetSort(SortOption::PriceAsc));
//!
//! for product in listing.displayed_items() {
//!     println!("{} {}", product.title, product.unit_price());
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogAction, CatalogSnapshot, CatalogStore, LoadStatus, Product, Rating,
    };

    // Search
    pub use crate::search::{
        CategoryFilter, FilterState, FilterUpdate, ListingAction, Pagination, PaginationMode,
        PaginationState, ProductListing, SortOption,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartAction, CartLineItem, CartPricing, CartStore, LineItemPricing, CART_STORAGE_KEY,
        TAX_RATE_PERCENT,
    };
}
