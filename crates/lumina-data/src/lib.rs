//! Catalog data sources for Lumina.
//!
//! The storefront core only sees the [`CatalogSource`] trait. Two
//! implementations ship here:
//!
//! - [`HttpCatalogSource`] reads a FakeStore-compatible REST API through
//!   [`FetchClient`], optionally expanding the catalog into numbered variants
//! - [`StaticCatalogSource`] serves a fixed in-memory catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use lumina_data::{CatalogSource, FetchClient, HttpCatalogSource};
//! use std::time::Duration;
//!
//! let client = FetchClient::new(Duration::from_secs(10))?
//!     .with_base_url("https://fakestoreapi.com");
//! let source = HttpCatalogSource::new(client, 5);
//!
//! let products = source.fetch_products().await?;
//! ```

mod client;
mod error;
mod fixture;
mod http;
mod response;
mod source;

pub use client::{ClientRequestBuilder, FetchClient};
pub use error::FetchError;
pub use fixture::StaticCatalogSource;
pub use http::HttpCatalogSource;
pub use response::Response;
pub use source::{expand_catalog, CatalogSource, EXPANSION_ID_STRIDE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogSource, FetchClient, FetchError, HttpCatalogSource, StaticCatalogSource};
}
