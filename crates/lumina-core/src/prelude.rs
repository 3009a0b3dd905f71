//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use lumina_core::prelude::*;
//! ```

pub use crate::{Intent, LoadOutcome, PendingLoad, Storefront, StorefrontConfig, StorefrontError};

pub use lumina_cache::{FileStore, KvStore, MemoryStore};
pub use lumina_commerce::prelude::*;
pub use lumina_data::{CatalogSource, FetchClient, HttpCatalogSource, StaticCatalogSource};
