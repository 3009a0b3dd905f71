//! Key-value storage capability for Lumina.
//!
//! Cart persistence only ever needs "read/write/remove a named blob", so the
//! storage backend is abstracted behind [`KvStore`]. Two backends ship here:
//!
//! - [`MemoryStore`] - in-process map, used by tests and ephemeral sessions
//! - [`FileStore`] - one file per key inside a directory, used by the CLI
//!
//! [`Cache`] wraps any backend with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use lumina_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Item {
//!     id: u64,
//!     quantity: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("lumina_cart", &vec![Item { id: 1, quantity: 2 }]).unwrap();
//!
//! let items: Option<Vec<Item>> = cache.get("lumina_cart").unwrap();
//! assert_eq!(items, Some(vec![Item { id: 1, quantity: 2 }]));
//!
//! cache.delete("lumina_cart").unwrap();
//! assert!(!cache.exists("lumina_cart").unwrap());
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
