//! Error types for the storefront container.

use lumina_commerce::CommerceError;
use lumina_data::FetchError;
use thiserror::Error;

/// Errors that can occur while building or querying a storefront.
///
/// Intent dispatch itself never fails; these come from setup and lookups.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Data source could not be constructed or reached.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Domain error (unknown product, pricing overflow, storage).
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
