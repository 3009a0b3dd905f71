//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// None of these are fatal to the storefront: callers log them and fall
/// back to an empty or unchanged state.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// Persisted state could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<lumina_cache::CacheError> for CommerceError {
    fn from(e: lumina_cache::CacheError) -> Self {
        match e {
            lumina_cache::CacheError::SerializeError(e) => {
                CommerceError::Serialization(e.to_string())
            }
            other => CommerceError::Storage(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
