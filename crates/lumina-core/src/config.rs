//! Storefront configuration.

use crate::StorefrontError;
use lumina_commerce::search::{PaginationMode, DEFAULT_ITEMS_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";

/// Default number of catalog copies served by the HTTP source.
pub const DEFAULT_CATALOG_EXPANSION: u32 = 5;

/// Largest accepted catalog expansion factor.
pub const MAX_CATALOG_EXPANSION: u32 = 100;

/// Default request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration for a [`Storefront`](crate::Storefront).
///
/// Every field has a default, so an empty config file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Base URL of the FakeStore-compatible catalog API.
    pub api_base_url: String,
    /// How many times the fetched catalog is replicated.
    pub catalog_expansion: u32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Initial page size.
    pub items_per_page: usize,
    /// Initial pagination mode.
    pub default_mode: PaginationMode,
    /// Directory the cart is persisted in. `None` means the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_dir: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            catalog_expansion: DEFAULT_CATALOG_EXPANSION,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            default_mode: PaginationMode::Paged,
            cart_dir: None,
        }
    }
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the catalog expansion factor.
    pub fn with_catalog_expansion(mut self, factor: u32) -> Self {
        self.catalog_expansion = factor;
        self
    }

    /// Set the initial page size.
    pub fn with_items_per_page(mut self, per_page: usize) -> Self {
        self.items_per_page = per_page;
        self
    }

    /// Set the initial pagination mode.
    pub fn with_mode(mut self, mode: PaginationMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Set the cart directory.
    pub fn with_cart_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cart_dir = Some(dir.into());
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check field ranges.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(StorefrontError::ConfigError(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if self.catalog_expansion > MAX_CATALOG_EXPANSION {
            return Err(StorefrontError::ConfigError(format!(
                "catalog_expansion must be at most {}, got {}",
                MAX_CATALOG_EXPANSION, self.catalog_expansion
            )));
        }
        if self.items_per_page == 0 {
            return Err(StorefrontError::ConfigError(
                "items_per_page must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(StorefrontError::ConfigError(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StorefrontConfig::default();

        assert_eq!(config.api_base_url, "https://fakestoreapi.com");
        assert_eq!(config.catalog_expansion, 5);
        assert_eq!(config.items_per_page, 12);
        assert_eq!(config.default_mode, PaginationMode::Paged);
        assert!(config.cart_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder_chain() {
        let config = StorefrontConfig::new()
            .with_api_base_url("http://localhost:3000")
            .with_catalog_expansion(1)
            .with_items_per_page(24)
            .with_mode(PaginationMode::Infinite)
            .with_cart_dir("/tmp/lumina");

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.catalog_expansion, 1);
        assert_eq!(config.items_per_page, 24);
        assert_eq!(config.default_mode, PaginationMode::Infinite);
        assert_eq!(config.cart_dir, Some(PathBuf::from("/tmp/lumina")));
    }

    #[test]
    fn test_config_partial_toml() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            items_per_page = 6
            default_mode = "infinite"
            "#,
        )
        .unwrap();

        assert_eq!(config.items_per_page, 6);
        assert_eq!(config.default_mode, PaginationMode::Infinite);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_config_empty_json() {
        let config: StorefrontConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_config_validate_rejects_bad_values() {
        assert!(StorefrontConfig::new().with_items_per_page(0).validate().is_err());
        assert!(StorefrontConfig::new()
            .with_api_base_url("ftp://example.com")
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_validate_bounds_catalog_expansion() {
        let at_limit = StorefrontConfig::new().with_catalog_expansion(MAX_CATALOG_EXPANSION);
        assert!(at_limit.validate().is_ok());

        let config: StorefrontConfig = toml::from_str("catalog_expansion = 4000000000").unwrap();
        assert!(matches!(
            config.validate(),
            Err(StorefrontError::ConfigError(msg)) if msg.contains("catalog_expansion")
        ));
    }
}
