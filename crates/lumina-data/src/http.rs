//! FakeStore-compatible HTTP catalog source.

use crate::{expand_catalog, CatalogSource, FetchClient, FetchError};
use async_trait::async_trait;
use lumina_commerce::catalog::Product;

const PRODUCTS_PATH: &str = "/products";
const CATEGORIES_PATH: &str = "/products/categories";

/// Reads the catalog from a FakeStore-style REST API.
pub struct HttpCatalogSource {
    client: FetchClient,
    expansion: u32,
}

impl HttpCatalogSource {
    /// Create a source over `client`, expanding the catalog `expansion` times.
    pub fn new(client: FetchClient, expansion: u32) -> Self {
        Self { client, expansion }
    }

    pub fn client(&self) -> &FetchClient {
        &self.client
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let products: Vec<Product> = self
            .client
            .get(PRODUCTS_PATH)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()?;

        tracing::debug!(
            fetched = products.len(),
            expansion = self.expansion,
            "Fetched products"
        );
        Ok(expand_catalog(products, self.expansion))
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.client
            .get(CATEGORIES_PATH)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    fn name(&self) -> &str {
        self.client.base_url().unwrap_or("http")
    }
}
