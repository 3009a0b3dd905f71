//! In-process catalog source for tests and offline use.

use crate::{CatalogSource, FetchError};
use async_trait::async_trait;
use lumina_commerce::catalog::Product;

/// Serves a fixed catalog, optionally failing either call.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
    categories: Vec<String>,
    products_error: Option<String>,
    categories_error: Option<String>,
}

impl StaticCatalogSource {
    /// Serve `products`, deriving categories in first-seen order.
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for p in &products {
            if !categories.contains(&p.category) {
                categories.push(p.category.clone());
            }
        }
        Self {
            products,
            categories,
            ..Self::default()
        }
    }

    /// Override the category list.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Make `fetch_products` fail with `message`.
    pub fn failing_products(mut self, message: impl Into<String>) -> Self {
        self.products_error = Some(message.into());
        self
    }

    /// Make `fetch_categories` fail with `message`.
    pub fn failing_categories(mut self, message: impl Into<String>) -> Self {
        self.categories_error = Some(message.into());
        self
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        match &self.products_error {
            Some(message) => Err(FetchError::Unavailable(message.clone())),
            None => Ok(self.products.clone()),
        }
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        match &self.categories_error {
            Some(message) => Err(FetchError::Unavailable(message.clone())),
            None => Ok(self.categories.clone()),
        }
    }

    fn name(&self) -> &str {
        "static"
    }
}
