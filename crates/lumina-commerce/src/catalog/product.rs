//! Product types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Customer rating summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: f64,
    /// Number of ratings.
    pub count: u64,
}

/// A product in the catalog.
///
/// Field names follow the upstream catalog API so the same JSON shape is
/// accepted from the network and from persisted carts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price as a decimal amount in USD.
    pub price: f64,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Category name.
    pub category: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Rating summary.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Create a product with empty description, image, and rating.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Rating { rate, count };
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Unit price in cents.
    pub fn unit_price(&self) -> Money {
        Money::from_decimal(self.price, Currency::USD)
    }

    /// Check whether the title contains `needle`, ignoring case.
    ///
    /// `needle` must already be lower-cased.
    pub fn title_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(needle)
    }

    /// Check whether the price lies within `[min, max]`, inclusive.
    pub fn price_within(&self, min: f64, max: f64) -> bool {
        self.price >= min && self.price <= max
    }
}
