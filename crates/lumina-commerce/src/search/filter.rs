//! Filter state and predicates.

use crate::catalog::Product;
use crate::search::SortOption;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Default lower price bound.
pub const DEFAULT_MIN_PRICE: f64 = 0.0;

/// Default upper price bound.
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// Category selection. Serializes as the category name, or `"all"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Filter to a single category. `"all"` maps to [`CategoryFilter::All`].
    pub fn named(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    /// Exact match on the product's category field.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current filter and sort selection.
///
/// `min_price > max_price` is accepted and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search_query: String,
    pub sort: SortOption,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search_query: String::new(),
            sort: SortOption::Default,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl FilterState {
    /// Narrow `products` through category, search, and price (in that order),
    /// then sort. The input order is the tie-break for equal sort keys.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = self.search_query.to_lowercase();

        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.category.matches(p))
            .filter(|p| p.title_contains(&needle))
            .filter(|p| p.price_within(self.min_price, self.max_price))
            .cloned()
            .collect();

        self.sort.sort(&mut result);
        result
    }

    /// Check a single product against every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product)
            && product.title_contains(&self.search_query.to_lowercase())
            && product.price_within(self.min_price, self.max_price)
    }
}

/// A partial change to [`FilterState`]; unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn sort(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    pub fn price_range(self, min: f64, max: f64) -> Self {
        self.min_price(min).max_price(max)
    }

    /// Check if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.search_query.is_none()
            && self.sort.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Merge into `filters`.
    pub fn apply_to(self, filters: &mut FilterState) {
        if let Some(category) = self.category {
            filters.category = category;
        }
        if let Some(query) = self.search_query {
            filters.search_query = query;
        }
        if let Some(sort) = self.sort {
            filters.sort = sort;
        }
        if let Some(min) = self.min_price {
            filters.min_price = min;
        }
        if let Some(max) = self.max_price {
            filters.max_price = max;
        }
    }
}
