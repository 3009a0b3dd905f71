//! Sort options.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Keep catalog order.
    #[default]
    Default,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by rating, highest first.
    RatingDesc,
}

impl SortOption {
    /// All options, in menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Default,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::RatingDesc => "rating_desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Default => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::RatingDesc => "Highest Rated",
        }
    }

    /// Compare two products under this option. `Default` treats all as equal.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Default => Ordering::Equal,
            SortOption::PriceAsc => a.price.total_cmp(&b.price),
            SortOption::PriceDesc => b.price.total_cmp(&a.price),
            SortOption::RatingDesc => b.rating.rate.total_cmp(&a.rating.rate),
        }
    }

    /// Stable sort in place; equal keys keep their relative order.
    pub fn sort(&self, products: &mut [Product]) {
        if *self == SortOption::Default {
            return;
        }
        products.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option '{0}' (expected default, price_asc, price_desc, or rating_desc)")]
pub struct ParseSortError(String);

impl FromStr for SortOption {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "default" | "" => Ok(SortOption::Default),
            "price_asc" => Ok(SortOption::PriceAsc),
            "price_desc" => Ok(SortOption::PriceDesc),
            "rating_desc" | "rating" => Ok(SortOption::RatingDesc),
            _ => Err(ParseSortError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64, rate: f64) -> Product {
        Product::new(id, format!("Product {}", id), price, "misc").with_rating(rate, 10)
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_default_keeps_order() {
        let mut items = vec![product(3, 30.0, 1.0), product(1, 10.0, 5.0), product(2, 20.0, 3.0)];
        SortOption::Default.sort(&mut items);
        assert_eq!(ids(&items), vec![3, 1, 2]);
    }

    #[test]
    fn test_price_sorts() {
        let mut items = vec![product(3, 30.0, 1.0), product(1, 10.0, 5.0), product(2, 20.0, 3.0)];
        SortOption::PriceAsc.sort(&mut items);
        assert_eq!(ids(&items), vec![1, 2, 3]);

        SortOption::PriceDesc.sort(&mut items);
        assert_eq!(ids(&items), vec![3, 2, 1]);
    }

    #[test]
    fn test_rating_desc() {
        let mut items = vec![product(1, 10.0, 2.5), product(2, 20.0, 4.7), product(3, 30.0, 3.9)];
        SortOption::RatingDesc.sort(&mut items);
        assert_eq!(ids(&items), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut items = vec![
            product(1, 20.0, 4.0),
            product(2, 10.0, 4.0),
            product(3, 20.0, 4.0),
            product(4, 10.0, 4.0),
        ];
        SortOption::PriceAsc.sort(&mut items);
        assert_eq!(ids(&items), vec![2, 4, 1, 3]);

        SortOption::RatingDesc.sort(&mut items);
        assert_eq!(ids(&items), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("price_asc".parse::<SortOption>().unwrap(), SortOption::PriceAsc);
        assert_eq!("price-desc".parse::<SortOption>().unwrap(), SortOption::PriceDesc);
        assert_eq!("rating_desc".parse::<SortOption>().unwrap(), SortOption::RatingDesc);
        assert!("newest".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(
            serde_json::to_string(&SortOption::RatingDesc).unwrap(),
            "\"rating_desc\""
        );
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
    }
}
