//! Search module.
//!
//! Contains filters, sort options, pagination, and the listing engine that
//! combines them.

mod filter;
mod listing;
mod query;
mod results;

pub use filter::{
    CategoryFilter, FilterState, FilterUpdate, ALL_CATEGORIES, DEFAULT_MAX_PRICE,
    DEFAULT_MIN_PRICE,
};
pub use listing::{ListingAction, ProductListing};
pub use query::{ParseSortError, SortOption};
pub use results::{Pagination, PaginationMode, PaginationState, DEFAULT_ITEMS_PER_PAGE};
