//! The filter/sort/paginate engine.
//!
//! [`ProductListing`] holds the raw catalog plus the user's filters and
//! pagination, and derives two views from them:
//!
//! - `filtered_items`: the catalog after category, search, price, and sort
//! - `displayed_items`: a window (paged) or prefix (infinite) of the filtered items
//!
//! Both are recomputed from scratch on every change; nothing is patched
//! incrementally.

use std::ops::Range;

use crate::catalog::Product;
use crate::search::{
    CategoryFilter, FilterState, FilterUpdate, Pagination, PaginationMode, PaginationState,
    SortOption,
};

/// Intents accepted by [`ProductListing::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListingAction {
    /// Replace the raw catalog (after a load).
    ReplaceItems(Vec<Product>),
    SetCategory(CategoryFilter),
    SetSearchQuery(String),
    SetSort(SortOption),
    SetPriceRange { min: f64, max: f64 },
    /// Apply several filter fields at once.
    UpdateFilters(FilterUpdate),
    /// Jump to a page. Zero is ignored.
    SetPage(usize),
    /// Change the page size. Zero is ignored; the current page is kept.
    SetItemsPerPage(usize),
    /// Switch mode and return to page 1.
    SetPaginationMode(PaginationMode),
    /// Reveal one more page in infinite mode, if there is more to show.
    LoadMore,
}

/// Raw catalog plus everything derived from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListing {
    items: Vec<Product>,
    filters: FilterState,
    pagination: PaginationState,
    filtered: Vec<Product>,
    displayed: Range<usize>,
}

impl ProductListing {
    /// Create an empty listing with default filters and pagination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a listing over `items` with default filters and pagination.
    pub fn from_items(items: Vec<Product>) -> Self {
        Self {
            items,
            ..Self::default()
        }
        .apply_filters()
    }

    /// Set the page size. Zero is ignored.
    pub fn with_items_per_page(mut self, per_page: usize) -> Self {
        if per_page > 0 {
            self.pagination.items_per_page = per_page;
        }
        self.update_displayed()
    }

    /// Set the pagination mode without touching the current page.
    pub fn with_mode(mut self, mode: PaginationMode) -> Self {
        self.pagination.mode = mode;
        self.update_displayed()
    }

    /// Replace the filters and re-derive.
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self.pagination.current_page = 1;
        self.apply_filters()
    }

    /// Apply an intent, returning the fully re-derived next state.
    pub fn reduce(self, action: ListingAction) -> Self {
        match action {
            ListingAction::ReplaceItems(items) => Self { items, ..self }.apply_filters(),
            ListingAction::SetCategory(category) => {
                self.update_filters(FilterUpdate::new().category(category))
            }
            ListingAction::SetSearchQuery(query) => {
                self.update_filters(FilterUpdate::new().search_query(query))
            }
            ListingAction::SetSort(sort) => self.update_filters(FilterUpdate::new().sort(sort)),
            ListingAction::SetPriceRange { min, max } => {
                self.update_filters(FilterUpdate::new().price_range(min, max))
            }
            ListingAction::UpdateFilters(update) => self.update_filters(update),
            ListingAction::SetPage(page) => self.set_page(page),
            ListingAction::SetItemsPerPage(per_page) => self.with_items_per_page(per_page),
            ListingAction::SetPaginationMode(mode) => self.set_mode(mode),
            ListingAction::LoadMore => self.load_more(),
        }
    }

    /// Merge a filter change, reset to page 1, and re-derive.
    pub fn update_filters(mut self, update: FilterUpdate) -> Self {
        update.apply_to(&mut self.filters);
        self.pagination.current_page = 1;
        self.apply_filters()
    }

    /// Recompute `filtered_items` and `total_items` from the raw catalog,
    /// then the displayed slice.
    pub fn apply_filters(mut self) -> Self {
        self.filtered = self.filters.apply(&self.items);
        tracing::debug!(
            raw = self.items.len(),
            filtered = self.filtered.len(),
            category = %self.filters.category,
            sort = %self.filters.sort,
            "applied filters"
        );
        self.update_displayed()
    }

    /// Recompute the displayed slice from `filtered_items` and pagination.
    pub fn update_displayed(mut self) -> Self {
        self.displayed = self.pagination.window(self.filtered.len());
        self
    }

    /// Reveal one more page in infinite mode; a no-op at the end of the list
    /// or in paged mode.
    pub fn load_more(mut self) -> Self {
        if !self.pagination.can_load_more(self.filtered.len()) {
            return self;
        }
        self.pagination.current_page += 1;
        self.update_displayed()
    }

    fn set_page(mut self, page: usize) -> Self {
        if page == 0 {
            return self;
        }
        self.pagination.current_page = page;
        self.update_displayed()
    }

    fn set_mode(mut self, mode: PaginationMode) -> Self {
        self.pagination.mode = mode;
        self.pagination.current_page = 1;
        self.update_displayed()
    }

    /// Raw catalog, in source order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Catalog after filters and sort, before pagination.
    pub fn filtered_items(&self) -> &[Product] {
        &self.filtered
    }

    /// The slice of `filtered_items` the view should render.
    pub fn displayed_items(&self) -> &[Product] {
        &self.filtered[self.displayed.clone()]
    }

    /// Number of filtered items.
    pub fn total_items(&self) -> usize {
        self.filtered.len()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Check whether `LoadMore` would reveal anything.
    pub fn has_more(&self) -> bool {
        self.pagination.can_load_more(self.filtered.len())
    }

    /// Summary for pagination controls.
    pub fn page_info(&self) -> Pagination {
        Pagination::new(
            self.pagination.current_page,
            self.pagination.items_per_page,
            self.filtered.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `count` products priced 1.0, 2.0, ... in category "misc".
    fn numbered(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|i| Product::new(i, format!("Item {}", i), i as f64, "misc"))
            .collect()
    }

    /// 20 items priced $5..$50; ids 1..=6 are electronics priced 5, 10, 15, 25, 30, 45.
    fn mixed_catalog() -> Vec<Product> {
        let electronics = [5.0, 10.0, 15.0, 25.0, 30.0, 45.0];
        let mut items: Vec<Product> = electronics
            .iter()
            .enumerate()
            .map(|(i, price)| {
                Product::new(i as u64 + 1, format!("Gadget {}", i + 1), *price, "electronics")
            })
            .collect();
        for i in 0..14u64 {
            let price = 5.0 + (i as f64) * 45.0 / 13.0;
            items.push(Product::new(100 + i, format!("Shirt {}", i), price, "clothing"));
        }
        // Shuffle electronics out of price order.
        items.swap(0, 4);
        items.swap(1, 5);
        items
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_category_price_sort_scenario() {
        let catalog = mixed_catalog();
        assert_eq!(catalog.len(), 20);

        let listing = ProductListing::from_items(catalog)
            .reduce(ListingAction::SetCategory(CategoryFilter::named("electronics")));
        assert_eq!(listing.total_items(), 6);

        let listing = listing
            .reduce(ListingAction::SetPriceRange { min: 10.0, max: 30.0 })
            .reduce(ListingAction::SetSort(SortOption::PriceAsc));

        let filtered = listing.filtered_items();
        assert_eq!(filtered.len(), 4);
        assert!(filtered.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(ids(filtered), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_paged_last_page_has_one_item() {
        let listing = ProductListing::from_items(numbered(25)).reduce(ListingAction::SetPage(3));

        assert_eq!(listing.total_items(), 25);
        assert_eq!(listing.displayed_items().len(), 1);
        assert_eq!(listing.displayed_items()[0].id.get(), 25);
    }

    #[test]
    fn test_page_beyond_range_is_empty_and_not_clamped() {
        let listing = ProductListing::from_items(numbered(25)).reduce(ListingAction::SetPage(10));

        assert!(listing.displayed_items().is_empty());
        assert_eq!(listing.pagination().current_page, 10);
    }

    #[test]
    fn test_set_page_zero_is_ignored() {
        let listing = ProductListing::from_items(numbered(25))
            .reduce(ListingAction::SetPage(2))
            .reduce(ListingAction::SetPage(0));
        assert_eq!(listing.pagination().current_page, 2);
    }

    #[test]
    fn test_infinite_scroll_scenario() {
        let listing = ProductListing::from_items(numbered(25))
            .reduce(ListingAction::SetPaginationMode(PaginationMode::Infinite));
        assert_eq!(listing.displayed_items().len(), 12);

        let listing = listing
            .reduce(ListingAction::LoadMore)
            .reduce(ListingAction::LoadMore);
        assert_eq!(listing.displayed_items().len(), 25);
        assert!(!listing.has_more());

        let after = listing.clone().reduce(ListingAction::LoadMore);
        assert_eq!(after, listing);
        assert_eq!(after.displayed_items().len(), 25);
    }

    #[test]
    fn test_load_more_is_idempotent_at_end() {
        let mut listing = ProductListing::from_items(numbered(5))
            .reduce(ListingAction::SetPaginationMode(PaginationMode::Infinite));
        let at_end = listing.clone();
        for _ in 0..10 {
            listing = listing.reduce(ListingAction::LoadMore);
        }
        assert_eq!(listing, at_end);
        assert_eq!(listing.pagination().current_page, 1);
    }

    #[test]
    fn test_load_more_ignored_in_paged_mode() {
        let listing = ProductListing::from_items(numbered(25));
        let after = listing.clone().reduce(ListingAction::LoadMore);
        assert_eq!(after, listing);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let listing = ProductListing::from_items(numbered(40))
            .reduce(ListingAction::SetPage(3))
            .reduce(ListingAction::SetSearchQuery("item".to_string()));
        assert_eq!(listing.pagination().current_page, 1);
        assert_eq!(listing.displayed_items().len(), 12);
    }

    #[test]
    fn test_items_per_page_change_keeps_page() {
        let listing = ProductListing::from_items(numbered(25))
            .reduce(ListingAction::SetPage(3))
            .reduce(ListingAction::SetItemsPerPage(20));

        assert_eq!(listing.pagination().current_page, 3);
        assert_eq!(listing.pagination().items_per_page, 20);
        assert!(listing.displayed_items().is_empty());
    }

    #[test]
    fn test_mode_switch_resets_page() {
        let listing = ProductListing::from_items(numbered(40))
            .reduce(ListingAction::SetPage(3))
            .reduce(ListingAction::SetPaginationMode(PaginationMode::Infinite));
        assert_eq!(listing.pagination().current_page, 1);
        assert_eq!(listing.displayed_items().len(), 12);
    }

    #[test]
    fn test_replace_items_rederives_with_current_filters() {
        let listing = ProductListing::new()
            .reduce(ListingAction::SetPriceRange { min: 0.0, max: 3.0 })
            .reduce(ListingAction::ReplaceItems(numbered(10)));
        assert_eq!(ids(listing.filtered_items()), vec![1, 2, 3]);
    }

    #[test]
    fn test_displayed_bounds_hold_for_every_page() {
        for total in [0u64, 1, 11, 12, 13, 25, 48] {
            let listing = ProductListing::from_items(numbered(total));
            for page in 1..=6 {
                let paged = listing.clone().reduce(ListingAction::SetPage(page));
                assert!(paged.displayed_items().len() <= paged.pagination().items_per_page);
                assert!(paged.displayed_items().len() <= paged.total_items());

                let infinite = listing
                    .clone()
                    .with_mode(PaginationMode::Infinite)
                    .reduce(ListingAction::SetPage(page));
                assert!(infinite.displayed_items().len() <= infinite.total_items());
            }
        }
    }

    #[test]
    fn test_update_filters_applies_all_fields() {
        let listing = ProductListing::from_items(numbered(30)).reduce(
            ListingAction::UpdateFilters(
                FilterUpdate::new()
                    .search_query("1")
                    .price_range(10.0, 20.0)
                    .sort(SortOption::PriceDesc),
            ),
        );
        assert_eq!(ids(listing.filtered_items()), vec![19, 18, 17, 16, 15, 14, 13, 12, 11, 10]);
    }

    #[test]
    fn test_page_info() {
        let listing = ProductListing::from_items(numbered(25)).reduce(ListingAction::SetPage(2));
        let info = listing.page_info();
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.start_item(), 13);
        assert_eq!(info.end_item(), 24);
    }

    #[test]
    fn test_page_info_for_max_page() {
        let listing =
            ProductListing::from_items(numbered(25)).reduce(ListingAction::SetPage(usize::MAX));
        assert!(listing.displayed_items().is_empty());

        let info = listing.page_info();
        assert_eq!(info.page, usize::MAX);
        assert_eq!(info.start_item(), 0);
        assert_eq!(info.end_item(), 25);
        assert_eq!(info.page_numbers(7), vec![1, 2, 3]);
    }
}
