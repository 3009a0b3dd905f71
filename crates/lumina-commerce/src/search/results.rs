//! Pagination state and page summaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Default page size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// How the filtered list is exposed to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// One fixed-size window at a time.
    #[default]
    Paged,
    /// A growing prefix of the results.
    Infinite,
}

impl PaginationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaginationMode::Paged => "paged",
            PaginationMode::Infinite => "infinite",
        }
    }
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaginationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paged" | "pagination" => Ok(PaginationMode::Paged),
            "infinite" | "infinite-scroll" => Ok(PaginationMode::Infinite),
            other => Err(format!("unknown pagination mode '{}'", other)),
        }
    }
}

/// Current page, page size, and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Current page (1-indexed). In infinite mode, the number of pages revealed.
    pub current_page: usize,
    /// Items per page (at least 1).
    pub items_per_page: usize,
    pub mode: PaginationMode,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            mode: PaginationMode::Paged,
        }
    }
}

impl PaginationState {
    /// Index range of the displayed slice over a list of `len` items.
    ///
    /// Pages past the end give an empty range; `current_page` is never clamped.
    pub fn window(&self, len: usize) -> Range<usize> {
        let end = self
            .current_page
            .saturating_mul(self.items_per_page)
            .min(len);
        match self.mode {
            PaginationMode::Paged => {
                let start = self
                    .current_page
                    .saturating_sub(1)
                    .saturating_mul(self.items_per_page)
                    .min(len);
                start..end
            }
            PaginationMode::Infinite => 0..end,
        }
    }

    /// Check whether revealing one more page would show additional items.
    pub fn can_load_more(&self, len: usize) -> bool {
        self.mode == PaginationMode::Infinite
            && self.current_page.saturating_mul(self.items_per_page) < len
    }
}

/// Page summary for rendering pagination controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }
        if max_visible == 0 {
            return Vec::new();
        }

        // Pages past the end center on the last page.
        let page = self.page.clamp(1, self.total_pages);
        let half = max_visible / 2;
        let start = page.saturating_sub(half).max(1);
        let end = start.saturating_add(max_visible - 1).min(self.total_pages);
        let start = end.saturating_sub(max_visible - 1).max(1);

        (start..=end).collect()
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed), or 0 when nothing is shown.
    pub fn start_item(&self) -> usize {
        self.page
            .saturating_sub(1)
            .checked_mul(self.per_page)
            .filter(|&skipped| skipped < self.total)
            .map_or(0, |skipped| skipped + 1)
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_ITEMS_PER_PAGE, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paged(page: usize) -> PaginationState {
        PaginationState {
            current_page: page,
            ..PaginationState::default()
        }
    }

    fn infinite(page: usize) -> PaginationState {
        PaginationState {
            current_page: page,
            mode: PaginationMode::Infinite,
            ..PaginationState::default()
        }
    }

    #[test]
    fn test_paged_window() {
        assert_eq!(paged(1).window(25), 0..12);
        assert_eq!(paged(2).window(25), 12..24);
        assert_eq!(paged(3).window(25), 24..25);
    }

    #[test]
    fn test_paged_window_past_end_is_empty() {
        let window = paged(9).window(25);
        assert!(window.is_empty());
        assert_eq!(window.end, 25);
    }

    #[test]
    fn test_infinite_window_is_prefix() {
        assert_eq!(infinite(1).window(25), 0..12);
        assert_eq!(infinite(2).window(25), 0..24);
        assert_eq!(infinite(3).window(25), 0..25);
        assert_eq!(infinite(4).window(25), 0..25);
    }

    #[test]
    fn test_can_load_more() {
        assert!(infinite(1).can_load_more(25));
        assert!(infinite(2).can_load_more(25));
        assert!(!infinite(3).can_load_more(25));
        assert!(!infinite(1).can_load_more(12));
        assert!(!paged(1).can_load_more(25));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("infinite-scroll".parse::<PaginationMode>().unwrap(), PaginationMode::Infinite);
        assert_eq!("paged".parse::<PaginationMode>().unwrap(), PaginationMode::Paged);
        assert!("scroll".parse::<PaginationMode>().is_err());
    }

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 12, 25);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.start_item(), 13);
        assert_eq!(p.end_item(), 24);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert!(p.is_last());
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_past_end() {
        let p = Pagination::new(5, 12, 25);
        assert!(p.is_last());
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 0);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(10, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);

        let p = Pagination::new(1, 12, 25);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);

        let p = Pagination::new(40, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_pagination_huge_page() {
        let p = Pagination::new(usize::MAX, 12, 25);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 25);
        assert!(p.is_last());
        assert_eq!(p.page_numbers(2), vec![2, 3]);

        let p = Pagination::new(usize::MAX, 1, usize::MAX);
        assert_eq!(p.start_item(), usize::MAX);
        assert_eq!(p.page_numbers(3).len(), 3);
    }
}
