//! Filtered, paged list view.
//!
//! Couples one [`FilterState`] with one [`PageState`]. Any change that alters
//! the filter returns the view to page 1, so narrowing a list never strands
//! the user on a page that no longer exists.

use tracing::debug;

use super::filter::{FilterState, Filterable};
use super::page_state::PageState;
use crate::model::error::PaginationError;
use crate::view_state::page_result::PageResult;
use crate::view_state::types::PageSize;

/// The visible part of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<'a, T> {
    /// Items that passed the filter, in input order.
    pub matched: Vec<&'a T>,
    /// Total size of the unfiltered collection.
    pub unfiltered_total: usize,
    /// Effective page after clamping against `matched`.
    pub page: usize,
    /// Number of pages `matched` spans.
    pub total_pages: usize,
    /// 1-based ordinal of the first item shown (0 when empty).
    pub start_index: usize,
    /// 1-based ordinal of the last item shown (0 when empty).
    pub end_index: usize,
    range: std::ops::Range<usize>,
}

impl<'a, T> ListPage<'a, T> {
    /// The items of the current page.
    pub fn items(&self) -> &[&'a T] {
        &self.matched[self.range.clone()]
    }

    /// Number of items that passed the filter.
    pub fn total_items(&self) -> usize {
        self.matched.len()
    }
}

/// Filter and page state for one consuming view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    filter: FilterState,
    paging: PageState,
}

impl ListView {
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] if `items_per_page` is 0.
    pub fn new(items_per_page: usize) -> Result<Self, PaginationError> {
        Ok(Self::with_page_size(PageSize::new(items_per_page)?))
    }

    /// Create an unfiltered view on page 1 from an already-validated size.
    pub fn with_page_size(items_per_page: PageSize) -> Self {
        Self {
            filter: FilterState::new(),
            paging: PageState::with_page_size(items_per_page),
        }
    }

    /// Current filter conditions.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current page state. Changes go through the view's own methods.
    pub fn paging(&self) -> &PageState {
        &self.paging
    }

    /// Set the text search. A blank query clears it.
    pub fn set_query(&mut self, raw: &str) {
        let changed = self.filter.set_query(raw);
        self.after_filter_change(changed);
    }

    /// Require `name` to equal `value` (case-insensitive).
    pub fn set_field(&mut self, name: impl Into<String>, value: &str) {
        let changed = self.filter.set_field(name, value);
        self.after_filter_change(changed);
    }

    /// Drop the filter on `name`.
    pub fn clear_field(&mut self, name: &str) {
        let changed = self.filter.clear_field(name);
        self.after_filter_change(changed);
    }

    /// Drop every filter condition.
    pub fn clear_filters(&mut self) {
        let changed = self.filter.clear();
        self.after_filter_change(changed);
    }

    /// Request `page`; see [`PageState::go_to_page`].
    pub fn go_to_page(&mut self, page: i64) {
        self.paging.go_to_page(page);
    }

    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] if `size < 1`.
    pub fn set_items_per_page(&mut self, size: i64) -> Result<(), PaginationError> {
        self.paging.set_items_per_page(size)
    }

    fn after_filter_change(&mut self, changed: bool) {
        if changed {
            debug!(filter = ?self.filter, "filter changed, returning to first page");
            self.paging.first_page();
        }
    }

    /// Filter `items`, then slice the current page.
    pub fn visible<'a, T: Filterable>(&self, items: &'a [T]) -> ListPage<'a, T> {
        let matched = self.filter.apply(items);
        let (page, total_pages, start_index, end_index, range) = {
            let result: PageResult<'_, &T> = self.paging.paginate(&matched);
            let start = result.start_index.saturating_sub(1);
            (
                result.effective_page.get(),
                result.total_pages,
                result.start_index,
                result.end_index,
                start..start + result.items.len(),
            )
        };

        ListPage {
            matched,
            unfiltered_total: items.len(),
            page,
            total_pages,
            start_index,
            end_index,
            range,
        }
    }
}
