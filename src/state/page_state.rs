//! Pagination state machine.
//!
//! `PageState` owns the two integers a paged view needs: the requested page and
//! the page size. Every other value is derived per call from the collection the
//! caller passes in, so the state can never disagree with the data.

use tracing::{debug, warn};

use crate::model::error::PaginationError;
use crate::view_state::page_result::PageResult;
use crate::view_state::types::{PageNumber, PageSize};
use crate::view_state::window::{page_window, DEFAULT_WINDOW_SIZE};

/// Current page and page size for one consuming view.
///
/// The stored page may exceed the collection's last page (the collection can
/// shrink between calls). [`paginate`](Self::paginate) clamps it to the last
/// page instead of producing an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: PageNumber,
    items_per_page: PageSize,
}

impl PageState {
    /// Create state starting on page 1.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] if `items_per_page` is 0.
    pub fn new(items_per_page: usize) -> Result<Self, PaginationError> {
        Ok(Self::with_page_size(PageSize::new(items_per_page)?))
    }

    /// Create state from an already-validated page size.
    pub fn with_page_size(items_per_page: PageSize) -> Self {
        Self {
            current_page: PageNumber::FIRST,
            items_per_page,
        }
    }

    /// The requested page, before clamping against any collection.
    pub fn current_page(&self) -> PageNumber {
        self.current_page
    }

    /// Current page size.
    pub fn items_per_page(&self) -> PageSize {
        self.items_per_page
    }

    /// Number of pages a collection of `total_items` spans.
    pub fn total_pages(&self, total_items: usize) -> usize {
        self.items_per_page.pages_for(total_items)
    }

    /// The page [`paginate`](Self::paginate) would slice for `total_items`.
    pub fn effective_page(&self, total_items: usize) -> PageNumber {
        self.current_page.clamp_to(self.total_pages(total_items))
    }

    /// Slice the current page out of `items`.
    ///
    /// Pure: depends only on `items` and the two stored integers. The input
    /// is never reordered or copied.
    pub fn paginate<'a, T>(&self, items: &'a [T]) -> PageResult<'a, T> {
        let total_items = items.len();
        if total_items == 0 {
            return PageResult::empty();
        }

        let size = self.items_per_page.get();
        let total_pages = self.total_pages(total_items);
        let effective_page = self.current_page.clamp_to(total_pages);
        let start = effective_page.index() * size;
        let end = start.saturating_add(size).min(total_items);

        PageResult {
            items: &items[start..end],
            total_items,
            total_pages,
            start_index: start + 1,
            end_index: end,
            effective_page,
        }
    }

    /// Request a page. Values below 1 select the first page.
    ///
    /// Pages past the end are kept as requested and clamped on the next
    /// [`paginate`](Self::paginate), so a later, longer collection can honor them.
    pub fn go_to_page(&mut self, page: i64) {
        let page = PageNumber::from_signed(page);
        if page != self.current_page {
            debug!(from = self.current_page.get(), to = page.get(), "page changed");
        }
        self.current_page = page;
    }

    /// Change the page size and return to the first page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidConfiguration`] if `size < 1`; the
    /// state is left unchanged.
    pub fn set_items_per_page(&mut self, size: i64) -> Result<(), PaginationError> {
        let size = PageSize::from_signed(size).inspect_err(|err| {
            warn!(error = %err, "rejected page size");
        })?;
        debug!(
            from = self.items_per_page.get(),
            to = size.get(),
            "page size changed"
        );
        self.items_per_page = size;
        self.current_page = PageNumber::FIRST;
        Ok(())
    }

    /// Step forward from the effective page. Returns whether the page changed.
    pub fn next_page(&mut self, total_items: usize) -> bool {
        let current = self.effective_page(total_items);
        if current.get() >= self.total_pages(total_items) {
            self.current_page = current;
            return false;
        }
        self.current_page = PageNumber::new(current.get() + 1);
        true
    }

    /// Step back from the effective page. Returns whether the page changed.
    pub fn previous_page(&mut self, total_items: usize) -> bool {
        let current = self.effective_page(total_items);
        if current == PageNumber::FIRST {
            self.current_page = current;
            return false;
        }
        self.current_page = PageNumber::new(current.get() - 1);
        true
    }

    /// Jump to page 1.
    pub fn first_page(&mut self) {
        self.current_page = PageNumber::FIRST;
    }

    /// Jump to the last page of a collection of `total_items`.
    ///
    /// An empty collection has no last page, so this lands on page 1.
    pub fn last_page(&mut self, total_items: usize) {
        self.current_page = PageNumber::new(self.total_pages(total_items));
    }

    /// Page numbers to render around the effective page, using the default window.
    pub fn window(&self, total_items: usize) -> Vec<usize> {
        self.window_with_size(total_items, DEFAULT_WINDOW_SIZE)
    }

    /// Page numbers to render around the effective page.
    pub fn window_with_size(&self, total_items: usize, window_size: usize) -> Vec<usize> {
        page_window(
            self.total_pages(total_items),
            self.effective_page(total_items).get(),
            window_size,
        )
    }
}

#[cfg(test)]
#[path = "page_state_tests.rs"]
mod tests;
