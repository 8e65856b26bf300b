//! Pagination result

use serde::Serialize;

use super::types::PageNumber;

/// The current page of an ordered collection plus navigation metadata.
///
/// Derived on every call to [`PageState::paginate`](crate::state::PageState::paginate)
/// and never stored. Borrows the page's slice from the caller's collection.
///
/// # Invariants
/// - `total_pages == ceil(total_items / items_per_page)`, `0` when `total_items == 0`
/// - `items.len() == end_index - start_index + 1` when non-empty
/// - `start_index == end_index == 0` when `total_items == 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<'a, T> {
    /// The current page's slice.
    pub items: &'a [T],
    /// Length of the whole collection.
    pub total_items: usize,
    /// Number of pages the collection spans.
    pub total_pages: usize,
    /// 1-based ordinal of the first displayed item (0 when empty).
    pub start_index: usize,
    /// 1-based ordinal of the last displayed item (0 when empty).
    pub end_index: usize,
    /// Page actually used for slicing after clamping.
    pub effective_page: PageNumber,
}

impl<'a, T> PageResult<'a, T> {
    /// Result for an empty collection.
    pub fn empty() -> Self {
        Self {
            items: &[],
            total_items: 0,
            total_pages: 0,
            start_index: 0,
            end_index: 0,
            effective_page: PageNumber::FIRST,
        }
    }

    /// True when the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
