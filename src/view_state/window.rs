//! Page-number window for navigation controls

/// Number of page controls shown when the caller does not choose.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Compute the page numbers to render as clickable controls.
///
/// Centered sliding window: the current page sits in the middle when possible.
/// Within `window_size / 2` of either end the window is pinned flush against
/// that end, so it always spans exactly `window_size` pages once
/// `total_pages > window_size`.
///
/// `current_page` outside `[1, total_pages]` is clamped first. A zero
/// `window_size` or zero `total_pages` yields no controls.
///
/// # Examples
///
/// ```
/// use pagewin::view_state::window::page_window;
///
/// assert_eq!(page_window(10, 5, 5), vec![3, 4, 5, 6, 7]);
/// assert_eq!(page_window(10, 1, 5), vec![1, 2, 3, 4, 5]);
/// assert_eq!(page_window(3, 2, 5), vec![1, 2, 3]);
/// ```
pub fn page_window(total_pages: usize, current_page: usize, window_size: usize) -> Vec<usize> {
    if total_pages == 0 || window_size == 0 {
        return Vec::new();
    }
    if total_pages <= window_size {
        return (1..=total_pages).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let half = window_size / 2;
    let last_start = total_pages - window_size + 1;
    let start = current.saturating_sub(half).clamp(1, last_start);

    (start..start + window_size).collect()
}
