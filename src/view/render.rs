//! Plain-text rendering of paging controls.

use crate::view_state::window::page_window;

/// "Showing X to Y of Z" caption. An empty collection reads "No results".
pub fn caption(start_index: usize, end_index: usize, total_items: usize) -> String {
    if total_items == 0 {
        return "No results".to_string();
    }
    format!("Showing {} to {} of {}", start_index, end_index, total_items)
}

/// Caption that also reports how many items the filter hid.
pub fn filtered_caption(
    start_index: usize,
    end_index: usize,
    total_items: usize,
    unfiltered_total: usize,
) -> String {
    let base = caption(start_index, end_index, total_items);
    if total_items == unfiltered_total {
        base
    } else {
        format!("{} (filtered from {})", base, unfiltered_total)
    }
}

/// Page-number controls, e.g. `< 1 2 [3] 4 5 >`.
///
/// `<` appears only when a previous page exists, `>` only when a next page
/// exists. The effective page is bracketed. An empty window (no pages, or a
/// zero window size) renders as an empty string.
pub fn controls(total_pages: usize, effective_page: usize, window_size: usize) -> String {
    let window = page_window(total_pages, effective_page, window_size);
    if window.is_empty() {
        return String::new();
    }

    let mut parts = Vec::new();
    if effective_page > 1 {
        parts.push("<".to_string());
    }
    parts.extend(window.into_iter().map(|page| {
        if page == effective_page {
            format!("[{}]", page)
        } else {
            page.to_string()
        }
    }));
    if effective_page < total_pages {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

/// Page-size selector, e.g. `Per page: 5 [10] 20 50 100`.
///
/// A current size missing from `options` is still listed, in order.
pub fn page_size_selector(options: &[usize], current: usize) -> String {
    let mut sizes: Vec<usize> = options.to_vec();
    sizes.push(current);
    sizes.sort_unstable();
    sizes.dedup();

    let rendered: Vec<String> = sizes
        .into_iter()
        .map(|size| {
            if size == current {
                format!("[{}]", size)
            } else {
                size.to_string()
            }
        })
        .collect();
    format!("Per page: {}", rendered.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_shows_display_range() {
        insta::assert_snapshot!(caption(21, 23, 23), @"Showing 21 to 23 of 23");
    }

    #[test]
    fn caption_empty_collection() {
        insta::assert_snapshot!(caption(0, 0, 0), @"No results");
    }

    #[test]
    fn filtered_caption_mentions_unfiltered_total() {
        insta::assert_snapshot!(
            filtered_caption(1, 5, 10, 30),
            @"Showing 1 to 5 of 10 (filtered from 30)"
        );
        assert_eq!(filtered_caption(1, 5, 30, 30), "Showing 1 to 5 of 30");
    }

    #[test]
    fn controls_on_first_page_have_no_previous_marker() {
        insta::assert_snapshot!(controls(10, 1, 5), @"[1] 2 3 4 5 >");
    }

    #[test]
    fn controls_in_middle_are_centered() {
        insta::assert_snapshot!(controls(10, 5, 5), @"< 3 4 [5] 6 7 >");
    }

    #[test]
    fn controls_on_last_page_have_no_next_marker() {
        insta::assert_snapshot!(controls(10, 10, 5), @"< 6 7 8 9 [10]");
    }

    #[test]
    fn controls_single_page() {
        insta::assert_snapshot!(controls(1, 1, 5), @"[1]");
    }

    #[test]
    fn controls_no_pages_is_empty() {
        assert_eq!(controls(0, 1, 5), "");
    }

    #[test]
    fn controls_zero_window_is_empty() {
        assert_eq!(controls(3, 1, 0), "");
        assert_eq!(controls(3, 2, 0), "");
        assert_eq!(controls(3, 3, 0), "");
    }

    #[test]
    fn page_size_selector_brackets_current() {
        insta::assert_snapshot!(
            page_size_selector(&[5, 10, 20, 50, 100], 10),
            @"Per page: 5 [10] 20 50 100"
        );
    }

    #[test]
    fn page_size_selector_lists_unconfigured_current_size() {
        insta::assert_snapshot!(
            page_size_selector(&[5, 10, 20], 15),
            @"Per page: 5 10 [15] 20"
        );
    }
}
