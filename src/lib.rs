//! pagewin
//!
//! Client-side pagination engine for list views: slices an ordered
//! collection into pages, clamps out-of-range requests to the nearest valid
//! page, and computes the sliding window of page numbers to render.
//!
//! The engine is pure (`state`, `view_state`); `source`, `view`, `config`
//! and `logging` form the impure shell used by the `pagewin` binary.
//!
//! ```
//! use pagewin::state::PageState;
//!
//! let items: Vec<u32> = (1..=23).collect();
//! let mut state = PageState::new(10)?;
//! state.go_to_page(3);
//!
//! let page = state.paginate(&items);
//! assert_eq!(page.items, &[21, 22, 23]);
//! assert_eq!((page.start_index, page.end_index), (21, 23));
//! assert_eq!(state.window(items.len()), vec![1, 2, 3]);
//! # Ok::<(), pagewin::model::PaginationError>(())
//! ```

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
