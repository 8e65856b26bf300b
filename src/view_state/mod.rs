//! View-state layer - derived paging values
//!
//! Everything here is recomputed from a collection and a
//! [`PageState`](crate::state::PageState) on each call and never stored.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (PageNumber, PageSize)
//! - `page_result`: PageResult - the current page's slice plus metadata
//! - `window`: page_window - centered sliding window of page numbers

pub mod page_result;
pub mod types;
pub mod window;

pub use page_result::PageResult;
pub use types::{PageNumber, PageSize};
pub use window::{page_window, DEFAULT_WINDOW_SIZE};
