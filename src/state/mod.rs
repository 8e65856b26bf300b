//! Paging and filter state (pure).
//!
//! All state transitions are plain method calls testable without any I/O.

pub mod filter;
pub mod list_view;
pub mod page_state;

// Re-export for convenience
pub use filter::{FilterState, Filterable, SearchQuery};
pub use list_view::{ListPage, ListView};
pub use page_state::PageState;
