//! Paged-list display state for list views: the current page, the page size
//! and the item count, with derived ranges, navigation and short summaries.
//!
//! ```
//! use pagekeeper::{PaginationOptions, PaginationState};
//!
//! let mut pager = PaginationState::new(PaginationOptions::builder().total_items(95).build());
//! pager.go_to_last_page();
//! assert_eq!(pager.format_range_info(), "Showing 81-95 of 95 items");
//! ```

mod error;
pub mod pagination;
#[cfg(test)]
mod test_support;

pub use error::Error;
pub use pagination::{
    format_item_count, format_items_text, PageQuery, PageSnapshot, PaginationAction,
    PaginationOptions, PaginationState,
};
