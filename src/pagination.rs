mod action;
mod format;
mod options;
mod query;
mod snapshot;
mod state;

pub use action::PaginationAction;
pub use format::{format_item_count, format_items_text, group_thousands};
pub use options::{
    PaginationOptions, DEFAULT_PAGE, DEFAULT_ROWS_PER_PAGE, DEFAULT_ROWS_PER_PAGE_OPTIONS,
    DEFAULT_THOUSANDS_SEPARATOR,
};
pub use query::PageQuery;
pub use snapshot::PageSnapshot;
pub use state::PaginationState;
