use serde::Serialize;

use super::PaginationState;

/// Everything a pager widget binds to, computed at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub current_page: u64,
    pub rows_per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub start_item: u64,
    pub end_item: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub rows_per_page_options: Vec<u64>,
    pub page_info: String,
    pub range_info: String,
}

impl PaginationState {
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            current_page: self.current_page(),
            rows_per_page: self.rows_per_page(),
            total_items: self.total_items(),
            total_pages: self.total_pages(),
            start_item: self.start_item(),
            end_item: self.end_item(),
            has_next_page: self.has_next_page(),
            has_previous_page: self.has_previous_page(),
            rows_per_page_options: self.rows_per_page_options().to_vec(),
            page_info: self.format_page_info(),
            range_info: self.format_range_info(),
        }
    }
}
