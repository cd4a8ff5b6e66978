use std::ops::Range;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{options::DEFAULT_ROWS_PER_PAGE, PaginationState};

/// Limit/offset window of the current page, as a backend query expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PageQuery {
    #[validate(range(min = 1))]
    limit: u64,
    offset: u64,
}

impl PageQuery {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Index range of this window within a list of `len` items.
    pub fn window(&self, len: usize) -> Range<usize> {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX).min(len);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        start..start.saturating_add(limit).min(len)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ROWS_PER_PAGE,
            offset: 0,
        }
    }
}

impl PaginationState {
    /// Limit and offset of the current page.
    pub fn query(&self) -> PageQuery {
        PageQuery::new(
            self.rows_per_page(),
            (self.current_page() - 1) * self.rows_per_page(),
        )
    }

    /// The part of an in-memory list that belongs on the current page.
    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.query().window(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pagination::PaginationOptions;

    #[test]
    fn it_queries_the_current_page() {
        // Arrange
        let mut s = PaginationState::new(PaginationOptions::builder().total_items(95).build());

        // Act
        s.go_to_page(3);

        // Assert
        assert_eq!(s.query(), PageQuery::new(20, 40));
    }

    #[test]
    fn it_clips_the_window_to_the_list() {
        let q = PageQuery::new(20, 80);

        assert_eq!(q.window(95), 80..95);
        assert_eq!(q.window(50), 50..50);
        assert_eq!(PageQuery::new(u64::MAX, 3).window(10), 3..10);
    }

    #[test]
    fn it_slices_the_current_page() {
        // Arrange
        let items: Vec<u32> = (1..=23).collect();
        let mut s = PaginationState::new(
            PaginationOptions::builder()
                .initial_rows_per_page(10)
                .total_items(items.len() as u64)
                .build(),
        );

        // Act
        s.go_to_last_page();

        // Assert
        assert_eq!(s.page_items(&items), &[21, 22, 23]);
    }

    #[test]
    fn it_deserializes_query_parameters() {
        let q: PageQuery = serde_json::from_str(r#"{"offset":60}"#).unwrap();

        assert_eq!(q, PageQuery::new(20, 60));
        assert!(PageQuery::new(0, 0).validate().is_err());
    }
}
