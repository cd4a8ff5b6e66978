use tracing::{debug, warn};
use validator::Validate;

use crate::error::Error;

use super::options::{PaginationOptions, DEFAULT_PAGE, DEFAULT_ROWS_PER_PAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position {
    current_page: u64,
    rows_per_page: u64,
    total_items: u64,
}

/// Paged-list display state.
///
/// Holds the current page, the page size and the total item count. Everything
/// else is derived on read. After every operation
/// `1 <= current_page() <= total_pages()` holds; requests that cannot be
/// honoured are dropped and leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u64,
    rows_per_page: u64,
    total_items: u64,
    initial: Position,
    options: PaginationOptions,
}

impl PaginationState {
    /// Build the state from `options`, normalizing values that would break
    /// the page bounds instead of failing.
    pub fn new(mut options: PaginationOptions) -> Self {
        if options.rows_per_page_options.contains(&0) {
            warn!("Rows per page option 0 is invalid, dropping it");
            options.rows_per_page_options.retain(|rows| *rows != 0);
        }
        let mut current_page = options.initial_page;
        if current_page == 0 {
            warn!("Initial page 0 is invalid, starting at page {DEFAULT_PAGE}");
            current_page = DEFAULT_PAGE;
        }
        let mut rows_per_page = options.initial_rows_per_page;
        if rows_per_page == 0 {
            warn!("Rows per page 0 is invalid, using {DEFAULT_ROWS_PER_PAGE}");
            rows_per_page = DEFAULT_ROWS_PER_PAGE;
        }

        let mut state = Self {
            current_page,
            rows_per_page,
            total_items: options.total_items,
            initial: Position {
                current_page,
                rows_per_page,
                total_items: options.total_items,
            },
            options,
        };
        state.clamp_current_page();
        debug!(
            "Pagination created: page {} of {}, {} rows per page, {} items",
            state.current_page,
            state.total_pages(),
            state.rows_per_page,
            state.total_items
        );
        state
    }

    /// Like [`PaginationState::new`], but rejects inconsistent options.
    pub fn try_new(options: PaginationOptions) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn rows_per_page(&self) -> u64 {
        self.rows_per_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn rows_per_page_options(&self) -> &[u64] {
        &self.options.rows_per_page_options
    }

    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.rows_per_page).max(1)
    }

    /// One-based index of the first item on the current page.
    pub fn start_item(&self) -> u64 {
        self.current_page.saturating_sub(1) * self.rows_per_page + 1
    }

    /// One-based index of the last item on the current page.
    pub fn end_item(&self) -> u64 {
        self.current_page
            .saturating_mul(self.rows_per_page)
            .min(self.total_items)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Move to `page` if it lies within `1..=total_pages()`.
    pub fn go_to_page(&mut self, page: u64) {
        let total_pages = self.total_pages();
        if !(1..=total_pages).contains(&page) {
            debug!("Ignoring page {page}, valid pages are 1..={total_pages}");
            return;
        }
        if page != self.current_page {
            debug!("Moving from page {} to page {}", self.current_page, page);
            self.current_page = page;
        }
    }

    pub fn go_to_first_page(&mut self) {
        self.go_to_page(1)
    }

    pub fn go_to_last_page(&mut self) {
        self.go_to_page(self.total_pages())
    }

    pub fn go_to_next_page(&mut self) {
        if self.has_next_page() {
            self.go_to_page(self.current_page + 1)
        } else {
            debug!("Already on the last page");
        }
    }

    pub fn go_to_previous_page(&mut self) {
        if self.has_previous_page() {
            self.go_to_page(self.current_page - 1)
        } else {
            debug!("Already on the first page");
        }
    }

    /// Change the page size to one of the configured options.
    ///
    /// A successful change always returns to the first page, even when the
    /// size did not actually change.
    pub fn set_rows_per_page(&mut self, rows_per_page: u64) {
        if !self.options.rows_per_page_options.contains(&rows_per_page) {
            debug!(
                "Ignoring rows per page {}, allowed values are {:?}",
                rows_per_page, self.options.rows_per_page_options
            );
            return;
        }
        self.replace_rows_per_page(rows_per_page);
        self.current_page = 1;
    }

    pub fn set_total_items(&mut self, total_items: u64) {
        if total_items != self.total_items {
            debug!("Total items changed from {} to {}", self.total_items, total_items);
            self.total_items = total_items;
        }
        self.clamp_current_page();
    }

    /// Restore page, page size and item count captured at construction.
    ///
    /// The restored page is clamped again, so an initial page past the end
    /// lands on the last page just as it did in [`PaginationState::new`].
    pub fn reset(&mut self) {
        debug!("Resetting pagination");
        self.current_page = self.initial.current_page;
        self.total_items = self.initial.total_items;
        self.replace_rows_per_page(self.initial.rows_per_page);
        self.clamp_current_page();
    }

    pub(crate) fn position(&self) -> (u64, u64, u64) {
        (self.current_page, self.rows_per_page, self.total_items)
    }

    // Every write to rows_per_page goes through here.
    fn replace_rows_per_page(&mut self, rows_per_page: u64) {
        if rows_per_page == self.rows_per_page {
            return;
        }
        debug!(
            "Rows per page changed from {} to {}",
            self.rows_per_page, rows_per_page
        );
        self.rows_per_page = rows_per_page;
        self.clamp_current_page();
    }

    fn clamp_current_page(&mut self) {
        let clamped = self.current_page.clamp(1, self.total_pages());
        if clamped != self.current_page {
            debug!("Clamping page {} to {}", self.current_page, clamped);
            self.current_page = clamped;
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PaginationOptions::default())
    }
}
