use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PaginationState;

/// A navigation or mutation request coming from a pager control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "action", content = "value")]
pub enum PaginationAction {
    First,
    Previous,
    Next,
    Last,
    GoTo(u64),
    SetRowsPerPage(u64),
    SetTotalItems(u64),
    Reset,
}

impl PaginationState {
    /// Run `action` and report whether page, page size or item count changed.
    pub fn apply(&mut self, action: PaginationAction) -> bool {
        let before = self.position();
        match action {
            PaginationAction::First => self.go_to_first_page(),
            PaginationAction::Previous => self.go_to_previous_page(),
            PaginationAction::Next => self.go_to_next_page(),
            PaginationAction::Last => self.go_to_last_page(),
            PaginationAction::GoTo(page) => self.go_to_page(page),
            PaginationAction::SetRowsPerPage(rows) => self.set_rows_per_page(rows),
            PaginationAction::SetTotalItems(total) => self.set_total_items(total),
            PaginationAction::Reset => self.reset(),
        }
        let changed = before != self.position();
        debug!("Applied {:?}, changed: {}", action, changed);
        changed
    }
}
