//! Human readable summaries of a pagination state.

use super::{options::DEFAULT_THOUSANDS_SEPARATOR, PaginationState};

/// Group the digits of `value` in threes, e.g. `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len_utf8());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// `"1 {singular}"` for exactly one, otherwise the grouped count and `plural`.
pub fn format_items_text(count: u64, singular: &str, plural: &str) -> String {
    items_text(count, singular, plural, DEFAULT_THOUSANDS_SEPARATOR)
}

/// [`format_items_text`] with "item" / "items".
pub fn format_item_count(count: u64) -> String {
    format_items_text(count, "item", "items")
}

fn items_text(count: u64, singular: &str, plural: &str, separator: char) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{} {plural}", group_thousands(count, separator))
    }
}

impl PaginationState {
    /// Like [`format_items_text`], grouping digits with the configured separator.
    pub fn format_items_text(&self, count: u64, singular: &str, plural: &str) -> String {
        items_text(count, singular, plural, self.options().thousands_separator)
    }

    /// `"Page 2 of 5 • 95 items"`, shortened when there is a single page.
    pub fn format_page_info(&self) -> String {
        if self.total_items() == 0 {
            return "No items".to_string();
        }
        let items = self.format_items_text(self.total_items(), "item", "items");
        if self.total_pages() == 1 {
            return items;
        }
        format!(
            "Page {} of {} • {}",
            self.current_page(),
            self.total_pages(),
            items
        )
    }

    /// `"Showing 21-40 of 95 items"`.
    pub fn format_range_info(&self) -> String {
        if self.total_items() == 0 {
            return "No items to display".to_string();
        }
        format!(
            "Showing {}-{} of {} items",
            self.start_item(),
            self.end_item(),
            self.total_items()
        )
    }
}
