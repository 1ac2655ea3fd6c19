//! Offer table rows: expansion state and the details panel model.
//!
//! Rows are identified by their position in the table body at wiring time.
//! Cell positions follow the server template: 0 post date, 1 store,
//! 2 title, 3 price, 5 source.

use std::collections::BTreeSet;

use crate::config::Labels;

#[cfg(test)]
#[path = "rows_test.rs"]
mod rows_test;

/// Rows of the offers table body, details rows included once inserted.
pub const ROW_SELECTOR: &str = ".table tbody tr";
pub const DETAILS_ROW_CLASS: &str = "details-row";
pub const MISSING_CELL: &str = "N/A";

const POSTED_AT_CELL: usize = 0;
const STORE_CELL: usize = 1;
const TITLE_CELL: usize = 2;
const PRICE_CELL: usize = 3;
const SOURCE_CELL: usize = 5;

/// Selector for server-rendered rows only, skipping inserted details rows.
#[must_use]
pub fn data_row_selector() -> String {
    format!("{ROW_SELECTOR}:not(.{DETAILS_ROW_CLASS})")
}

/// Index of a data row inside the table body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub usize);

/// Outcome of [`RowsState::toggle_row_details`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowToggle {
    Expanded,
    Collapsed,
}

/// Which rows currently show a details row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowsState {
    expanded: BTreeSet<RowId>,
}

impl RowsState {
    /// Expand a collapsed row or collapse an expanded one.
    pub fn toggle_row_details(&mut self, row: RowId) -> RowToggle {
        if self.expanded.remove(&row) {
            RowToggle::Collapsed
        } else {
            self.expanded.insert(row);
            RowToggle::Expanded
        }
    }

    #[must_use]
    pub fn is_expanded(&self, row: RowId) -> bool {
        self.expanded.contains(&row)
    }

    pub fn expanded(&self) -> impl Iterator<Item = RowId> + '_ {
        self.expanded.iter().copied()
    }

    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

/// Clicks on links and buttons keep their own behavior and never expand.
#[must_use]
pub fn is_interactive_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("a") || tag_name.eq_ignore_ascii_case("button")
}

/// One labelled value in a details group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

/// Expanded view of one offer row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailsPanel {
    pub title: String,
    pub store: String,
    pub price: String,
    pub posted_at: String,
    pub source: String,
}

impl DetailsPanel {
    /// Build from the row's cell texts; missing or empty cells read `N/A`.
    #[must_use]
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let cell = |index: usize| {
            cells
                .get(index)
                .map(AsRef::as_ref)
                .filter(|text| !text.is_empty())
                .unwrap_or(MISSING_CELL)
                .to_owned()
        };
        Self {
            title: cell(TITLE_CELL),
            store: cell(STORE_CELL),
            price: cell(PRICE_CELL),
            posted_at: cell(POSTED_AT_CELL),
            source: cell(SOURCE_CELL),
        }
    }

    /// The two side-by-side groups: {store, price} and {post date, source}.
    #[must_use]
    pub fn groups(&self, labels: &Labels) -> [[DetailField; 2]; 2] {
        let field = |label: &str, value: &str| DetailField { label: label.to_owned(), value: value.to_owned() };
        [
            [field(&labels.store, &self.store), field(&labels.price, &self.price)],
            [field(&labels.posted_at, &self.posted_at), field(&labels.source, &self.source)],
        ]
    }
}
