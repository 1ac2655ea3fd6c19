//! Search filtering and sort-indicator state for the offer table.
//!
//! Sorting is indicator-only: headers cycle their `asc`/`desc` marker and
//! the choice is logged, rows stay in server order.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Lower-cased search term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self { term: raw.to_lowercase() }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Case-insensitive substring match against a row's full text.
    #[must_use]
    pub fn matches(&self, row_text: &str) -> bool {
        self.term.is_empty() || row_text.to_lowercase().contains(&self.term)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a `data-order` value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Asc => "sort-asc",
            Self::Desc => "sort-desc",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// One sortable column header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortHeader {
    /// Value of the header's `data-column` attribute.
    pub column: Option<String>,
    pub order: Option<SortOrder>,
}

impl SortHeader {
    /// Header as rendered by the server: `data-column` and `data-order`.
    #[must_use]
    pub fn from_attributes(column: Option<String>, order: Option<&str>) -> Self {
        Self { column, order: order.and_then(SortOrder::parse) }
    }

    /// Column name used in log output.
    #[must_use]
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or("undefined")
    }
}

/// Indicator state across all sortable headers; at most one is ordered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    headers: Vec<SortHeader>,
}

impl SortState {
    #[must_use]
    pub fn new(headers: Vec<SortHeader>) -> Self {
        Self { headers }
    }

    #[must_use]
    pub fn headers(&self) -> &[SortHeader] {
        &self.headers
    }

    /// Handle a click on header `index`.
    ///
    /// An unmarked header counts as `asc`, so its first click yields `desc`.
    /// Returns the clicked header's new order, `None` for an unknown index.
    pub fn click(&mut self, index: usize) -> Option<SortOrder> {
        let current = self.headers.get(index)?.order.unwrap_or(SortOrder::Asc);
        let next = current.flipped();
        for header in &mut self.headers {
            header.order = None;
        }
        self.headers[index].order = Some(next);
        Some(next)
    }

    /// `(index, order)` of the marked header, if any.
    #[must_use]
    pub fn active(&self) -> Option<(usize, SortOrder)> {
        self.headers.iter().enumerate().find_map(|(i, h)| h.order.map(|o| (i, o)))
    }
}
