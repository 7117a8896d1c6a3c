//! Cost guide tables.
//!
//! Rows are presentational only: value ranges are display strings and no
//! arithmetic is ever performed on them.

use validator::Validate;

/// One row of a cost table, e.g. `("Architectural shingles", "$9,500 – $16,000", "per 2,000 sq ft")`.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CostTableRow {
    #[validate(length(min = 1, message = "Cost row label must not be empty"))]
    pub label: String,

    #[validate(length(min = 1, message = "Cost row value range must not be empty"))]
    pub value_range: String,

    pub notes: String,
}

impl CostTableRow {
    pub fn new(
        label: impl Into<String>,
        value_range: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value_range: value_range.into(),
            notes: notes.into(),
        }
    }
}

/// A titled table of cost rows.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CostTable {
    #[validate(length(min = 1, message = "Cost table title must not be empty"))]
    pub title: String,

    pub caption: Option<String>,

    #[validate(nested)]
    pub rows: Vec<CostTableRow>,
}

impl CostTable {
    pub fn new(title: impl Into<String>, rows: Vec<CostTableRow>) -> Self {
        Self {
            title: title.into(),
            caption: None,
            rows,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
