//! Article metadata for guide-style pages.

use chrono::NaiveDate;
use validator::{Validate, ValidationError};

/// Publication metadata emitted as an `Article` block.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_dates"))]
pub struct ArticleMeta {
    #[validate(length(min = 1, max = 110, message = "Headline must be 1-110 characters"))]
    pub headline: String,

    #[validate(length(min = 1, message = "Article description must not be empty"))]
    pub description: String,

    pub date_published: NaiveDate,
    pub date_modified: NaiveDate,
}

impl ArticleMeta {
    pub fn new(
        headline: impl Into<String>,
        description: impl Into<String>,
        date_published: NaiveDate,
        date_modified: NaiveDate,
    ) -> Self {
        Self {
            headline: headline.into(),
            description: description.into(),
            date_published,
            date_modified,
        }
    }
}

fn validate_dates(meta: &ArticleMeta) -> Result<(), ValidationError> {
    if meta.date_modified < meta.date_published {
        let mut error = ValidationError::new("date_order");
        error.message = Some("dateModified is earlier than datePublished".into());
        return Err(error);
    }
    Ok(())
}

/// Builds a calendar date for authored content; invalid dates collapse to
/// [`NaiveDate::MIN`], which the date-order check then flags.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
