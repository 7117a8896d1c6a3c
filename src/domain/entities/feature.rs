//! Feature-grid cards and process steps.

use validator::Validate;

/// A card in the feature grid ("Licensed & insured", "Hurricane-rated materials", ...).
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Feature {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One step of a "how we work" sequence. Step numbers come from position.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ProcessStep {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
}

impl ProcessStep {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
