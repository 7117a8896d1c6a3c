//! FAQ entity shared by the visible accordion and the FAQPage structured data.

use validator::Validate;

/// A single question/answer pair.
///
/// The same strings feed both the accordion and the emitted `FAQPage` block,
/// so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct FaqItem {
    #[validate(length(min = 1, message = "FAQ question must not be empty"))]
    pub question: String,

    #[validate(length(min = 1, message = "FAQ answer must not be empty"))]
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_item_creation() {
        let item = FaqItem::new("Do you pull permits?", "Yes, for every job.");

        assert_eq!(item.question, "Do you pull permits?");
        assert_eq!(item.answer, "Yes, for every job.");
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_faq_item_rejects_blank_answer() {
        let item = FaqItem::new("Do you pull permits?", "");

        let errors = item.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("answer"));
    }
}
