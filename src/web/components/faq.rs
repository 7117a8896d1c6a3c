//! FAQ accordion.

use crate::domain::entities::FaqItem;
use askama::Template;

/// Renders `templates/components/faq.html`.
///
/// Each pair becomes a native `<details>` element, so the open/closed state
/// lives in the browser only.
#[derive(Template)]
#[template(path = "components/faq.html")]
pub struct FaqAccordion<'a> {
    pub heading: &'a str,
    pub faqs: &'a [FaqItem],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_item_in_order() {
        let faqs = vec![
            FaqItem::new("Do you pull permits?", "Yes."),
            FaqItem::new("Are you insured?", "Yes, fully."),
        ];
        let html = FaqAccordion {
            heading: "Frequently Asked Questions",
            faqs: &faqs,
        }
        .render()
        .unwrap();

        assert_eq!(html.matches("<details class=\"faq-item\"").count(), 2);
        let first = html.find("Do you pull permits?").unwrap();
        let second = html.find("Are you insured?").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_markup_in_answers_is_escaped() {
        let faqs = vec![FaqItem::new("Q", "<script>alert(1)</script>")];
        let html = FaqAccordion { heading: "FAQ", faqs: &faqs }.render().unwrap();

        assert!(!html.contains("<script>"));
    }
}
