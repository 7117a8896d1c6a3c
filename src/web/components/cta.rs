//! Closing call to action.

use super::PhoneLink;
use crate::domain::entities::CallToAction;
use askama::Template;

/// Renders `templates/components/cta.html`.
#[derive(Template)]
#[template(path = "components/cta.html")]
pub struct CallToActionBlock<'a> {
    pub cta: &'a CallToAction,
    pub phone: Option<PhoneLink<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_with_phone() {
        let cta = CallToAction::new("Ready to build?", "Free estimates.", "Request a Quote", "/contact");
        let html = CallToActionBlock {
            cta: &cta,
            phone: Some(PhoneLink {
                display: "(813) 555-0142",
                href: "tel:8135550142".to_string(),
            }),
        }
        .render()
        .unwrap();

        assert!(html.contains("<a class=\"button button--primary\" href=\"/contact\">Request a Quote</a>"));
        assert!(html.contains("href=\"tel:8135550142\""));
        assert!(html.contains("<p>Free estimates.</p>"));
    }

    #[test]
    fn test_cta_without_phone() {
        let cta = CallToAction::new("Ready to build?", "", "Request a Quote", "/contact");
        let html = CallToActionBlock { cta: &cta, phone: None }.render().unwrap();

        assert!(!html.contains("tel:"));
        assert!(!html.contains("<p>"));
    }
}
