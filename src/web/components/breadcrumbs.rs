//! Breadcrumb trail navigation.

use crate::domain::entities::BreadcrumbTrail;
use askama::Template;

/// Renders `templates/components/breadcrumbs.html`.
///
/// Ancestors are links; the final crumb is the current page and is marked
/// with `aria-current`.
#[derive(Template)]
#[template(path = "components/breadcrumbs.html")]
pub struct BreadcrumbNav<'a> {
    pub trail: &'a BreadcrumbTrail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_crumb_is_current() {
        let trail = BreadcrumbTrail::from_pairs([
            ("Home", "/"),
            ("Services", "/services"),
            ("Roofing", "/services/roofing"),
        ]);
        let html = BreadcrumbNav { trail: &trail }.render().unwrap();

        assert!(html.contains("<a href=\"/\">Home</a>"));
        assert!(html.contains("<a href=\"/services\">Services</a>"));
        assert!(html.contains("<span aria-current=\"page\">Roofing</span>"));
        assert!(!html.contains("href=\"/services/roofing\""));
        assert_eq!(html.matches("<li>").count(), 3);
    }
}
