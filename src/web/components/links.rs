//! Related internal links.

use crate::domain::entities::InternalLink;
use askama::Template;

/// Renders `templates/components/links.html`.
#[derive(Template)]
#[template(path = "components/links.html")]
pub struct InternalLinkList<'a> {
    pub links: &'a [InternalLink],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_rendered() {
        let links = vec![
            InternalLink::new("/services/roofing", "Roofing"),
            InternalLink::new("/locations/tampa", "Tampa"),
        ];
        let html = InternalLinkList { links: &links }.render().unwrap();

        assert!(html.contains("<a href=\"/services/roofing\">Roofing</a>"));
        assert!(html.contains("<a href=\"/locations/tampa\">Tampa</a>"));
    }
}
