//! XML sitemap and robots.txt generation.

use crate::domain::entities::PageContent;
use crate::utils::BaseUrl;
use askama::Template;
use chrono::NaiveDate;

/// One `<url>` entry of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub priority: &'static str,
}

impl SitemapEntry {
    pub fn for_page(base_url: &BaseUrl, page: &PageContent) -> Self {
        Self {
            loc: base_url.absolute(&page.route),
            lastmod: page.article.as_ref().map(|article| article.date_modified),
            priority: page.kind.priority(),
        }
    }
}

/// Renders `templates/sitemap.xml`.
#[derive(Template)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate<'a> {
    pub entries: &'a [SitemapEntry],
}

/// Builds the sitemap document for `pages`.
pub fn render_sitemap<'p>(
    base_url: &BaseUrl,
    pages: impl IntoIterator<Item = &'p PageContent>,
) -> askama::Result<String> {
    let entries: Vec<SitemapEntry> = pages
        .into_iter()
        .map(|page| SitemapEntry::for_page(base_url, page))
        .collect();

    SitemapTemplate { entries: &entries }.render()
}

/// robots.txt allowing every crawler and pointing at the sitemap.
pub fn robots_txt(base_url: &BaseUrl) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        base_url.absolute("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ArticleMeta, Hero, PageKind, ymd};

    fn pages() -> Vec<PageContent> {
        vec![
            PageContent::new("/", PageKind::Home, "Home", "Home page", Hero::new("Home", "")),
            PageContent::new(
                "/guides/roof-replacement-cost",
                PageKind::CostGuide,
                "Roof cost",
                "Roof cost guide",
                Hero::new("Roof cost", ""),
            )
            .article(ArticleMeta::new("Roof cost", "Guide", ymd(2024, 1, 5), ymd(2024, 3, 9))),
        ]
    }

    #[test]
    fn test_sitemap_lists_every_page() {
        let base_url = BaseUrl::parse("https://www.example.com").unwrap();
        let pages = pages();
        let xml = render_sitemap(&base_url, &pages).unwrap();

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://www.example.com/</loc>"));
        assert!(xml.contains("<loc>https://www.example.com/guides/roof-replacement-cost</loc>"));
        assert!(xml.contains("<lastmod>2024-03-09</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let base_url = BaseUrl::parse("https://www.example.com").unwrap();

        assert_eq!(
            robots_txt(&base_url),
            "User-agent: *\nAllow: /\n\nSitemap: https://www.example.com/sitemap.xml\n"
        );
    }
}
