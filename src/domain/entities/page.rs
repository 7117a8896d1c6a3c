//! The page content bundle that drives one page's rendering.

use super::{
    ArticleMeta, BreadcrumbTrail, CostTable, FaqItem, Feature, InternalLink, ProcessStep,
};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use validator::Validate;

/// Lowercase, hyphenated path segments; `/` alone is the home page.
static ROUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/$|^(/[a-z0-9]+(-[a-z0-9]+)*)+$").unwrap()
});

/// Broad category of a page, used for listings and the sitemap priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Service,
    Location,
    Faq,
    CostGuide,
    Company,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Service => "service",
            Self::Location => "location",
            Self::Faq => "faq",
            Self::CostGuide => "cost-guide",
            Self::Company => "company",
        }
    }

    /// Sitemap priority hint.
    pub fn priority(&self) -> &'static str {
        match self {
            Self::Home => "1.0",
            Self::Service | Self::Location => "0.8",
            Self::CostGuide | Self::Faq => "0.7",
            Self::Company => "0.5",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hero banner at the top of every page.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Hero {
    #[validate(length(min = 1))]
    pub heading: String,
    pub subheading: String,
    pub image: String,
    pub image_alt: String,
}

impl Hero {
    pub fn new(heading: impl Into<String>, subheading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            subheading: subheading.into(),
            image: "/static/img/hero-default.jpg".to_string(),
            image_alt: String::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = image.into();
        self.image_alt = alt.into();
        self
    }
}

/// Closing call-to-action block.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CallToAction {
    #[validate(length(min = 1))]
    pub heading: String,
    pub body: String,
    #[validate(length(min = 1))]
    pub button_label: String,
    #[validate(length(min = 1))]
    pub button_path: String,
}

impl CallToAction {
    pub fn new(
        heading: impl Into<String>,
        body: impl Into<String>,
        button_label: impl Into<String>,
        button_path: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
            button_label: button_label.into(),
            button_path: button_path.into(),
        }
    }
}

/// A page's full set of section data.
///
/// Built once when the catalog is assembled and never mutated afterwards.
/// Empty collections are legal: the composer omits the matching section.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PageContent {
    #[validate(regex(path = "*ROUTE_REGEX", message = "Route must be a lowercase hyphenated path"))]
    pub route: String,

    pub kind: PageKind,

    #[validate(length(min = 1, max = 70, message = "Title must be 1-70 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 170, message = "Meta description must be 1-170 characters"))]
    pub meta_description: String,

    #[validate(nested)]
    pub hero: Hero,

    pub intro: Vec<String>,

    #[validate(nested)]
    pub features: Vec<Feature>,

    #[validate(nested)]
    pub process: Vec<ProcessStep>,

    #[validate(nested)]
    pub cost_tables: Vec<CostTable>,

    #[validate(nested)]
    pub faqs: Vec<FaqItem>,

    #[validate(nested)]
    pub breadcrumbs: BreadcrumbTrail,

    #[validate(nested)]
    pub links: Vec<InternalLink>,

    #[validate(nested)]
    pub article: Option<ArticleMeta>,

    #[validate(nested)]
    pub cta: Option<CallToAction>,
}

impl PageContent {
    /// Starts a page with only the mandatory fields; everything else is empty.
    pub fn new(
        route: impl Into<String>,
        kind: PageKind,
        title: impl Into<String>,
        meta_description: impl Into<String>,
        hero: Hero,
    ) -> Self {
        Self {
            route: route.into(),
            kind,
            title: title.into(),
            meta_description: meta_description.into(),
            hero,
            intro: Vec::new(),
            features: Vec::new(),
            process: Vec::new(),
            cost_tables: Vec::new(),
            faqs: Vec::new(),
            breadcrumbs: BreadcrumbTrail::default(),
            links: Vec::new(),
            article: None,
            cta: None,
        }
    }

    pub fn intro<I, S>(mut self, paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intro = paragraphs.into_iter().map(Into::into).collect();
        self
    }

    pub fn features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    pub fn process(mut self, steps: Vec<ProcessStep>) -> Self {
        self.process = steps;
        self
    }

    pub fn cost_tables(mut self, tables: Vec<CostTable>) -> Self {
        self.cost_tables = tables;
        self
    }

    pub fn faqs(mut self, faqs: Vec<FaqItem>) -> Self {
        self.faqs = faqs;
        self
    }

    pub fn breadcrumbs(mut self, trail: BreadcrumbTrail) -> Self {
        self.breadcrumbs = trail;
        self
    }

    pub fn links(mut self, links: Vec<InternalLink>) -> Self {
        self.links = links;
        self
    }

    pub fn article(mut self, article: ArticleMeta) -> Self {
        self.article = Some(article);
        self
    }

    pub fn cta(mut self, cta: CallToAction) -> Self {
        self.cta = Some(cta);
        self
    }

    /// Every path this page points at: internal links plus the CTA target.
    pub fn outgoing_paths(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .map(|link| link.path.as_str())
            .chain(self.cta.iter().map(|cta| cta.button_path.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(route: &str) -> PageContent {
        PageContent::new(
            route,
            PageKind::Service,
            "Roofing",
            "Roof replacement in Tampa Bay",
            Hero::new("Roofing", "Built for hurricane season"),
        )
    }

    #[test]
    fn test_new_page_has_empty_sections() {
        let page = page("/services/roofing");

        assert!(page.intro.is_empty());
        assert!(page.faqs.is_empty());
        assert!(page.cost_tables.is_empty());
        assert!(page.breadcrumbs.is_empty());
        assert!(page.article.is_none());
    }

    #[test]
    fn test_route_format() {
        assert!(page("/").validate().is_ok());
        assert!(page("/services/roofing").validate().is_ok());
        assert!(page("/locations/st-petersburg").validate().is_ok());

        assert!(page("services").validate().is_err());
        assert!(page("/Services").validate().is_err());
        assert!(page("/services/").validate().is_err());
        assert!(page("/services//roofing").validate().is_err());
        assert!(page("/roof_repair").validate().is_err());
    }

    #[test]
    fn test_nested_validation_reaches_faqs() {
        let page = page("/faq").faqs(vec![FaqItem::new("", "answer")]);

        assert!(page.validate().is_err());
    }

    #[test]
    fn test_outgoing_paths_include_cta() {
        let page = page("/services/roofing")
            .links(vec![InternalLink::new("/services/remodeling", "Remodeling")])
            .cta(CallToAction::new("Call us", "", "Get a quote", "/contact"));

        let paths: Vec<&str> = page.outgoing_paths().collect();
        assert_eq!(paths, vec!["/services/remodeling", "/contact"]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PageKind::CostGuide.to_string(), "cost-guide");
        assert_eq!(PageKind::Home.priority(), "1.0");
    }
}
