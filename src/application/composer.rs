//! Page composer.
//!
//! One parameterized template for every page: the catalog data of a
//! [`PageContent`] is arranged into a fixed ordering of sections, each
//! rendered by a shared component, and paired with its structured data.

use crate::domain::entities::{BusinessInfo, CallToAction, PageContent};
use crate::seo::{JsonLdBlock, StructuredDataEmitter};
use crate::utils::BaseUrl;
use crate::web::components::{
    BreadcrumbNav, CallToActionBlock, CostTableView, FaqAccordion, FeatureGrid, HeroBanner,
    InternalLinkList, IntroSection, PhoneLink, ProcessSteps,
};
use askama::Template;
use std::fmt;
use std::sync::Arc;

pub const FAQ_HEADING: &str = "Frequently Asked Questions";

/// Section slots in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Hero,
    Breadcrumbs,
    Intro,
    Features,
    Process,
    CostTables,
    Faq,
    Links,
    CallToAction,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Breadcrumbs => "breadcrumbs",
            Self::Intro => "intro",
            Self::Features => "features",
            Self::Process => "process",
            Self::CostTables => "cost-tables",
            Self::Faq => "faq",
            Self::Links => "links",
            Self::CallToAction => "cta",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTML of one rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub html: String,
}

/// Everything the page layout needs: head metadata, section HTML and JSON-LD.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    pub route: String,
    pub document_title: String,
    pub meta_description: String,
    pub canonical_url: String,
    pub sections: Vec<RenderedSection>,
    pub structured_data: Vec<JsonLdBlock>,
}

impl ComposedPage {
    pub fn section(&self, kind: SectionKind) -> Option<&RenderedSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }
}

/// Composes pages for one site (one origin, one business).
#[derive(Debug, Clone)]
pub struct PageComposer {
    base_url: BaseUrl,
    business: Arc<BusinessInfo>,
}

impl PageComposer {
    pub fn new(base_url: BaseUrl, business: Arc<BusinessInfo>) -> Self {
        Self { base_url, business }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn business(&self) -> &BusinessInfo {
        &self.business
    }

    /// Composes `page`.
    ///
    /// Empty content omits its section. A component that fails to render is
    /// logged and omitted; composition itself never fails.
    pub fn compose(&self, page: &PageContent) -> ComposedPage {
        let route = page.route.as_str();
        let phone = || PhoneLink::from_business(&self.business);
        let mut sections = Vec::with_capacity(9);

        push(
            &mut sections,
            SectionKind::Hero,
            &HeroBanner {
                hero: &page.hero,
                phone: phone(),
            },
            route,
        );

        if !page.breadcrumbs.is_empty() {
            push(
                &mut sections,
                SectionKind::Breadcrumbs,
                &BreadcrumbNav {
                    trail: &page.breadcrumbs,
                },
                route,
            );
        }

        if !page.intro.is_empty() {
            push(
                &mut sections,
                SectionKind::Intro,
                &IntroSection {
                    paragraphs: &page.intro,
                },
                route,
            );
        }

        if !page.features.is_empty() {
            push(
                &mut sections,
                SectionKind::Features,
                &FeatureGrid {
                    features: &page.features,
                },
                route,
            );
        }

        if !page.process.is_empty() {
            push(
                &mut sections,
                SectionKind::Process,
                &ProcessSteps {
                    steps: &page.process,
                },
                route,
            );
        }

        if let Some(section) = self.cost_tables(page) {
            sections.push(section);
        }

        if !page.faqs.is_empty() {
            push(
                &mut sections,
                SectionKind::Faq,
                &FaqAccordion {
                    heading: FAQ_HEADING,
                    faqs: &page.faqs,
                },
                route,
            );
        }

        if !page.links.is_empty() {
            push(
                &mut sections,
                SectionKind::Links,
                &InternalLinkList { links: &page.links },
                route,
            );
        }

        let default_cta;
        let cta = match &page.cta {
            Some(cta) => cta,
            None => {
                default_cta = self.default_cta();
                &default_cta
            }
        };
        push(
            &mut sections,
            SectionKind::CallToAction,
            &CallToActionBlock {
                cta,
                phone: phone(),
            },
            route,
        );

        let structured_data = StructuredDataEmitter::new(&self.base_url, &self.business).emit(page);

        tracing::debug!(
            %route,
            sections = sections.len(),
            json_ld_blocks = structured_data.len(),
            "Composed page"
        );

        ComposedPage {
            route: page.route.clone(),
            document_title: format!("{} | {}", page.title, self.business.name),
            meta_description: page.meta_description.clone(),
            canonical_url: self.base_url.absolute(&page.route),
            sections,
            structured_data,
        }
    }

    /// Call to action used when a page does not author its own.
    pub fn default_cta(&self) -> CallToAction {
        let areas = &self.business.service_areas;
        let body = if areas.is_empty() {
            "Licensed, insured and ready to help. Request your free, no-obligation estimate today."
                .to_string()
        } else {
            format!(
                "Licensed, insured and proudly serving {}. Request your free, no-obligation estimate today.",
                areas.join(", ")
            )
        };

        CallToAction::new(
            "Ready to Start Your Project?",
            body,
            "Request a Free Estimate",
            "/contact",
        )
    }

    /// All non-empty cost tables as one section; tables without rows are skipped.
    fn cost_tables(&self, page: &PageContent) -> Option<RenderedSection> {
        let mut html = String::new();
        for table in page.cost_tables.iter().filter(|table| !table.is_empty()) {
            match (CostTableView { table }).render() {
                Ok(rendered) => html.push_str(&rendered),
                Err(e) => tracing::warn!(
                    route = %page.route,
                    table = %table.title,
                    error = %e,
                    "Skipping cost table that failed to render"
                ),
            }
        }

        (!html.is_empty()).then(|| RenderedSection {
            kind: SectionKind::CostTables,
            html,
        })
    }
}

fn push<T: Template>(sections: &mut Vec<RenderedSection>, kind: SectionKind, component: &T, route: &str) {
    match component.render() {
        Ok(html) => sections.push(RenderedSection { kind, html }),
        Err(e) => tracing::warn!(%route, section = %kind, error = %e, "Omitting section that failed to render"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        BreadcrumbTrail, CostTable, CostTableRow, FaqItem, Feature, Hero, InternalLink, PageKind,
    };
    use crate::seo::SchemaKind;
    use serde_json::Value;

    fn composer(phone: Option<&str>) -> PageComposer {
        PageComposer::new(
            BaseUrl::parse("https://www.example.com").unwrap(),
            Arc::new(BusinessInfo {
                name: "Gulf Coast Builders".to_string(),
                phone: phone.map(str::to_string),
                email: None,
                address: None,
                license_number: None,
                service_areas: vec!["Tampa".to_string(), "Sarasota".to_string()],
            }),
        )
    }

    fn bare_page() -> PageContent {
        PageContent::new(
            "/services/roofing",
            PageKind::Service,
            "Roofing",
            "Roof replacement and repair",
            Hero::new("Roofing", "Built for hurricane season"),
        )
    }

    fn five_faqs() -> Vec<FaqItem> {
        (1..=5)
            .map(|i| FaqItem::new(format!("Question {i}?"), format!("Answer {i} & more.")))
            .collect()
    }

    #[test]
    fn test_bare_page_renders_hero_and_cta_only() {
        let composed = composer(Some("(813) 555-0142")).compose(&bare_page());

        let kinds: Vec<SectionKind> = composed.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Hero, SectionKind::CallToAction]);
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let page = bare_page()
            .intro(["Intro paragraph."])
            .features(vec![Feature::new("Licensed", "")])
            .process(vec![crate::domain::entities::ProcessStep::new("Inspect", "")])
            .cost_tables(vec![CostTable::new(
                "Costs",
                vec![CostTableRow::new("Shingle", "$9,500 – $16,000", "")],
            )])
            .faqs(five_faqs())
            .breadcrumbs(BreadcrumbTrail::from_pairs([
                ("Home", "/"),
                ("Roofing", "/services/roofing"),
            ]))
            .links(vec![InternalLink::new("/contact", "Contact")]);

        let composed = composer(Some("555-0100")).compose(&page);
        let kinds: Vec<SectionKind> = composed.sections.iter().map(|s| s.kind).collect();

        assert_eq!(
            kinds,
            vec![
                SectionKind::Hero,
                SectionKind::Breadcrumbs,
                SectionKind::Intro,
                SectionKind::Features,
                SectionKind::Process,
                SectionKind::CostTables,
                SectionKind::Faq,
                SectionKind::Links,
                SectionKind::CallToAction,
            ]
        );
    }

    #[test]
    fn test_five_faqs_render_five_entries_and_matching_schema() {
        let page = bare_page().faqs(five_faqs());
        let composed = composer(Some("555-0100")).compose(&page);

        let faq_html = &composed.section(SectionKind::Faq).unwrap().html;
        assert_eq!(faq_html.matches("<details class=\"faq-item\"").count(), 5);

        let block = composed
            .structured_data
            .iter()
            .find(|block| block.kind == SchemaKind::FaqPage)
            .unwrap();
        let json: Value = serde_json::from_str(&block.json).unwrap();
        let entities = json["mainEntity"].as_array().unwrap();

        assert_eq!(entities.len(), 5);
        for (entity, faq) in entities.iter().zip(&page.faqs) {
            assert_eq!(entity["name"], faq.question.as_str());
            assert_eq!(entity["acceptedAnswer"]["text"], faq.answer.as_str());
        }
    }

    #[test]
    fn test_empty_cost_tables_omit_section() {
        let page = bare_page().cost_tables(vec![]);
        assert!(!composer(None).compose(&page).has_section(SectionKind::CostTables));

        let page = bare_page().cost_tables(vec![CostTable::new("Empty", vec![])]);
        assert!(!composer(None).compose(&page).has_section(SectionKind::CostTables));
    }

    #[test]
    fn test_only_non_empty_tables_render() {
        let page = bare_page().cost_tables(vec![
            CostTable::new("Empty", vec![]),
            CostTable::new(
                "Metal Roofs",
                vec![
                    CostTableRow::new("5V crimp", "$14,000 – $22,000", ""),
                    CostTableRow::new("Standing seam", "$18,000 – $32,000", ""),
                ],
            ),
        ]);
        let composed = composer(None).compose(&page);
        let html = &composed.section(SectionKind::CostTables).unwrap().html;

        assert!(!html.contains("Empty"));
        assert_eq!(html.matches("class=\"cost-row\"").count(), 2);
    }

    #[test]
    fn test_default_cta_lists_service_areas() {
        let composed = composer(Some("555-0100")).compose(&bare_page());
        let html = &composed.section(SectionKind::CallToAction).unwrap().html;

        assert!(html.contains("Request a Free Estimate"));
        assert!(html.contains("Tampa, Sarasota"));
        assert!(html.contains("href=\"/contact\""));
    }

    #[test]
    fn test_page_cta_overrides_default() {
        let page = bare_page().cta(CallToAction::new(
            "Storm damage?",
            "",
            "Book an Inspection",
            "/services/roofing",
        ));
        let composed = composer(None).compose(&page);
        let html = &composed.section(SectionKind::CallToAction).unwrap().html;

        assert!(html.contains("Book an Inspection"));
        assert!(!html.contains("Request a Free Estimate"));
    }

    #[test]
    fn test_head_metadata() {
        let composed = composer(None).compose(&bare_page());

        assert_eq!(composed.document_title, "Roofing | Gulf Coast Builders");
        assert_eq!(composed.canonical_url, "https://www.example.com/services/roofing");
        assert_eq!(composed.meta_description, "Roof replacement and repair");
    }

    #[test]
    fn test_missing_phone_omits_local_business_but_renders_page() {
        let composed = composer(None).compose(&bare_page());

        assert!(composed.structured_data.is_empty());
        assert!(composed.has_section(SectionKind::Hero));
        assert!(composed.has_section(SectionKind::CallToAction));
    }
}
