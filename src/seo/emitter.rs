//! Structured-data emitter.
//!
//! Translates the SEO-relevant subset of a [`PageContent`] into schema.org
//! JSON-LD blocks. A block whose required fields are missing is skipped
//! rather than failing the page.

use super::json_ld::{
    AnswerSchema, ArticleSchema, BreadcrumbListSchema, FaqPageSchema, JsonLdBlock,
    ListItemSchema, LocalBusinessSchema, OrganizationSchema, PostalAddressSchema, QuestionSchema,
    SCHEMA_CONTEXT, SchemaKind,
};
use crate::domain::entities::{ArticleMeta, BreadcrumbTrail, BusinessInfo, FaqItem, PageContent};
use crate::utils::BaseUrl;
use serde::Serialize;

/// Emits JSON-LD for pages of one site.
pub struct StructuredDataEmitter<'a> {
    base_url: &'a BaseUrl,
    business: &'a BusinessInfo,
}

impl<'a> StructuredDataEmitter<'a> {
    pub fn new(base_url: &'a BaseUrl, business: &'a BusinessInfo) -> Self {
        Self { base_url, business }
    }

    /// Emits every applicable block for `page`, in a stable order:
    /// LocalBusiness, BreadcrumbList, FAQPage, Article.
    pub fn emit(&self, page: &PageContent) -> Vec<JsonLdBlock> {
        let mut blocks = Vec::with_capacity(4);

        if let Some(schema) = self.local_business() {
            push_block(&mut blocks, SchemaKind::LocalBusiness, &schema, &page.route);
        }
        if let Some(schema) = self.breadcrumb_list(&page.breadcrumbs) {
            push_block(&mut blocks, SchemaKind::BreadcrumbList, &schema, &page.route);
        }
        if let Some(schema) = faq_page(&page.faqs) {
            push_block(&mut blocks, SchemaKind::FaqPage, &schema, &page.route);
        }
        if let Some(meta) = &page.article
            && let Some(schema) = self.article(meta, &page.route)
        {
            push_block(&mut blocks, SchemaKind::Article, &schema, &page.route);
        }

        blocks
    }

    /// `LocalBusiness` identity block; `None` when name or phone is blank.
    pub fn local_business(&self) -> Option<LocalBusinessSchema<'a>> {
        let business = self.business;
        let name = business.name.trim();
        if name.is_empty() {
            return None;
        }
        let telephone = business.phone()?;

        Some(LocalBusinessSchema {
            context: SCHEMA_CONTEXT,
            schema_type: "GeneralContractor",
            name,
            telephone,
            url: self.base_url.absolute("/"),
            email: business.email.as_deref(),
            address: business.address.as_ref().map(|address| PostalAddressSchema {
                schema_type: "PostalAddress",
                street_address: &address.street,
                address_locality: &address.locality,
                address_region: &address.region,
                postal_code: &address.postal_code,
                address_country: &address.country,
            }),
            area_served: business.service_areas.iter().map(String::as_str).collect(),
        })
    }

    /// `BreadcrumbList` with 1-based positions and absolute item URLs.
    pub fn breadcrumb_list<'t>(&self, trail: &'t BreadcrumbTrail) -> Option<BreadcrumbListSchema<'t>> {
        if trail.is_empty() {
            return None;
        }

        Some(BreadcrumbListSchema {
            context: SCHEMA_CONTEXT,
            schema_type: "BreadcrumbList",
            item_list_element: trail
                .iter()
                .enumerate()
                .map(|(index, crumb)| ListItemSchema {
                    schema_type: "ListItem",
                    position: index + 1,
                    name: &crumb.name,
                    item: self.base_url.absolute(&crumb.path),
                })
                .collect(),
        })
    }

    /// `Article` block; `None` when the headline is blank.
    pub fn article<'m>(&self, meta: &'m ArticleMeta, route: &str) -> Option<ArticleSchema<'m>>
    where
        'a: 'm,
    {
        if meta.headline.trim().is_empty() {
            return None;
        }

        let organization = OrganizationSchema {
            schema_type: "Organization",
            name: &self.business.name,
        };

        Some(ArticleSchema {
            context: SCHEMA_CONTEXT,
            schema_type: "Article",
            headline: &meta.headline,
            description: &meta.description,
            date_published: meta.date_published,
            date_modified: meta.date_modified,
            main_entity_of_page: self.base_url.absolute(route),
            author: organization.clone(),
            publisher: organization,
        })
    }
}

/// `FAQPage` block in page order; `None` when there are no FAQs.
pub fn faq_page(faqs: &[FaqItem]) -> Option<FaqPageSchema<'_>> {
    if faqs.is_empty() {
        return None;
    }

    Some(FaqPageSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "FAQPage",
        main_entity: faqs
            .iter()
            .map(|faq| QuestionSchema {
                schema_type: "Question",
                name: &faq.question,
                accepted_answer: AnswerSchema {
                    schema_type: "Answer",
                    text: &faq.answer,
                },
            })
            .collect(),
    })
}

/// Serializes `schema` so it can sit inside a `<script>` element.
///
/// `</` is written as `<\/`, which JSON parsers read back unchanged.
pub fn to_script_json<T: Serialize>(schema: &T) -> serde_json::Result<String> {
    serde_json::to_string(schema).map(|json| json.replace("</", "<\\/"))
}

fn push_block<T: Serialize>(blocks: &mut Vec<JsonLdBlock>, kind: SchemaKind, schema: &T, route: &str) {
    match to_script_json(schema) {
        Ok(json) => blocks.push(JsonLdBlock { kind, json }),
        Err(e) => tracing::warn!(%route, schema = %kind, error = %e, "Skipping structured data block"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Hero, PageKind, PostalAddress, ymd};
    use serde_json::Value;

    fn base_url() -> BaseUrl {
        BaseUrl::parse("https://www.example.com").unwrap()
    }

    fn business(phone: Option<&str>) -> BusinessInfo {
        BusinessInfo {
            name: "Gulf Coast Builders".to_string(),
            phone: phone.map(str::to_string),
            email: Some("office@example.com".to_string()),
            address: Some(PostalAddress {
                street: "100 Bayshore Blvd".to_string(),
                locality: "Tampa".to_string(),
                region: "FL".to_string(),
                postal_code: "33606".to_string(),
                country: "US".to_string(),
            }),
            license_number: None,
            service_areas: vec!["Tampa".to_string(), "Sarasota".to_string()],
        }
    }

    fn page() -> PageContent {
        PageContent::new(
            "/guides/roof-replacement-cost",
            PageKind::CostGuide,
            "Roof Replacement Cost",
            "What a new roof costs in Florida",
            Hero::new("Roof Replacement Cost", ""),
        )
        .breadcrumbs(BreadcrumbTrail::from_pairs([
            ("Home", "/"),
            ("Guides", "/guides"),
            ("Roof Replacement Cost", "/guides/roof-replacement-cost"),
        ]))
        .faqs(vec![
            FaqItem::new("How long does a roof last?", "Shingles last 15-20 years."),
            FaqItem::new("Is metal worth it?", "Metal resists wind <and> salt air."),
        ])
        .article(ArticleMeta::new(
            "Roof Replacement Cost in Florida",
            "Price ranges by material",
            ymd(2024, 2, 1),
            ymd(2024, 8, 15),
        ))
    }

    fn parse(block: &JsonLdBlock) -> Value {
        serde_json::from_str(&block.json).unwrap()
    }

    #[test]
    fn test_emit_all_blocks_in_order() {
        let base_url = base_url();
        let business = business(Some("(813) 555-0142"));
        let blocks = StructuredDataEmitter::new(&base_url, &business).emit(&page());

        let kinds: Vec<SchemaKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SchemaKind::LocalBusiness,
                SchemaKind::BreadcrumbList,
                SchemaKind::FaqPage,
                SchemaKind::Article
            ]
        );
    }

    #[test]
    fn test_local_business_skipped_without_phone() {
        let base_url = base_url();
        let business = business(None);
        let blocks = StructuredDataEmitter::new(&base_url, &business).emit(&page());

        assert!(blocks.iter().all(|b| b.kind != SchemaKind::LocalBusiness));
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_local_business_fields() {
        let base_url = base_url();
        let business = business(Some("(813) 555-0142"));
        let schema = StructuredDataEmitter::new(&base_url, &business)
            .local_business()
            .unwrap();
        let json: Value = serde_json::to_value(&schema).unwrap();

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "GeneralContractor");
        assert_eq!(json["telephone"], "(813) 555-0142");
        assert_eq!(json["url"], "https://www.example.com/");
        assert_eq!(json["address"]["addressLocality"], "Tampa");
        assert_eq!(json["areaServed"][1], "Sarasota");
    }

    #[test]
    fn test_breadcrumb_positions_and_urls() {
        let base_url = base_url();
        let business = business(Some("555"));
        let page = page();
        let schema = StructuredDataEmitter::new(&base_url, &business)
            .breadcrumb_list(&page.breadcrumbs)
            .unwrap();
        let json: Value = serde_json::to_value(&schema).unwrap();

        let items = json["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["item"], "https://www.example.com/");
        assert_eq!(items[2]["position"], 3);
        assert_eq!(
            items[2]["item"],
            "https://www.example.com/guides/roof-replacement-cost"
        );
    }

    #[test]
    fn test_empty_trail_emits_nothing() {
        let base_url = base_url();
        let business = business(Some("555"));

        assert!(
            StructuredDataEmitter::new(&base_url, &business)
                .breadcrumb_list(&BreadcrumbTrail::default())
                .is_none()
        );
    }

    #[test]
    fn test_faq_text_is_identical_and_ordered() {
        let page = page();
        let block = to_script_json(&faq_page(&page.faqs).unwrap()).unwrap();
        let json: Value = serde_json::from_str(&block).unwrap();

        let entities = json["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), page.faqs.len());
        for (entity, faq) in entities.iter().zip(&page.faqs) {
            assert_eq!(entity["@type"], "Question");
            assert_eq!(entity["name"], faq.question.as_str());
            assert_eq!(entity["acceptedAnswer"]["text"], faq.answer.as_str());
        }
    }

    #[test]
    fn test_no_faqs_no_block() {
        assert!(faq_page(&[]).is_none());
    }

    #[test]
    fn test_article_dates_are_iso() {
        let base_url = base_url();
        let business = business(Some("555"));
        let blocks = StructuredDataEmitter::new(&base_url, &business).emit(&page());
        let article = blocks
            .iter()
            .find(|b| b.kind == SchemaKind::Article)
            .map(parse)
            .unwrap();

        assert_eq!(article["datePublished"], "2024-02-01");
        assert_eq!(article["dateModified"], "2024-08-15");
        assert_eq!(article["publisher"]["name"], "Gulf Coast Builders");
        assert_eq!(
            article["mainEntityOfPage"],
            "https://www.example.com/guides/roof-replacement-cost"
        );
    }

    #[test]
    fn test_script_json_escapes_closing_tags() {
        let faqs = vec![FaqItem::new("Tag?", "</script><b>hi</b>")];
        let json = to_script_json(&faq_page(&faqs).unwrap()).unwrap();

        assert!(!json.contains("</"));
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["mainEntity"][0]["acceptedAnswer"]["text"], "</script><b>hi</b>");
    }
}
