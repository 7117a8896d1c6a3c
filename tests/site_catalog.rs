mod common;

use contractor_site::application::SectionKind;
use contractor_site::content;
use contractor_site::domain::repositories::PageRepository;
use contractor_site::server::{audit_site, site_page_service};

#[test]
fn test_site_audit_is_clean() {
    let page_service = site_page_service(common::base_url());

    let report = audit_site(&page_service);

    let issues: Vec<String> = report.issues.iter().map(ToString::to_string).collect();
    assert!(issues.is_empty(), "audit issues: {issues:#?}");
    assert_eq!(report.pages_checked, content::pages().len());
}

#[test]
fn test_breadcrumbs_end_at_route() {
    for page in content::pages() {
        if let Some(last) = page.breadcrumbs.last() {
            assert_eq!(last.path, page.route);
        }
    }
}

#[test]
fn test_every_page_gets_a_closing_cta() {
    let page_service = site_page_service(common::base_url());

    for page in page_service.repository().list() {
        let composed = page_service.compose(&page.route).unwrap();
        assert!(
            composed.has_section(SectionKind::CallToAction),
            "no CTA on {}",
            page.route
        );
    }
}

#[test]
fn test_catalog_covers_the_site() {
    let routes: Vec<String> = content::pages().into_iter().map(|page| page.route).collect();

    for expected in [
        "/",
        "/services/roofing",
        "/locations/tampa",
        "/guides/roof-replacement-cost",
        "/faq",
        "/contact",
    ] {
        assert!(routes.iter().any(|route| route == expected), "missing {expected}");
    }
}
