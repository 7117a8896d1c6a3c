//! Authored site content.
//!
//! Each submodule declares the copy for a group of pages. [`pages`] returns
//! the whole catalog in the order it is listed in the sitemap.

mod business;
mod company;
mod guides;
mod home;
mod locations;
mod services;

pub use business::{BUSINESS_NAME, BUSINESS_PHONE, SERVICE_AREAS, business};

use crate::domain::entities::{
    BreadcrumbTrail, Feature, InternalLink, NavItem, PageContent, ProcessStep,
};

/// Main navigation shown in the site header.
pub const NAVIGATION: &[NavItem] = &[
    NavItem { path: "/services", label: "Services" },
    NavItem { path: "/locations", label: "Service Areas" },
    NavItem { path: "/guides", label: "Cost Guides" },
    NavItem { path: "/faq", label: "FAQ" },
    NavItem { path: "/about", label: "About" },
    NavItem { path: "/contact", label: "Contact" },
];

/// Navigation entries as links, for the audit.
pub fn navigation_links() -> Vec<InternalLink> {
    NAVIGATION.iter().map(InternalLink::from).collect()
}

/// Every page of the site.
pub fn pages() -> Vec<PageContent> {
    let mut pages = vec![home::page()];
    pages.extend(services::pages());
    pages.extend(locations::pages());
    pages.extend(guides::pages());
    pages.extend(company::pages());
    pages
}

/// `Home > ... > current` trail; `ancestors` excludes home and the page itself.
fn trail(ancestors: &[(&str, &str)], name: &str, route: &str) -> BreadcrumbTrail {
    BreadcrumbTrail::from_pairs(
        std::iter::once(("Home", "/"))
            .chain(ancestors.iter().copied())
            .chain(std::iter::once((name, route))),
    )
}

fn link(path: &str, label: &str) -> InternalLink {
    InternalLink::new(path, label)
}

/// Trust badges repeated on service and location pages.
fn standard_features() -> Vec<Feature> {
    vec![
        Feature::new(
            "State Certified",
            format!("Certified general contractor, Florida license #{}.", business::LICENSE_NUMBER),
        ),
        Feature::new(
            "Built to Florida Code",
            "Every project is engineered to the Florida Building Code high-wind provisions.",
        ),
        Feature::new(
            "Fully Insured",
            "General liability and workers' compensation coverage on every job site.",
        ),
        Feature::new(
            "Written Warranty",
            "Workmanship warranties in writing, backed by manufacturer coverage.",
        ),
    ]
}

fn standard_process() -> Vec<ProcessStep> {
    vec![
        ProcessStep::new(
            "Free Consultation",
            "We visit your property, listen to your goals and take measurements.",
        ),
        ProcessStep::new(
            "Detailed Estimate",
            "You receive a line-item proposal with materials, schedule and payment milestones.",
        ),
        ProcessStep::new(
            "Permits & Scheduling",
            "We pull every permit and coordinate inspections with the county.",
        ),
        ProcessStep::new(
            "Construction",
            "A dedicated project manager keeps the site clean and you informed every week.",
        ),
        ProcessStep::new(
            "Final Walkthrough",
            "We walk the finished project with you and hand over warranties and documents.",
        ),
    ]
}
