use super::{link, standard_features, standard_process, trail};
use crate::domain::entities::{FaqItem, Feature, Hero, PageContent, PageKind};

const LOCATIONS: (&str, &str) = ("Service Areas", "/locations");

pub(super) fn pages() -> Vec<PageContent> {
    vec![hub(), tampa(), sarasota(), st_petersburg()]
}

fn hub() -> PageContent {
    PageContent::new(
        "/locations",
        PageKind::Location,
        "Service Areas Across Tampa Bay",
        "Gulf Coast Builders serves Tampa, St. Petersburg, Clearwater, Sarasota, Bradenton and Brandon with roofing, remodeling and new homes.",
        Hero::new(
            "Where We Build",
            "Licensed and permitted in every Tampa Bay county we serve.",
        ),
    )
    .intro([
        "Our crews work across Hillsborough, Pinellas, Manatee and Sarasota counties. Each building department has its own permitting rules and inspection schedules, and we know them all.",
    ])
    .features(vec![
        Feature::new("Hillsborough County", "Tampa, Brandon, Riverview and surrounding communities."),
        Feature::new("Pinellas County", "St. Petersburg, Clearwater and the beaches."),
        Feature::new("Sarasota & Manatee", "Sarasota, Bradenton, Lakewood Ranch and Venice."),
    ])
    .breadcrumbs(trail(&[], "Service Areas", "/locations"))
    .links(vec![
        link("/locations/tampa", "Tampa"),
        link("/locations/st-petersburg", "St. Petersburg"),
        link("/locations/sarasota", "Sarasota"),
    ])
}

fn tampa() -> PageContent {
    let route = "/locations/tampa";
    PageContent::new(
        route,
        PageKind::Location,
        "General Contractor in Tampa, FL",
        "Roof replacement, kitchen remodeling and custom homes in Tampa from a local, state-certified general contractor.",
        Hero::new(
            "Your Tampa General Contractor",
            "Headquartered on Kennedy Boulevard and building across the city since 2006.",
        )
        .with_image("/static/img/hero-tampa.jpg", "Renovated bungalow in Seminole Heights"),
    )
    .intro([
        "From historic bungalows in Seminole Heights to new builds in South Tampa, our Tampa projects range from storm repairs to complete renovations.",
        "Much of South Tampa sits in flood zones AE and VE. We plan elevations, substantial improvement calculations and permitting with the City of Tampa before construction begins.",
    ])
    .features(standard_features())
    .process(standard_process())
    .faqs(vec![
        FaqItem::new(
            "Do you work in the City of Tampa and unincorporated Hillsborough County?",
            "Yes. We hold permits with both the City of Tampa and Hillsborough County building departments.",
        ),
        FaqItem::new(
            "How does the 50% rule affect my Tampa remodel?",
            "In flood zones, improvements costing more than half the structure's value can require bringing the whole home up to current flood code. We run the numbers during estimating.",
        ),
    ])
    .breadcrumbs(trail(&[LOCATIONS], "Tampa", route))
    .links(vec![
        link("/services/roofing", "Roof Replacement & Repair"),
        link("/services/kitchen-remodeling", "Kitchen Remodeling"),
        link("/services/new-home-construction", "New Home Construction"),
    ])
}

fn sarasota() -> PageContent {
    let route = "/locations/sarasota";
    PageContent::new(
        route,
        PageKind::Location,
        "General Contractor in Sarasota, FL",
        "Coastal construction, hurricane protection and remodeling for Sarasota and Bradenton homeowners.",
        Hero::new(
            "Building in Sarasota & Bradenton",
            "Coastal homes built and renovated to withstand Gulf storms.",
        ),
    )
    .intro([
        "Sarasota's barrier islands and bayfront neighborhoods demand careful coastal construction. We build to the Coastal Construction Control Line requirements and coordinate with state and county reviewers.",
    ])
    .features(standard_features())
    .faqs(vec![FaqItem::new(
        "Do you build on Siesta Key and Longboat Key?",
        "Yes. We have completed new homes and renovations on both keys, including projects that required state coastal permits.",
    )])
    .breadcrumbs(trail(&[LOCATIONS], "Sarasota", route))
    .links(vec![
        link("/services/hurricane-protection", "Hurricane Protection"),
        link("/services/new-home-construction", "New Home Construction"),
    ])
}

fn st_petersburg() -> PageContent {
    let route = "/locations/st-petersburg";
    PageContent::new(
        route,
        PageKind::Location,
        "General Contractor in St. Petersburg, FL",
        "Roofing, remodeling and storm repair for St. Petersburg and Clearwater homes, from a Pinellas County licensed contractor.",
        Hero::new(
            "Building in St. Petersburg",
            "Restoring and upgrading Pinellas homes after every storm season.",
        ),
    )
    .intro([
        "St. Petersburg's older neighborhoods are full of homes built before modern wind codes. Roof replacements and impact window upgrades are the most common projects we complete here.",
    ])
    .features(standard_features())
    .process(standard_process())
    .faqs(vec![
        FaqItem::new(
            "Can you help after storm damage in Pinellas County?",
            "Yes. We provide emergency dry-in, damage documentation for your insurer and full repairs once the claim is approved.",
        ),
        FaqItem::new(
            "Do you work in Clearwater too?",
            "Yes. Clearwater, Largo, Dunedin and the Pinellas beaches are all within our regular service area.",
        ),
    ])
    .breadcrumbs(trail(&[LOCATIONS], "St. Petersburg", route))
    .links(vec![
        link("/services/roofing", "Roof Replacement & Repair"),
        link("/services/hurricane-protection", "Hurricane Protection"),
        link("/guides/roof-replacement-cost", "Roof Replacement Cost Guide"),
    ])
}
