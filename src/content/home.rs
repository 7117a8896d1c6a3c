use super::{link, standard_features, standard_process};
use crate::domain::entities::{FaqItem, Hero, PageContent, PageKind};

pub(super) fn page() -> PageContent {
    PageContent::new(
        "/",
        PageKind::Home,
        "Tampa Bay General Contractor",
        "Gulf Coast Builders is a state-certified general contractor serving Tampa Bay with roofing, remodeling, new homes and hurricane protection.",
        Hero::new(
            "Building Florida Homes That Weather Every Season",
            "Roofing, remodeling and new construction across Tampa Bay since 2006.",
        )
        .with_image("/static/img/hero-home.jpg", "Newly built two-story home in South Tampa"),
    )
    .intro([
        "Gulf Coast Builders is a family-owned, state-certified general contractor. For nearly two decades we have helped Tampa Bay homeowners replace storm-worn roofs, open up dated kitchens and build new homes designed for Florida's heat, humidity and hurricane season.",
        "Every project is run by an in-house project manager, permitted with the county and backed by written workmanship warranties.",
    ])
    .features(standard_features())
    .process(standard_process())
    .faqs(vec![
        FaqItem::new(
            "What areas do you serve?",
            "We work throughout Hillsborough, Pinellas, Manatee and Sarasota counties, including Tampa, St. Petersburg, Clearwater, Bradenton, Sarasota and Brandon.",
        ),
        FaqItem::new(
            "Are estimates free?",
            "Yes. In-home consultations and written estimates are always free and come with no obligation.",
        ),
        FaqItem::new(
            "Do you offer financing?",
            "We partner with local lenders to offer financing on qualifying projects over $10,000.",
        ),
    ])
    .links(vec![
        link("/services/roofing", "Roof Replacement & Repair"),
        link("/services/kitchen-remodeling", "Kitchen Remodeling"),
        link("/services/new-home-construction", "New Home Construction"),
        link("/services/hurricane-protection", "Hurricane Protection"),
        link("/guides/roof-replacement-cost", "Roof Replacement Cost Guide"),
    ])
}
