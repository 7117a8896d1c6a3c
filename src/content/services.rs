use super::{link, standard_features, standard_process, trail};
use crate::domain::entities::{
    CostTable, CostTableRow, FaqItem, Feature, Hero, PageContent, PageKind, ProcessStep,
};

const SERVICES: (&str, &str) = ("Services", "/services");

pub(super) fn pages() -> Vec<PageContent> {
    vec![
        hub(),
        roofing(),
        kitchen_remodeling(),
        new_home_construction(),
        hurricane_protection(),
    ]
}

fn hub() -> PageContent {
    PageContent::new(
        "/services",
        PageKind::Service,
        "Construction Services",
        "Roofing, kitchen remodeling, custom homes and hurricane protection from a Florida state-certified general contractor.",
        Hero::new(
            "Our Construction Services",
            "One licensed team for the biggest projects on your home.",
        ),
    )
    .intro([
        "From a single roof replacement to a ground-up custom home, every Gulf Coast Builders project is managed by our own staff and built by trades we have worked with for years.",
    ])
    .features(vec![
        Feature::new("Roofing", "Shingle, metal and tile roof replacement and storm repair."),
        Feature::new("Kitchen Remodeling", "Layouts, cabinetry, countertops and finishes."),
        Feature::new("New Homes", "Custom and infill homes built to high-wind code."),
        Feature::new("Hurricane Protection", "Impact windows, doors and shutter systems."),
    ])
    .breadcrumbs(trail(&[], "Services", "/services"))
    .links(vec![
        link("/services/roofing", "Roof Replacement & Repair"),
        link("/services/kitchen-remodeling", "Kitchen Remodeling"),
        link("/services/new-home-construction", "New Home Construction"),
        link("/services/hurricane-protection", "Hurricane Protection"),
    ])
}

fn roofing() -> PageContent {
    let route = "/services/roofing";
    PageContent::new(
        route,
        PageKind::Service,
        "Roof Replacement & Repair",
        "Shingle, metal and tile roof replacement in Tampa Bay, built to Florida high-wind code and backed by written warranties.",
        Hero::new(
            "Roof Replacement & Repair",
            "Hurricane-rated roofing systems installed by certified crews.",
        )
        .with_image("/static/img/hero-roofing.jpg", "Crew installing a standing seam metal roof"),
    )
    .intro([
        "Florida roofs work harder than roofs almost anywhere else in the country. UV exposure, daily summer storms and hurricane-force wind all shorten a roof's life, and insurers increasingly require replacement once a shingle roof passes 15 years.",
        "We install architectural shingle, standing seam metal and concrete tile systems with sealed roof decks, upgraded fastening and secondary water barriers that qualify for wind mitigation discounts.",
    ])
    .features(standard_features())
    .process(standard_process())
    .cost_tables(vec![
        CostTable::new(
            "Typical Roof Replacement Pricing",
            vec![
                CostTableRow::new("Architectural shingle", "$9,500 – $16,000", "20-25 year service life"),
                CostTableRow::new("Standing seam metal", "$18,000 – $32,000", "40-50 year service life"),
                CostTableRow::new("Concrete tile", "$20,000 – $35,000", "May need structural review"),
            ],
        )
        .with_caption("Based on a 2,000 sq ft single-story home"),
    ])
    .faqs(vec![
        FaqItem::new(
            "How long does a roof replacement take?",
            "Most shingle roofs are completed in two to three days. Metal and tile roofs typically take one to two weeks, plus time for permit inspections.",
        ),
        FaqItem::new(
            "Will a new roof lower my insurance premium?",
            "Often, yes. A new roof with a sealed deck and upgraded nailing usually earns wind mitigation credits. We provide the documentation your inspector needs.",
        ),
        FaqItem::new(
            "Do you handle insurance claims for storm damage?",
            "We document damage with photos and measurements and meet your adjuster on site, but the claim itself stays between you and your insurer.",
        ),
        FaqItem::new(
            "Can you roof over my existing shingles?",
            "No. Florida code limits re-covering, and a full tear-off lets us inspect and repair the deck before the new system goes on.",
        ),
    ])
    .breadcrumbs(trail(&[SERVICES], "Roofing", route))
    .links(vec![
        link("/guides/roof-replacement-cost", "Roof Replacement Cost Guide"),
        link("/services/hurricane-protection", "Hurricane Protection"),
        link("/locations/tampa", "Roofing in Tampa"),
    ])
}

fn kitchen_remodeling() -> PageContent {
    let route = "/services/kitchen-remodeling";
    PageContent::new(
        route,
        PageKind::Service,
        "Kitchen Remodeling",
        "Full kitchen remodels in Tampa Bay: layout changes, custom cabinetry, quartz countertops and permitted electrical and plumbing.",
        Hero::new(
            "Kitchen Remodeling",
            "Open, bright kitchens designed around the way you cook and gather.",
        )
        .with_image("/static/img/hero-kitchen.jpg", "Remodeled white kitchen with quartz island"),
    )
    .intro([
        "A kitchen remodel touches nearly every trade in the house. We handle design, demolition, plumbing, electrical, cabinetry, countertops and finishes under one contract and one schedule.",
        "Removing a wall to open the kitchen to the living area is our most requested change. Our engineer reviews every structural opening and we permit the work so it never becomes a problem at resale.",
    ])
    .features(vec![
        Feature::new("Design Included", "3D layouts and material selections before work begins."),
        Feature::new("Structural Changes", "Engineered beam and wall removals, fully permitted."),
        Feature::new("Custom Cabinetry", "Semi-custom and custom lines from trusted suppliers."),
        Feature::new("Fixed Schedules", "A written timeline with weekly progress updates."),
    ])
    .process(standard_process())
    .faqs(vec![
        FaqItem::new(
            "How long does a kitchen remodel take?",
            "Most full remodels take six to ten weeks of construction after design and permitting are complete.",
        ),
        FaqItem::new(
            "Can we live at home during the remodel?",
            "Yes. We seal off the work area with dust barriers and can set up a temporary kitchenette in another room.",
        ),
        FaqItem::new(
            "Do I need a permit to remodel my kitchen?",
            "Any change to plumbing, electrical or walls requires a permit in Hillsborough and Pinellas counties. We pull and close every permit.",
        ),
    ])
    .breadcrumbs(trail(&[SERVICES], "Kitchen Remodeling", route))
    .links(vec![
        link("/guides/kitchen-remodel-cost", "Kitchen Remodel Cost Guide"),
        link("/services/new-home-construction", "New Home Construction"),
    ])
}

fn new_home_construction() -> PageContent {
    let route = "/services/new-home-construction";
    PageContent::new(
        route,
        PageKind::Service,
        "New Home Construction",
        "Custom and infill new home construction in Tampa Bay, engineered for Florida wind zones and flood elevations.",
        Hero::new(
            "New Home Construction",
            "Custom homes on your lot, designed for the Florida climate.",
        )
        .with_image("/static/img/hero-new-home.jpg", "Framed new home under construction"),
    )
    .intro([
        "Building on your own lot gives you control over every detail. We guide you through survey, design, engineering, permitting and construction, with one point of contact from the first sketch to the certificate of occupancy.",
        "Our homes are built with concrete block or engineered wood framing, impact-rated openings and elevations that meet current FEMA flood maps.",
    ])
    .features(standard_features())
    .process(vec![
        ProcessStep::new("Lot Evaluation", "Survey, soil testing and flood zone review."),
        ProcessStep::new("Design & Engineering", "Architectural plans, structural and energy calculations."),
        ProcessStep::new("Permitting", "Submission and plan review with the local building department."),
        ProcessStep::new("Construction", "Foundation through finishes, with scheduled owner walkthroughs."),
        ProcessStep::new("Move-In", "Final inspections, certificate of occupancy and warranty handover."),
    ])
    .faqs(vec![
        FaqItem::new(
            "How long does it take to build a custom home?",
            "Plan on three to four months for design and permitting and nine to twelve months of construction for a typical 2,500 sq ft home.",
        ),
        FaqItem::new(
            "Do I need to own a lot before contacting you?",
            "No. We are happy to evaluate lots you are considering before you buy, including flood zone and setback constraints.",
        ),
        FaqItem::new(
            "Do you build in flood zones?",
            "Yes. We design foundations and finished floor elevations to meet FEMA requirements and local freeboard rules.",
        ),
    ])
    .breadcrumbs(trail(&[SERVICES], "New Home Construction", route))
    .links(vec![
        link("/guides/new-home-construction-cost", "New Home Construction Cost Guide"),
        link("/services/hurricane-protection", "Hurricane Protection"),
    ])
}

fn hurricane_protection() -> PageContent {
    let route = "/services/hurricane-protection";
    PageContent::new(
        route,
        PageKind::Service,
        "Hurricane Protection",
        "Impact windows, impact doors, roll-down shutters and roof-to-wall connections that protect Tampa Bay homes during hurricane season.",
        Hero::new(
            "Hurricane Protection",
            "Impact windows, doors and shutters installed before the next storm.",
        ),
    )
    .intro([
        "Protecting openings is the single most effective way to keep wind and water out of a home during a hurricane. Impact-rated windows and doors stay in place all year; shutters give flexible protection at a lower cost.",
    ])
    .features(vec![
        Feature::new("Impact Windows", "Laminated glass rated for large missile impact."),
        Feature::new("Impact Doors", "Entry, French and sliding glass doors with impact ratings."),
        Feature::new("Shutter Systems", "Accordion, roll-down and storm panel options."),
        Feature::new("Roof Connections", "Hurricane straps and clips retrofitted at the roof-to-wall joint."),
    ])
    .cost_tables(vec![CostTable::new(
        "Hurricane Protection Pricing",
        vec![
            CostTableRow::new("Impact window (per opening)", "$1,100 – $2,400", "Size and frame dependent"),
            CostTableRow::new("Impact sliding glass door", "$3,500 – $7,500", ""),
            CostTableRow::new("Roll-down shutter (per opening)", "$800 – $1,600", "Manual or motorized"),
            CostTableRow::new("Accordion shutter (per opening)", "$450 – $900", ""),
        ],
    )])
    .faqs(vec![
        FaqItem::new(
            "Are impact windows worth the cost?",
            "Impact windows protect year-round without setup, reduce outside noise and usually earn the largest wind mitigation discounts.",
        ),
        FaqItem::new(
            "Do impact windows need a permit?",
            "Yes. Window and door replacements require a permit and product approval numbers, which we handle.",
        ),
    ])
    .breadcrumbs(trail(&[SERVICES], "Hurricane Protection", route))
    .links(vec![
        link("/services/roofing", "Roof Replacement & Repair"),
        link("/faq", "Frequently Asked Questions"),
    ])
}
