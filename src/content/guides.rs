use super::{link, trail};
use crate::domain::entities::{
    ArticleMeta, CostTable, CostTableRow, FaqItem, Hero, PageContent, PageKind, ymd,
};

const GUIDES: (&str, &str) = ("Cost Guides", "/guides");

pub(super) fn pages() -> Vec<PageContent> {
    vec![
        hub(),
        roof_replacement_cost(),
        kitchen_remodel_cost(),
        new_home_construction_cost(),
    ]
}

fn hub() -> PageContent {
    PageContent::new(
        "/guides",
        PageKind::CostGuide,
        "Florida Construction Cost Guides",
        "Up-to-date price ranges for roof replacement, kitchen remodeling and new home construction in the Tampa Bay area.",
        Hero::new(
            "Construction Cost Guides",
            "Real price ranges from projects we have completed in Tampa Bay.",
        ),
    )
    .intro([
        "Budgeting starts with realistic numbers. These guides collect price ranges from our recent projects so you can plan before requesting an estimate.",
    ])
    .breadcrumbs(trail(&[], "Cost Guides", "/guides"))
    .links(vec![
        link("/guides/roof-replacement-cost", "Roof Replacement Cost"),
        link("/guides/kitchen-remodel-cost", "Kitchen Remodel Cost"),
        link("/guides/new-home-construction-cost", "New Home Construction Cost"),
    ])
}

fn roof_replacement_cost() -> PageContent {
    let route = "/guides/roof-replacement-cost";
    PageContent::new(
        route,
        PageKind::CostGuide,
        "Roof Replacement Cost in Florida",
        "What a roof replacement costs in Tampa Bay by material, roof size and pitch, plus permit and decking costs to plan for.",
        Hero::new(
            "How Much Does a New Roof Cost in Florida?",
            "Price ranges by material and home size.",
        ),
    )
    .intro([
        "Roof pricing in Florida is driven by three things: the roofing material, the size and pitch of the roof, and how much of the wood deck needs replacing once the old roof is removed.",
        "The ranges below include tear-off, disposal, underlayment, flashing, permit fees and inspections.",
    ])
    .cost_tables(vec![
        CostTable::new(
            "Cost by Roofing Material",
            vec![
                CostTableRow::new("3-tab shingle", "$4.00 – $5.50 per sq ft", "Rarely installed today"),
                CostTableRow::new("Architectural shingle", "$4.75 – $7.50 per sq ft", "Most common choice"),
                CostTableRow::new("Standing seam metal", "$9.00 – $15.00 per sq ft", ""),
                CostTableRow::new("Concrete tile", "$10.00 – $17.00 per sq ft", ""),
                CostTableRow::new("Clay tile", "$14.00 – $25.00 per sq ft", "Premium look and lifespan"),
            ],
        )
        .with_caption("Installed price per square foot of roof area"),
        CostTable::new(
            "Additional Costs",
            vec![
                CostTableRow::new("Plywood deck replacement", "$90 – $130 per sheet", "Only where rotted"),
                CostTableRow::new("Permit and inspections", "$350 – $900", "Varies by county"),
                CostTableRow::new("Wind mitigation inspection", "$100 – $175", "Often pays for itself"),
            ],
        ),
    ])
    .faqs(vec![
        FaqItem::new(
            "Why do roof prices vary so much between quotes?",
            "Quotes differ on underlayment quality, deck repair allowances and whether permit fees are included. Compare line items, not just totals.",
        ),
        FaqItem::new(
            "Does insurance pay for a roof replacement?",
            "Insurance covers sudden storm damage, not age-related wear. Many carriers will not renew policies on shingle roofs older than 15 years.",
        ),
        FaqItem::new(
            "Is a metal roof worth the extra cost?",
            "Metal roofs last twice as long as shingles, resist high wind and reflect heat, which lowers cooling costs in Florida summers.",
        ),
    ])
    .article(ArticleMeta::new(
        "How Much Does a Roof Replacement Cost in Florida?",
        "Roof replacement price ranges in Tampa Bay by material, with permit and deck repair costs.",
        ymd(2024, 3, 12),
        ymd(2025, 2, 4),
    ))
    .breadcrumbs(trail(&[GUIDES], "Roof Replacement Cost", route))
    .links(vec![
        link("/services/roofing", "Roof Replacement & Repair"),
        link("/guides/kitchen-remodel-cost", "Kitchen Remodel Cost"),
    ])
}

fn kitchen_remodel_cost() -> PageContent {
    let route = "/guides/kitchen-remodel-cost";
    PageContent::new(
        route,
        PageKind::CostGuide,
        "Kitchen Remodel Cost in Tampa Bay",
        "Kitchen remodel price ranges for Tampa Bay homes, from cosmetic refreshes to full layout changes with structural work.",
        Hero::new(
            "What Does a Kitchen Remodel Cost?",
            "Budget ranges from a refresh to a full gut renovation.",
        ),
    )
    .intro([
        "Kitchen budgets depend mostly on scope. Keeping plumbing and walls where they are keeps costs down; moving them adds engineering, permits and trade time.",
    ])
    .cost_tables(vec![CostTable::new(
        "Kitchen Remodel Cost by Scope",
        vec![
            CostTableRow::new("Cosmetic refresh", "$18,000 – $35,000", "Paint, counters, fixtures"),
            CostTableRow::new("Mid-range remodel", "$40,000 – $75,000", "New cabinets and appliances"),
            CostTableRow::new("Full remodel with layout change", "$80,000 – $150,000", "Walls, plumbing, electrical"),
        ],
    )
    .with_caption("Typical 150-200 sq ft kitchen")])
    .faqs(vec![
        FaqItem::new(
            "What is the most expensive part of a kitchen remodel?",
            "Cabinetry is usually the largest line item, often a third of the total budget.",
        ),
        FaqItem::new(
            "How much does it cost to remove a wall?",
            "Removing a non-load-bearing wall costs $2,500 to $6,000. Load-bearing walls need an engineered beam and typically run $8,000 to $20,000.",
        ),
    ])
    .article(ArticleMeta::new(
        "Kitchen Remodel Cost in Tampa Bay",
        "Kitchen remodel budgets by scope, from cosmetic updates to full layout changes.",
        ymd(2024, 5, 20),
        ymd(2024, 11, 8),
    ))
    .breadcrumbs(trail(&[GUIDES], "Kitchen Remodel Cost", route))
    .links(vec![
        link("/services/kitchen-remodeling", "Kitchen Remodeling"),
        link("/guides/new-home-construction-cost", "New Home Construction Cost"),
    ])
}

fn new_home_construction_cost() -> PageContent {
    let route = "/guides/new-home-construction-cost";
    PageContent::new(
        route,
        PageKind::CostGuide,
        "New Home Construction Cost in Florida",
        "Cost per square foot to build a new home in Tampa Bay, with site work, flood elevation and design fees explained.",
        Hero::new(
            "What Does It Cost to Build a Home in Florida?",
            "Per-square-foot ranges and the site costs people forget.",
        ),
    )
    .intro([
        "Building costs are quoted per square foot of conditioned space, but site conditions can move the total more than finishes do. Flood elevation, fill and utility connections all belong in the budget from day one.",
    ])
    .cost_tables(vec![
        CostTable::new(
            "Cost per Square Foot by Finish Level",
            vec![
                CostTableRow::new("Builder grade", "$175 – $225 per sq ft", ""),
                CostTableRow::new("Custom", "$250 – $350 per sq ft", "Most of our clients"),
                CostTableRow::new("Luxury", "$400+ per sq ft", "Waterfront and high-end finishes"),
            ],
        ),
        CostTable::new(
            "Site and Soft Costs",
            vec![
                CostTableRow::new("Survey and soil testing", "$2,500 – $6,000", ""),
                CostTableRow::new("Architecture and engineering", "$15,000 – $45,000", ""),
                CostTableRow::new("Fill and flood elevation", "$10,000 – $60,000", "Depends on flood zone"),
                CostTableRow::new("Utility connections and impact fees", "$12,000 – $30,000", ""),
            ],
        ),
    ])
    .faqs(vec![FaqItem::new(
        "Is it cheaper to build or buy in Tampa Bay?",
        "Buying an existing home is usually cheaper up front, but a new build avoids immediate roof, window and insurance costs that older homes carry.",
    )])
    .article(ArticleMeta::new(
        "How Much Does It Cost to Build a New Home in Florida?",
        "Per-square-foot construction costs in Tampa Bay and the site costs to budget for.",
        ymd(2024, 8, 1),
        ymd(2025, 1, 15),
    ))
    .breadcrumbs(trail(&[GUIDES], "New Home Construction Cost", route))
    .links(vec![
        link("/services/new-home-construction", "New Home Construction"),
        link("/guides/roof-replacement-cost", "Roof Replacement Cost"),
    ])
}
