use super::{BUSINESS_NAME, BUSINESS_PHONE, link, trail};
use crate::domain::entities::{CallToAction, FaqItem, Feature, Hero, PageContent, PageKind};

pub(super) fn pages() -> Vec<PageContent> {
    vec![faq(), about(), contact()]
}

fn faq() -> PageContent {
    PageContent::new(
        "/faq",
        PageKind::Faq,
        "Frequently Asked Questions",
        "Answers to common questions about licensing, permits, insurance, scheduling and payments for Florida construction projects.",
        Hero::new(
            "Frequently Asked Questions",
            "Straight answers about working with a Florida general contractor.",
        ),
    )
    .faqs(vec![
        FaqItem::new(
            "Are you licensed and insured?",
            "Yes. We are a Florida state-certified general contractor and carry general liability and workers' compensation insurance. Certificates are available on request.",
        ),
        FaqItem::new(
            "Who pulls the permits?",
            "We do. Every permitted project is pulled under our license and we schedule and attend all inspections.",
        ),
        FaqItem::new(
            "How are payments structured?",
            "Payments follow written milestones tied to completed work, with a deposit at contract signing as allowed by Florida law.",
        ),
        FaqItem::new(
            "What happens if a hurricane hits during my project?",
            "We secure the job site ahead of every named storm and adjust the schedule once it is safe to return.",
        ),
        FaqItem::new(
            "What warranty do you offer?",
            "We provide a written workmanship warranty on every project, in addition to manufacturer warranties on materials.",
        ),
    ])
    .breadcrumbs(trail(&[], "FAQ", "/faq"))
    .links(vec![
        link("/services", "Our Services"),
        link("/guides", "Cost Guides"),
    ])
}

fn about() -> PageContent {
    PageContent::new(
        "/about",
        PageKind::Company,
        "About Gulf Coast Builders",
        "A family-owned Tampa general contractor building and renovating Florida homes since 2006.",
        Hero::new(
            format!("About {BUSINESS_NAME}"),
            "Family-owned and Tampa-based since 2006.",
        ),
    )
    .intro([
        "Gulf Coast Builders started as a two-person roofing crew after the 2004 hurricane season. Today our team of project managers, carpenters and estimators handles everything from roofs to ground-up homes.",
        "We still run every job the way we ran the first one: show up when we say we will, keep the site clean and stand behind the work.",
    ])
    .features(vec![
        Feature::new("Since 2006", "Nearly two decades of Florida construction experience."),
        Feature::new("In-House Management", "Our own project managers run every job."),
        Feature::new("Local Crews", "Trades we have worked with for years, not day labor."),
    ])
    .breadcrumbs(trail(&[], "About", "/about"))
    .links(vec![
        link("/services", "Our Services"),
        link("/locations", "Service Areas"),
    ])
}

fn contact() -> PageContent {
    PageContent::new(
        "/contact",
        PageKind::Company,
        "Contact Us for a Free Estimate",
        "Call Gulf Coast Builders or visit our Tampa office to schedule a free in-home consultation and written estimate.",
        Hero::new(
            "Request a Free Estimate",
            format!("Call {BUSINESS_PHONE} or stop by our Kennedy Boulevard office."),
        ),
    )
    .intro([
        "Tell us about your project and we will schedule a free consultation at your home, usually within the week.",
        "Office hours are Monday through Friday, 8am to 5pm. Emergency storm service is available around the clock during hurricane season.",
    ])
    .breadcrumbs(trail(&[], "Contact", "/contact"))
    .cta(CallToAction::new(
        "Prefer to Start with Pricing?",
        "Our cost guides show real price ranges from recent projects.",
        "Browse Cost Guides",
        "/guides",
    ))
}
