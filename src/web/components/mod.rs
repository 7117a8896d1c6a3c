//! Shared section components.
//!
//! Each component is a pure function of its props: an askama template under
//! `templates/components/` bound to borrowed catalog data. The page composer
//! renders them in order and stitches the HTML together.

mod breadcrumbs;
mod cost_table;
mod cta;
mod faq;
mod features;
mod hero;
mod links;

pub use breadcrumbs::BreadcrumbNav;
pub use cost_table::CostTableView;
pub use cta::CallToActionBlock;
pub use faq::FaqAccordion;
pub use features::{FeatureGrid, ProcessSteps};
pub use hero::{HeroBanner, IntroSection};
pub use links::InternalLinkList;

use crate::domain::entities::BusinessInfo;

/// Click-to-call link shown in the hero and the call to action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneLink<'a> {
    pub display: &'a str,
    pub href: String,
}

impl<'a> PhoneLink<'a> {
    /// `None` when the business has no phone number.
    pub fn from_business(business: &'a BusinessInfo) -> Option<Self> {
        Some(Self {
            display: business.phone()?,
            href: business.phone_href()?,
        })
    }
}
