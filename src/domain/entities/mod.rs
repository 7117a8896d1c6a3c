//! Content catalog entities.
//!
//! Everything here is plain, immutable data. A [`PageContent`] bundles one
//! page's copy; the smaller records ([`FaqItem`], [`CostTableRow`],
//! [`InternalLink`], [`BreadcrumbTrail`], ...) are its parts.
//!
//! Authoring constraints (non-empty copy, route format, article date order)
//! are declared with `validator` derives and checked by the site audit.

pub mod article;
pub mod business;
pub mod cost_table;
pub mod faq;
pub mod feature;
pub mod navigation;
pub mod page;

pub use article::{ArticleMeta, ymd};
pub use business::{BusinessInfo, PostalAddress};
pub use cost_table::{CostTable, CostTableRow};
pub use faq::FaqItem;
pub use feature::{Feature, ProcessStep};
pub use navigation::{Breadcrumb, BreadcrumbTrail, InternalLink, NavItem};
pub use page::{CallToAction, Hero, PageContent, PageKind};
