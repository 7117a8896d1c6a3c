//! Domain layer: the content catalog model.
//!
//! # Architecture
//!
//! - [`entities`] - Page content records (FAQs, cost tables, links, breadcrumbs)
//! - [`repositories`] - Catalog access trait definitions
//!
//! The domain layer has no dependencies on rendering or HTTP; composition and
//! structured data live in [`crate::application`] and [`crate::seo`].

pub mod entities;
pub mod repositories;
