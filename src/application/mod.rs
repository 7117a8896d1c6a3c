//! Application layer: page composition and site-wide services.
//!
//! The composer turns catalog data into rendered sections; services consume
//! the [`crate::domain::repositories::PageRepository`] trait and provide a
//! clean API for HTTP handlers and the `sitectl` tool.
//!
//! # Available Services
//!
//! - [`services::page_service::PageService`] - Route lookup, composition, sitemap
//! - [`services::audit_service::AuditService`] - Whole-site content checks
//! - [`services::export_service::ExportService`] - Static HTML export

pub mod composer;
pub mod services;

pub use composer::{ComposedPage, PageComposer, RenderedSection, SectionKind};
