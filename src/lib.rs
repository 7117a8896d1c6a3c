//! # Contractor Site
//!
//! Marketing site for Gulf Coast Builders, a Florida general contractor,
//! served with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Page content entities and the repository trait
//! - **Content** ([`content`]) - The authored catalog: every page's copy
//! - **Application Layer** ([`application`]) - Page composer, audit and export services
//! - **SEO** ([`seo`]) - JSON-LD emitter, sitemap and robots.txt
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory catalog
//! - **Web Layer** ([`web`]) - Section components and page handlers
//! - **API Layer** ([`api`]) - Health, sitemap and robots endpoints, middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export SITE_BASE_URL="http://localhost:3000"
//! cargo run
//!
//! # Check the catalog or export a static copy
//! cargo run --bin sitectl -- check
//! cargo run --bin sitectl -- export --out dist
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod content;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod seo;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuditReport, AuditService, PageService};
    pub use crate::application::{ComposedPage, PageComposer, SectionKind};
    pub use crate::domain::entities::{FaqItem, PageContent, PageKind};
    pub use crate::error::AppError;
    pub use crate::infrastructure::catalog::StaticCatalog;
    pub use crate::state::AppState;
    pub use crate::utils::BaseUrl;
}
