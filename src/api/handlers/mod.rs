//! HTTP request handlers for machine-facing endpoints.

mod health;
mod seo;

pub use health::health_handler;
pub use seo::{robots_handler, sitemap_handler};
