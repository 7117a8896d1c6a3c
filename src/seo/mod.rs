//! Search-engine facing output: JSON-LD structured data, sitemap, robots.txt.
//!
//! - [`json_ld`] - schema.org block shapes
//! - [`emitter`] - [`StructuredDataEmitter`] turning page content into blocks
//! - [`sitemap`] - XML sitemap and robots.txt

pub mod emitter;
pub mod json_ld;
pub mod sitemap;

pub use emitter::{StructuredDataEmitter, faq_page, to_script_json};
pub use json_ld::{JsonLdBlock, SchemaKind};
pub use sitemap::{SitemapEntry, render_sitemap, robots_txt};
