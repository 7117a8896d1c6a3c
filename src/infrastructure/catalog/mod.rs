//! Content catalog storage.
//!
//! - [`StaticCatalog`] - In-memory catalog built once at startup

mod static_catalog;

pub use static_catalog::StaticCatalog;
