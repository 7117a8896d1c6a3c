//! HTML layer: the pages visitors see.
//!
//! # Modules
//!
//! - [`components`] - Shared section components (askama templates)
//! - [`handlers`] - Page and 404 handlers
//! - [`routes`] - Per-page route registration

pub mod components;
pub mod handlers;
pub mod routes;
