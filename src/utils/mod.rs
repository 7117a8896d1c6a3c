//! Helper utilities shared across layers.
//!
//! - [`base_url`] - Site origin normalization and absolute URL construction
//! - [`html`] - Reading text back out of rendered HTML

pub mod base_url;
pub mod html;

pub use base_url::{BaseUrl, BaseUrlError};
pub use html::{decode_entities, spans_between};
