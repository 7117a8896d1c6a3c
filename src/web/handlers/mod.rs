//! HTML page handlers.

mod not_found;
mod page;

pub use not_found::not_found_handler;
pub use page::{PageTemplate, page_handler};
