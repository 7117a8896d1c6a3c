//! Repository trait for the page catalog.

use crate::domain::entities::{BusinessInfo, PageContent};
use std::sync::Arc;

/// Read-only access to the content catalog.
///
/// The catalog never changes after startup, so lookups are synchronous and
/// hand out shared [`Arc`]s instead of clones.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::StaticCatalog`] - in-memory catalog built from [`crate::content`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait PageRepository: Send + Sync {
    /// Finds the page served at `route` (exact match, e.g. `/services/roofing`).
    fn find_by_route(&self, route: &str) -> Option<Arc<PageContent>>;

    /// Lists every page in authoring order.
    fn list(&self) -> Vec<Arc<PageContent>>;

    /// Business identity shared by every page.
    fn business(&self) -> Arc<BusinessInfo>;
}
