//! In-memory implementation of the page repository.

use crate::content;
use crate::domain::entities::{BusinessInfo, PageContent};
use crate::domain::repositories::PageRepository;
use std::collections::HashMap;
use std::sync::Arc;

/// The content catalog held in memory.
///
/// Pages keep their authoring order for listings; a route index gives O(1)
/// lookups. When two pages declare the same route the first one wins the
/// index, and both remain in the listing so the audit can report it.
pub struct StaticCatalog {
    pages: Vec<Arc<PageContent>>,
    by_route: HashMap<String, usize>,
    business: Arc<BusinessInfo>,
}

impl StaticCatalog {
    /// Creates a catalog from explicit pages and business info.
    pub fn new(pages: Vec<PageContent>, business: BusinessInfo) -> Self {
        let pages: Vec<Arc<PageContent>> = pages.into_iter().map(Arc::new).collect();

        let mut by_route = HashMap::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            by_route.entry(page.route.clone()).or_insert(index);
        }

        tracing::debug!(pages = pages.len(), "Content catalog loaded");

        Self {
            pages,
            by_route,
            business: Arc::new(business),
        }
    }

    /// Catalog of the site's authored content.
    pub fn site() -> Self {
        Self::new(content::pages(), content::business())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageRepository for StaticCatalog {
    fn find_by_route(&self, route: &str) -> Option<Arc<PageContent>> {
        self.by_route
            .get(route)
            .map(|&index| Arc::clone(&self.pages[index]))
    }

    fn list(&self) -> Vec<Arc<PageContent>> {
        self.pages.clone()
    }

    fn business(&self) -> Arc<BusinessInfo> {
        Arc::clone(&self.business)
    }
}
