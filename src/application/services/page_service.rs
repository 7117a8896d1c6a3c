//! Page lookup and composition service.

use crate::application::composer::{ComposedPage, PageComposer};
use crate::domain::entities::PageContent;
use crate::domain::repositories::PageRepository;
use crate::error::AppError;
use crate::seo;
use std::sync::Arc;

/// Service turning routes into composed pages and site-wide SEO documents.
pub struct PageService<R: PageRepository> {
    repository: Arc<R>,
    composer: PageComposer,
}

impl<R: PageRepository> PageService<R> {
    /// Creates a new page service.
    pub fn new(repository: Arc<R>, composer: PageComposer) -> Self {
        Self {
            repository,
            composer,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn composer(&self) -> &PageComposer {
        &self.composer
    }

    /// Looks up the page at `route`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no page is served at `route`.
    pub fn page(&self, route: &str) -> Result<Arc<PageContent>, AppError> {
        self.repository
            .find_by_route(route)
            .ok_or_else(|| AppError::not_found("Page not found", route))
    }

    /// Composes the page at `route`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no page is served at `route`.
    pub fn compose(&self, route: &str) -> Result<ComposedPage, AppError> {
        let page = self.page(route)?;
        Ok(self.composer.compose(&page))
    }

    /// Every page route in authoring order.
    pub fn routes(&self) -> Vec<String> {
        self.repository
            .list()
            .iter()
            .map(|page| page.route.clone())
            .collect()
    }

    /// Renders the XML sitemap.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the sitemap template fails.
    pub fn sitemap(&self) -> Result<String, AppError> {
        let pages = self.repository.list();
        Ok(seo::render_sitemap(
            self.composer.base_url(),
            pages.iter().map(|page| page.as_ref()),
        )?)
    }

    pub fn robots(&self) -> String {
        seo::robots_txt(self.composer.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BusinessInfo, Hero, PageKind};
    use crate::domain::repositories::MockPageRepository;
    use crate::utils::BaseUrl;

    fn business() -> Arc<BusinessInfo> {
        Arc::new(BusinessInfo {
            name: "Gulf Coast Builders".to_string(),
            phone: Some("(813) 555-0142".to_string()),
            email: None,
            address: None,
            license_number: None,
            service_areas: vec![],
        })
    }

    fn composer() -> PageComposer {
        PageComposer::new(BaseUrl::parse("https://www.example.com").unwrap(), business())
    }

    fn page(route: &str) -> Arc<PageContent> {
        Arc::new(PageContent::new(
            route,
            PageKind::Service,
            "Roofing",
            "Roofing services",
            Hero::new("Roofing", ""),
        ))
    }

    #[test]
    fn test_compose_found() {
        let mut mock_repo = MockPageRepository::new();
        mock_repo
            .expect_find_by_route()
            .withf(|route| route == "/services/roofing")
            .times(1)
            .returning(|route| Some(page(route)));

        let service = PageService::new(Arc::new(mock_repo), composer());
        let composed = service.compose("/services/roofing").unwrap();

        assert_eq!(composed.route, "/services/roofing");
        assert_eq!(composed.canonical_url, "https://www.example.com/services/roofing");
    }

    #[test]
    fn test_compose_not_found() {
        let mut mock_repo = MockPageRepository::new();
        mock_repo.expect_find_by_route().times(1).returning(|_| None);

        let service = PageService::new(Arc::new(mock_repo), composer());
        let result = service.compose("/missing");

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_routes_and_sitemap() {
        let mut mock_repo = MockPageRepository::new();
        mock_repo
            .expect_list()
            .returning(|| vec![page("/"), page("/services/roofing")]);

        let service = PageService::new(Arc::new(mock_repo), composer());

        assert_eq!(service.routes(), vec!["/", "/services/roofing"]);
        let xml = service.sitemap().unwrap();
        assert!(xml.contains("<loc>https://www.example.com/services/roofing</loc>"));
    }

    #[test]
    fn test_robots() {
        let service = PageService::new(Arc::new(MockPageRepository::new()), composer());

        assert!(service.robots().contains("Sitemap: https://www.example.com/sitemap.xml"));
    }
}
