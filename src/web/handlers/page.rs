//! Content page handler.

use crate::application::composer::ComposedPage;
use crate::content::NAVIGATION;
use crate::domain::entities::{BusinessInfo, NavItem};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;
use crate::state::AppState;
use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{MatchedPath, State};
use std::sync::Arc;

/// Full HTML document for a composed page.
///
/// Renders `templates/page.html` (extending `templates/base.html`) with the
/// composed sections, head metadata and JSON-LD blocks.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub nav: &'static [NavItem],
    pub page: ComposedPage,
    pub business: Arc<BusinessInfo>,
}

impl PageTemplate {
    pub fn new(page: ComposedPage, business: Arc<BusinessInfo>) -> Self {
        Self {
            nav: NAVIGATION,
            page,
            business,
        }
    }
}

/// Renders the catalog page registered at the matched route.
///
/// # Endpoint
///
/// `GET <page route>`, one registration per catalog page.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the route has no page (only reachable
/// when the router and catalog disagree).
pub async fn page_handler(
    State(state): State<AppState>,
    matched: MatchedPath,
) -> Result<PageTemplate, AppError> {
    let route = matched.as_str();
    let page = state.page_service.compose(route)?;
    let business = state.page_service.repository().business();

    Ok(PageTemplate::new(page, business))
}
