//! Content page route configuration.

use crate::api::routes::is_reserved_route;
use crate::state::AppState;
use crate::web::handlers::page_handler;
use axum::{Router, routing::get};
use std::collections::HashSet;

/// One `GET` route per catalog page.
///
/// Routes are fixed paths taken from the catalog; no route parameters are
/// involved, so the handler identifies its page by the matched path.
/// Duplicates, paths axum cannot register and paths owned by built-in
/// endpoints are skipped with a warning; the audit reports them.
pub fn page_routes(routes: &[String]) -> Router<AppState> {
    let mut registered = HashSet::new();

    routes.iter().fold(Router::new(), |router, route| {
        if !route.starts_with('/') || route.contains(['{', '}', '*']) {
            tracing::warn!(%route, "Skipping unroutable page");
            return router;
        }
        if is_reserved_route(route) {
            tracing::warn!(%route, "Skipping page route reserved for a built-in endpoint");
            return router;
        }
        if !registered.insert(route.as_str()) {
            tracing::warn!(%route, "Skipping duplicate page route");
            return router;
        }
        router.route(route, get(page_handler))
    })
}
