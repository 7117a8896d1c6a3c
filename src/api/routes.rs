//! Machine-facing route configuration.

use crate::api::handlers::{health_handler, robots_handler, sitemap_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Paths served by [`public_routes`].
pub const PUBLIC_PATHS: [&str; 3] = ["/health", "/sitemap.xml", "/robots.txt"];

/// Prefix the static asset directory is nested under.
pub const STATIC_PREFIX: &str = "/static";

/// Whether `route` belongs to a built-in endpoint or the static asset tree,
/// and so cannot be a content page.
pub fn is_reserved_route(route: &str) -> bool {
    PUBLIC_PATHS.contains(&route)
        || route
            .strip_prefix(STATIC_PREFIX)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Public endpoints for crawlers and monitoring.
///
/// # Endpoints
///
/// - `GET /health`      - Catalog and audit status
/// - `GET /sitemap.xml` - XML sitemap of every page
/// - `GET /robots.txt`  - Crawler directives
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(PUBLIC_PATHS[0], get(health_handler))
        .route(PUBLIC_PATHS[1], get(sitemap_handler))
        .route(PUBLIC_PATHS[2], get(robots_handler))
}
