//! Top-level router configuration combining page and machine-facing routes.
//!
//! # Route Structure
//!
//! - `GET  <page route>`  - One HTML page per catalog entry
//! - `GET  /health`       - Catalog and audit status
//! - `GET  /sitemap.xml`  - XML sitemap
//! - `GET  /robots.txt`   - Crawler directives
//! - `/static/*`          - Static assets
//! - anything else        - Rendered 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Optional per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit_enabled` - applies the per-IP limiter; requires the server to
///   provide `ConnectInfo<SocketAddr>`
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, rate_limit_enabled: bool, static_dir: &Path) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, rate_limit_enabled, static_dir))
}

/// The routes and middleware of [`app_router`] without path normalization.
pub fn router(state: AppState, rate_limit_enabled: bool, static_dir: &Path) -> Router {
    let page_routes = web::routes::page_routes(&state.page_service.routes());

    let mut router = Router::new()
        .merge(page_routes)
        .merge(api::routes::public_routes())
        .nest_service(api::routes::STATIC_PREFIX, ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state);

    if rate_limit_enabled {
        match rate_limit::layer() {
            Some(layer) => router = router.layer(layer),
            None => ::tracing::warn!("Rate limiter configuration rejected, serving without it"),
        }
    }

    router.layer(tracing::layer())
}
