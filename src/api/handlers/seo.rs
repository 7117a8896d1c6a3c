//! Sitemap and robots.txt handlers.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::AppError;
use crate::state::AppState;

/// `GET /sitemap.xml`
pub async fn sitemap_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let xml = state.page_service.sitemap()?;

    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}

/// `GET /robots.txt`
pub async fn robots_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.page_service.robots(),
    )
}
