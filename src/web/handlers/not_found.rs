//! Fallback for unknown paths.

use crate::error::AppError;
use axum::http::Uri;

/// Renders the 404 page for any path without a catalog page.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Page not found", uri.path())
}
