//! Application error type and its HTML rendering.

use crate::content::{BUSINESS_NAME, NAVIGATION};
use crate::domain::entities::NavItem;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Error page rendered for every failed request.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub nav: &'static [NavItem],
    pub site_name: &'static str,
    pub status: u16,
    pub heading: &'a str,
    pub message: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}: {path}")]
    NotFound { message: String, path: String },

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Render(_) | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (heading, message) = match &self {
            AppError::NotFound { path, .. } => {
                tracing::debug!(%path, "Page not found");
                (
                    "Page Not Found",
                    "The page you are looking for has moved or no longer exists.",
                )
            }
            AppError::Render(_) | AppError::Internal { .. } => {
                tracing::error!(error = %self, "Request failed");
                (
                    "Something Went Wrong",
                    "We could not load this page. Please try again or give us a call.",
                )
            }
        };

        let body = ErrorTemplate {
            nav: NAVIGATION,
            site_name: BUSINESS_NAME,
            status: status.as_u16(),
            heading,
            message,
        }
        .render()
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to render error page");
            format!("<h1>{heading}</h1>")
        });

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::not_found("Page not found", "/nope").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        let error = AppError::not_found("Page not found", "/nope");
        assert_eq!(error.to_string(), "Page not found: /nope");
    }

    #[test]
    fn test_into_response_renders_html() {
        let response = AppError::not_found("Page not found", "/nope").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
