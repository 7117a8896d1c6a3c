//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns site health with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Catalog loaded and the content audit is clean
/// - **503 Service Unavailable**: Empty catalog or audit findings
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": { "status": "ok", "message": "18 pages" },
///     "audit": { "status": "ok", "message": "18 pages checked, no issues" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state);
    let audit_check = check_audit(&state);

    let all_healthy = catalog_check.is_ok() && audit_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            audit: audit_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_catalog(state: &AppState) -> CheckStatus {
    match state.page_service.routes().len() {
        0 => CheckStatus::error("Catalog is empty"),
        count => CheckStatus::ok(format!("{count} pages")),
    }
}

fn check_audit(state: &AppState) -> CheckStatus {
    let report = &state.audit_report;
    if report.is_clean() {
        CheckStatus::ok(format!("{} pages checked, no issues", report.pages_checked))
    } else {
        CheckStatus::error(format!(
            "{} issues across {} pages",
            report.issues.len(),
            report.pages_checked
        ))
    }
}
