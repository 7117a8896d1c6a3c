//! HTTP server initialization and runtime setup.
//!
//! Builds the content catalog, audits it, and runs the Axum server.

use crate::application::PageComposer;
use crate::application::services::{AuditReport, AuditService, PageService};
use crate::config::Config;
use crate::content;
use crate::domain::repositories::PageRepository;
use crate::infrastructure::catalog::StaticCatalog;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::BaseUrl;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Page service over the site's authored catalog.
pub fn site_page_service(base_url: BaseUrl) -> Arc<PageService<StaticCatalog>> {
    let catalog = Arc::new(StaticCatalog::site());
    let composer = PageComposer::new(base_url, catalog.business());

    Arc::new(PageService::new(catalog, composer))
}

/// Audits every page and the main navigation.
pub fn audit_site<R: PageRepository>(page_service: &PageService<R>) -> AuditReport {
    AuditService::new(
        Arc::clone(page_service.repository()),
        page_service.composer().clone(),
    )
    .with_navigation(content::navigation_links())
    .audit()
}

/// Builds the shared state for the site's catalog.
pub fn site_state(base_url: BaseUrl) -> AppState {
    let page_service = site_page_service(base_url);
    let report = audit_site(&page_service);

    AppState::new(page_service, Arc::new(report))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Content catalog and page composer
/// - Content audit (logged; fatal with `STRICT_AUDIT`)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - `SITE_BASE_URL` is invalid
/// - The audit fails in strict mode
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let base_url = config.site_base_url()?;
    let state = site_state(base_url);

    let report = &state.audit_report;
    if !report.is_clean() && config.strict_audit {
        anyhow::bail!(
            "Content audit found {} issues and STRICT_AUDIT is enabled",
            report.issues.len()
        );
    }

    let app = app_router(state, config.rate_limit_enabled, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
