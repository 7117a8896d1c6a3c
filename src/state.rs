//! Shared application state injected into every handler.

use crate::application::services::{AuditReport, PageService};
use crate::infrastructure::catalog::StaticCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService<StaticCatalog>>,
    /// Audit result computed once at startup; the catalog never changes afterwards.
    pub audit_report: Arc<AuditReport>,
}

impl AppState {
    pub fn new(page_service: Arc<PageService<StaticCatalog>>, audit_report: Arc<AuditReport>) -> Self {
        Self {
            page_service,
            audit_report,
        }
    }
}
