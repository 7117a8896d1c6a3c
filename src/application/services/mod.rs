//! Application services.

pub mod audit_service;
pub mod export_service;
pub mod page_service;

pub use audit_service::{AuditIssue, AuditReport, AuditService, IssueKind};
pub use export_service::{ExportService, ExportSummary};
pub use page_service::PageService;
