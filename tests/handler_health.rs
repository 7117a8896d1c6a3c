mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use contractor_site::api::handlers::health_handler;
use contractor_site::application::services::{AuditIssue, AuditReport, IssueKind};
use contractor_site::state::AppState;
use std::sync::Arc;

fn health_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = health_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["catalog"]["status"], "ok");
    assert_eq!(json["checks"]["audit"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = health_server(common::create_test_state());

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("catalog").is_some());
    assert!(json["checks"].get("audit").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_audit_has_issues() {
    let mut state = common::create_test_state();
    state.audit_report = Arc::new(AuditReport {
        pages_checked: 1,
        issues: vec![AuditIssue {
            route: "/services/roofing".to_string(),
            kind: IssueKind::BrokenLink {
                path: "/services/plumbing".to_string(),
            },
        }],
    });
    let server = health_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["catalog"]["status"], "ok");
    assert_eq!(json["checks"]["audit"]["status"], "error");
}

#[tokio::test]
async fn test_page_routes_cannot_shadow_built_in_endpoints() {
    use contractor_site::application::PageComposer;
    use contractor_site::application::services::PageService;
    use contractor_site::content;
    use contractor_site::domain::entities::{CallToAction, Hero, PageContent, PageKind};
    use contractor_site::domain::repositories::PageRepository;
    use contractor_site::infrastructure::catalog::StaticCatalog;
    use contractor_site::routes::router;
    use contractor_site::server::audit_site;
    use std::path::Path;

    let page = |route: &str| {
        PageContent::new(route, PageKind::Company, "Page", "A page", Hero::new("Page", ""))
            .cta(CallToAction::new("Call", "", "Contact", "/contact"))
    };
    let catalog = StaticCatalog::new(
        vec![page("/contact"), page("/health"), page("/static")],
        content::business(),
    );
    let composer = PageComposer::new(common::base_url(), catalog.business());
    let page_service = Arc::new(PageService::new(Arc::new(catalog), composer));
    let report = audit_site(&page_service);

    let reserved: Vec<&str> = report
        .issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::ReservedRoute)
        .map(|issue| issue.route.as_str())
        .collect();
    assert_eq!(reserved, vec!["/health", "/static"]);

    let app = router(
        AppState::new(page_service, Arc::new(report)),
        false,
        Path::new("static"),
    );
    let server = TestServer::new(app).unwrap();

    server.get("/contact").await.assert_status_ok();

    let health = server.get("/health").await;
    health.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(health.json::<serde_json::Value>()["checks"]["audit"]["status"], "error");

    server.get("/static/css/site.css").await.assert_status_ok();
}
