#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use contractor_site::routes::router;
use contractor_site::server::site_state;
use contractor_site::state::AppState;
use contractor_site::utils::BaseUrl;
use std::path::Path;

pub const BASE_URL: &str = "https://www.example.com";

pub fn base_url() -> BaseUrl {
    BaseUrl::parse(BASE_URL).unwrap()
}

pub fn create_test_state() -> AppState {
    site_state(base_url())
}

/// Full site router without rate limiting (the test transport has no peer address).
pub fn create_test_router() -> Router {
    router(create_test_state(), false, Path::new("static"))
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_router()).unwrap()
}

/// Extracts the JSON-LD payloads from a rendered page, in document order.
pub fn json_ld_blocks(html: &str) -> Vec<serde_json::Value> {
    const OPEN: &str = r#"<script type="application/ld+json">"#;
    const CLOSE: &str = "</script>";

    html.split(OPEN)
        .skip(1)
        .map(|rest| {
            let end = rest.find(CLOSE).unwrap();
            serde_json::from_str(&rest[..end]).unwrap()
        })
        .collect()
}

pub fn block_of_type<'a>(blocks: &'a [serde_json::Value], kind: &str) -> Option<&'a serde_json::Value> {
    blocks.iter().find(|block| block["@type"] == kind)
}
