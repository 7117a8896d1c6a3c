//! Whole-site content audit.
//!
//! Checks the properties every page must hold: FAQ accordion and FAQPage
//! structured data agree, breadcrumbs end at the page itself, every internal
//! link resolves, cost tables render every row, and authored fields satisfy
//! their constraints. Findings are collected, never raised.

use crate::api::routes::is_reserved_route;
use crate::application::composer::{PageComposer, SectionKind};
use crate::domain::entities::{InternalLink, PageContent};
use crate::domain::repositories::PageRepository;
use crate::seo::SchemaKind;
use crate::utils::{decode_entities, spans_between};
use crate::web::components::CostTableView;
use askama::Template;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Route label used for findings on the site navigation rather than a page.
pub const NAVIGATION_SCOPE: &str = "(navigation)";

/// What is wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueKind {
    #[error("route is declared more than once")]
    DuplicateRoute,

    #[error("route is reserved for a built-in endpoint")]
    ReservedRoute,

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("breadcrumb trail ends at '{found}' instead of the page route")]
    BreadcrumbMismatch { found: String },

    #[error("link to '{path}' does not resolve to a page")]
    BrokenLink { path: String },

    #[error("cost table '{table}' row '{label}' has an empty value range")]
    EmptyCostValue { table: String, label: String },

    #[error("cost table '{table}' rendered {rendered} of {expected} rows")]
    CostRowsDropped {
        table: String,
        expected: usize,
        rendered: usize,
    },

    #[error("FAQ accordion rendered {rendered} of {expected} entries")]
    FaqCountMismatch { expected: usize, rendered: usize },

    #[error("FAQ structured data does not match the visible FAQs: {0}")]
    FaqSchemaMismatch(String),
}

/// One finding, scoped to a page route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditIssue {
    pub route: String,
    pub kind: IssueKind,
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.route, self.kind)
    }
}

/// Result of a full audit run.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub pages_checked: usize,
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues_for(&self, route: &str) -> impl Iterator<Item = &AuditIssue> {
        self.issues.iter().filter(move |issue| issue.route == route)
    }
}

/// Runs every content check over the catalog.
pub struct AuditService<R: PageRepository> {
    repository: Arc<R>,
    composer: PageComposer,
    navigation: Vec<InternalLink>,
}

impl<R: PageRepository> AuditService<R> {
    /// Creates a new audit service.
    pub fn new(repository: Arc<R>, composer: PageComposer) -> Self {
        Self {
            repository,
            composer,
            navigation: Vec::new(),
        }
    }

    /// Also checks the site-wide navigation links.
    pub fn with_navigation(mut self, navigation: Vec<InternalLink>) -> Self {
        self.navigation = navigation;
        self
    }

    /// Audits the whole catalog.
    pub fn audit(&self) -> AuditReport {
        let pages = self.repository.list();
        let mut issues = Vec::new();

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for page in &pages {
            *seen.entry(page.route.as_str()).or_default() += 1;
        }
        let routes: HashSet<&str> = seen.keys().copied().collect();

        let mut duplicates: Vec<&str> = seen
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(route, _)| *route)
            .collect();
        duplicates.sort_unstable();
        for route in duplicates {
            issues.push(issue(route, IssueKind::DuplicateRoute));
        }

        for page in &pages {
            self.check_page(page, &routes, &mut issues);
        }

        for link in &self.navigation {
            if !resolves(&link.path, &routes) {
                issues.push(issue(
                    NAVIGATION_SCOPE,
                    IssueKind::BrokenLink {
                        path: link.path.clone(),
                    },
                ));
            }
        }

        let report = AuditReport {
            pages_checked: pages.len(),
            issues,
        };

        if report.is_clean() {
            tracing::info!(pages = report.pages_checked, "Site audit passed");
        } else {
            for finding in &report.issues {
                tracing::warn!(route = %finding.route, issue = %finding.kind, "Site audit finding");
            }
        }

        report
    }

    fn check_page(&self, page: &PageContent, routes: &HashSet<&str>, issues: &mut Vec<AuditIssue>) {
        let route = page.route.as_str();

        if is_reserved_route(route) {
            issues.push(issue(route, IssueKind::ReservedRoute));
        }

        if let Err(errors) = page.validate() {
            let mut messages = Vec::new();
            flatten_validation_errors("", &errors, &mut messages);
            messages.sort();
            issues.extend(
                messages
                    .into_iter()
                    .map(|message| issue(route, IssueKind::InvalidContent(message))),
            );
        }

        if let Some(last) = page.breadcrumbs.last()
            && last.path != page.route
        {
            issues.push(issue(
                route,
                IssueKind::BreadcrumbMismatch {
                    found: last.path.clone(),
                },
            ));
        }

        let breadcrumb_paths = page.breadcrumbs.iter().map(|crumb| crumb.path.as_str());
        for path in page.outgoing_paths().chain(breadcrumb_paths) {
            if !resolves(path, routes) {
                issues.push(issue(
                    route,
                    IssueKind::BrokenLink {
                        path: path.to_string(),
                    },
                ));
            }
        }

        for table in &page.cost_tables {
            for row in table.rows.iter().filter(|row| row.value_range.trim().is_empty()) {
                issues.push(issue(
                    route,
                    IssueKind::EmptyCostValue {
                        table: table.title.clone(),
                        label: row.label.clone(),
                    },
                ));
            }

            let rendered = match (CostTableView { table }).render() {
                Ok(html) => html.matches("class=\"cost-row\"").count(),
                Err(_) => 0,
            };
            if rendered != table.rows.len() {
                issues.push(issue(
                    route,
                    IssueKind::CostRowsDropped {
                        table: table.title.clone(),
                        expected: table.rows.len(),
                        rendered,
                    },
                ));
            }
        }

        self.check_faqs(page, issues);
    }

    /// Visible accordion and FAQPage block must carry the same pairs in the same order.
    fn check_faqs(&self, page: &PageContent, issues: &mut Vec<AuditIssue>) {
        let route = page.route.as_str();
        let composed = self.composer.compose(page);
        let expected = page.faqs.len();

        let visible = composed
            .section(SectionKind::Faq)
            .map(|section| accordion_pairs(&section.html))
            .unwrap_or_default();
        if visible.len() != expected {
            issues.push(issue(
                route,
                IssueKind::FaqCountMismatch {
                    expected,
                    rendered: visible.len(),
                },
            ));
        }

        let block = composed
            .structured_data
            .iter()
            .find(|block| block.kind == SchemaKind::FaqPage);

        let block = match (block, visible.is_empty()) {
            (None, true) => return,
            (None, false) => {
                issues.push(issue(
                    route,
                    IssueKind::FaqSchemaMismatch("FAQPage block is missing".to_string()),
                ));
                return;
            }
            (Some(_), true) => {
                issues.push(issue(
                    route,
                    IssueKind::FaqSchemaMismatch("FAQPage block emitted without visible FAQs".to_string()),
                ));
                return;
            }
            (Some(block), false) => block,
        };

        let json: Value = match serde_json::from_str(&block.json) {
            Ok(json) => json,
            Err(e) => {
                issues.push(issue(route, IssueKind::FaqSchemaMismatch(e.to_string())));
                return;
            }
        };

        issues.extend(
            pair_mismatches(&visible, &schema_pairs(&json))
                .into_iter()
                .map(|kind| issue(route, kind)),
        );
    }
}

/// Compares visible pairs with emitted pairs, position by position.
fn pair_mismatches(visible: &[(String, String)], emitted: &[(String, String)]) -> Vec<IssueKind> {
    if emitted.len() != visible.len() {
        return vec![IssueKind::FaqSchemaMismatch(format!(
            "{} questions emitted for {} visible",
            emitted.len(),
            visible.len()
        ))];
    }

    visible
        .iter()
        .zip(emitted)
        .enumerate()
        .filter(|(_, (visible, emitted))| visible != emitted)
        .map(|(index, _)| IssueKind::FaqSchemaMismatch(format!("pair {} differs", index + 1)))
        .collect()
}

/// Question/answer text shown by a rendered accordion, entities decoded, in page order.
pub fn accordion_pairs(html: &str) -> Vec<(String, String)> {
    spans_between(html, "<details class=\"faq-item\"", "</details>")
        .into_iter()
        .map(|entry| {
            let question = spans_between(entry, "<summary class=\"faq-item__question\">", "</summary>");
            let answer = spans_between(entry, "<div class=\"faq-item__answer\"><p>", "</p></div>");
            (
                question.first().map(|text| decode_entities(text)).unwrap_or_default(),
                answer.first().map(|text| decode_entities(text)).unwrap_or_default(),
            )
        })
        .collect()
}

/// Question/answer pairs of a FAQPage block's `mainEntity`.
pub fn schema_pairs(json: &Value) -> Vec<(String, String)> {
    json["mainEntity"]
        .as_array()
        .map(|entities| {
            entities
                .iter()
                .map(|entity| {
                    (
                        entity["name"].as_str().unwrap_or_default().to_string(),
                        entity["acceptedAnswer"]["text"]
                            .as_str()
                            .unwrap_or_default()
                            .to_string(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

fn issue(route: &str, kind: IssueKind) -> AuditIssue {
    AuditIssue {
        route: route.to_string(),
        kind,
    }
}

/// Link targets may carry a fragment or query; only the path must be a route.
fn resolves(path: &str, routes: &HashSet<&str>) -> bool {
    let path = path.split(['#', '?']).next().unwrap_or_default();
    routes.contains(path)
}

fn flatten_validation_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let field: &str = field;
        let path = match (prefix.is_empty(), field) {
            (true, field) => field.to_string(),
            (false, "__all__") => prefix.to_string(),
            (false, field) => format!("{prefix}.{field}"),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_validation_errors(&path, nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_validation_errors(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}
