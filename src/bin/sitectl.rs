//! CLI tool for the contractor site.
//!
//! Inspects, audits and exports the content catalog without starting the
//! HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List every page route
//! cargo run --bin sitectl -- routes
//!
//! # Run the content audit (exits non-zero on findings)
//! cargo run --bin sitectl -- check
//!
//! # Export the site as static HTML
//! cargo run --bin sitectl -- export --out dist
//!
//! # Print the JSON-LD blocks of one page
//! cargo run --bin sitectl -- schema /services/roofing
//! ```
//!
//! # Environment Variables
//!
//! - `SITE_BASE_URL` (optional): origin used for absolute URLs
//! - `STATIC_DIR` (optional): assets copied by `export`

use contractor_site::application::services::{ExportService, PageService};
use contractor_site::config::Config;
use contractor_site::domain::repositories::PageRepository;
use contractor_site::infrastructure::catalog::StaticCatalog;
use contractor_site::server::{audit_site, site_page_service};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// CLI tool for the contractor site.
#[derive(Parser)]
#[command(name = "sitectl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site origin for absolute URLs (overrides SITE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List page routes with their kind and title
    Routes,

    /// Audit the content catalog
    Check,

    /// Export every page as static HTML
    Export {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,

        /// Skip confirmation when the directory is not empty
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the JSON-LD blocks of one page
    Schema {
        /// Page route, e.g. /services/roofing
        route: String,
    },
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let page_service = site_page_service(config.site_base_url()?);

    match cli.command {
        Commands::Routes => list_routes(&page_service),
        Commands::Check => check(&page_service),
        Commands::Export { out, yes } => export(page_service, &out, &config.static_dir, yes),
        Commands::Schema { route } => schema(&page_service, &route),
    }
}

/// Prints every route in catalog order.
///
/// ```text
/// 📄 Pages
///
///   Route                                 Kind        Title
///   ──────────────────────────────────────────────────────────────────────
///   /                                     home        Tampa Bay General Contractor
/// ```
fn list_routes(page_service: &PageService<StaticCatalog>) -> Result<ExitCode> {
    println!("{}", "📄 Pages".bright_blue().bold());
    println!();

    let pages = page_service.repository().list();

    println!(
        "  {:<38} {:<11} {}",
        "Route".bright_white().bold(),
        "Kind".bright_white().bold(),
        "Title".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for page in &pages {
        println!(
            "  {:<38} {:<11} {}",
            page.route.cyan(),
            page.kind.as_str().bright_black(),
            page.title
        );
    }

    println!();
    println!("  Total: {}", pages.len().to_string().bright_white().bold());
    println!();

    Ok(ExitCode::SUCCESS)
}

/// Runs the audit and lists every finding grouped by route.
fn check(page_service: &PageService<StaticCatalog>) -> Result<ExitCode> {
    println!("{}", "🔍 Content Audit".bright_blue().bold());
    println!();

    let report = audit_site(page_service);

    if report.is_clean() {
        println!(
            "{} {} pages checked, no issues",
            "✅".green(),
            report.pages_checked.to_string().bright_white().bold()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for issue in &report.issues {
        println!("  {} {}", issue.route.cyan(), issue.kind.to_string().red());
    }

    println!();
    println!(
        "{} {} issues across {} pages",
        "❌".red(),
        report.issues.len().to_string().red().bold(),
        report.pages_checked
    );

    Ok(ExitCode::FAILURE)
}

/// Writes the static site into `out`.
///
/// Asks for confirmation before writing into a non-empty directory unless
/// `skip_confirm` is set.
fn export(
    page_service: Arc<PageService<StaticCatalog>>,
    out: &Path,
    static_dir: &Path,
    skip_confirm: bool,
) -> Result<ExitCode> {
    println!("{}", "📦 Static Export".bright_blue().bold());
    println!();

    if !skip_confirm && !is_empty_dir(out)? {
        println!(
            "{}",
            format!("⚠️  {} is not empty; existing files will be overwritten", out.display())
                .yellow()
        );

        let confirmed = Confirm::new()
            .with_prompt("Continue?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(ExitCode::SUCCESS);
        }
    }

    let summary = ExportService::new(page_service).export(out, Some(static_dir))?;

    println!();
    println!("{}", "✅ Export complete!".green().bold());
    println!("  Pages:  {}", summary.pages.to_string().bright_white().bold());
    println!("  Assets: {}", summary.assets.to_string().bright_white().bold());
    println!("  Output: {}", out.display().to_string().cyan());
    println!();

    Ok(ExitCode::SUCCESS)
}

/// Prints the JSON-LD blocks of `route`, pretty-printed.
fn schema(page_service: &PageService<StaticCatalog>, route: &str) -> Result<ExitCode> {
    let page = page_service
        .compose(route)
        .with_context(|| format!("No page at {route}"))?;

    if page.structured_data.is_empty() {
        println!("{}", "  No structured data on this page".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    for block in &page.structured_data {
        let value: serde_json::Value =
            serde_json::from_str(&block.json).context("Emitted JSON-LD is not valid JSON")?;

        println!("{}", format!("── {} ──", block.kind).bright_blue().bold());
        println!("{}", serde_json::to_string_pretty(&value)?);
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }

    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(entries.next().is_none())
}
