//! Static site export.
//!
//! Renders every catalog page to `<out>/<route>/index.html` so the site can be
//! hosted from any static file server, alongside `sitemap.xml`, `robots.txt`
//! and a copy of the static assets.

use crate::application::services::PageService;
use crate::domain::repositories::PageRepository;
use crate::web::handlers::PageTemplate;
use anyhow::{Context, Result};
use askama::Template;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// What an export wrote.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub pages: usize,
    pub assets: usize,
    pub files: Vec<PathBuf>,
}

/// Writes the whole site to a directory.
pub struct ExportService<R: PageRepository> {
    page_service: Arc<PageService<R>>,
}

impl<R: PageRepository> ExportService<R> {
    /// Creates a new export service.
    pub fn new(page_service: Arc<PageService<R>>) -> Self {
        Self { page_service }
    }

    /// Exports every page plus sitemap and robots.txt into `out_dir`, then
    /// copies `static_dir` (when it exists) to `out_dir/static`.
    ///
    /// Existing files are overwritten; nothing is deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if a page fails to render or a file cannot be written.
    pub fn export(&self, out_dir: &Path, static_dir: Option<&Path>) -> Result<ExportSummary> {
        let mut summary = ExportSummary::default();
        let business = self.page_service.repository().business();

        for route in self.page_service.routes() {
            let page = self
                .page_service
                .compose(&route)
                .with_context(|| format!("Failed to compose {route}"))?;
            let html = PageTemplate::new(page, business.clone())
                .render()
                .with_context(|| format!("Failed to render {route}"))?;

            let path = page_file(out_dir, &route)?;
            write_file(&path, &html)?;
            tracing::debug!(%route, path = %path.display(), "Exported page");

            summary.pages += 1;
            summary.files.push(path);
        }

        let sitemap = self
            .page_service
            .sitemap()
            .context("Failed to render sitemap")?;
        let sitemap_path = out_dir.join("sitemap.xml");
        write_file(&sitemap_path, &sitemap)?;
        summary.files.push(sitemap_path);

        let robots_path = out_dir.join("robots.txt");
        write_file(&robots_path, &self.page_service.robots())?;
        summary.files.push(robots_path);

        if let Some(static_dir) = static_dir.filter(|dir| dir.is_dir()) {
            summary.assets = copy_dir(static_dir, &out_dir.join("static"))?;
        }

        tracing::info!(
            pages = summary.pages,
            assets = summary.assets,
            out_dir = %out_dir.display(),
            "Static export finished"
        );

        Ok(summary)
    }
}

/// `/` maps to `index.html`; `/a/b` maps to `a/b/index.html`.
///
/// # Errors
///
/// Returns an error for a route that is not absolute or has a segment that
/// is not a plain file name (`..`, `.`, a drive prefix, a backslash), so no
/// page lands outside `out_dir`.
pub fn page_file(out_dir: &Path, route: &str) -> Result<PathBuf> {
    let Some(relative) = route.strip_prefix('/') else {
        anyhow::bail!("Refusing to export route {route:?}: not an absolute path");
    };

    let mut path = out_dir.to_path_buf();
    for segment in relative.split('/').filter(|segment| !segment.is_empty()) {
        let plain = !segment.contains('\\')
            && matches!(
                Path::new(segment).components().collect::<Vec<_>>().as_slice(),
                [Component::Normal(_)]
            );
        if !plain {
            anyhow::bail!("Refusing to export route {route:?}: segment {segment:?} escapes the output directory");
        }
        path.push(segment);
    }

    Ok(path.join("index.html"))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    fs::create_dir_all(to).with_context(|| format!("Failed to create directory {}", to.display()))?;

    let mut copied = 0;
    for entry in fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
