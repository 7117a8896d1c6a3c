//! Navigational entities: internal links and breadcrumb trails.

use validator::Validate;

/// A navigational edge to another page on the site.
///
/// Destinations are not checked here; the site audit verifies that every
/// destination resolves to a catalog route.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct InternalLink {
    #[validate(length(min = 1, message = "Link path must not be empty"))]
    pub path: String,

    #[validate(length(min = 1, message = "Link label must not be empty"))]
    pub label: String,
}

impl InternalLink {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// A site-wide navigation entry, declared as a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

impl From<&NavItem> for InternalLink {
    fn from(item: &NavItem) -> Self {
        InternalLink::new(item.path, item.label)
    }
}

/// One ancestor in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Breadcrumb {
    #[validate(length(min = 1, message = "Breadcrumb name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Breadcrumb path must not be empty"))]
    pub path: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Ordered navigational ancestry, root first, current page last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct BreadcrumbTrail {
    #[validate(nested)]
    pub crumbs: Vec<Breadcrumb>,
}

impl BreadcrumbTrail {
    /// Builds a trail from `(name, path)` pairs.
    pub fn from_pairs<I, N, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        Self {
            crumbs: pairs
                .into_iter()
                .map(|(name, path)| Breadcrumb::new(name, path))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// The crumb representing the current page.
    pub fn last(&self) -> Option<&Breadcrumb> {
        self.crumbs.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Breadcrumb> {
        self.crumbs.iter()
    }
}
