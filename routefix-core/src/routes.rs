//! Route extraction from a static-site configuration file.
//!
//! The config is scanned as raw text for `link: '...'` declarations. This is
//! deliberately narrow: the site config is an external, evolving artifact and
//! only its literal route strings matter here, so no grammar is parsed.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"link:\s*'([^']+)'").expect("link pattern is valid"));

/// Markdown extension appended to routes that lack one.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Placeholder anchor used for links that do not point at a page.
const ANCHOR_PLACEHOLDER: &str = "#";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("failed to read site config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Expected markdown file paths, relative to the site root.
///
/// Iteration is lexicographic so that "first matching route" is stable
/// between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    routes: BTreeSet<String>,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes whose parent directory is exactly `dir` (`""` for the root).
    pub fn in_directory<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |route| parent_dir(route) == dir)
    }
}

impl FromIterator<String> for RouteSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

/// Turn a raw `link` value into a relative markdown path.
///
/// Returns `None` for directory links (trailing `/`) and the `#` placeholder.
pub fn normalize_route(raw: &str) -> Option<String> {
    if raw.ends_with('/') || raw == ANCHOR_PLACEHOLDER {
        return None;
    }

    let trimmed = raw.trim_start_matches('/');
    if trimmed.ends_with(MARKDOWN_EXTENSION) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{trimmed}{MARKDOWN_EXTENSION}"))
    }
}

/// Collect every article route declared in the config text.
pub fn extract_routes(content: &str) -> RouteSet {
    LINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| normalize_route(&caps[1]))
        .collect()
}

/// Read the site config and extract its routes.
pub fn load_routes(config_path: &Path) -> Result<RouteSet, RouteError> {
    let content = fs::read_to_string(config_path).map_err(|source| RouteError::ConfigRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    Ok(extract_routes(&content))
}

/// Parent directory of a `/`-separated relative path, `""` at the root.
pub(crate) fn parent_dir(path: &str) -> &str {
    path.rfind('/').map_or("", |idx| &path[..idx])
}
