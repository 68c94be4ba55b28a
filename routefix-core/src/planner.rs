use anyhow::{anyhow, Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Component, Path};
use std::sync::LazyLock;
use walkdir::{DirEntry, WalkDir};

use crate::routes::{RouteSet, MARKDOWN_EXTENSION};

static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-").expect("numeric prefix pattern is valid"));

/// A single proposed move of a markdown file onto its configured route.
///
/// Both paths are relative to the site root and `/`-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOp {
    pub source: String,
    pub destination: String,
    pub description: String,
}

impl RenameOp {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        let source = source.into();
        let destination = destination.into();
        let description = format!("Rename {source} -> {destination}");
        Self {
            source,
            destination,
            description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// File name treated as a directory index, never a rename source
    pub index_file: String,
    /// Directory name skipped wherever it appears as a path component
    pub dependency_dir: String,
    /// Glob patterns, relative to the root, that are skipped
    pub excludes: Vec<String>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            index_file: "index.md".to_string(),
            dependency_dir: "node_modules".to_string(),
            excludes: Vec::new(),
        }
    }
}

/// Leading digit run of a `12-name.md` style file name.
pub fn numeric_prefix(file_name: &str) -> Option<&str> {
    NUMERIC_PREFIX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// File name with its leading digits removed, separator kept.
///
/// `2-setup.md` and `02-setup.md` both yield `-setup.md`.
pub fn residual(file_name: &str) -> Option<&str> {
    numeric_prefix(file_name).map(|digits| &file_name[digits.len()..])
}

/// Walk `root` and propose renames for numbered files whose number disagrees
/// with a same-named route in the same directory.
pub fn plan_renames(root: &Path, routes: &RouteSet, options: &PlanOptions) -> Result<Vec<RenameOp>> {
    if !root.is_dir() {
        return Err(anyhow!("Not a directory: {}", root.display()));
    }

    let excludes = build_globset(&options.excludes)?;
    let mut changes = Vec::new();

    // Files before subdirectories, each group by name, so the walk visits a
    // directory's own files before descending.
    let walker = WalkDir::new(root)
        .sort_by(compare_entries)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry, root, options, &excludes));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        // Symlinked files are candidates too; symlinked directories are not
        // descended into.
        if !entry.path().is_file() {
            continue;
        }

        let Some(current_path) = relative_path(root, entry.path()) else {
            continue;
        };
        if excludes.is_match(&current_path) {
            continue;
        }

        if let Some(op) = plan_file(&current_path, routes, options) {
            changes.push(op);
        }
    }

    Ok(changes)
}

/// Decide the rename, if any, for one candidate file.
fn plan_file(current_path: &str, routes: &RouteSet, options: &PlanOptions) -> Option<RenameOp> {
    let (dir, file_name) = split_path(current_path);

    // Routes only count when they start with `<dir>/`, so root-level files
    // never have a candidate.
    if dir.is_empty() {
        return None;
    }
    if !file_name.ends_with(MARKDOWN_EXTENSION) || file_name == options.index_file {
        return None;
    }
    if current_path
        .split('/')
        .any(|component| component == options.dependency_dir)
    {
        return None;
    }

    let current_residual = residual(file_name)?;

    routes
        .in_directory(dir)
        .filter(|route| *route != current_path)
        .find(|route| {
            let (_, route_name) = split_path(route);
            residual(route_name) == Some(current_residual)
        })
        .map(|route| RenameOp::new(current_path, route))
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_skipped_dir(entry: &DirEntry, root: &Path, options: &PlanOptions, excludes: &GlobSet) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    if entry.file_name() == options.dependency_dir.as_str() {
        return true;
    }
    relative_path(root, entry.path()).is_some_and(|rel| excludes.is_match(&rel))
}

/// `/`-joined path of `path` relative to `root`; `None` for non-UTF-8 names.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {},
            _ => return None,
        }
    }
    Some(parts.join("/"))
}

fn split_path(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid exclude pattern: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("Failed to build exclude patterns")
}
