//! Path normalisation.
//!
//! Writers (`add_*`) and readers (`get`/`set`/`navigate_to`) both go through
//! [`normalize`], so every spelling of a path lands on the same key:
//! `"Person/Name"`, `"/Person/Name/"` and `"//Person//Name"` are all
//! `/Person/Name`.  Segments are case-sensitive and kept verbatim otherwise.

use crate::error::{Result, UiError};

pub const SEPARATOR: char = '/';
pub const ROOT: &str = "/";

/// Split `raw` into its non-empty segments.
pub fn segments(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Canonical form of a path.  Returns [`ROOT`] for an input with no segments.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);
    for seg in segments(raw) {
        out.push(SEPARATOR);
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push_str(ROOT);
    }
    out
}

/// A widget path split into the navigation node that holds it and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetPath {
    /// Full normalised key, e.g. `/Person/Name`.
    pub key: String,
    /// Normalised parent, e.g. `/Person` (or `/` for top-level widgets).
    pub parent: String,
    /// Last segment, shown as the widget's label.
    pub label: String,
}

impl WidgetPath {
    /// Parse a widget path.  Fails with [`UiError::EmptyPath`] when nothing
    /// is left after dropping empty segments.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = segments(raw).collect();
        let Some((label, dirs)) = parts.split_last() else {
            return Err(UiError::EmptyPath);
        };
        let parent = normalize(&dirs.join("/"));
        Ok(Self {
            key: join(&parent, label),
            parent,
            label: (*label).to_string(),
        })
    }
}

/// Join a normalised parent with a single segment.
pub fn join(parent: &str, segment: &str) -> String {
    if parent == ROOT {
        format!("/{segment}")
    } else {
        format!("{parent}/{segment}")
    }
}

/// Every prefix of a normalised path, shortest first, excluding the root.
/// `/A/B/C` yields `/A`, `/A/B`, `/A/B/C`.
pub fn prefixes(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for seg in segments(path) {
        current.push(SEPARATOR);
        current.push_str(seg);
        out.push(current.clone());
    }
    out
}
