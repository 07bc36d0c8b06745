//! Shortening of selected string fields before rendering.

use std::num::NonZeroUsize;

use serde_json::{Map, Value};

/// Default number of characters kept by a truncated field.
pub const DEFAULT_TRUNCATE_AT: usize = 36;

/// A dotted path to a field, e.g. `details.event`, split into its segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn parse(path: &str) -> Self {
        FieldPath(path.split('.').map(str::to_string).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

/// The fields to truncate and the length they are cut to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationSpec {
    paths: Vec<FieldPath>,
    limit: NonZeroUsize,
}

impl TruncationSpec {
    pub fn new(paths: Vec<FieldPath>, limit: NonZeroUsize) -> Self {
        TruncationSpec { paths, limit }
    }

    /// Parses a comma-separated list of dotted paths.
    ///
    /// Entries are trimmed; empty entries and repeats are dropped, keeping
    /// first-seen order. Returns `None` when no path remains, which disables
    /// truncation.
    pub fn parse(fields: &str, limit: NonZeroUsize) -> Option<Self> {
        let mut paths: Vec<FieldPath> = Vec::new();
        for field in fields.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            let path = FieldPath::parse(field);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            None
        } else {
            Some(TruncationSpec::new(paths, limit))
        }
    }

    pub fn paths(&self) -> &[FieldPath] {
        &self.paths
    }

    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Truncates every configured path in `object`.
    pub fn apply(&self, object: &mut Map<String, Value>) {
        for path in &self.paths {
            truncate_path(object, path.segments(), self.limit());
        }
    }
}

/// Walks `path` through nested objects, truncating long strings on the way.
///
/// Missing fields end the walk silently. The string check runs at every
/// level, not only the last one: a long string found where an object was
/// expected is truncated too.
pub fn truncate_path(object: &mut Map<String, Value>, path: &[String], limit: usize) {
    let Some((field, remaining)) = path.split_first() else {
        return;
    };
    let Some(value) = object.get_mut(field) else {
        return;
    };

    if let Value::Object(nested) = value {
        if !remaining.is_empty() {
            truncate_path(nested, remaining, limit);
        }
    }

    if let Value::String(text) = value {
        if let Some(shortened) = truncate_str(text, limit) {
            *text = shortened;
        }
    }
}

/// Cuts `text` to `limit` characters and appends the original length.
///
/// Returns `None` when `text` is not longer than `limit`.
pub fn truncate_str(text: &str, limit: usize) -> Option<String> {
    let length = text.chars().count();
    if length <= limit {
        return None;
    }

    let prefix: String = text.chars().take(limit).collect();
    Some(format!("{prefix}… ({length} chars)"))
}
