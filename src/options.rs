//! Encapsulation options and the ignore set.
//!
//! Options arrive from the host as a JSON object, e.g.
//! `{ "ignoredElements": ["IgnoreMe"] }`. The ignore list extends the
//! built-in defaults, it never replaces them.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::CompilerError;
use crate::tag::TagName;

lazy_static! {
    /// Fragment-like markers that never receive a className.
    /// Both spellings are literal entries; no matching rule is inferred
    /// between them.
    static ref DEFAULT_IGNORED_ELEMENTS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("Fragment");
        s.insert("React.Fragment");
        s
    };
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncapsulateOptions {
    /// Tag names exempted from rewriting, in addition to the built-in defaults.
    pub ignored_elements: Vec<String>,
    /// Files (full path or base name) that opt out of encapsulation entirely.
    pub excluded_files: Vec<String>,
    /// Overrides the class derived from the file name.
    pub class_name: Option<String>,
}

impl EncapsulateOptions {
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::new(&self.ignored_elements)
    }

    /// Target class for a compilation unit: the configured override if any,
    /// otherwise the compiling file's base name without extension.
    pub fn target_class(&self, file_path: &str) -> Result<String, CompilerError> {
        if let Some(name) = &self.class_name {
            if !name.is_empty() {
                return Ok(name.clone());
            }
        }
        derive_class_from_path(file_path)
    }

    pub fn is_excluded(&self, file_path: &str) -> bool {
        if self.excluded_files.is_empty() {
            return false;
        }
        let base = Path::new(file_path)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(file_path);
        self.excluded_files
            .iter()
            .any(|entry| entry == file_path || entry == base)
    }
}

/// The built-in ignore list plus configured additions.
///
/// Membership is an exact string match against either the tag's full dotted
/// path or its leading identifier.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    entries: HashSet<String>,
}

impl IgnoreSet {
    pub fn new(additions: &[String]) -> Self {
        let mut entries: HashSet<String> = DEFAULT_IGNORED_ELEMENTS
            .iter()
            .map(|s| s.to_string())
            .collect();
        entries.extend(additions.iter().cloned());
        IgnoreSet { entries }
    }

    pub fn contains(&self, tag: &TagName) -> bool {
        self.entries.contains(&tag.qualified()) || self.entries.contains(tag.root())
    }
}

pub fn derive_class_from_path(file_path: &str) -> Result<String, CompilerError> {
    Path::new(file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            CompilerError::new(
                "INVALID_FILENAME",
                "Cannot derive a class name from the file path",
                file_path,
                0,
                0,
            )
        })
}
