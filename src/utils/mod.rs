// Pageflow's Utilities Module
//
// Common utilities and helper functions used throughout the Pageflow codebase.

use anyhow::{Context, Result};
use std::path::Path;

/// File utilities
pub mod file_utils {
    use super::*;
    use std::fs;

    /// Only Java sources take part in extraction
    pub fn is_java_file(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| ext == "java")
            .unwrap_or(false)
    }

    /// Read file content safely
    pub fn read_file_content(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// True when any ancestor directory of `path` has one of `names` (case-insensitive)
    pub fn has_ancestor_dir(path: &Path, names: &[&str]) -> bool {
        path.ancestors().skip(1).any(|dir| {
            dir.file_name()
                .and_then(|n| n.to_str())
                .map(|n| names.iter().any(|name| n.eq_ignore_ascii_case(name)))
                .unwrap_or(false)
        })
    }
}

/// Text helpers for identifier and literal handling
pub mod text {
    /// Remove one pair of surrounding double quotes, if present
    pub fn strip_quotes(value: &str) -> &str {
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

    /// Lower-case the first character (`LoginButton` -> `loginButton`)
    pub fn lower_first(value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Split an identifier before each upper-case letter (`ProductClicked` -> `Product`, `Clicked`)
    pub fn split_camel_case(value: &str) -> Vec<&str> {
        let mut parts = Vec::new();
        let mut start = 0;
        for (idx, ch) in value.char_indices() {
            if ch.is_uppercase() && idx > start {
                parts.push(&value[start..idx]);
                start = idx;
            }
        }
        if start < value.len() {
            parts.push(&value[start..]);
        }
        parts
    }

    /// Case-insensitive substring relation in either direction
    ///
    /// Empty operands never match; an empty string is contained in everything.
    pub fn contains_either(a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        a.contains(&b) || b.contains(&a)
    }
}
