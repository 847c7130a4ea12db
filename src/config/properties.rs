// URL config map
//
// Finds the project's `config.properties`, parses it with `.properties` rules
// and keeps only the URL-like entries, in file order.

use crate::error::{ExtractError, Result};
use crate::extractors::base::OrderedMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// URL-like config entries, in file order
pub type ConfigMap = OrderedMap;

const CONFIG_FILE_NAMES: &[&str] = &["config.properties", "Config.properties"];
const CONFIG_DIRS: &[&str] = &["", "src/main/resources", "src/test/resources", "resources"];

const URL_KEY_MARKERS: &[&str] = &["url", "link", "endpoint", "site"];
const URL_VALUE_PREFIXES: &[&str] = &["http://", "https://", "www."];

/// Known locations first, then a depth-first search in sorted order
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    for dir in CONFIG_DIRS {
        for name in CONFIG_FILE_NAMES {
            let candidate = project_root.join(dir).join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    WalkDir::new(project_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.eq_ignore_ascii_case("config.properties"))
        })
        .map(|entry| entry.into_path())
}

/// Load the URL config map for a project
///
/// `explicit` overrides discovery. No file at all is `MissingConfig`.
pub fn load_config_map(project_root: &Path, explicit: Option<&Path>) -> Result<ConfigMap> {
    let missing = || ExtractError::MissingConfig {
        project: project_root.display().to_string(),
    };

    let path = match explicit {
        Some(path) if path.is_file() => path.to_path_buf(),
        Some(path) => {
            warn!("Config file {} does not exist", path.display());
            return Err(missing());
        }
        None => find_config_file(project_root).ok_or_else(missing)?,
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        warn!("Failed to read {}: {}", path.display(), e);
        missing()
    })?;

    let urls = url_entries(parse_properties(&content));
    info!("🔗 Loaded {} URL(s) from {}", urls.len(), path.display());
    Ok(urls)
}

/// `load_config_map`, logging a missing config and returning an empty map
pub fn load_config_map_or_empty(project_root: &Path, explicit: Option<&Path>) -> ConfigMap {
    load_config_map(project_root, explicit).unwrap_or_else(|e| {
        warn!("⚠️  {}; no test URLs will be resolved", e);
        ConfigMap::new()
    })
}

/// Whether a config entry describes a URL
pub fn is_url_property(key: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    let key = key.to_lowercase();
    URL_KEY_MARKERS.iter().any(|m| key.contains(m))
        || URL_VALUE_PREFIXES.iter().any(|p| value.starts_with(p))
}

fn url_entries(entries: Vec<(String, String)>) -> ConfigMap {
    entries
        .into_iter()
        .filter(|(key, value)| {
            let keep = is_url_property(key, value);
            if !keep {
                debug!("Ignoring non-URL config entry {}", key);
            }
            keep
        })
        .collect()
}

/// Parse `.properties` text into (key, value) pairs in file order
///
/// Supports `#`/`!` comments, `=`, `:` or whitespace separators, backslash
/// line continuations and the usual escapes. A repeated key keeps its first
/// position and takes the last value when collected into a `ConfigMap`.
pub fn parse_properties(content: &str) -> Vec<(String, String)> {
    logical_lines(content)
        .into_iter()
        .filter_map(|line| split_entry(&line))
        .collect()
}

fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for raw in content.lines() {
        let piece = match current {
            Some(_) => raw.trim_start(),
            None => {
                let trimmed = raw.trim_start();
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                trimmed
            }
        };

        let continued = ends_with_continuation(piece);
        let piece = if continued { &piece[..piece.len() - 1] } else { piece };
        let line = current.get_or_insert_with(String::new);
        line.push_str(piece);

        if !continued {
            lines.extend(current.take());
        }
    }

    lines.extend(current.take());
    lines
}

/// An odd number of trailing backslashes continues the line
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> Option<(String, String)> {
    let mut key = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    key.push(unescape(escaped));
                }
            }
            '=' | ':' => break,
            c if c.is_whitespace() => {
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                if chars.peek().is_some_and(|c| *c == '=' || *c == ':') {
                    chars.next();
                }
                break;
            }
            c => key.push(c),
        }
    }

    if key.is_empty() {
        return None;
    }

    let rest: String = chars.collect();
    let mut value = String::new();
    let mut rest_chars = rest.trim().chars();
    while let Some(c) = rest_chars.next() {
        if c == '\\' {
            if let Some(escaped) = rest_chars.next() {
                value.push(unescape(escaped));
            }
        } else {
            value.push(c);
        }
    }

    Some((key, value))
}

fn unescape(c: char) -> char {
    match c {
        't' => '\t',
        'n' => '\n',
        'r' => '\r',
        'f' => '\u{c}',
        other => other,
    }
}
