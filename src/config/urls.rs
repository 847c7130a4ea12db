// URL resolution
//
// Maps a test name to a base URL from the config map. Pure: the same name and
// map always give the same answer.

use crate::config::properties::ConfigMap;
use crate::semantic::synonyms::SynonymTables;
use regex::Regex;
use std::sync::LazyLock;

static URL_KEY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:url|link|endpoint|site)$").unwrap());

/// Resolve the base URL for a test
///
/// Checks, in order: exact key, key without its url/link/endpoint/site suffix
/// as a substring either way, a concept synonym in the name whose root appears
/// in a key, then the first entry of the map.
pub fn resolve_url(test_name: &str, config: &ConfigMap, tables: &SynonymTables) -> Option<String> {
    let name = test_name.to_lowercase();

    if let Some((_, url)) = config.iter().find(|(key, _)| key.to_lowercase() == name) {
        return Some(url.to_string());
    }

    let by_key = config.iter().find(|(key, _)| {
        let key = key.to_lowercase();
        let cleaned = URL_KEY_SUFFIX.replace(&key, "");
        !cleaned.is_empty() && (name.contains(&*cleaned) || cleaned.contains(name.as_str()))
    });
    if let Some((_, url)) = by_key {
        return Some(url.to_string());
    }

    for concept in tables.urls.iter().filter(|c| c.mentioned_in(&name)) {
        if let Some((_, url)) = config
            .iter()
            .find(|(key, _)| key.to_lowercase().contains(concept.root))
        {
            return Some(url.to_string());
        }
    }

    config.values().next().map(str::to_string)
}
