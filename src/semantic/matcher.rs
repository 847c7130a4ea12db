// Semantic Matcher
//
// Fuzzy method-name to element-key matching: action-prefix stripping, substring
// relations, synonym concepts and the boolean-getter remainder.

use crate::extractors::page_objects::PageRegistry;
use crate::semantic::synonyms::SynonymTables;
use crate::utils::text::{contains_either, lower_first};

/// Action words stripped from the front of a method name, case-insensitively
pub const ACTION_PREFIXES: &[&str] = &[
    "click",
    "enter",
    "select",
    "type",
    "set",
    "get",
    "wait",
    "verify",
    "assert",
    "send",
    "check",
    "expect",
    "should",
    "is",
    "has",
    "contains",
    "equals",
    "visible",
    "displayed",
    "enabled",
    "present",
    "getText",
    "getValue",
    "getAttribute",
];

/// Prefixes re-checked on the full method name for boolean getters
const BOOLEAN_GETTER_PREFIXES: &[&str] = &["is", "has", "get"];

/// Strip the longest action prefix that leaves something behind, then lower the
/// first remaining letter (`clickLoginButton` -> `loginButton`)
///
/// A name that is nothing but a prefix, or has none, comes back unchanged.
pub fn strip_action_prefix(method_name: &str) -> String {
    ACTION_PREFIXES
        .iter()
        .filter(|prefix| method_name.len() > prefix.len())
        .filter(|prefix| {
            method_name
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
        .max_by_key(|prefix| prefix.len())
        .map(|prefix| lower_first(&method_name[prefix.len()..]))
        .unwrap_or_else(|| method_name.to_string())
}

#[derive(Debug, Clone, Copy)]
pub struct SemanticMatcher<'a> {
    tables: &'a SynonymTables,
}

impl<'a> SemanticMatcher<'a> {
    pub fn new(tables: &'a SynonymTables) -> Self {
        Self { tables }
    }

    /// First element, in registry order, whose key matches `method_name`
    pub fn find_element(&self, method_name: &str, registry: &PageRegistry) -> Option<String> {
        let core = strip_action_prefix(method_name);

        registry.values().find_map(|page_object| {
            page_object
                .elements
                .iter()
                .find(|(key, _)| self.is_match(&core, key, method_name))
                .map(|(_, selector)| selector.to_string())
        })
    }

    pub fn is_match(&self, core: &str, element_key: &str, method_name: &str) -> bool {
        let core_lower = core.to_lowercase();
        let key_lower = element_key.to_lowercase();
        let method_lower = method_name.to_lowercase();

        if !key_lower.is_empty() && core_lower == key_lower {
            return true;
        }

        if contains_either(&core_lower, &key_lower) || contains_either(&method_lower, &key_lower) {
            return true;
        }

        if self
            .tables
            .elements
            .iter()
            .any(|concept| concept.links(&core_lower, &key_lower))
        {
            return true;
        }

        BOOLEAN_GETTER_PREFIXES.iter().any(|prefix| {
            method_lower
                .strip_prefix(prefix)
                .is_some_and(|rest| contains_either(rest, &key_lower))
        })
    }
}
