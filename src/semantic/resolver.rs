// Element Resolver
//
// Decides which page-object selector a call refers to. Six strategies are tried
// in a fixed order and the first non-empty answer wins:
//
//   1. boolean-assertion   isX()/hasX() arguments and true/false literals
//   2. literal-selector    an inline By.<strategy>("...") expression
//   3. assertion-argument  the first argument of an assert/verify-style call
//   4. scoped-method       receiver names the page, method names the element
//   5. semantic            prefix stripping, substrings and synonym concepts
//   6. unscoped            exact key lookup across every page object

use crate::extractors::base::PageObject;
use crate::extractors::page_objects::PageRegistry;
use crate::extractors::syntax::CallSite;
use crate::semantic::matcher::{SemanticMatcher, strip_action_prefix};
use crate::semantic::synonyms::SynonymTables;
use crate::utils::text::{contains_either, split_camel_case};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static BOOLEAN_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:true|false)\b").unwrap());

static BOOLEAN_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b((?:is|has|can|should)[A-Z][a-zA-Z]*)\b").unwrap());

static BOOLEAN_CALL_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:is|has|can|should)[A-Z][a-zA-Z]*\s*\(\s*\)").unwrap());

static NO_ARG_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z][a-zA-Z0-9]*)\s*\(\s*\)").unwrap());

static LITERAL_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"By\.[A-Za-z]+\(\s*"(?:[^"\\]|\\.)*"\s*\)"#).unwrap());

static SCOPED_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\.\s*([A-Za-z_$][A-Za-z0-9_$]*)").unwrap()
});

const BOOLEAN_PREFIXES: &[&str] = &["is", "has", "can", "should"];

/// Words that describe state rather than an element
const STATE_TERMS: &[&str] = &["ed", "clicked", "valid", "success", "complete"];

/// Markers that make a bare `name()` call look like a boolean getter
const BOOLEAN_HINTS: &[&str] = &["Click", "Valid", "Success", "Complete"];

type Strategy<'a> = fn(&ElementResolver<'a>, &CallSite) -> Option<String>;

/// Strategy names in evaluation order
pub const STRATEGY_ORDER: &[&str] = &[
    "boolean-assertion",
    "literal-selector",
    "assertion-argument",
    "scoped-method",
    "semantic",
    "unscoped",
];

/// Whether a call name reads like an assertion or verification
pub fn is_assertion_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    ["assert", "verify", "expect", "check"]
        .iter()
        .any(|p| lower.starts_with(p))
        || ["should", "equals", "contains", "visible", "displayed", "enabled", "present"]
            .iter()
            .any(|w| lower.contains(w))
}

pub struct ElementResolver<'a> {
    registry: &'a PageRegistry,
    matcher: SemanticMatcher<'a>,
}

impl<'a> ElementResolver<'a> {
    pub fn new(registry: &'a PageRegistry, tables: &'a SynonymTables) -> Self {
        Self {
            registry,
            matcher: SemanticMatcher::new(tables),
        }
    }

    fn strategies(&self) -> [(&'static str, Strategy<'a>); 6] {
        [
            (STRATEGY_ORDER[0], Self::boolean_assertion as Strategy<'a>),
            (STRATEGY_ORDER[1], Self::literal_selector as Strategy<'a>),
            (STRATEGY_ORDER[2], Self::assertion_argument as Strategy<'a>),
            (STRATEGY_ORDER[3], Self::scoped_method as Strategy<'a>),
            (STRATEGY_ORDER[4], Self::semantic as Strategy<'a>),
            (STRATEGY_ORDER[5], Self::unscoped as Strategy<'a>),
        ]
    }

    pub fn resolve(&self, call: &CallSite) -> Option<String> {
        self.resolve_traced(call).map(|(_, selector)| selector)
    }

    /// Like `resolve`, also naming the strategy that produced the selector
    pub fn resolve_traced(&self, call: &CallSite) -> Option<(&'static str, String)> {
        for (name, strategy) in self.strategies() {
            if let Some(selector) = strategy(self, call) {
                debug!("🎯 {} resolved via {} -> {}", call.name, name, selector);
                return Some((name, selector));
            }
        }
        debug!("no element for {}", call.name);
        None
    }

    fn boolean_assertion(&self, call: &CallSite) -> Option<String> {
        if !is_boolean_assertion(call) {
            return None;
        }
        let identifier = boolean_identifier(&call.text)?;
        self.find_related(&key_terms(&identifier))
    }

    fn literal_selector(&self, call: &CallSite) -> Option<String> {
        LITERAL_SELECTOR
            .find(&call.text)
            .map(|m| m.as_str().to_string())
    }

    fn assertion_argument(&self, call: &CallSite) -> Option<String> {
        if !is_assertion_name(&call.name) {
            return None;
        }
        let argument = call.first_argument()?.trim();

        if let Some(caps) = SCOPED_ARGUMENT.captures(argument) {
            if let Some(selector) = self.scoped_lookup(&caps[1], &caps[2]) {
                return Some(selector);
            }
        }

        self.registry.values().find_map(|page_object| {
            page_object.elements.get(argument).map(str::to_string).or_else(|| {
                page_object
                    .elements
                    .iter()
                    .find(|(key, _)| contains_either(key, argument))
                    .map(|(_, selector)| selector.to_string())
            })
        })
    }

    fn scoped_method(&self, call: &CallSite) -> Option<String> {
        let receiver = call.receiver.as_deref()?;
        self.scoped_lookup(receiver, &call.name)
    }

    fn semantic(&self, call: &CallSite) -> Option<String> {
        self.matcher.find_element(&call.name, self.registry)
    }

    fn unscoped(&self, call: &CallSite) -> Option<String> {
        let stripped = strip_action_prefix(&call.name);
        self.registry.values().find_map(|page_object| {
            page_object
                .elements
                .get(&call.name)
                .or_else(|| page_object.elements.get(&stripped))
                .map(str::to_string)
        })
    }

    /// Look `method` up inside page objects whose class name the `scope` text mentions
    fn scoped_lookup(&self, scope: &str, method: &str) -> Option<String> {
        let scope_lower = scope.to_lowercase();
        let stripped = strip_action_prefix(method);

        self.registry
            .values()
            .filter(|page_object| receiver_matches(&scope_lower, page_object))
            .find_map(|page_object| {
                let elements = &page_object.elements;
                elements
                    .get(method)
                    .or_else(|| elements.get(&stripped))
                    .or_else(|| {
                        elements
                            .iter()
                            .find(|(key, _)| contains_either(key, method) || contains_either(key, &stripped))
                            .map(|(_, selector)| selector)
                    })
                    .map(str::to_string)
            })
    }

    /// Elements whose key relates to any term, then semantic matching per term
    fn find_related(&self, terms: &[String]) -> Option<String> {
        if terms.is_empty() {
            return None;
        }

        let direct = self.registry.values().find_map(|page_object| {
            page_object
                .elements
                .iter()
                .find(|(key, _)| {
                    let key = key.to_lowercase();
                    terms.iter().any(|t| key.contains(t.as_str()) || t.contains(key.as_str()))
                })
                .map(|(_, selector)| selector.to_string())
        });

        direct.or_else(|| {
            terms
                .iter()
                .find_map(|term| self.matcher.find_element(term, self.registry))
        })
    }
}

/// `loginPage` matches `LoginPage`; `login` also matches it once "page" is dropped
fn receiver_matches(scope_lower: &str, page_object: &PageObject) -> bool {
    let class_lower = page_object.class_name.to_lowercase();
    if scope_lower.contains(&class_lower) {
        return true;
    }
    match class_lower.strip_suffix("page") {
        Some(base) if !base.is_empty() => scope_lower.contains(base),
        _ => false,
    }
}

fn is_boolean_assertion(call: &CallSite) -> bool {
    BOOLEAN_LITERAL.is_match(&call.text)
        || BOOLEAN_IDENTIFIER.is_match(&call.text)
        || (is_assertion_name(&call.name)
            && call
                .first_argument()
                .is_some_and(|arg| BOOLEAN_CALL_ARGUMENT.is_match(arg)))
}

/// The boolean identifier named in a call's text, if any
fn boolean_identifier(text: &str) -> Option<String> {
    if let Some(caps) = BOOLEAN_IDENTIFIER.captures(text) {
        return Some(caps[1].to_string());
    }

    let caps = NO_ARG_CALL.captures(text)?;
    let name = &caps[1];
    let looks_boolean = BOOLEAN_PREFIXES.iter().any(|p| name.starts_with(p))
        || BOOLEAN_HINTS.iter().any(|hint| name.contains(hint));
    looks_boolean.then(|| name.to_string())
}

/// `isProductClicked` -> ["product"]
fn key_terms(identifier: &str) -> Vec<String> {
    let core = BOOLEAN_PREFIXES
        .iter()
        .find_map(|p| identifier.strip_prefix(p))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(identifier);

    split_camel_case(core)
        .into_iter()
        .map(str::to_lowercase)
        .filter(|term| term.len() >= 2 && !STATE_TERMS.contains(&term.as_str()))
        .collect()
}
