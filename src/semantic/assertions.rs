// Assertion Analysis
//
// Assert and verify steps report the element under test and the literal the
// test expects, instead of the usual "first argument" value.

use crate::extractors::syntax::CallSite;
use crate::semantic::resolver::ElementResolver;
use crate::utils::text::strip_quotes;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertionInfo {
    pub element_selector: Option<String>,
    pub expected_value: Option<String>,
}

pub struct AssertionAnalyzer<'r, 'a> {
    resolver: &'r ElementResolver<'a>,
}

impl<'r, 'a> AssertionAnalyzer<'r, 'a> {
    pub fn new(resolver: &'r ElementResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn analyze(&self, call: &CallSite) -> AssertionInfo {
        AssertionInfo {
            element_selector: self.resolver.resolve(call),
            expected_value: expected_value(&call.name, &call.arguments),
        }
    }
}

/// Expected value by assertion family
///
/// A bare condition call (`isProductClicked()`) expects itself. Boolean
/// families keep the raw condition text, `assertEquals(actual, expected)` takes
/// the second argument, and anything else takes the first.
pub fn expected_value(call_name: &str, arguments: &[String]) -> Option<String> {
    let Some(first) = arguments.first() else {
        return Some(call_name.to_string());
    };
    let lower = call_name.to_lowercase();

    if lower.contains("true") || lower.contains("false") {
        return Some(first.trim().to_string());
    }
    if lower.contains("equals") {
        if let Some(second) = arguments.get(1) {
            return Some(strip_quotes(second.trim()).to_string());
        }
    }
    Some(strip_quotes(first.trim()).to_string())
}
