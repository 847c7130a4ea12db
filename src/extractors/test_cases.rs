// Test Case Extraction Pipeline
//
// Per test method: pick a description, walk the statements in source order,
// classify every nested call, resolve the classified ones and number them.
// Data-driven methods (a switch over scenario names) are expanded into one
// independent test case per named branch instead.

use crate::config::properties::ConfigMap;
use crate::config::urls::resolve_url;
use crate::extractors::base::{ActionKind, TestCase, TestStep};
use crate::extractors::page_objects::PageRegistry;
use crate::extractors::syntax::{Annotated, CallSite, MethodDecl, SourceUnit};
use crate::semantic::{
    ActionClassifier, AssertionAnalyzer, AssertionInfo, ElementResolver, SynonymTables, describe,
};
use crate::utils::text::strip_quotes;
use tracing::debug;

/// Class name used when a test unit declares no usable class
pub const UNKNOWN_CLASS: &str = "Unknown";

const DEFAULT_LABEL: &str = "default";

pub struct ExtractionPipeline<'a> {
    resolver: ElementResolver<'a>,
    classifier: ActionClassifier,
    config: &'a ConfigMap,
    tables: &'a SynonymTables,
    test_markers: &'a [String],
}

impl<'a> ExtractionPipeline<'a> {
    pub fn new(
        registry: &'a PageRegistry,
        config: &'a ConfigMap,
        tables: &'a SynonymTables,
        test_markers: &'a [String],
    ) -> Self {
        Self {
            resolver: ElementResolver::new(registry, tables),
            classifier: ActionClassifier::new(),
            config,
            tables,
            test_markers,
        }
    }

    /// All test cases of one unit, in method order with expansions in place
    pub fn extract_unit(&self, unit: &SourceUnit) -> Vec<TestCase> {
        let class_name = unit.class_name().unwrap_or(UNKNOWN_CLASS);
        let mut test_cases = Vec::new();

        for method in unit
            .methods
            .iter()
            .filter(|m| m.has_any_marker(self.test_markers))
        {
            if method.is_data_driven() {
                test_cases.extend(self.expand_data_driven(unit, method, class_name));
            } else {
                test_cases.push(self.extract_test_case(method, class_name));
            }
        }

        debug!("{}: {} test case(s)", unit.file_path, test_cases.len());
        test_cases
    }

    /// One test case per non-default case label that names a sibling method
    ///
    /// The dispatching method itself contributes nothing.
    pub fn expand_data_driven(
        &self,
        unit: &SourceUnit,
        method: &MethodDecl,
        class_name: &str,
    ) -> Vec<TestCase> {
        method
            .dispatches
            .iter()
            .flat_map(|dispatch| dispatch.labels.iter())
            .filter(|label| label.as_str() != DEFAULT_LABEL)
            .filter_map(|label| match unit.find_sibling_method(label) {
                Some(scenario) => Some(self.extract_test_case(scenario, class_name)),
                None => {
                    debug!("{}: no method for case \"{}\"", method.name, label);
                    None
                }
            })
            .collect()
    }

    pub fn extract_test_case(&self, method: &MethodDecl, class_name: &str) -> TestCase {
        TestCase {
            test_name: method.name.clone(),
            class_name: class_name.to_string(),
            description: method_description(method),
            steps: self.extract_steps(method),
            test_url: resolve_url(&method.name, self.config, self.tables),
        }
    }

    /// Steps numbered 1..N across all statements, in call-discovery order
    pub fn extract_steps(&self, method: &MethodDecl) -> Vec<TestStep> {
        method
            .statements
            .iter()
            .flat_map(|statement| statement.calls.iter())
            .filter_map(|call| self.classifier.classify(&call.name).map(|kind| (kind, call)))
            .zip(1..)
            .map(|((kind, call), step_number)| self.build_step(step_number, kind, call))
            .collect()
    }

    fn build_step(&self, step_number: u32, action_type: ActionKind, call: &CallSite) -> TestStep {
        let (element_selector, value) = if action_type.is_assertion() {
            let AssertionInfo {
                element_selector,
                expected_value,
            } = AssertionAnalyzer::new(&self.resolver).analyze(call);
            (element_selector, expected_value)
        } else {
            (
                self.resolver.resolve(call),
                call.first_argument()
                    .map(|arg| strip_quotes(arg.trim()).to_string()),
            )
        };

        TestStep {
            step_number,
            description: describe(
                action_type,
                element_selector.as_deref(),
                value.as_deref(),
                &call.name,
            ),
            action_type,
            element_selector,
            value,
        }
    }
}

/// Javadoc text, else a line comment mentioning "test case", else the method name
pub fn method_description(method: &MethodDecl) -> String {
    if let Some(doc) = method.doc_comment.as_deref().filter(|d| !d.trim().is_empty()) {
        return doc.trim().to_string();
    }

    method
        .line_comments
        .iter()
        .find(|comment| comment.to_lowercase().contains("test case"))
        .map(|comment| comment.trim().to_string())
        .filter(|comment| !comment.is_empty())
        .unwrap_or_else(|| method.name.clone())
}
