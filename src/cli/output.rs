/// Report model and JSON output
///
/// The report bundles page objects, test cases and config URLs with a summary
/// block. Absent selectors, values and URLs are written as `null`, never as
/// empty strings.
use crate::config::properties::ConfigMap;
use crate::error::{ExtractError, Result};
use crate::extractors::base::{PageObject, TestCase};
use crate::extractors::page_objects::PageRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

pub const DEFAULT_OUTPUT_FILE: &str = "test-cases.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub page_objects: BTreeMap<String, PageObject>,
    pub test_cases: Vec<TestCase>,
    pub config_urls: ConfigMap,
    pub summary: Summary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_test_cases: usize,
    pub total_page_objects: usize,
    pub total_steps: usize,
    pub total_config_urls: usize,
    pub test_cases_with_url: usize,
    pub unresolved_selectors: usize,
    /// Keyed by action kind name, sorted
    pub action_type_counts: BTreeMap<String, usize>,
}

impl Summary {
    pub fn compute(page_objects: &PageRegistry, test_cases: &[TestCase], config_urls: &ConfigMap) -> Self {
        let mut summary = Summary {
            total_test_cases: test_cases.len(),
            total_page_objects: page_objects.len(),
            total_config_urls: config_urls.len(),
            ..Default::default()
        };

        for test_case in test_cases {
            if test_case.test_url.is_some() {
                summary.test_cases_with_url += 1;
            }
            for step in &test_case.steps {
                summary.total_steps += 1;
                if step.element_selector.is_none() {
                    summary.unresolved_selectors += 1;
                }
                *summary
                    .action_type_counts
                    .entry(step.action_type.as_str().to_string())
                    .or_insert(0) += 1;
            }
        }

        summary
    }
}

impl Report {
    pub fn new(page_objects: PageRegistry, test_cases: Vec<TestCase>, config_urls: ConfigMap) -> Self {
        let summary = Summary::compute(&page_objects, &test_cases, &config_urls);
        Self {
            page_objects,
            test_cases,
            config_urls,
            summary,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write the report as pretty JSON; any failure here is fatal for the run
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let write_error = |source: io::Error| ExtractError::ReportWrite {
        path: path.display().to_string(),
        source,
    };

    let json = report.to_json().map_err(|e| write_error(e.into()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, json).map_err(write_error)?;

    info!("💾 Report written to {}", path.display());
    Ok(())
}
