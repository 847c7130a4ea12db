/// Project scan: discovery, parallel parsing and report assembly
///
/// Units are parsed on a rayon pool and every parallel stage collects in
/// discovery order, so the same project always yields the same report.
use crate::cli::output::Report;
use crate::cli::progress::{Phase, ProgressReporter};
use crate::config::ScanSettings;
use crate::config::properties::{ConfigMap, load_config_map_or_empty};
use crate::error::ExtractError;
use crate::extractors::base::TestCase;
use crate::extractors::java::parse_java_source;
use crate::extractors::page_objects::{PageObjectExtractor, PageRegistry, register_page_object};
use crate::extractors::syntax::SourceUnit;
use crate::extractors::test_cases::ExtractionPipeline;
use crate::semantic::SynonymTables;
use crate::utils::file_utils::{has_ancestor_dir, is_java_file, read_file_content};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const PAGE_DIRS: &[&str] = &["page", "pages"];
const TEST_DIRS: &[&str] = &["test", "tests"];

/// Options that come from the command line rather than `pageflow.toml`
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Number of parallel threads (defaults to CPU count)
    pub num_threads: usize,

    /// Properties file overriding discovery and the settings file
    pub config_file: Option<PathBuf>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            config_file: None,
        }
    }
}

/// A parsed unit plus the roles its location and content give it
#[derive(Debug)]
pub struct ParsedUnit {
    pub unit: SourceUnit,
    pub is_page_object: bool,
    pub is_test: bool,
}

pub struct ProjectExtractor {
    config: ExtractionConfig,
    settings: ScanSettings,
}

impl ProjectExtractor {
    pub fn new(config: ExtractionConfig, settings: ScanSettings) -> Self {
        Self { config, settings }
    }

    /// Run the whole pipeline over a project directory
    pub fn extract_project(&self, root: &Path) -> Result<Report> {
        if !root.is_dir() {
            return Err(anyhow!("Project path {} is not a directory", root.display()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads)
            .build()
            .context("Failed to build thread pool")?;

        let files = self.discover_files(root)?;
        let progress = ProgressReporter::new(files.len());

        progress.phase(Phase::Parsing);
        let units: Vec<ParsedUnit> = pool.install(|| {
            files
                .par_iter()
                .filter_map(|path| {
                    let parsed = self.parse_unit(root, path);
                    progress.tick();
                    match parsed {
                        Ok(unit) => Some(unit),
                        Err(e) => {
                            warn!("⚠️  Skipping {}", e);
                            None
                        }
                    }
                })
                .collect()
        });

        progress.phase(Phase::PageObjects);
        let registry = self.build_registry(&units);

        let config_urls = self.load_config_urls(root);

        progress.phase(Phase::TestCases);
        let test_cases = pool.install(|| self.extract_test_cases(&units, &registry, &config_urls));

        progress.complete(registry.len(), test_cases.len());
        Ok(Report::new(registry, test_cases, config_urls))
    }

    /// Java files under `root`, sorted by path, minus ignored and oversized files
    pub fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let ignore = self.settings.ignore_set()?;
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() || !is_java_file(entry.path()) {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if ignore.is_match(relative) {
                debug!("Ignoring {}", relative.display());
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            if size > self.settings.max_file_size {
                warn!(
                    "⚠️  Skipping {} ({} bytes exceeds max_file_size)",
                    relative.display(),
                    size
                );
                continue;
            }

            files.push(entry.into_path());
        }

        info!("📁 Found {} Java files", files.len());
        Ok(files)
    }

    /// Read, parse and classify one file; roles come from its path below `root`
    pub fn parse_unit(&self, root: &Path, path: &Path) -> std::result::Result<ParsedUnit, ExtractError> {
        let path_str = path.to_string_lossy().to_string();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let content = read_file_content(path)
            .map_err(|e| ExtractError::unit_parse(path_str.as_str(), format!("{:#}", e)))?;
        let unit = parse_java_source(&path_str, &content)?;

        let page_extractor = PageObjectExtractor::new(self.settings.page_object_markers.clone());
        let is_page_object =
            has_ancestor_dir(relative, PAGE_DIRS) || page_extractor.looks_like_page_object(&unit);

        Ok(ParsedUnit {
            is_page_object,
            is_test: is_test_file(relative),
            unit,
        })
    }

    /// Page objects from every page-role unit, merged by class name
    pub fn build_registry(&self, units: &[ParsedUnit]) -> PageRegistry {
        let extractor = PageObjectExtractor::new(self.settings.page_object_markers.clone());
        let mut registry = PageRegistry::new();

        for parsed in units.iter().filter(|p| p.is_page_object) {
            match extractor.extract(&parsed.unit) {
                Some(page_object) => {
                    debug!(
                        "📄 {} with {} element(s)",
                        page_object.class_name,
                        page_object.elements.len()
                    );
                    register_page_object(&mut registry, page_object);
                }
                None => debug!("{} declares no page elements", parsed.unit.file_path),
            }
        }

        info!("📄 {} page object(s)", registry.len());
        registry
    }

    pub fn extract_test_cases(
        &self,
        units: &[ParsedUnit],
        registry: &PageRegistry,
        config_urls: &ConfigMap,
    ) -> Vec<TestCase> {
        let pipeline = ExtractionPipeline::new(
            registry,
            config_urls,
            SynonymTables::builtin(),
            &self.settings.test_markers,
        );

        let per_unit: Vec<Vec<TestCase>> = units
            .par_iter()
            .filter(|p| p.is_test)
            .map(|p| pipeline.extract_unit(&p.unit))
            .collect();

        let test_cases: Vec<TestCase> = per_unit.into_iter().flatten().collect();
        info!("🧪 {} test case(s)", test_cases.len());
        test_cases
    }

    fn load_config_urls(&self, root: &Path) -> ConfigMap {
        let explicit = self
            .config
            .config_file
            .clone()
            .or_else(|| self.settings.config_file.clone())
            .map(|path| if path.is_relative() { root.join(path) } else { path });

        load_config_map_or_empty(root, explicit.as_deref())
    }
}

/// Location and naming conventions for test sources
pub fn is_test_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    has_ancestor_dir(path, TEST_DIRS)
        || name.starts_with("Test")
        || name.ends_with("Test.java")
        || name.ends_with("Tests.java")
}
