// Pageflow configuration
//
// Two inputs shape a run: scan settings from an optional `pageflow.toml` at the
// project root, and the URL config map read from the project's
// `config.properties` (see `properties`).

pub mod properties;
pub mod urls;

use crate::error::ExtractError;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use properties::{ConfigMap, load_config_map};
pub use urls::resolve_url;

pub const SETTINGS_FILE: &str = "pageflow.toml";

/// Scan settings for one project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanSettings {
    /// Glob patterns excluded from the walk
    pub ignore_patterns: Vec<String>,

    /// Maximum file size to process (in bytes)
    pub max_file_size: u64,

    /// Method annotations that mark a test
    pub test_markers: Vec<String>,

    /// Field annotations that mark a page-object element
    pub page_object_markers: Vec<String>,

    /// Explicit properties file; discovery is skipped when set
    pub config_file: Option<PathBuf>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            ignore_patterns: vec![
                "**/target/**".to_string(),
                "**/build/**".to_string(),
                "**/.git/**".to_string(),
                "**/node_modules/**".to_string(),
                "**/out/**".to_string(),
            ],
            max_file_size: 1024 * 1024,
            test_markers: vec![
                "Test".to_string(),
                "ParameterizedTest".to_string(),
                "RepeatedTest".to_string(),
            ],
            page_object_markers: vec!["FindBy".to_string(), "FindElement".to_string()],
            config_file: None,
        }
    }
}

impl ScanSettings {
    /// Load `pageflow.toml` from the project root
    ///
    /// A missing file means defaults; a malformed one is a `Settings` error.
    pub fn load(project_root: &Path) -> std::result::Result<Self, ExtractError> {
        let path = project_root.join(SETTINGS_FILE);
        if !path.exists() {
            debug!("No {} found, using defaults", SETTINGS_FILE);
            return Ok(Self::default());
        }

        let settings_error = |reason: String| ExtractError::Settings {
            path: path.display().to_string(),
            reason,
        };

        let content = fs::read_to_string(&path).map_err(|e| settings_error(e.to_string()))?;
        let settings: ScanSettings =
            toml::from_str(&content).map_err(|e| settings_error(e.to_string()))?;

        debug!("Loaded settings from: {}", path.display());
        Ok(settings)
    }

    /// `load`, falling back to defaults with a warning on a bad file
    pub fn load_or_default(project_root: &Path) -> Self {
        Self::load(project_root).unwrap_or_else(|e| {
            warn!("⚠️  {}, using defaults", e);
            Self::default()
        })
    }

    pub fn ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.ignore_patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
            builder.add(glob);
        }
        builder.build().context("Failed to build ignore set")
    }
}
