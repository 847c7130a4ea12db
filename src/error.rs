use thiserror::Error;

/// Failure kinds of an extraction run
///
/// Only `MissingArgument` and `ReportWrite` abort a run. Parse, config and
/// settings failures are logged and recovered from by the caller; unresolved
/// elements and URLs are not errors at all (they surface as `None`).
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    #[error("Failed to parse {path}: {reason}")]
    UnitParse { path: String, reason: String },

    #[error("No config.properties found under {project}")]
    MissingConfig { project: String },

    #[error("Invalid settings file {path}: {reason}")]
    Settings { path: String, reason: String },

    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn unit_parse(path: impl Into<String>, reason: impl ToString) -> Self {
        ExtractError::UnitParse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the run must stop instead of skipping the failing unit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExtractError::MissingArgument(_) | ExtractError::ReportWrite { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
