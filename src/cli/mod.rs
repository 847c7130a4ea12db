/// Outer surface of the `pageflow` binary
///
/// Modules:
/// - args: clap argument model and missing-argument reporting
/// - output: report model, summary statistics and the JSON writer
/// - parallel: project walk and parallel per-unit extraction with Rayon
/// - progress: progress reporting for long scans
pub mod args;
pub mod output;
pub mod parallel;
pub mod progress;

pub use output::{DEFAULT_OUTPUT_FILE, Report, Summary, write_report};
pub use parallel::{ExtractionConfig, ParsedUnit, ProjectExtractor, is_test_file};
pub use progress::{Phase, ProgressReporter};
