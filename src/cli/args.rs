/// Command-line arguments of the `pageflow` binary
///
/// Missing arguments are reported as `ExtractError::MissingArgument` naming
/// what was left out; every other parse failure keeps clap's own message.
use crate::cli::output::DEFAULT_OUTPUT_FILE;
use crate::error::ExtractError;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const USAGE: &str = "Usage: pageflow run <project-path> [output-file]";

#[derive(Debug, Parser)]
#[command(name = "pageflow")]
#[command(about = "Extract page objects, test steps and URLs from Selenium test projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a project and write the JSON report
    Run {
        /// Root directory of the test project
        project_path: PathBuf,

        /// Report destination
        #[arg(default_value = DEFAULT_OUTPUT_FILE)]
        output_file: PathBuf,

        /// Properties file with URLs (skips config.properties discovery)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of parallel threads (defaults to CPU count)
        #[arg(short, long)]
        threads: Option<usize>,
    },
}

/// Help and version requests are not failures
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// `MissingArgument` for a parse error caused by a missing argument or command
pub fn missing_argument(err: &clap::Error) -> Option<ExtractError> {
    let detail = match err.kind() {
        ErrorKind::MissingRequiredArgument => match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::Strings(args)) => args.join(", "),
            Some(ContextValue::String(arg)) => arg.clone(),
            _ => "argument".to_string(),
        },
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            "<COMMAND>".to_string()
        }
        _ => return None,
    };
    Some(ExtractError::MissingArgument(detail))
}
