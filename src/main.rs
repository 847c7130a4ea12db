/// pageflow: Selenium test-suite analyzer
///
/// Reads a UI-test project (page objects plus test classes) and writes a JSON
/// report of page elements, ordered test steps and inferred base URLs.
use clap::Parser;
use pageflow::cli::args::{Cli, Commands, USAGE, is_informational, missing_argument};
use pageflow::cli::{ExtractionConfig, ProjectExtractor, write_report};
use pageflow::config::ScanSettings;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => {
            match missing_argument(&e) {
                Some(missing) => eprintln!("{}\n{}", missing, USAGE),
                None => eprintln!("{}\n{}", e.render(), USAGE),
            }
            return ExitCode::from(1);
        }
    };

    let default_filter = if cli.verbose { "pageflow=debug" } else { "pageflow=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stderr only; stdout stays free for piping
    let (writer, _guard) = non_blocking(std::io::stderr());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_target(false))
        .init();

    match cli.command {
        Commands::Run {
            project_path,
            output_file,
            config,
            threads,
        } => run(project_path, output_file, config, threads),
    }
}

fn run(
    project_path: PathBuf,
    output_file: PathBuf,
    config_file: Option<PathBuf>,
    threads: Option<usize>,
) -> ExitCode {
    info!("🚀 Analyzing {}", project_path.display());

    let settings = ScanSettings::load_or_default(&project_path);
    let config = ExtractionConfig {
        num_threads: threads.unwrap_or_else(num_cpus::get),
        config_file,
    };

    let report = match ProjectExtractor::new(config, settings).extract_project(&project_path) {
        Ok(report) => report,
        Err(e) => {
            error!("❌ Extraction failed: {:#}", e);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = write_report(&report, &output_file) {
        error!("❌ {}", e);
        return ExitCode::from(1);
    }

    println!("Test cases successfully extracted to: {}", output_file.display());
    ExitCode::SUCCESS
}
