//! depstale - Stale dependency checker CLI tool
//!
//! Reports which pinned dependencies in a manifest are behind the registry:
//! - Python (requirements.txt, PyPI)
//! - Node.js (package.json, npm)

use clap::Parser;
use depstale::cli::CliArgs;
use depstale::config::Config;
use depstale::orchestrator::Orchestrator;
use depstale::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` takes precedence
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let color = !args.no_color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    let config = Config::from_cli(&args)?;
    tracing::debug!(?config, manifest = %args.manifest.display(), "starting");

    let show_progress = !args.quiet && !args.json && io::stderr().is_terminal();
    let orchestrator = Orchestrator::new(config, &args.manifest)?.with_progress(show_progress);
    let report = orchestrator.run().await?;

    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose, color));

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    let mut stderr = io::stderr().lock();
    formatter.format_diagnostics(&report, &mut stderr)?;
    stderr.flush()?;

    // Failed lookups are reported but do not change the exit code
    Ok(ExitCode::SUCCESS)
}
