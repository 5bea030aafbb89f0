//! CLI argument parsing module for depstale

use crate::registry::{NPM_REGISTRY_URL, PYPI_API_URL};
use clap::Parser;
use std::path::PathBuf;

/// Report stale pinned dependencies against PyPI or npm
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depstale",
    version,
    about = "Report outdated pinned dependencies against PyPI or npm"
)]
pub struct CliArgs {
    /// Manifest to check (`package.json` uses npm; any other file is read as requirements.txt)
    pub manifest: PathBuf,

    // Registry options
    /// Per-request registry timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    pub timeout: u64,

    /// Maximum number of concurrent registry requests
    #[arg(long, value_name = "N", default_value_t = 8)]
    pub concurrency: usize,

    /// Base URL of the PyPI JSON API
    #[arg(long, value_name = "URL", default_value = PYPI_API_URL)]
    pub pypi_url: String,

    /// Base URL of the npm registry
    #[arg(long, value_name = "URL", default_value = NPM_REGISTRY_URL)]
    pub npm_url: String,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (debug logging and skipped dependencies)
    #[arg(long)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
