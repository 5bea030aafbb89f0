//! Output formatting for check reports
//!
//! This module provides:
//! - Text output: warnings block and fixed-width table of outdated dependencies
//! - JSON output for machine processing
//! - Error-stream lines for failed lookups, shared by both formats

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::orchestrator::CheckReport;
use colored::Colorize;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Normal output
    #[default]
    Normal,
    /// Also list skipped dependencies on the error stream
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether to use colors
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, verbose: bool, color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            color,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write the primary report (stdout)
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Write per-dependency diagnostics (stderr)
    ///
    /// Every failed lookup produces one `ERROR:` line.
    fn format_diagnostics(
        &self,
        report: &CheckReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        write_fetch_errors(report, writer, false)
    }
}

/// Write one line per failed registry lookup
pub fn write_fetch_errors(
    report: &CheckReport,
    writer: &mut dyn Write,
    color: bool,
) -> std::io::Result<()> {
    let prefix = if color {
        "ERROR:".red().bold().to_string()
    } else {
        "ERROR:".to_string()
    };

    for failed in report.errors() {
        writeln!(
            writer,
            "{} could not fetch {} from {}: {}",
            prefix,
            failed.name(),
            report.registry_name(),
            failed.detail.as_deref().unwrap_or("unknown error")
        )?;
    }
    Ok(())
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.verbosity, config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Classification, Dependency, Ecosystem, ParsedSpecifier};

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_output_config_default() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert!(config.color);
    }

    #[test]
    fn test_output_config_from_cli_json() {
        let config = OutputConfig::from_cli(true, false, true);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_output_config_from_cli_verbose_no_color() {
        let config = OutputConfig::from_cli(false, true, false);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert!(!config.color);
    }

    #[test]
    fn test_create_formatter_text_without_color() {
        let report = CheckReport::new("requirements.txt", Ecosystem::Python, Vec::new());
        let formatter = create_formatter(OutputConfig::from_cli(false, false, false));

        let mut output = Vec::new();
        formatter.format(&report, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "All pinned (==) dependencies are up to date.\n"
        );
    }

    #[test]
    fn test_write_fetch_errors() {
        let report = CheckReport::new(
            "package.json",
            Ecosystem::Node,
            vec![Classification::fetch_failed(
                Dependency::production("left-pad", "1.3.0"),
                ParsedSpecifier::pinned("1.3.0"),
                "timeout while fetching 'left-pad' from npm",
            )],
        );

        let mut output = Vec::new();
        write_fetch_errors(&report, &mut output, false).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ERROR: could not fetch left-pad from npm: timeout while fetching 'left-pad' from npm\n"
        );
    }
}
