//! Text output formatter for human-readable display
//!
//! Layout:
//! - optional warnings block for dependencies pinned ahead of the registry
//! - either an "all up to date" line or a fixed-width table of outdated dependencies
//!
//! Colors are applied to headings only, so column widths stay exact.

use crate::domain::{Classification, Ecosystem, UNKNOWN};
use crate::orchestrator::CheckReport;
use crate::output::{write_fetch_errors, OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

const BLOCK_WIDTH: usize = 80;
const TABLE_WIDTH: usize = 120;
const LICENSE_MAX_CHARS: usize = 43;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn format_warnings(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let warnings: Vec<&Classification> = report.warnings().collect();
        if warnings.is_empty() {
            return Ok(());
        }

        let rule = "=".repeat(BLOCK_WIDTH);
        writeln!(writer)?;
        writeln!(writer, "{}", rule)?;
        writeln!(
            writer,
            "{}",
            self.heading(&format!(
                "VERSION WARNINGS (Specified > {} Latest)",
                report.registry_name()
            ))
        )?;
        writeln!(writer, "{}", rule)?;
        for warning in warnings {
            writeln!(
                writer,
                "WARNING: {}",
                warning.detail.as_deref().unwrap_or_default()
            )?;
        }
        writeln!(writer, "{}", rule)?;
        writeln!(writer)?;
        Ok(())
    }

    fn format_table(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "{:20} {:15} {:15} {:45} {}",
            "Package",
            "Specified",
            "Latest",
            "License",
            report.ecosystem.runtime_label()
        )?;
        writeln!(writer, "{}", "-".repeat(TABLE_WIDTH))?;

        for row in report.outdated() {
            let (license, runtime) = match row.record {
                Some(ref record) => (
                    truncate_chars(&record.license, LICENSE_MAX_CHARS),
                    record.runtime_requirement.as_str(),
                ),
                None => (UNKNOWN.to_string(), UNKNOWN),
            };
            writeln!(
                writer,
                "{:20} {:15} {:15} {:45} {}",
                row.name(),
                row.dependency.raw_specifier,
                row.latest_version().unwrap_or(UNKNOWN),
                license,
                runtime
            )?;
        }
        Ok(())
    }

    fn format_skipped(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        for skipped in report.skipped() {
            writeln!(
                writer,
                "skipped {}: {}",
                skipped.name(),
                skipped.detail.as_deref().unwrap_or_default()
            )?;
        }
        Ok(())
    }
}

/// Message printed when nothing is outdated
pub fn up_to_date_message(ecosystem: Ecosystem) -> &'static str {
    match ecosystem {
        Ecosystem::Python => "All pinned (==) dependencies are up to date.",
        Ecosystem::Node => "All dependencies with literal versions are up to date.",
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        self.format_warnings(report, writer)?;

        if report.has_outdated() {
            self.format_table(report, writer)
        } else {
            writeln!(writer, "{}", up_to_date_message(report.ecosystem))
        }
    }

    fn format_diagnostics(
        &self,
        report: &CheckReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        write_fetch_errors(report, writer, self.color)?;
        if self.verbosity == Verbosity::Verbose {
            self.format_skipped(report, writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dependency, ParsedSpecifier, RegistryRecord};

    fn outdated(name: &str, current: &str, latest: &str, license: &str) -> Classification {
        Classification::outdated(
            Dependency::production(name, format!("=={}", current)),
            ParsedSpecifier::pinned(current),
            RegistryRecord::new(latest, license, ">=3.8"),
        )
    }

    fn ahead(name: &str, current: &str, latest: &str) -> Classification {
        Classification::ahead_of_registry(
            Dependency::production(name, format!("=={}", current)),
            ParsedSpecifier::pinned(current),
            RegistryRecord::new(latest, "MIT", UNKNOWN),
            format!(
                "{} specified version {} is NEWER than PyPI latest {}!",
                name, current, latest
            ),
        )
    }

    fn render(report: &CheckReport) -> String {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let mut output = Vec::new();
        formatter.format(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_format_all_up_to_date_python() {
        let report = CheckReport::new("requirements.txt", Ecosystem::Python, Vec::new());
        assert_eq!(
            render(&report),
            "All pinned (==) dependencies are up to date.\n"
        );
    }

    #[test]
    fn test_format_all_up_to_date_node() {
        let report = CheckReport::new("package.json", Ecosystem::Node, Vec::new());
        assert_eq!(
            render(&report),
            "All dependencies with literal versions are up to date.\n"
        );
    }

    #[test]
    fn test_format_table_row() {
        let report = CheckReport::new(
            "requirements.txt",
            Ecosystem::Python,
            vec![outdated("alpha", "1.0.0", "1.2.0", "MIT")],
        );

        let output = render(&report);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            format!(
                "{:20} {:15} {:15} {:45} {}",
                "Package", "Specified", "Latest", "License", "Python"
            )
        );
        assert_eq!(lines[1], "-".repeat(120));
        assert!(lines[2].starts_with("alpha                ==1.0.0         1.2.0           MIT"));
        assert!(lines[2].ends_with(">=3.8"));
    }

    #[test]
    fn test_format_truncates_license() {
        let long = "License :: OSI Approved :: GNU Lesser General Public License v3 (LGPLv3)";
        let report = CheckReport::new(
            "requirements.txt",
            Ecosystem::Python,
            vec![outdated("alpha", "1.0.0", "1.2.0", long)],
        );

        let output = render(&report);
        let row = output.lines().nth(2).unwrap();
        let truncated: String = long.chars().take(43).collect();
        assert!(row.contains(&format!("{}   ", truncated)));
        assert!(!row.contains(long));
    }

    #[test]
    fn test_format_warning_block() {
        let report = CheckReport::new(
            "requirements.txt",
            Ecosystem::Python,
            vec![ahead("beta", "2.0.0", "1.5.0")],
        );

        let rule = "=".repeat(80);
        let expected = format!(
            "\n{rule}\nVERSION WARNINGS (Specified > PyPI Latest)\n{rule}\nWARNING: beta specified version 2.0.0 is NEWER than PyPI latest 1.5.0!\n{rule}\n\nAll pinned (==) dependencies are up to date.\n"
        );
        assert_eq!(render(&report), expected);
    }

    #[test]
    fn test_format_node_runtime_column() {
        let report = CheckReport::new(
            "package.json",
            Ecosystem::Node,
            vec![Classification::outdated(
                Dependency::production("react", "^18.2.0"),
                ParsedSpecifier::ranged("^", "18.2.0"),
                RegistryRecord::new("18.3.1", "MIT", UNKNOWN),
            )],
        );

        let output = render(&report);
        assert!(output.lines().next().unwrap().ends_with("Node"));
        assert!(output.contains("^18.2.0"));
    }

    #[test]
    fn test_skipped_and_up_to_date_produce_no_rows() {
        let report = CheckReport::new(
            "requirements.txt",
            Ecosystem::Python,
            vec![
                Classification::skipped(
                    Dependency::production("gamma", ">=1.0"),
                    ParsedSpecifier::ranged(">=", "1.0"),
                    "'>=1.0' is not an exact pin",
                ),
                outdated("alpha", "1.0.0", "1.2.0", "MIT"),
            ],
        );

        let output = render(&report);
        assert!(!output.contains("gamma"));
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn test_diagnostics_verbose_lists_skipped() {
        let report = CheckReport::new(
            "requirements.txt",
            Ecosystem::Python,
            vec![Classification::skipped(
                Dependency::production("six", ""),
                ParsedSpecifier::Bare,
                "no version specifier",
            )],
        );

        let mut quiet = Vec::new();
        TextFormatter::with_color(Verbosity::Normal, false)
            .format_diagnostics(&report, &mut quiet)
            .unwrap();
        assert!(quiet.is_empty());

        let mut verbose = Vec::new();
        TextFormatter::with_color(Verbosity::Verbose, false)
            .format_diagnostics(&report, &mut verbose)
            .unwrap();
        assert_eq!(
            String::from_utf8(verbose).unwrap(),
            "skipped six: no version specifier\n"
        );
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("Lizenz – MIT", 8), "Lizenz –");
        assert_eq!(truncate_chars("MIT", 43), "MIT");
    }
}
