//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of a check report
//! - Outdated rows, warnings, and fetch errors as separate arrays

use crate::domain::{Classification, Ecosystem, OutcomeKind, UNKNOWN};
use crate::orchestrator::CheckReport;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Manifest path
    manifest: String,
    /// Ecosystem of the manifest
    ecosystem: Ecosystem,
    /// Registry that was queried
    registry: &'a str,
    /// Outdated dependencies
    outdated: Vec<JsonOutdated<'a>>,
    /// Dependencies pinned ahead of the registry
    warnings: Vec<JsonWarning<'a>>,
    /// Failed lookups
    errors: Vec<JsonError<'a>>,
    /// Number of skipped dependencies
    skipped: usize,
    /// Number of up-to-date dependencies
    up_to_date: usize,
}

/// JSON representation of an outdated dependency
#[derive(Serialize)]
struct JsonOutdated<'a> {
    name: &'a str,
    specified: &'a str,
    current: &'a str,
    latest: &'a str,
    license: &'a str,
    runtime: &'a str,
    dev: bool,
}

/// JSON representation of a version warning
#[derive(Serialize)]
struct JsonWarning<'a> {
    name: &'a str,
    current: &'a str,
    latest: &'a str,
    message: &'a str,
}

/// JSON representation of a failed lookup
#[derive(Serialize)]
struct JsonError<'a> {
    name: &'a str,
    message: &'a str,
}

impl<'a> From<&'a Classification> for JsonOutdated<'a> {
    fn from(c: &'a Classification) -> Self {
        let (license, runtime) = c
            .record
            .as_ref()
            .map(|r| (r.license.as_str(), r.runtime_requirement.as_str()))
            .unwrap_or((UNKNOWN, UNKNOWN));
        Self {
            name: c.name(),
            specified: &c.dependency.raw_specifier,
            current: c.current_version().unwrap_or_default(),
            latest: c.latest_version().unwrap_or(UNKNOWN),
            license,
            runtime,
            dev: c.dependency.is_dev,
        }
    }
}

impl<'a> From<&'a Classification> for JsonWarning<'a> {
    fn from(c: &'a Classification) -> Self {
        Self {
            name: c.name(),
            current: c.current_version().unwrap_or_default(),
            latest: c.latest_version().unwrap_or(UNKNOWN),
            message: c.detail.as_deref().unwrap_or_default(),
        }
    }
}

impl<'a> From<&'a Classification> for JsonError<'a> {
    fn from(c: &'a Classification) -> Self {
        Self {
            name: c.name(),
            message: c.detail.as_deref().unwrap_or_default(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            manifest: report.manifest.display().to_string(),
            ecosystem: report.ecosystem,
            registry: report.registry_name(),
            outdated: report.outdated().map(JsonOutdated::from).collect(),
            warnings: report.warnings().map(JsonWarning::from).collect(),
            errors: report.errors().map(JsonError::from).collect(),
            skipped: report.skipped().count(),
            up_to_date: report.count(OutcomeKind::UpToDate),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
