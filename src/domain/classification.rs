//! Classification result types

use super::{Dependency, ParsedSpecifier, RegistryRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Current version equals the registry's latest
    UpToDate,
    /// Registry has a newer version
    Outdated,
    /// Manifest names a version newer than the registry's latest
    AheadOfRegistry,
    /// Not checked: non-qualifying specifier or unparseable version
    Skipped,
    /// Registry lookup failed
    FetchFailed,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutcomeKind::UpToDate => "up-to-date",
            OutcomeKind::Outdated => "outdated",
            OutcomeKind::AheadOfRegistry => "ahead-of-registry",
            OutcomeKind::Skipped => "skipped",
            OutcomeKind::FetchFailed => "fetch-failed",
        };
        write!(f, "{}", label)
    }
}

/// Final verdict for one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The dependency being classified
    pub dependency: Dependency,
    /// Its parsed specifier
    pub specifier: ParsedSpecifier,
    /// Registry data, present when the lookup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RegistryRecord>,
    /// The verdict
    pub kind: OutcomeKind,
    /// Skip reason, fetch error, or warning message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Classification {
    fn new(
        dependency: Dependency,
        specifier: ParsedSpecifier,
        record: Option<RegistryRecord>,
        kind: OutcomeKind,
        detail: Option<String>,
    ) -> Self {
        Self {
            dependency,
            specifier,
            record,
            kind,
            detail,
        }
    }

    /// Creates an UpToDate classification
    pub fn up_to_date(
        dependency: Dependency,
        specifier: ParsedSpecifier,
        record: RegistryRecord,
    ) -> Self {
        Self::new(dependency, specifier, Some(record), OutcomeKind::UpToDate, None)
    }

    /// Creates an Outdated classification
    pub fn outdated(
        dependency: Dependency,
        specifier: ParsedSpecifier,
        record: RegistryRecord,
    ) -> Self {
        Self::new(dependency, specifier, Some(record), OutcomeKind::Outdated, None)
    }

    /// Creates an AheadOfRegistry classification carrying its warning
    pub fn ahead_of_registry(
        dependency: Dependency,
        specifier: ParsedSpecifier,
        record: RegistryRecord,
        warning: impl Into<String>,
    ) -> Self {
        Self::new(
            dependency,
            specifier,
            Some(record),
            OutcomeKind::AheadOfRegistry,
            Some(warning.into()),
        )
    }

    /// Creates a Skipped classification
    pub fn skipped(
        dependency: Dependency,
        specifier: ParsedSpecifier,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(
            dependency,
            specifier,
            None,
            OutcomeKind::Skipped,
            Some(reason.into()),
        )
    }

    /// Creates a FetchFailed classification
    pub fn fetch_failed(
        dependency: Dependency,
        specifier: ParsedSpecifier,
        cause: impl Into<String>,
    ) -> Self {
        Self::new(
            dependency,
            specifier,
            None,
            OutcomeKind::FetchFailed,
            Some(cause.into()),
        )
    }

    /// Returns the package name
    pub fn name(&self) -> &str {
        &self.dependency.name
    }

    /// Returns the version taken from the manifest, if any
    pub fn current_version(&self) -> Option<&str> {
        self.specifier.version()
    }

    /// Returns the registry's latest version, if fetched
    pub fn latest_version(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.latest_version.as_str())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.dependency.name, self.kind)?;
        if let Some(ref detail) = self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}
