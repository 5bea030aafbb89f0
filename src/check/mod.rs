//! Classification engine for dependencies
//!
//! This module provides:
//! - Version comparison (PEP 440 for Python, SemVer for Node)
//! - Screening: which dependencies qualify for a registry lookup
//! - Judgment: turning a registry result into a Classification
//!
//! Screening and judgment are synchronous so the orchestrator can run the
//! registry calls in between on a bounded worker pool.

mod compare;

pub use compare::{compare_versions, parse_semver, parse_version, strip_version_prefix};

use crate::domain::{Classification, Dependency, Ecosystem, ParsedSpecifier, RegistryRecord};
use crate::error::RegistryError;
use crate::parser::{get_parser, SpecifierParser};
use crate::registry::RegistryAdapter;
use std::cmp::Ordering;
use tracing::debug;

/// A dependency whose specifier qualifies for a registry lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The dependency from the manifest
    pub dependency: Dependency,
    /// Its parsed specifier
    pub specifier: ParsedSpecifier,
    /// The literal version extracted from the specifier
    pub current_version: String,
}

impl Candidate {
    /// Package name to look up
    pub fn name(&self) -> &str {
        &self.dependency.name
    }
}

/// Outcome of screening one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screened {
    /// The dependency needs a registry lookup
    Lookup(Candidate),
    /// The dependency is final without a lookup
    Skipped(Classification),
}

impl Screened {
    /// Returns the lookup candidate, if any
    pub fn into_candidate(self) -> Option<Candidate> {
        match self {
            Screened::Lookup(candidate) => Some(candidate),
            Screened::Skipped(_) => None,
        }
    }
}

/// Classifies dependencies of one ecosystem
pub struct Checker {
    ecosystem: Ecosystem,
    parser: Box<dyn SpecifierParser>,
}

impl Checker {
    /// Create a checker using the ecosystem's specifier dialect
    pub fn new(ecosystem: Ecosystem) -> Self {
        Self {
            ecosystem,
            parser: get_parser(ecosystem),
        }
    }

    /// Returns the ecosystem this checker handles
    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Decide whether a dependency needs a registry lookup
    ///
    /// Yields the lookup candidate, or the final `Skipped` classification
    /// when the specifier does not qualify.
    pub fn screen(&self, dependency: Dependency) -> Screened {
        let specifier = self.parser.parse(&dependency.raw_specifier);

        let current_version = match specifier.version() {
            Some(version) if specifier.is_qualifying(self.ecosystem) => version.to_string(),
            _ => {
                let reason = skip_reason(&dependency, &specifier);
                debug!(package = %dependency.name, %reason, "skipping dependency");
                return Screened::Skipped(Classification::skipped(dependency, specifier, reason));
            }
        };

        Screened::Lookup(Candidate {
            dependency,
            specifier,
            current_version,
        })
    }

    /// Classify a candidate from the outcome of its registry lookup
    pub fn judge(
        &self,
        candidate: Candidate,
        fetched: Result<RegistryRecord, RegistryError>,
    ) -> Classification {
        let Candidate {
            dependency,
            specifier,
            current_version,
        } = candidate;

        let record = match fetched {
            Ok(record) => record,
            Err(e) => return Classification::fetch_failed(dependency, specifier, e.to_string()),
        };

        match compare_versions(self.ecosystem, &current_version, &record.latest_version) {
            Ok(Ordering::Less) => Classification::outdated(dependency, specifier, record),
            Ok(Ordering::Equal) => Classification::up_to_date(dependency, specifier, record),
            Ok(Ordering::Greater) => {
                let warning = format!(
                    "{} specified version {} is NEWER than {} latest {}!",
                    dependency.name,
                    current_version,
                    self.ecosystem.registry_name(),
                    record.latest_version
                );
                Classification::ahead_of_registry(dependency, specifier, record, warning)
            }
            Err(e) => {
                debug!(package = %dependency.name, error = %e, "cannot compare versions");
                Classification::skipped(dependency, specifier, e.to_string())
            }
        }
    }

    /// Screen, fetch, and judge a single dependency
    pub async fn classify(
        &self,
        dependency: Dependency,
        adapter: &dyn RegistryAdapter,
    ) -> Classification {
        match self.screen(dependency) {
            Screened::Lookup(candidate) => {
                let fetched = adapter.fetch_latest(candidate.name()).await;
                self.judge(candidate, fetched)
            }
            Screened::Skipped(skipped) => skipped,
        }
    }
}

fn skip_reason(dependency: &Dependency, specifier: &ParsedSpecifier) -> String {
    match specifier {
        ParsedSpecifier::Bare => "no version specifier".to_string(),
        ParsedSpecifier::Ranged { .. } => {
            format!("'{}' is not an exact pin", dependency.raw_specifier)
        }
        ParsedSpecifier::Pinned { .. } | ParsedSpecifier::Unrecognized => {
            format!("unrecognized specifier '{}'", dependency.raw_specifier)
        }
    }
}
