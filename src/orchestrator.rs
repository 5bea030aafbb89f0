//! Check orchestrator for coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: detect → parse → screen → fetch → judge → sort
//! - Parallel registry queries bounded by a semaphore
//! - Error handling with partial continuation (one failed fetch never aborts the batch)

use crate::check::{Checker, Screened};
use crate::config::Config;
use crate::domain::{Classification, Ecosystem, OutcomeKind};
use crate::error::{AppError, ManifestError, RegistryError};
use crate::manifest::{detect_ecosystem, detect_manifest, parse_manifest};
use crate::progress::Progress;
use crate::registry::{create_adapter, HttpClient, RegistryAdapter};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info};

/// Result of checking one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Path of the manifest that was checked
    pub manifest: PathBuf,
    /// Dialect of the manifest
    pub ecosystem: Ecosystem,
    /// One classification per dependency, sorted by name (case-insensitive)
    pub classifications: Vec<Classification>,
}

impl CheckReport {
    /// Create a report, sorting the classifications for rendering
    pub fn new(
        manifest: impl Into<PathBuf>,
        ecosystem: Ecosystem,
        mut classifications: Vec<Classification>,
    ) -> Self {
        classifications.sort_by(|a, b| a.dependency.sort_key().cmp(&b.dependency.sort_key()));
        Self {
            manifest: manifest.into(),
            ecosystem,
            classifications,
        }
    }

    /// Classifications of the given kind, in report order
    pub fn of_kind(&self, kind: OutcomeKind) -> impl Iterator<Item = &Classification> {
        self.classifications.iter().filter(move |c| c.kind == kind)
    }

    /// Dependencies with a newer registry release
    pub fn outdated(&self) -> impl Iterator<Item = &Classification> {
        self.of_kind(OutcomeKind::Outdated)
    }

    /// Dependencies pinned ahead of the registry
    pub fn warnings(&self) -> impl Iterator<Item = &Classification> {
        self.of_kind(OutcomeKind::AheadOfRegistry)
    }

    /// Dependencies whose registry lookup failed
    pub fn errors(&self) -> impl Iterator<Item = &Classification> {
        self.of_kind(OutcomeKind::FetchFailed)
    }

    /// Dependencies that were not checked
    pub fn skipped(&self) -> impl Iterator<Item = &Classification> {
        self.of_kind(OutcomeKind::Skipped)
    }

    /// Number of classifications of the given kind
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Returns true if any dependency is outdated
    pub fn has_outdated(&self) -> bool {
        self.outdated().next().is_some()
    }

    /// Registry name used in messages
    pub fn registry_name(&self) -> &'static str {
        self.ecosystem.registry_name()
    }
}

/// Orchestrator for coordinating the check workflow
pub struct Orchestrator {
    /// Run configuration
    config: Config,
    /// Manifest to check
    manifest: PathBuf,
    /// Registry backend matching the manifest dialect
    adapter: Arc<dyn RegistryAdapter>,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl Orchestrator {
    /// Create an orchestrator for `manifest`, picking the registry from its file name
    pub fn new(config: Config, manifest: impl Into<PathBuf>) -> Result<Self, AppError> {
        let manifest = manifest.into();
        let ecosystem = detect_ecosystem(&manifest);
        let client = HttpClient::with_timeout(config.timeout).map_err(AppError::HttpClient)?;
        let adapter: Arc<dyn RegistryAdapter> = Arc::from(create_adapter(ecosystem, client, &config));

        Ok(Self::with_adapter(config, manifest, adapter))
    }

    /// Create an orchestrator with a custom registry adapter (for testing)
    pub fn with_adapter(
        config: Config,
        manifest: impl Into<PathBuf>,
        adapter: Arc<dyn RegistryAdapter>,
    ) -> Self {
        Self {
            config,
            manifest: manifest.into(),
            adapter,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Manifest path being checked
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// Run the check workflow
    ///
    /// Only manifest errors abort the run. Registry failures become
    /// `FetchFailed` classifications.
    pub async fn run(&self) -> Result<CheckReport, ManifestError> {
        let info = detect_manifest(&self.manifest)?;
        let dependencies = parse_manifest(&info.path, info.ecosystem)?;
        info!(
            manifest = %info.path.display(),
            ecosystem = %info.ecosystem,
            count = dependencies.len(),
            "parsed manifest"
        );

        let checker = Checker::new(info.ecosystem);
        let mut classifications = Vec::with_capacity(dependencies.len());
        let mut candidates = Vec::new();

        for dependency in dependencies {
            match checker.screen(dependency) {
                Screened::Lookup(candidate) => candidates.push(candidate),
                Screened::Skipped(skipped) => classifications.push(skipped),
            }
        }

        let mut progress = Progress::new(self.show_progress);
        progress.start(
            candidates.len() as u64,
            &format!("Checking {}", self.adapter.registry_name()),
        );

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency));
        let checker = &checker;
        let progress_ref = &progress;

        let lookups = candidates.into_iter().map(|candidate| {
            let semaphore = Arc::clone(&semaphore);
            let adapter = Arc::clone(&self.adapter);
            async move {
                let fetched = match semaphore.acquire().await {
                    Ok(_permit) => adapter.fetch_latest(candidate.name()).await,
                    Err(e) => Err(RegistryError::network_error(
                        candidate.name(),
                        adapter.registry_name(),
                        e.to_string(),
                    )),
                };
                debug!(package = candidate.name(), ok = fetched.is_ok(), "lookup finished");
                progress_ref.inc();
                checker.judge(candidate, fetched)
            }
        });

        classifications.extend(join_all(lookups).await);
        progress.finish_and_clear();

        Ok(CheckReport::new(info.path, info.ecosystem, classifications))
    }
}
