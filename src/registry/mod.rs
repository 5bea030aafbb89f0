//! Registry adapters for fetching latest-release information
//!
//! This module provides:
//! - HTTP client shared foundation (single attempt, per-request timeout)
//! - PyPI JSON API adapter (requirements.txt)
//! - npm Registry adapter (package.json)

mod client;
mod npm;
mod pypi;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use npm::{extract_record, NpmAdapter, NpmPackageResponse, NpmVersionManifest, NPM_REGISTRY_URL};
pub use pypi::{extract_license, extract_requires_python, PyPIAdapter, PyPIInfo, PYPI_API_URL};

use crate::config::Config;
use crate::domain::{Ecosystem, RegistryRecord};
use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for registry adapters
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the ecosystem this adapter handles
    fn ecosystem(&self) -> Ecosystem;

    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest version, license, and runtime requirement for a package
    async fn fetch_latest(&self, package: &str) -> Result<RegistryRecord, RegistryError>;
}

/// Create a registry adapter for the given ecosystem
pub fn create_adapter(
    ecosystem: Ecosystem,
    client: HttpClient,
    config: &Config,
) -> Box<dyn RegistryAdapter> {
    match ecosystem {
        Ecosystem::Python => Box::new(PyPIAdapter::with_base_url(client, &config.pypi_url)),
        Ecosystem::Node => Box::new(NpmAdapter::with_base_url(client, &config.npm_url)),
    }
}
