//! PyPI JSON API adapter
//!
//! Fetches the latest release document from PyPI.
//! API endpoint: https://pypi.org/pypi/{package}/json

use crate::domain::{Ecosystem, RegistryRecord, UNKNOWN};
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeSet;

/// PyPI API base URL
pub const PYPI_API_URL: &str = "https://pypi.org/pypi";

const LICENSE_CLASSIFIER_PREFIX: &str = "License ::";
const PYTHON_CLASSIFIER_PREFIX: &str = "Programming Language :: Python ::";

/// PyPI adapter
pub struct PyPIAdapter {
    client: HttpClient,
    base_url: String,
}

/// PyPI package metadata response
#[derive(Debug, Deserialize)]
struct PyPIResponse {
    info: PyPIInfo,
}

/// The `info` object of a PyPI response
#[derive(Debug, Default, Deserialize)]
pub struct PyPIInfo {
    /// Latest release version
    #[serde(default)]
    pub version: Option<String>,
    /// Trove classifiers
    #[serde(default)]
    pub classifiers: Option<Vec<String>>,
    /// Free-form license field
    #[serde(default)]
    pub license: Option<String>,
    /// `Requires-Python` metadata
    #[serde(default)]
    pub requires_python: Option<String>,
}

impl PyPIAdapter {
    /// Create a new PyPI adapter against the public index
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PYPI_API_URL)
    }

    /// Create a new PyPI adapter against a custom index
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/json", self.base_url, package)
    }
}

/// License from classifiers, then the license field, then `Unknown`
///
/// Multiple license classifiers are joined with `"; "`.
pub fn extract_license(info: &PyPIInfo) -> String {
    let classifiers: Vec<&str> = info
        .classifiers
        .iter()
        .flatten()
        .map(String::as_str)
        .filter(|c| c.starts_with(LICENSE_CLASSIFIER_PREFIX))
        .collect();

    if !classifiers.is_empty() {
        return classifiers.join("; ");
    }

    match info.license.as_deref() {
        Some(license) if !license.is_empty() => license.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// `requires_python`, then classifier versions, then `Unknown`
///
/// Classifier versions are the last `::` segment of each Python classifier
/// that contains a digit, de-duplicated and sorted as strings.
pub fn extract_requires_python(info: &PyPIInfo) -> String {
    if let Some(requires) = info.requires_python.as_deref() {
        if !requires.is_empty() {
            return requires.to_string();
        }
    }

    let versions: BTreeSet<&str> = info
        .classifiers
        .iter()
        .flatten()
        .filter(|c| c.starts_with(PYTHON_CLASSIFIER_PREFIX))
        .filter_map(|c| c.split("::").last().map(str::trim))
        .filter(|last| last.chars().any(|ch| ch.is_ascii_digit()))
        .collect();

    if versions.is_empty() {
        return UNKNOWN.to_string();
    }

    versions.into_iter().collect::<Vec<_>>().join(", ")
}

#[async_trait]
impl RegistryAdapter for PyPIAdapter {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn registry_name(&self) -> &'static str {
        "PyPI"
    }

    async fn fetch_latest(&self, package: &str) -> Result<RegistryRecord, RegistryError> {
        let url = self.build_url(package);
        let response: PyPIResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        let info = response.info;
        let latest = match info.version.as_deref() {
            Some(version) if !version.is_empty() => version.to_string(),
            _ => {
                return Err(RegistryError::missing_field(
                    package,
                    self.registry_name(),
                    "info.version",
                ))
            }
        };

        Ok(RegistryRecord::new(
            latest,
            extract_license(&info),
            extract_requires_python(&info),
        ))
    }
}
