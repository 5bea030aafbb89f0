//! npm Registry adapter
//!
//! Fetches the package document from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::domain::{Ecosystem, RegistryRecord, UNKNOWN};
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry adapter
pub struct NpmAdapter {
    client: HttpClient,
    base_url: String,
}

/// npm package document (packument)
#[derive(Debug, Default, Deserialize)]
pub struct NpmPackageResponse {
    /// Distribution tags such as `latest` and `next`
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,
    /// Per-version manifests
    #[serde(default)]
    pub versions: HashMap<String, NpmVersionManifest>,
    /// Document-level license
    #[serde(default)]
    pub license: Option<Value>,
}

/// The subset of a published version manifest this tool reads
#[derive(Debug, Default, Deserialize)]
pub struct NpmVersionManifest {
    /// License as a string or `{ "type": ... }`
    #[serde(default)]
    pub license: Option<Value>,
    /// Engine constraints, normally `{ "node": ">=18" }`
    #[serde(default)]
    pub engines: Option<Value>,
}

impl NpmAdapter {
    /// Create a new npm adapter against the public registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, NPM_REGISTRY_URL)
    }

    /// Create a new npm adapter against a custom registry
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package: &str) -> String {
        if package.starts_with('@') {
            package.replace('/', "%2F")
        } else {
            package.to_string()
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, Self::encode_package_name(package))
    }
}

/// Reads a license value: a plain string, or the `type` of an object
fn license_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => match map.get("type") {
            Some(Value::String(kind)) if !kind.is_empty() => Some(kind.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Build a record from a package document
///
/// The latest version comes from `dist-tags.latest`. License and engine
/// constraint come from that version's manifest, with the document-level
/// license as the license fallback.
pub fn extract_record(
    package: &str,
    response: &NpmPackageResponse,
) -> Result<RegistryRecord, RegistryError> {
    let latest = response
        .dist_tags
        .get("latest")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| RegistryError::missing_field(package, "npm", "dist-tags.latest"))?;

    let manifest = response.versions.get(latest);

    let license = manifest
        .and_then(|m| m.license.as_ref())
        .and_then(license_text)
        .or_else(|| response.license.as_ref().and_then(license_text))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let engine = manifest
        .and_then(|m| m.engines.as_ref())
        .and_then(|engines| engines.get("node"))
        .and_then(Value::as_str)
        .filter(|node| !node.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string());

    Ok(RegistryRecord::new(latest.clone(), license, engine))
}

#[async_trait]
impl RegistryAdapter for NpmAdapter {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Node
    }

    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn fetch_latest(&self, package: &str) -> Result<RegistryRecord, RegistryError> {
        let url = self.build_url(package);
        let response: NpmPackageResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        extract_record(package, &response)
    }
}
