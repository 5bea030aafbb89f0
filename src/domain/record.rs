//! Registry record extracted from a latest-release document

use serde::{Deserialize, Serialize};

/// Placeholder used when the registry provides no value
pub const UNKNOWN: &str = "Unknown";

/// Latest version and metadata for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRecord {
    /// Registry's latest published version
    pub latest_version: String,
    /// License description, or `Unknown`
    pub license: String,
    /// Supported runtime range (Python or Node), or `Unknown`
    pub runtime_requirement: String,
}

impl RegistryRecord {
    /// Creates a new RegistryRecord
    pub fn new(
        latest_version: impl Into<String>,
        license: impl Into<String>,
        runtime_requirement: impl Into<String>,
    ) -> Self {
        Self {
            latest_version: latest_version.into(),
            license: license.into(),
            runtime_requirement: runtime_requirement.into(),
        }
    }
}
