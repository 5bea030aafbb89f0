//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or decoding the manifest (fatal)
//! - RegistryError: Issues with package registry communication (per dependency)
//! - VersionError: Versions that cannot be canonicalized (per dependency)
//! - ConfigError: Issues with CLI configuration (fatal)
//!
//! Only `AppError` aborts a run; registry and version errors become
//! per-dependency classifications.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built
    #[error("failed to initialize HTTP client: {0}")]
    HttpClient(RegistryError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error (for package.json)
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to package registry communication
///
/// Every variant is isolated to the dependency that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed or returned a non-success status
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// A field the record cannot be built without is absent
    #[error("response from {registry} for '{package}' has no {field}")]
    MissingField {
        package: String,
        registry: String,
        field: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors produced while canonicalizing a version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Neither PEP 440 nor SemVer accepts the string
    #[error("unparseable version '{0}'")]
    Unparseable(String),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Registry URL without an http(s) scheme
    #[error("invalid registry URL '{value}': expected an http:// or https:// URL")]
    InvalidUrl { value: String },

    /// Worker pool size of zero
    #[error("invalid concurrency '{value}': must be at least 1")]
    InvalidConcurrency { value: usize },

    /// Zero timeout
    #[error("invalid timeout: must be at least 1 second")]
    InvalidTimeout,
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingField error
    pub fn missing_field(
        package: impl Into<String>,
        registry: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        RegistryError::MissingField {
            package: package.into(),
            registry: registry.into(),
            field: field.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/requirements.txt");
        let msg = format!("{}", err);
        assert!(msg.contains("manifest file not found"));
        assert!(msg.contains("requirements.txt"));
    }

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_registry_error_package_not_found() {
        let err = RegistryError::package_not_found("nonexistent-package", "npm");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'nonexistent-package' not found"));
        assert!(msg.contains("npm"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network_error("requests", "PyPI", "HTTP 503");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("HTTP 503"));
    }

    #[test]
    fn test_registry_error_missing_field() {
        let err = RegistryError::missing_field("left-pad", "npm", "dist-tags.latest");
        assert_eq!(
            err.to_string(),
            "response from npm for 'left-pad' has no dist-tags.latest"
        );
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("django", "PyPI");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("django"));
    }

    #[test]
    fn test_version_error_display() {
        let err = VersionError::Unparseable("not.a.version!".to_string());
        assert_eq!(err.to_string(), "unparseable version 'not.a.version!'");
    }

    #[test]
    fn test_config_error_invalid_url() {
        let err = ConfigError::InvalidUrl {
            value: "ftp://example.com".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("invalid registry URL"));
        assert!(msg.contains("ftp://example.com"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let manifest_err = ManifestError::not_found("/path");
        let app_err: AppError = manifest_err.into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("manifest file not found"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::InvalidConcurrency { value: 0 };
        let app_err: AppError = config_err.into();
        assert!(app_err.to_string().contains("must be at least 1"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ManifestError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
