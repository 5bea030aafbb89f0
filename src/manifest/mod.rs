//! Manifest file detection and parsing
//!
//! This module provides functionality to:
//! - Select the manifest dialect from the file name
//! - Read the manifest (missing or unreadable files are fatal)
//! - Parse dependencies from requirements.txt and package.json

mod detector;
mod package_json;
mod requirements_txt;

pub use detector::{detect_ecosystem, detect_manifest, ManifestInfo};
pub use package_json::PackageJsonParser;
pub use requirements_txt::RequirementsTxtParser;

use crate::domain::{Dependency, Ecosystem};
use crate::error::ManifestError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Trait for parsing manifest files
pub trait ManifestParser: Send + Sync {
    /// Parse dependencies from manifest content, in manifest order
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ManifestError>;

    /// Returns the ecosystem this parser handles
    fn ecosystem(&self) -> Ecosystem;
}

/// Get a manifest parser for the specified ecosystem
pub fn get_parser(ecosystem: Ecosystem) -> Box<dyn ManifestParser> {
    match ecosystem {
        Ecosystem::Python => Box::new(RequirementsTxtParser),
        Ecosystem::Node => Box::new(PackageJsonParser),
    }
}

/// Read manifest content from disk
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ManifestError::not_found(path),
        _ => ManifestError::read_error(path, e),
    })
}

/// Read and parse the manifest at `path` using the given dialect
pub fn parse_manifest(path: &Path, ecosystem: Ecosystem) -> Result<Vec<Dependency>, ManifestError> {
    let content = read_manifest(path)?;
    get_parser(ecosystem).parse(&content).map_err(|e| match e {
        ManifestError::JsonParseError { message, .. } => {
            ManifestError::json_parse_error(path, message)
        }
        other => other,
    })
}
