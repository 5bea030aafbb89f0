//! Manifest detection
//!
//! The dialect is chosen once from the file name: `package.json` selects the
//! npm dialect, every other file is read as a pinned requirements list.

use crate::domain::Ecosystem;
use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Information about the manifest being checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInfo {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Dialect and registry of the manifest
    pub ecosystem: Ecosystem,
}

impl ManifestInfo {
    /// Create a new ManifestInfo
    pub fn new(path: impl Into<PathBuf>, ecosystem: Ecosystem) -> Self {
        Self {
            path: path.into(),
            ecosystem,
        }
    }
}

/// Select the ecosystem for a manifest path without touching the filesystem
pub fn detect_ecosystem(path: &Path) -> Ecosystem {
    Ecosystem::from_path(path)
}

/// Detect the manifest at `path`
///
/// Fails with `NotFound` when the path does not name an existing file.
pub fn detect_manifest(path: &Path) -> Result<ManifestInfo, ManifestError> {
    if !path.is_file() {
        return Err(ManifestError::not_found(path));
    }
    Ok(ManifestInfo::new(path, detect_ecosystem(path)))
}
