//! Ecosystem definitions for the two supported manifest dialects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported package ecosystems
///
/// Each ecosystem pairs one manifest dialect with one registry backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Pinned-list dialect (requirements.txt) backed by PyPI
    Python,
    /// Dependency-map dialect (package.json) backed by npm
    Node,
}

impl Ecosystem {
    /// Returns the canonical manifest filename for this ecosystem
    pub fn manifest_filename(&self) -> &'static str {
        match self {
            Ecosystem::Python => "requirements.txt",
            Ecosystem::Node => "package.json",
        }
    }

    /// Returns the registry name used in messages
    pub fn registry_name(&self) -> &'static str {
        match self {
            Ecosystem::Python => "PyPI",
            Ecosystem::Node => "npm",
        }
    }

    /// Returns the header of the runtime requirement column
    pub fn runtime_label(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python",
            Ecosystem::Node => "Node",
        }
    }

    /// Returns the display name for this ecosystem
    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python",
            Ecosystem::Node => "Node.js",
        }
    }

    /// Selects the ecosystem for a manifest path
    ///
    /// Only a file named exactly `package.json` selects the Node dialect;
    /// every other path is read as a pinned requirements list.
    pub fn from_path(path: &Path) -> Self {
        let is_package_json = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n == Ecosystem::Node.manifest_filename())
            .unwrap_or(false);

        if is_package_json {
            Ecosystem::Node
        } else {
            Ecosystem::Python
        }
    }

    /// Returns all supported ecosystems
    pub fn all() -> &'static [Ecosystem] {
        &[Ecosystem::Python, Ecosystem::Node]
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
