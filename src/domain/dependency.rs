//! Dependency information structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dependency as declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Specifier exactly as written in the manifest (may be empty)
    pub raw_specifier: String,
    /// Whether this came from a development-time section
    pub is_dev: bool,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, raw_specifier: impl Into<String>, is_dev: bool) -> Self {
        Self {
            name: name.into(),
            raw_specifier: raw_specifier.into(),
            is_dev,
        }
    }

    /// Creates a new runtime dependency
    pub fn production(name: impl Into<String>, raw_specifier: impl Into<String>) -> Self {
        Self::new(name, raw_specifier, false)
    }

    /// Creates a new development dependency
    pub fn development(name: impl Into<String>, raw_specifier: impl Into<String>) -> Self {
        Self::new(name, raw_specifier, true)
    }

    /// Key used to order dependencies in reports
    pub fn sort_key(&self) -> (String, &str) {
        (self.name.to_lowercase(), self.name.as_str())
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.is_dev { " (dev)" } else { "" };
        if self.raw_specifier.is_empty() {
            write!(f, "{}{}", self.name, dev_marker)
        } else {
            write!(f, "{} {}{}", self.name, self.raw_specifier, dev_marker)
        }
    }
}
