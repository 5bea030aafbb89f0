//! Parsed version specifier types
//!
//! A raw manifest specifier is reduced to one of:
//! - Pinned: `==1.2.3` (requirements) or a bare literal `1.2.3` (package.json)
//! - Ranged: an operator followed by one literal version, e.g. `>=1.0`, `^1.2.3`
//! - Bare: no specifier at all
//! - Unrecognized: anything else (wildcards, URLs, multi-bound ranges, malformed input)

use super::Ecosystem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured version specifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedSpecifier {
    /// Exactly one version
    Pinned { version: String },
    /// A single operator applied to one literal version
    Ranged { operator: String, version: String },
    /// No specifier was given
    Bare,
    /// The specifier could not be reduced to a literal version
    Unrecognized,
}

impl ParsedSpecifier {
    /// Creates a Pinned specifier
    pub fn pinned(version: impl Into<String>) -> Self {
        ParsedSpecifier::Pinned {
            version: version.into(),
        }
    }

    /// Creates a Ranged specifier
    pub fn ranged(operator: impl Into<String>, version: impl Into<String>) -> Self {
        ParsedSpecifier::Ranged {
            operator: operator.into(),
            version: version.into(),
        }
    }

    /// Returns the literal version carried by this specifier, if any
    pub fn version(&self) -> Option<&str> {
        match self {
            ParsedSpecifier::Pinned { version } | ParsedSpecifier::Ranged { version, .. } => {
                Some(version)
            }
            ParsedSpecifier::Bare | ParsedSpecifier::Unrecognized => None,
        }
    }

    /// Returns true if this specifier is eligible for a registry lookup
    ///
    /// The requirements dialect only checks exact pins. The package.json
    /// dialect checks any specifier ending in a literal version.
    pub fn is_qualifying(&self, ecosystem: Ecosystem) -> bool {
        match (self, ecosystem) {
            (ParsedSpecifier::Pinned { .. }, _) => true,
            (ParsedSpecifier::Ranged { .. }, Ecosystem::Node) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ParsedSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedSpecifier::Pinned { version } => write!(f, "pinned {}", version),
            ParsedSpecifier::Ranged { operator, version } => {
                write!(f, "ranged {}{}", operator, version)
            }
            ParsedSpecifier::Bare => write!(f, "bare"),
            ParsedSpecifier::Unrecognized => write!(f, "unrecognized"),
        }
    }
}
