//! Version canonicalization and ordering
//!
//! Each ecosystem orders versions under its own scheme:
//! - Python: PEP 440, so `1.0 == 1.0.0` and `1.0.0-rc1 == 1.0.0rc1`
//! - Node: SemVer precedence, so `1.0.0-1 < 1.0.0` and build metadata is ignored
//!
//! A version the ecosystem's scheme rejects is unparseable; there is no
//! cross-scheme fallback.

use crate::domain::Ecosystem;
use crate::error::VersionError;
use pep508_rs::pep440_rs::Version as Pep440Version;
use std::cmp::Ordering;
use std::str::FromStr;

/// Strip one leading non-digit character when a digit follows it
///
/// `v2.0.0` becomes `2.0.0`; `2.0.0` and `vv2` are returned unchanged.
pub fn strip_version_prefix(version: &str) -> &str {
    let trimmed = version.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if !first.is_ascii_digit() && second.is_ascii_digit() => {
            &trimmed[first.len_utf8()..]
        }
        _ => trimmed,
    }
}

/// Parse a version into its PEP 440 canonical form
pub fn parse_version(version: &str) -> Result<Pep440Version, VersionError> {
    let stripped = strip_version_prefix(version);
    Pep440Version::from_str(stripped).map_err(|_| VersionError::Unparseable(version.to_string()))
}

/// Parse a version as strict SemVer
pub fn parse_semver(version: &str) -> Result<semver::Version, VersionError> {
    semver::Version::parse(strip_version_prefix(version))
        .map_err(|_| VersionError::Unparseable(version.to_string()))
}

/// Compare two version strings under the ecosystem's versioning scheme
///
/// Returns `Ordering::Less` when `a` is older than `b`. Fails when either
/// side cannot be canonicalized; callers treat that pair as skipped.
pub fn compare_versions(
    ecosystem: Ecosystem,
    a: &str,
    b: &str,
) -> Result<Ordering, VersionError> {
    match ecosystem {
        Ecosystem::Python => {
            let left = parse_version(a)?;
            let right = parse_version(b)?;
            Ok(left.cmp(&right))
        }
        Ecosystem::Node => {
            let left = parse_semver(a)?;
            let right = parse_semver(b)?;
            Ok(left.cmp_precedence(&right))
        }
    }
}
