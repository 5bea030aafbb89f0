//! package.json specifier parser
//!
//! Extracts a trailing `X.Y.Z[-pre]` literal preceded by at most one
//! operator (`^ ~ = > >= < <=`), optionally followed by `v`:
//! - Exact: `1.2.3`, `=1.2.3`, `v1.2.3`
//! - Prefixed: `^1.2.3`, `~1.2.3`, `>=1.2.3`, `<1.2.3-beta.1`
//!
//! Wildcards (`*`, `1.x`), tags (`latest`), URLs, git and file references,
//! and multi-bound ranges (`>=1.0.0 <2.0.0`, `1.0.0 - 2.0.0`, `^1 || ^2`)
//! are unrecognized.

use crate::domain::{Ecosystem, ParsedSpecifier};
use crate::parser::SpecifierParser;
use regex::Regex;
use std::sync::LazyLock;

/// Parser for the dependency-map dialect
pub struct RangeSpecifierParser;

static LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:\^|~|>=|<=|>|<|=)?v?)\s*(\d+\.\d+\.\d+(?:-[A-Za-z0-9.]+)?)$").unwrap()
});

/// Operator prefixes that still mean "exactly this version"
const EXACT_PREFIXES: [&str; 4] = ["", "=", "v", "=v"];

impl SpecifierParser for RangeSpecifierParser {
    fn parse(&self, raw: &str) -> ParsedSpecifier {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return ParsedSpecifier::Bare;
        }

        let Some(caps) = LITERAL_RE.captures(trimmed) else {
            return ParsedSpecifier::Unrecognized;
        };

        let operator = &caps[1];
        let version = &caps[2];

        if EXACT_PREFIXES.contains(&operator) {
            ParsedSpecifier::pinned(version)
        } else {
            ParsedSpecifier::ranged(operator, version)
        }
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Node
    }
}
