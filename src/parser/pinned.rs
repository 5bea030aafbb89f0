//! requirements.txt specifier parser
//!
//! Handles specifier tails such as:
//! - Exact: `==1.2.3`, `== 1.2.3`, `==2.0.0rc1`, `==1.0+local`
//! - Single comparison: `>=1.2`, `~=1.4.2`, `!=1.3`, `<2`
//! - Anything else (`>=1.0,<2.0`, `==1.*`, `@ https://...`) is unrecognized

use crate::domain::{Ecosystem, ParsedSpecifier};
use crate::parser::SpecifierParser;
use regex::Regex;
use std::sync::LazyLock;

/// Parser for the pinned-list dialect
pub struct PinnedSpecifierParser;

static PINNED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^==\s*([0-9A-Za-z_.+-]+)$").unwrap());
static RANGED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(===|~=|!=|>=|<=|>|<)\s*([0-9A-Za-z_.+-]+)$").unwrap()
});

impl SpecifierParser for PinnedSpecifierParser {
    fn parse(&self, raw: &str) -> ParsedSpecifier {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return ParsedSpecifier::Bare;
        }

        if let Some(caps) = PINNED_RE.captures(trimmed) {
            return ParsedSpecifier::pinned(&caps[1]);
        }

        if let Some(caps) = RANGED_RE.captures(trimmed) {
            return ParsedSpecifier::ranged(&caps[1], &caps[2]);
        }

        ParsedSpecifier::Unrecognized
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }
}
