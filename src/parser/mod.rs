//! Version specifier parsers for the supported manifest dialects
//!
//! This module provides parsers for specifiers found in:
//! - requirements.txt (only `==` pins qualify for lookup)
//! - package.json (any specifier ending in a literal `X.Y.Z` version qualifies)

mod pinned;
mod range;

pub use pinned::PinnedSpecifierParser;
pub use range::RangeSpecifierParser;

use crate::domain::{Ecosystem, ParsedSpecifier};

/// Trait for parsing raw specifier strings
///
/// Parsing is total: every input yields some `ParsedSpecifier`.
pub trait SpecifierParser: Send + Sync {
    /// Parse a raw specifier string
    fn parse(&self, raw: &str) -> ParsedSpecifier;

    /// Returns the ecosystem this parser handles
    fn ecosystem(&self) -> Ecosystem;
}

/// Get a specifier parser for the specified ecosystem
pub fn get_parser(ecosystem: Ecosystem) -> Box<dyn SpecifierParser> {
    match ecosystem {
        Ecosystem::Python => Box::new(PinnedSpecifierParser),
        Ecosystem::Node => Box::new(RangeSpecifierParser),
    }
}
