//! requirements.txt parser for Python projects
//!
//! Line grammar:
//! - everything from the first `#` is a comment
//! - blank lines are ignored
//! - `name[extras] <specifier>`; extras are accepted and dropped
//! - lines that do not match (options, URLs, paths) are ignored

use crate::domain::{Dependency, Ecosystem};
use crate::error::ManifestError;
use crate::manifest::ManifestParser;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

static REQUIREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)(\[[^\]]+\])?\s*([<>=!~].*)?$").unwrap()
});

/// Parser for requirements.txt files
pub struct RequirementsTxtParser;

impl ManifestParser for RequirementsTxtParser {
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ManifestError> {
        // Later lines win; the first occurrence keeps its position.
        let mut entries: IndexMap<String, String> = IndexMap::new();

        for line in content.lines() {
            let line = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            }
            .trim();

            if line.is_empty() {
                continue;
            }

            let Some(caps) = REQUIREMENT_RE.captures(line) else {
                continue;
            };

            let name = caps[1].to_string();
            let spec = caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            entries.insert(name, spec);
        }

        Ok(entries
            .into_iter()
            .map(|(name, spec)| Dependency::production(name, spec))
            .collect())
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<Dependency> {
        RequirementsTxtParser.parse(content).unwrap()
    }

    fn pairs(deps: &[Dependency]) -> Vec<(&str, &str)> {
        deps.iter()
            .map(|d| (d.name.as_str(), d.raw_specifier.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_pins() {
        let deps = parse("requests==2.31.0\nflask == 2.0.0\n");
        assert_eq!(
            pairs(&deps),
            vec![("requests", "==2.31.0"), ("flask", "== 2.0.0")]
        );
        assert!(deps.iter().all(|d| !d.is_dev));
    }

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let content = "# header\n\nrequests==2.31.0  # http\n   \n#django==4.0\n";
        assert_eq!(pairs(&parse(content)), vec![("requests", "==2.31.0")]);
    }

    #[test]
    fn test_parse_extras_are_dropped() {
        let deps = parse("uvicorn[standard]==0.23.2\n");
        assert_eq!(pairs(&deps), vec![("uvicorn", "==0.23.2")]);
    }

    #[test]
    fn test_parse_bare_name() {
        let deps = parse("six\n");
        assert_eq!(pairs(&deps), vec![("six", "")]);
    }

    #[test]
    fn test_parse_range_and_compound_specifiers() {
        let deps = parse("gamma>=1.0\nnumpy>=1.21,<2\nattrs~=23.1\n");
        assert_eq!(
            pairs(&deps),
            vec![("gamma", ">=1.0"), ("numpy", ">=1.21,<2"), ("attrs", "~=23.1")]
        );
    }

    #[test]
    fn test_parse_skips_non_matching_lines() {
        let content = "-r base.txt\n--index-url https://example.com\n./local/pkg\ngit+https://github.com/a/b.git\nrequests==2.31.0\n";
        assert_eq!(pairs(&parse(content)), vec![("requests", "==2.31.0")]);
    }

    #[test]
    fn test_parse_environment_marker_is_kept_in_specifier() {
        let deps = parse("pywin32==306; sys_platform == 'win32'\n");
        assert_eq!(deps[0].raw_specifier, "==306; sys_platform == 'win32'");
    }

    #[test]
    fn test_parse_duplicate_last_wins_first_position() {
        let deps = parse("alpha==1.0.0\nbeta==2.0.0\nalpha==1.1.0\n");
        assert_eq!(
            pairs(&deps),
            vec![("alpha", "==1.1.0"), ("beta", "==2.0.0")]
        );
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let deps = parse("alpha==1.0.0\r\nbeta==2.0.0\r\n");
        assert_eq!(pairs(&deps), vec![("alpha", "==1.0.0"), ("beta", "==2.0.0")]);
    }
}
