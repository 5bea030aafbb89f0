//! package.json parser for Node.js projects
//!
//! Handles:
//! - dependencies
//! - devDependencies (override `dependencies` on a name collision)

use crate::domain::{Dependency, Ecosystem};
use crate::error::ManifestError;
use crate::manifest::ManifestParser;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// The dependency sections of a package.json document
#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: IndexMap<String, Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: IndexMap<String, Value>,
}

/// Parser for package.json files
pub struct PackageJsonParser;

impl ManifestParser for PackageJsonParser {
    fn parse(&self, content: &str) -> Result<Vec<Dependency>, ManifestError> {
        let manifest: PackageJson = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error("package.json", e.to_string()))?;

        let mut merged: IndexMap<String, Dependency> = IndexMap::new();
        collect_section(&manifest.dependencies, false, &mut merged);
        collect_section(&manifest.dev_dependencies, true, &mut merged);

        Ok(merged.into_values().collect())
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Node
    }
}

fn collect_section(
    section: &IndexMap<String, Value>,
    is_dev: bool,
    output: &mut IndexMap<String, Dependency>,
) {
    for (name, value) in section {
        // Non-string values (nested objects, numbers) are not specifiers.
        let Some(spec) = value.as_str() else {
            continue;
        };
        output.insert(name.clone(), Dependency::new(name.clone(), spec, is_dev));
    }
}
