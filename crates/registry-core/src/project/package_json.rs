//! Consumer package manifest access
//!
//! Read-only view of the consumer's `package.json`; only the dependency
//! tables are consumed.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageJson {
    /// Read `package.json` from the project root. An absent file is not an
    /// error - dependency reconciliation is simply skipped.
    pub fn read(project_root: &Path) -> Result<Option<PackageJson>> {
        let path = project_root.join("package.json");
        if !path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let parsed = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(parsed))
    }

    /// Whether the package is already declared in either dependency table
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_file_is_none_not_error() {
        let tmp = TempDir::new().unwrap();
        assert!(PackageJson::read(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn test_both_tables_count_as_present() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("package.json"),
            r#"{
                "name": "consumer",
                "dependencies": { "react": "^18.0.0" },
                "devDependencies": { "typescript": "^5.0.0" }
            }"#,
        )
        .unwrap();

        let pkg = PackageJson::read(tmp.path()).unwrap().unwrap();
        assert!(pkg.has_dependency("react"));
        assert!(pkg.has_dependency("typescript"));
        assert!(!pkg.has_dependency("date-fns"));
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("package.json"), r#"{ "name": "bare" }"#).unwrap();
        let pkg = PackageJson::read(tmp.path()).unwrap().unwrap();
        assert!(!pkg.has_dependency("react"));
    }
}
