//! Registry manifest types and parsing

use crate::error::RegistryError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name of the generated manifest inside the registry root
pub const MANIFEST_FILE: &str = "components.yaml";

/// One copyable unit of template source: a single file, or a directory of
/// related files sharing this entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    /// Source path relative to the registry root, forward slashes on every host
    pub path: String,

    /// For directory components: contained files, relative to `path`.
    /// Empty for single-file components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// External packages the component imports
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Always empty at generation time; reserved for manual curation
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
}

impl ComponentEntry {
    /// Whether this entry covers a directory of files rather than one file
    pub fn is_directory(&self) -> bool {
        !self.files.is_empty()
    }
}

/// The generated mapping from component name to its entry
/// (`components.yaml` at the registry root)
///
/// Rebuilt wholesale on each generation run, read-only at copy time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryManifest {
    /// Generator version, for CLI compatibility warnings
    pub version: String,

    /// Keyed by component name; BTreeMap so regeneration diffs stay readable
    #[serde(default)]
    pub components: BTreeMap<String, ComponentEntry>,
}

impl RegistryManifest {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            components: BTreeMap::new(),
        }
    }

    /// Look up a component by its exact manifest key
    pub fn get(&self, name: &str) -> Result<&ComponentEntry, RegistryError> {
        self.components
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent(name.to_string()))
    }

    /// All component names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse registry manifest")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize registry manifest")
    }
}
