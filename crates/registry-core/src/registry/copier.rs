//! Component copying into the consumer project
//!
//! Copies are non-destructive: a file that already exists at the destination
//! is left untouched and reported as skipped, never overwritten.

use crate::registry::manifest::ComponentEntry;
use crate::registry::source::RegistryClient;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// What happened to one destination file during a copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Written to the destination
    Copied(String),
    /// Destination already existed; the consumer's file wins
    SkippedExisting(String),
}

impl CopyOutcome {
    /// Destination path relative to the destination root
    pub fn file(&self) -> &str {
        match self {
            CopyOutcome::Copied(f) | CopyOutcome::SkippedExisting(f) => f,
        }
    }

    pub fn was_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

/// Copy one component's file (or directory of files) under
/// `project_root/destination_root`, preserving the directory structure the
/// entry has inside the template root.
pub async fn copy_component(
    client: &mut RegistryClient,
    entry: &ComponentEntry,
    template_root: &str,
    destination_root: &str,
    project_root: &Path,
) -> Result<Vec<CopyOutcome>> {
    let prefix = format!("{}/", template_root.trim_end_matches('/'));
    let rel_base = entry.path.strip_prefix(&prefix).unwrap_or(&entry.path);
    let dest_base = project_root.join(destination_root);

    let mut outcomes = Vec::new();

    if entry.is_directory() {
        for file in &entry.files {
            let source = format!("{}/{}", entry.path, file);
            let rel = format!("{}/{}", rel_base, file);
            let dest = dest_base.join(&rel);
            outcomes.push(copy_one(client, &source, &dest, rel).await?);
        }
    } else {
        let dest = dest_base.join(rel_base);
        outcomes.push(copy_one(client, &entry.path, &dest, rel_base.to_string()).await?);
    }

    Ok(outcomes)
}

async fn copy_one(
    client: &mut RegistryClient,
    source_path: &str,
    dest: &Path,
    rel: String,
) -> Result<CopyOutcome> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Existing consumer files always win; don't even fetch the source
    if fs::try_exists(dest)
        .await
        .with_context(|| format!("Failed to stat {}", dest.display()))?
    {
        return Ok(CopyOutcome::SkippedExisting(rel));
    }

    let content = client.fetch_file_bytes(source_path).await?;
    fs::write(dest, &content)
        .await
        .with_context(|| format!("Failed to write file: {}", dest.display()))?;

    Ok(CopyOutcome::Copied(rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const TEMPLATE_ROOT: &str = "templates/ui";
    const DESTINATION_ROOT: &str = "src/components/custom";

    fn registry_with(files: &[(&str, &str)]) -> (TempDir, RegistryClient) {
        let tmp = TempDir::new().unwrap();
        for (rel, content) in files {
            let path = tmp.path().join(rel);
            stdfs::create_dir_all(path.parent().unwrap()).unwrap();
            stdfs::write(path, content).unwrap();
        }
        let client = RegistryClient::from_local(tmp.path().to_path_buf(), "test");
        (tmp, client)
    }

    fn file_entry(path: &str, deps: &[&str]) -> ComponentEntry {
        ComponentEntry {
            path: path.to_string(),
            files: Vec::new(),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
            dev_dependencies: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_copy_single_file_component() {
        let (_reg, mut client) =
            registry_with(&[("templates/ui/button.tsx", "export const Button = 1;\n")]);
        let project = TempDir::new().unwrap();
        let entry = file_entry("templates/ui/button.tsx", &[]);

        let outcomes = copy_component(
            &mut client,
            &entry,
            TEMPLATE_ROOT,
            DESTINATION_ROOT,
            project.path(),
        )
        .await
        .unwrap();

        assert_eq!(outcomes, vec![CopyOutcome::Copied("button.tsx".to_string())]);
        let dest = project.path().join("src/components/custom/button.tsx");
        assert_eq!(
            stdfs::read_to_string(dest).unwrap(),
            "export const Button = 1;\n"
        );
    }

    #[tokio::test]
    async fn test_existing_destination_is_never_overwritten() {
        let (_reg, mut client) =
            registry_with(&[("templates/ui/button.tsx", "export const Button = 1;\n")]);
        let project = TempDir::new().unwrap();
        let dest = project.path().join("src/components/custom/button.tsx");
        stdfs::create_dir_all(dest.parent().unwrap()).unwrap();
        stdfs::write(&dest, "// locally modified\n").unwrap();

        let entry = file_entry("templates/ui/button.tsx", &[]);
        let outcomes = copy_component(
            &mut client,
            &entry,
            TEMPLATE_ROOT,
            DESTINATION_ROOT,
            project.path(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcomes,
            vec![CopyOutcome::SkippedExisting("button.tsx".to_string())]
        );
        assert_eq!(
            stdfs::read_to_string(&dest).unwrap(),
            "// locally modified\n"
        );
    }

    #[tokio::test]
    async fn test_copy_directory_component_preserves_structure() {
        let (_reg, mut client) = registry_with(&[
            ("templates/ui/data-table/index.tsx", "export {};\n"),
            ("templates/ui/data-table/columns.tsx", "export {};\n"),
        ]);
        let project = TempDir::new().unwrap();
        let entry = ComponentEntry {
            path: "templates/ui/data-table".to_string(),
            files: vec!["columns.tsx".to_string(), "index.tsx".to_string()],
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
        };

        let outcomes = copy_component(
            &mut client,
            &entry,
            TEMPLATE_ROOT,
            DESTINATION_ROOT,
            project.path(),
        )
        .await
        .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(CopyOutcome::was_copied));
        let base: PathBuf = project.path().join("src/components/custom/data-table");
        assert!(base.join("index.tsx").is_file());
        assert!(base.join("columns.tsx").is_file());
    }

    #[tokio::test]
    async fn test_nested_file_component_keeps_subdirectory() {
        let (_reg, mut client) =
            registry_with(&[("templates/ui/forms/input.tsx", "export {};\n")]);
        let project = TempDir::new().unwrap();
        let entry = file_entry("templates/ui/forms/input.tsx", &[]);

        let outcomes = copy_component(
            &mut client,
            &entry,
            TEMPLATE_ROOT,
            DESTINATION_ROOT,
            project.path(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcomes,
            vec![CopyOutcome::Copied("forms/input.tsx".to_string())]
        );
        assert!(project
            .path()
            .join("src/components/custom/forms/input.tsx")
            .is_file());
    }
}
