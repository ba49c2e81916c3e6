//! Manifest generation from the template directory tree
//!
//! The builder walks the template root in sorted order so the generated
//! manifest is identical on every host. A `.ts`/`.tsx` file is one component;
//! a directory containing an `index.ts(x)` is one component covering all of
//! its files, with the union of their external imports.

use crate::registry::manifest::{ComponentEntry, RegistryManifest};
use crate::registry::scanner::extract_dependencies;
use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Extensions that mark a file as component source
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Scan `template_root` (relative to `registry_root`) and produce a fresh
/// manifest in memory. Nothing is written until the full traversal succeeds;
/// any read error aborts the build.
pub fn build_manifest(
    registry_root: &Path,
    template_root: &str,
    excluded: &[&str],
    version: &str,
) -> Result<RegistryManifest> {
    let scan_root = registry_root.join(template_root);
    if !scan_root.is_dir() {
        anyhow::bail!("Template directory not found: {}", scan_root.display());
    }

    let mut manifest = RegistryManifest::new(version);
    let mut walker = WalkDir::new(&scan_root).sort_by_file_name().into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.context("Failed to walk template directory")?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            if entry.depth() == 0 {
                continue;
            }
            // A directory with an index file is one component; don't look for
            // further components inside it
            if has_index_file(path) {
                let name = component_name(path)?;
                let component = directory_component(path, &scan_root, template_root, excluded)?;
                insert_entry(&mut manifest, name, component);
                walker.skip_current_dir();
            }
            continue;
        }

        if !is_source_file(path) {
            continue;
        }

        let name = component_name(path)?;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let rel = path
            .strip_prefix(&scan_root)
            .with_context(|| format!("Path escapes template root: {}", path.display()))?;

        insert_entry(
            &mut manifest,
            name,
            ComponentEntry {
                path: template_path(template_root, rel),
                files: Vec::new(),
                dependencies: extract_dependencies(&text, excluded),
                dev_dependencies: Vec::new(),
            },
        );
    }

    Ok(manifest)
}

/// Serialize the manifest to `out_path`, overwriting any previous one
pub fn write_manifest(manifest: &RegistryManifest, out_path: &Path) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    let content = manifest.to_yaml()?;
    std::fs::write(out_path, content)
        .with_context(|| format!("Failed to write {}", out_path.display()))
}

/// Build a directory component: every contained file is copied with the entry,
/// and the dependency set is the union of the externals of its source files.
fn directory_component(
    dir: &Path,
    scan_root: &Path,
    template_root: &str,
    excluded: &[&str],
) -> Result<ComponentEntry> {
    let mut files = Vec::new();
    let mut dependencies: BTreeSet<String> = BTreeSet::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.context("Failed to walk component directory")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_source_file(path) {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            dependencies.extend(extract_dependencies(&text, excluded));
        }
        let rel = path
            .strip_prefix(dir)
            .with_context(|| format!("Path escapes component directory: {}", path.display()))?;
        files.push(to_posix(rel));
    }

    let rel = dir
        .strip_prefix(scan_root)
        .with_context(|| format!("Path escapes template root: {}", dir.display()))?;

    Ok(ComponentEntry {
        path: template_path(template_root, rel),
        files,
        dependencies: dependencies.into_iter().collect(),
        dev_dependencies: Vec::new(),
    })
}

fn insert_entry(manifest: &mut RegistryManifest, name: String, entry: ComponentEntry) {
    let incoming = entry.path.clone();
    if let Some(previous) = manifest.components.insert(name.clone(), entry) {
        eprintln!(
            "{} Duplicate component name '{}': {} replaces {}",
            "Warning:".yellow(),
            name,
            incoming,
            previous.path
        );
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn has_index_file(dir: &Path) -> bool {
    SOURCE_EXTENSIONS
        .iter()
        .any(|ext| dir.join(format!("index.{ext}")).is_file())
}

/// Component name = base name without extension (file) or directory name
fn component_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .with_context(|| format!("Unusable component file name: {}", path.display()))
}

fn template_path(template_root: &str, rel: &Path) -> String {
    format!("{}/{}", template_root.trim_end_matches('/'), to_posix(rel))
}

/// Manifest paths use forward slashes regardless of host separator
fn to_posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EXCLUDED: &[&str] = &["react", "remix", "~"];

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn sample_registry() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(
            root,
            "templates/ui/button.tsx",
            "import * as React from \"react\";\n\
             import { Slot } from \"@radix-ui/react-slot\";\n\
             import { cn } from \"~/lib/utils\";\n",
        );
        write(root, "templates/ui/card.tsx", "export const Card = () => null;\n");
        write(
            root,
            "templates/ui/data-table/index.tsx",
            "import { useReactTable } from \"@tanstack/react-table\";\n",
        );
        write(
            root,
            "templates/ui/data-table/columns.tsx",
            "import { createColumnHelper } from \"@tanstack/react-table\";\n\
             import { format } from \"date-fns\";\n",
        );
        write(
            root,
            "templates/ui/forms/input.tsx",
            "import * as React from \"react\";\n",
        );
        tmp
    }

    #[test]
    fn test_file_components_discovered() {
        let tmp = sample_registry();
        let manifest = build_manifest(tmp.path(), "templates/ui", EXCLUDED, "0.1.0").unwrap();

        let button = manifest.get("button").unwrap();
        assert_eq!(button.path, "templates/ui/button.tsx");
        assert_eq!(button.dependencies, vec!["@radix-ui/react-slot"]);
        assert!(button.dev_dependencies.is_empty());

        // Nested file keeps its subdirectory in the recorded path
        let input = manifest.get("input").unwrap();
        assert_eq!(input.path, "templates/ui/forms/input.tsx");
    }

    #[test]
    fn test_no_imports_yields_empty_list_not_missing_entry() {
        let tmp = sample_registry();
        let manifest = build_manifest(tmp.path(), "templates/ui", EXCLUDED, "0.1.0").unwrap();
        let card = manifest.get("card").unwrap();
        assert!(card.dependencies.is_empty());
    }

    #[test]
    fn test_directory_component_unions_dependencies() {
        let tmp = sample_registry();
        let manifest = build_manifest(tmp.path(), "templates/ui", EXCLUDED, "0.1.0").unwrap();

        let table = manifest.get("data-table").unwrap();
        assert_eq!(table.path, "templates/ui/data-table");
        assert_eq!(table.files, vec!["columns.tsx", "index.tsx"]);
        assert_eq!(
            table.dependencies,
            vec!["@tanstack/react-table", "date-fns"]
        );
        // The directory's files are not separate components
        assert!(manifest.get("columns").is_err());
        assert!(manifest.get("index").is_err());
    }

    #[test]
    fn test_paths_never_contain_backslashes() {
        let tmp = sample_registry();
        let manifest = build_manifest(tmp.path(), "templates/ui", EXCLUDED, "0.1.0").unwrap();
        for entry in manifest.components.values() {
            assert!(!entry.path.contains('\\'), "path: {}", entry.path);
            for file in &entry.files {
                assert!(!file.contains('\\'), "file: {file}");
            }
        }
    }

    #[test]
    fn test_name_collision_later_sorted_entry_wins() {
        let tmp = sample_registry();
        write(tmp.path(), "templates/ui/widgets/card.tsx", "import { cva } from \"cva\";\n");
        let manifest = build_manifest(tmp.path(), "templates/ui", EXCLUDED, "0.1.0").unwrap();

        // "card.tsx" sorts before "widgets/", so the nested file wins
        let card = manifest.get("card").unwrap();
        assert_eq!(card.path, "templates/ui/widgets/card.tsx");
        assert_eq!(card.dependencies, vec!["cva"]);
    }

    #[test]
    fn test_missing_template_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        assert!(build_manifest(tmp.path(), "templates/ui", EXCLUDED, "0.1.0").is_err());
    }

    #[test]
    fn test_write_then_reload_round_trip() {
        let tmp = sample_registry();
        let manifest = build_manifest(tmp.path(), "templates/ui", EXCLUDED, "0.1.0").unwrap();
        let out = tmp.path().join("components.yaml");
        write_manifest(&manifest, &out).unwrap();

        let reloaded =
            RegistryManifest::from_yaml(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(reloaded.len(), manifest.len());
        assert_eq!(reloaded.version, "0.1.0");
    }
}
