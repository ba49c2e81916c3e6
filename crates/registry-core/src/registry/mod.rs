//! Registry generation, fetching, and component copying
//!
//! This module provides:
//! - Registry manifest types (RegistryManifest, ComponentEntry)
//! - Manifest generation from the template tree (builder + import scanner)
//! - Registry fetching from remote URLs or local directories
//! - Non-overwriting component copying
//! - Version compatibility checking

pub mod builder;
pub mod copier;
pub mod manifest;
pub mod scanner;
pub mod source;
pub mod version;

use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub use copier::{copy_component, CopyOutcome};
pub use manifest::{ComponentEntry, RegistryManifest, MANIFEST_FILE};
pub use scanner::extract_dependencies;
pub use source::{RegistryClient, RegistrySource};
pub use version::check_compatibility;

/// Regenerate the registry manifest from the template tree and write it
/// wholesale, replacing any previous manifest (maintainer command)
pub fn build_registry<C: ProductConfig>(
    config: &C,
    registry_dir: &Option<PathBuf>,
    out: &Option<PathBuf>,
    version: &str,
) -> Result<()> {
    let dir = registry_dir.clone().unwrap_or_else(|| PathBuf::from("."));

    println!(
        "{}",
        format!("Scanning {} templates...", config.display_name())
            .cyan()
            .bold()
    );
    println!();

    let manifest = builder::build_manifest(
        &dir,
        config.template_root(),
        config.excluded_imports(),
        version,
    )?;

    for (name, entry) in &manifest.components {
        let deps = if entry.dependencies.is_empty() {
            "no external deps".to_string()
        } else {
            entry.dependencies.join(", ")
        };
        println!("  {} {} ({})", "->".blue(), name, deps);
    }

    let out_path = out.clone().unwrap_or_else(|| dir.join(MANIFEST_FILE));
    builder::write_manifest(&manifest, &out_path)?;

    println!();
    println!(
        "{} {} component entries to {}",
        "Wrote".green().bold(),
        manifest.len(),
        out_path.display()
    );

    Ok(())
}
